use chrono::Datelike;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AnalysisConfig;
use crate::error::{Loto7Error, Result};
use crate::models::{NumberStats, Suggestion};

/// Génère un seed déterministe basé sur la date du jour (YYYYMMDD).
pub fn date_seed() -> u64 {
    let today = chrono::Local::now().date_naive();
    let y = today.year() as u64;
    let m = today.month() as u64;
    let d = today.day() as u64;
    y * 10_000 + m * 100 + d
}

/// Poids d'échantillonnage `(numéro, poids)` dérivés des scores composites.
///
/// Si le score minimum est strictement négatif, tous les scores sont décalés de
/// `1 - min` pour que chaque poids soit strictement positif, scores nuls compris.
/// Sinon les scores sont repris tels quels : un score nul n'exclut donc le numéro
/// du tirage que si aucun score n'est négatif. Les scores issus de
/// `compute_stats` valent toujours au moins 3, le décalage ne concerne donc que des
/// scores fournis par ailleurs.
pub fn sampling_weights(stats: &[NumberStats]) -> Result<Vec<(u8, f64)>> {
    if let Some(bad) = stats.iter().find(|s| !s.composite_score.is_finite()) {
        return Err(Loto7Error::InvalidScore {
            number: bad.number,
            score: bad.composite_score,
        });
    }

    let min = stats
        .iter()
        .map(|s| s.composite_score)
        .fold(f64::INFINITY, f64::min);
    let shift = if min < 0.0 { 1.0 - min } else { 0.0 };

    Ok(stats
        .iter()
        .map(|s| (s.number, s.composite_score + shift))
        .collect())
}

pub fn generate_suggestions(
    stats: &[NumberStats],
    config: &AnalysisConfig,
    seed: Option<u64>,
) -> Result<Vec<Suggestion>> {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    generate_with_rng(stats, config.ticket_size, config.suggestion_count, &mut rng)
}

/// `count` grilles indépendantes de `ticket_size` numéros ; deux grilles
/// identiques sont possibles.
pub fn generate_with_rng<R: Rng + ?Sized>(
    stats: &[NumberStats],
    ticket_size: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Suggestion>> {
    let weights = sampling_weights(stats)?;
    let available: Vec<(u8, f64)> = weights.into_iter().filter(|&(_, w)| w > 0.0).collect();
    if available.len() < ticket_size {
        return Err(Loto7Error::InsufficientDomain {
            available: available.len(),
            required: ticket_size,
        });
    }

    let score_of = |n: u8| {
        stats
            .iter()
            .find(|s| s.number == n)
            .map_or(0.0, |s| s.composite_score)
    };

    let mut suggestions = Vec::with_capacity(count);
    for _ in 0..count {
        let mut numbers = sample_without_replacement(&available, ticket_size, rng)?;
        numbers.sort();

        let score = numbers.iter().map(|&n| score_of(n)).sum::<f64>() / ticket_size as f64;
        suggestions.push(Suggestion { numbers, score });
    }

    Ok(suggestions)
}

fn sample_without_replacement<R: Rng + ?Sized>(
    weighted: &[(u8, f64)],
    count: usize,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let mut available = weighted.to_vec();
    let mut selected = Vec::with_capacity(count);

    for _ in 0..count {
        let weights: Vec<f64> = available.iter().map(|(_, w)| *w).collect();
        let dist = WeightedIndex::new(&weights)?;
        let idx = dist.sample(rng);

        let (number, _) = available.remove(idx);
        selected.push(number);
    }

    Ok(selected)
}
