pub mod cycle;
pub mod frequency;
pub mod hot_cold;
pub mod rank;

use crate::config::{AnalysisConfig, CycleMetric};
use crate::error::{Loto7Error, Result};
use crate::models::{Draw, NumberStats, Temperature, validate_draw};

use self::cycle::track_cycles;
use self::frequency::count_frequencies;
use self::hot_cold::hot_cold_deltas;
use self::rank::sum_ranks;

/// Restreint l'historique aux `window` derniers tirages si une fenêtre est configurée.
pub fn apply_window<'a>(draws: &'a [Draw], window: Option<usize>) -> &'a [Draw] {
    match window {
        Some(w) if w < draws.len() => &draws[draws.len() - w..],
        _ => draws,
    }
}

/// Statistiques complètes pour chaque numéro de 1 à `pool_size`.
///
/// `draws` est ordonné du plus ancien au plus récent. Le score composite est la
/// somme des rangs fractionnaires de la fréquence, du cycle et de l'écart hot/cold.
pub fn compute_stats(draws: &[Draw], config: &AnalysisConfig) -> Result<Vec<NumberStats>> {
    config.validate()?;
    if draws.is_empty() {
        return Err(Loto7Error::dataset("aucun tirage à analyser"));
    }
    for (i, draw) in draws.iter().enumerate() {
        validate_draw(&draw.numbers, config).map_err(|e| match e {
            Loto7Error::InvalidDataset(msg) => {
                Loto7Error::InvalidDataset(format!("tirage {} : {}", i + 1, msg))
            }
            other => other,
        })?;
    }

    let pool_size = config.pool_size;
    let frequencies = count_frequencies(draws, pool_size);
    let cycles = track_cycles(draws, pool_size);
    let mean_gaps = cycles.mean_gaps();
    let deltas = hot_cold_deltas(&frequencies);

    let freq_signal: Vec<f64> = frequencies.iter().map(|&f| f as f64).collect();
    let cycle_signal: Vec<f64> = match config.cycle_metric {
        CycleMetric::Recent => cycles.gaps.iter().map(|&g| g as f64).collect(),
        CycleMetric::Mean => mean_gaps.clone(),
    };
    let scores = sum_ranks(&[freq_signal.as_slice(), cycle_signal.as_slice(), deltas.as_slice()]);

    let stats: Vec<NumberStats> = (1..=pool_size)
        .map(|n| {
            let idx = (n - 1) as usize;
            NumberStats {
                number: n,
                frequency: frequencies[idx],
                last_seen: cycles.last_seen[idx],
                cycle_gap: cycles.gaps[idx],
                mean_cycle_gap: mean_gaps[idx],
                hot_cold_delta: deltas[idx],
                temperature: Temperature::from_delta(deltas[idx]),
                composite_score: scores[idx],
            }
        })
        .collect();

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rank::fractional_ranks;
    use crate::models::make_test_draws;

    fn always_five(n: usize) -> Vec<Draw> {
        (0..n)
            .map(|i| {
                let others = (0..6).map(|k| 6 + ((i + k * 5) % 30) as u8);
                Draw::new(std::iter::once(5).chain(others).collect())
            })
            .collect()
    }

    #[test]
    fn test_stats_cover_whole_pool() {
        let config = AnalysisConfig::default();
        let stats = compute_stats(&make_test_draws(30), &config).unwrap();
        assert_eq!(stats.len(), 37);
        for (i, s) in stats.iter().enumerate() {
            assert_eq!(s.number as usize, i + 1);
        }
    }

    #[test]
    fn test_frequency_sum_invariant() {
        let config = AnalysisConfig::default();
        let draws = make_test_draws(42);
        let stats = compute_stats(&draws, &config).unwrap();
        let total: u32 = stats.iter().map(|s| s.frequency).sum();
        assert_eq!(total as usize, config.draw_size * draws.len());
    }

    #[test]
    fn test_always_drawn_number_has_max_frequency_rank() {
        let config = AnalysisConfig::default();
        let draws = always_five(100);
        let stats = compute_stats(&draws, &config).unwrap();
        assert_eq!(stats[4].frequency, 100);

        let freqs: Vec<f64> = stats.iter().map(|s| s.frequency as f64).collect();
        let ranks = fractional_ranks(&freqs);
        assert_eq!(ranks[4], 37.0);
        assert_eq!(stats[4].temperature, Temperature::Hot);
        assert_eq!(stats[4].cycle_gap, 1);
    }

    #[test]
    fn test_composite_scores_at_least_three() {
        let config = AnalysisConfig::default();
        let stats = compute_stats(&make_test_draws(17), &config).unwrap();
        assert!(stats.iter().all(|s| s.composite_score >= 3.0));
        // somme des rangs de trois signaux sur 37 numéros
        let sum: f64 = stats.iter().map(|s| s.composite_score).sum();
        assert!((sum - 3.0 * 703.0).abs() < 1e-9, "Sum = {}", sum);
    }

    #[test]
    fn test_frequency_and_delta_ranks_scale_free() {
        // doubler chaque tirage multiplie les fréquences par 2, les écarts ne suivent pas
        let config = AnalysisConfig::default();
        let draws = make_test_draws(12);
        let doubled: Vec<Draw> = draws.iter().flat_map(|d| [d.clone(), d.clone()]).collect();
        let a = compute_stats(&draws, &config).unwrap();
        let b = compute_stats(&doubled, &config).unwrap();
        let freq_a: Vec<f64> = a.iter().map(|s| s.frequency as f64).collect();
        let freq_b: Vec<f64> = b.iter().map(|s| s.frequency as f64).collect();
        assert_eq!(fractional_ranks(&freq_a), fractional_ranks(&freq_b));
        let delta_a: Vec<f64> = a.iter().map(|s| s.hot_cold_delta).collect();
        let delta_b: Vec<f64> = b.iter().map(|s| s.hot_cold_delta).collect();
        assert_eq!(fractional_ranks(&delta_a), fractional_ranks(&delta_b));
    }

    #[test]
    fn test_empty_history_rejected() {
        let config = AnalysisConfig::default();
        let result = compute_stats(&[], &config);
        assert!(matches!(result, Err(Loto7Error::InvalidDataset(_))));
    }

    #[test]
    fn test_out_of_range_draw_rejected() {
        let config = AnalysisConfig::default();
        let draws = vec![Draw::new(vec![1, 2, 3, 4, 5, 6, 40])];
        let err = compute_stats(&draws, &config).unwrap_err();
        assert!(err.to_string().contains("tirage 1"), "{}", err);
    }

    #[test]
    fn test_mean_cycle_metric_changes_signal() {
        let draws = vec![
            Draw::new(vec![1, 2, 3, 4, 5, 6, 7]),
            Draw::new(vec![1, 9, 10, 11, 12, 13, 14]),
            Draw::new(vec![20, 21, 22, 23, 24, 25, 26]),
            Draw::new(vec![20, 21, 22, 23, 24, 25, 26]),
            Draw::new(vec![1, 9, 10, 11, 12, 13, 14]),
        ];
        let recent = compute_stats(&draws, &AnalysisConfig::default()).unwrap();
        let mean_config = AnalysisConfig {
            cycle_metric: CycleMetric::Mean,
            ..AnalysisConfig::default()
        };
        let mean = compute_stats(&draws, &mean_config).unwrap();
        assert_eq!(recent[0].cycle_gap, 3);
        assert!((recent[0].mean_cycle_gap - 2.0).abs() < 1e-12);
        assert_ne!(recent[0].composite_score, mean[0].composite_score);
    }

    #[test]
    fn test_apply_window_keeps_latest() {
        let draws = make_test_draws(10);
        let windowed = apply_window(&draws, Some(3));
        assert_eq!(windowed.len(), 3);
        assert_eq!(windowed[2], draws[9]);
        assert_eq!(apply_window(&draws, Some(50)).len(), 10);
        assert_eq!(apply_window(&draws, None).len(), 10);
    }
}
