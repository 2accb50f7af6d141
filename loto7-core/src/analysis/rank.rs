use std::cmp::Ordering;

use crate::models::NumberStats;

/// Rangs croissants (1 = plus petite valeur), les ex aequo reçoivent la moyenne
/// de leurs positions.
pub fn fractional_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0f64; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        // positions start..=end (0-based) -> rangs start+1..=end+1
        let rank = (start + end + 2) as f64 / 2.0;
        for &idx in &order[start..=end] {
            ranks[idx] = rank;
        }
        start = end + 1;
    }

    ranks
}

/// Somme des rangs de plusieurs signaux de même longueur.
pub fn sum_ranks(signals: &[&[f64]]) -> Vec<f64> {
    let len = signals.first().map_or(0, |s| s.len());
    let mut total = vec![0.0f64; len];
    for signal in signals {
        for (acc, rank) in total.iter_mut().zip(fractional_ranks(signal)) {
            *acc += rank;
        }
    }
    total
}

/// Vue décroissante par score composite, pour l'affichage uniquement.
pub fn top_scorers(stats: &[NumberStats], n: usize) -> Vec<&NumberStats> {
    let mut sorted: Vec<&NumberStats> = stats.iter().collect();
    sorted.sort_by(|a, b| {
        b.composite_score
            .partial_cmp(&a.composite_score)
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}
