use crate::models::Draw;

/// Accumulateur du suivi des cycles, indexé par `numéro - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleState {
    pub last_seen: Vec<Option<usize>>,
    /// Écart entre les deux dernières apparitions (0 si moins de deux).
    pub gaps: Vec<u32>,
    gap_sums: Vec<u64>,
    gap_counts: Vec<u32>,
}

impl CycleState {
    pub fn new(pool_size: u8) -> Self {
        let size = pool_size as usize;
        Self {
            last_seen: vec![None; size],
            gaps: vec![0; size],
            gap_sums: vec![0; size],
            gap_counts: vec![0; size],
        }
    }

    /// Intègre le tirage situé à `position` (1-based) et rend l'état mis à jour.
    pub fn observe(mut self, position: usize, draw: &Draw) -> Self {
        for &n in &draw.numbers {
            let idx = (n as usize).wrapping_sub(1);
            if idx >= self.last_seen.len() {
                continue;
            }
            if let Some(prev) = self.last_seen[idx] {
                let gap = (position - prev) as u32;
                // seul le dernier écart est conservé
                self.gaps[idx] = gap;
                self.gap_sums[idx] += gap as u64;
                self.gap_counts[idx] += 1;
            }
            self.last_seen[idx] = Some(position);
        }
        self
    }

    /// Écart moyen entre apparitions consécutives (0 si moins de deux).
    pub fn mean_gaps(&self) -> Vec<f64> {
        self.gap_sums
            .iter()
            .zip(&self.gap_counts)
            .map(|(&sum, &count)| {
                if count == 0 {
                    0.0
                } else {
                    sum as f64 / count as f64
                }
            })
            .collect()
    }
}

/// Parcourt l'historique du plus ancien au plus récent.
pub fn track_cycles(draws: &[Draw], pool_size: u8) -> CycleState {
    draws
        .iter()
        .enumerate()
        .fold(CycleState::new(pool_size), |state, (i, draw)| {
            state.observe(i + 1, draw)
        })
}
