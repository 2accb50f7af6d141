use std::fmt;

use crate::config::AnalysisConfig;
use crate::error::{Loto7Error, Result};

/// Un tirage historique. L'historique est ordonné du plus ancien au plus récent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub numbers: Vec<u8>,
}

impl Draw {
    pub fn new(numbers: Vec<u8>) -> Self {
        Self { numbers }
    }

    pub fn sorted(&self) -> Vec<u8> {
        let mut numbers = self.numbers.clone();
        numbers.sort();
        numbers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperature {
    Hot,
    Cold,
    Neutral,
}

impl Temperature {
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Temperature::Hot
        } else if delta < 0.0 {
            Temperature::Cold
        } else {
            Temperature::Neutral
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Hot => write!(f, "HOT"),
            Temperature::Cold => write!(f, "COLD"),
            Temperature::Neutral => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberStats {
    pub number: u8,
    pub frequency: u32,
    /// Position (1-based) de la dernière apparition.
    pub last_seen: Option<usize>,
    pub cycle_gap: u32,
    pub mean_cycle_gap: f64,
    pub hot_cold_delta: f64,
    pub temperature: Temperature,
    pub composite_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Triés par ordre croissant.
    pub numbers: Vec<u8>,
    /// Score composite moyen des numéros retenus.
    pub score: f64,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self
            .numbers
            .iter()
            .map(|n| format!("{:02}", n))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{line}")
    }
}

/// Bloc texte à copier : une grille par ligne.
pub fn copy_block(suggestions: &[Suggestion]) -> String {
    suggestions
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn validate_draw(numbers: &[u8], config: &AnalysisConfig) -> Result<()> {
    if numbers.len() != config.draw_size {
        return Err(Loto7Error::dataset(format!(
            "{} numéros au lieu de {}",
            numbers.len(),
            config.draw_size
        )));
    }
    for &n in numbers {
        if n < 1 || n > config.pool_size {
            return Err(Loto7Error::dataset(format!(
                "numéro {} hors limites (1-{})",
                n, config.pool_size
            )));
        }
    }
    for i in 0..numbers.len() {
        for j in (i + 1)..numbers.len() {
            if numbers[i] == numbers[j] {
                return Err(Loto7Error::dataset(format!("numéro en double : {}", numbers[i])));
            }
        }
    }
    Ok(())
}

/// Historique synthétique pour les tests : 7 numéros consécutifs qui tournent sur 1..=35.
pub fn make_test_draws(n: usize) -> Vec<Draw> {
    (0..n)
        .map(|i| {
            let base = ((i % 5) * 7) as u8;
            Draw::new((1..=7).map(|k| base + k).collect())
        })
        .collect()
}
