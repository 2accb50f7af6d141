use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Loto7Error, Result};

/// Signal de cycle utilisé pour le classement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CycleMetric {
    /// Écart entre les deux dernières apparitions.
    #[default]
    Recent,
    /// Écart moyen entre apparitions consécutives.
    Mean,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub pool_size: u8,
    pub draw_size: usize,
    pub ticket_size: usize,
    pub suggestion_count: usize,
    pub column_marker: String,
    /// Noms exacts des colonnes ; prioritaire sur `column_marker`.
    pub columns: Vec<String>,
    pub delimiter: char,
    /// Ne garder que les N derniers tirages.
    pub window: Option<usize>,
    pub cycle_metric: CycleMetric,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pool_size: 37,
            draw_size: 7,
            ticket_size: 7,
            suggestion_count: 10,
            column_marker: "本数字".to_string(),
            columns: Vec::new(),
            delimiter: ',',
            window: None,
            cycle_metric: CycleMetric::Recent,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&json)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let pool = self.pool_size as usize;
        if pool == 0 {
            return Err(Loto7Error::InvalidConfig("pool_size doit être > 0".into()));
        }
        if self.draw_size == 0 || self.draw_size > pool {
            return Err(Loto7Error::InvalidConfig(format!(
                "draw_size={} hors limites (1-{})",
                self.draw_size, pool
            )));
        }
        if self.ticket_size == 0 || self.ticket_size > pool {
            return Err(Loto7Error::InvalidConfig(format!(
                "ticket_size={} hors limites (1-{})",
                self.ticket_size, pool
            )));
        }
        if self.columns.is_empty() && self.column_marker.trim().is_empty() {
            return Err(Loto7Error::InvalidConfig(
                "column_marker vide et aucune colonne explicite".into(),
            ));
        }
        if !self.delimiter.is_ascii() {
            return Err(Loto7Error::InvalidConfig(format!(
                "le séparateur '{}' doit être un caractère ASCII",
                self.delimiter
            )));
        }
        if self.window == Some(0) {
            return Err(Loto7Error::InvalidConfig("window doit être > 0".into()));
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> u8 {
        // validate() garantit un caractère ASCII
        self.delimiter as u8
    }
}
