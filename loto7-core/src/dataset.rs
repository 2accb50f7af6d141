use std::io;
use std::path::Path;

use csv::StringRecord;
use log::debug;

use crate::config::AnalysisConfig;
use crate::error::{Loto7Error, Result};
use crate::models::{Draw, validate_draw};

/// Historique chargé depuis un CSV, du plus ancien au plus récent.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Colonnes retenues comme numéros principaux, dans l'ordre du fichier.
    pub columns: Vec<String>,
    pub draws: Vec<Draw>,
}

fn header_name(raw: &str) -> &str {
    raw.trim_start_matches('\u{feff}').trim()
}

/// Indices des colonnes de numéros principaux.
///
/// Les noms explicites de `config.columns` sont prioritaires ; sinon toute colonne
/// dont l'en-tête contient `config.column_marker` est retenue. Le nombre de
/// colonnes retenues doit valoir `config.draw_size`.
pub fn select_columns(headers: &StringRecord, config: &AnalysisConfig) -> Result<Vec<usize>> {
    let selected: Vec<usize> = if config.columns.is_empty() {
        headers
            .iter()
            .enumerate()
            .filter(|(_, h)| header_name(h).contains(config.column_marker.as_str()))
            .map(|(i, _)| i)
            .collect()
    } else {
        config
            .columns
            .iter()
            .map(|wanted| {
                headers
                    .iter()
                    .position(|h| header_name(h) == wanted.trim())
                    .ok_or_else(|| Loto7Error::dataset(format!("colonne '{}' introuvable", wanted)))
            })
            .collect::<Result<Vec<usize>>>()?
    };

    if selected.is_empty() {
        return Err(Loto7Error::dataset(format!(
            "aucune colonne ne contient '{}' (préciser --columns ou --marker)",
            config.column_marker
        )));
    }
    if selected.len() != config.draw_size {
        let names: Vec<&str> = selected
            .iter()
            .filter_map(|&i| headers.get(i).map(header_name))
            .collect();
        return Err(Loto7Error::dataset(format!(
            "{} colonnes retenues au lieu de {} : {:?} (préciser --columns ou --marker)",
            selected.len(),
            config.draw_size,
            names
        )));
    }

    Ok(selected)
}

fn parse_cell(record: &StringRecord, idx: usize, header: &str, line: u64) -> Result<u8> {
    let raw = record
        .get(idx)
        .ok_or_else(|| Loto7Error::dataset(format!("ligne {line} : colonne '{header}' manquante")))?;
    if raw.is_empty() {
        return Err(Loto7Error::dataset(format!("ligne {line} : colonne '{header}' vide")));
    }
    let value: i64 = raw.parse().map_err(|_| {
        Loto7Error::dataset(format!("ligne {line} : '{raw}' n'est pas un entier (colonne '{header}')"))
    })?;
    u8::try_from(value).map_err(|_| {
        Loto7Error::dataset(format!("ligne {line} : numéro {value} hors limites (colonne '{header}')"))
    })
}

pub fn read_history<R: io::Read>(reader: R, config: &AnalysisConfig) -> Result<Dataset> {
    config.validate()?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte())
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let indices = select_columns(&headers, config)?;
    let columns: Vec<String> = indices
        .iter()
        .filter_map(|&i| headers.get(i).map(|h| header_name(h).to_string()))
        .collect();
    debug!("Colonnes retenues : {:?}", columns);

    let mut draws = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        let numbers = indices
            .iter()
            .zip(&columns)
            .map(|(&idx, header)| parse_cell(&record, idx, header, line))
            .collect::<Result<Vec<u8>>>()?;

        validate_draw(&numbers, config).map_err(|e| match e {
            Loto7Error::InvalidDataset(msg) => {
                Loto7Error::InvalidDataset(format!("ligne {line} : {msg}"))
            }
            other => other,
        })?;
        draws.push(Draw::new(numbers));
    }

    if draws.is_empty() {
        return Err(Loto7Error::dataset("aucune ligne de données"));
    }
    debug!("{} tirages chargés", draws.len());

    Ok(Dataset { columns, draws })
}

pub fn load_history(path: &Path, config: &AnalysisConfig) -> Result<Dataset> {
    let file = std::fs::File::open(path)?;
    read_history(file, config)
}
