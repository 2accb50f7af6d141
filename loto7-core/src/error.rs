use thiserror::Error;

#[derive(Debug, Error)]
pub enum Loto7Error {
    #[error("Jeu de données invalide : {0}")]
    InvalidDataset(String),

    #[error("Domaine insuffisant : {available} numéros avec un poids positif, {required} requis")]
    InsufficientDomain { available: usize, required: usize },

    #[error("Score invalide pour le numéro {number} : {score}")]
    InvalidScore { number: u8, score: f64 },

    #[error("Configuration invalide : {0}")]
    InvalidConfig(String),

    #[error("Erreur CSV : {0}")]
    Csv(#[from] csv::Error),

    #[error("Erreur JSON : {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erreur d'E/S : {0}")]
    Io(#[from] std::io::Error),

    #[error("Poids d'échantillonnage invalides : {0}")]
    Weights(#[from] rand::distr::weighted::Error),
}

pub type Result<T> = std::result::Result<T, Loto7Error>;

impl Loto7Error {
    pub(crate) fn dataset(msg: impl Into<String>) -> Self {
        Loto7Error::InvalidDataset(msg.into())
    }
}
