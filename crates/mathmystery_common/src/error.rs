//! Error types for Math Mystery.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MysteryError {
    #[error("Unknown mode '{0}'. Valid values: multiply, divide, mixed")]
    InvalidMode(String),

    #[error("Invalid factor set: {0}")]
    InvalidFactors(String),

    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Zero factor in {fact_op} fact: {detail}")]
    ZeroFactor { fact_op: &'static str, detail: String },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MysteryError {
    pub fn code(&self) -> i32 {
        match self {
            MysteryError::InvalidMode(_) => -32010,
            MysteryError::ZeroFactor { .. } => -32011,
            MysteryError::InvalidProblem(_) => -32012,
            MysteryError::Toml(_) => -32013,
            MysteryError::InvalidFactors(_) => -32014,
            MysteryError::Json(_) => -32700,
        }
    }
}

pub type MysteryResult<T> = Result<T, MysteryError>;
