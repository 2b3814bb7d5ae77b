use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid model config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Unknown capacity scenario '{key}'")]
    UnknownScenario { key: String },

    #[error("Unsupported center count {count}: choose 1, 3, 5 or 10")]
    UnsupportedCenterCount { count: u32 },
}

pub type ModelResult<T> = Result<T, ModelError>;
