use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid threshold table: {0}")]
    InvalidThresholds(String),

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
