use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token file parse error: {0}")]
    Parse(String),

    #[error("design tokens are already installed")]
    AlreadyInstalled,

    #[error("unknown token: {0}")]
    UnknownToken(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
