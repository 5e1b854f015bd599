use skydeck_core::error::CoreError;
use skydeck_tokens::TokenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Tokens(#[from] TokenError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
