//! Design tokens for the weather dashboard.
//!
//! Tokens are plain data read from TOML: color palettes, gradients,
//! typography, shadows, radii, spacing and motion. The embedded catalog is
//! used unless a replacement file is installed at startup; after that the
//! table is read-only for the life of the process.

mod catalog;
mod color;
mod error;
mod store;

pub use catalog::*;
pub use color::Rgba;
pub use error::TokenError;
pub use store::{global, install, TokenStore};

/// Embedded default token catalog.
pub(crate) const DEFAULT_TOKENS_TOML: &str = include_str!("../assets/tokens/default.toml");
