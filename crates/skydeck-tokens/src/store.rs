//! Process-wide, read-only token table.

use std::sync::OnceLock;

use crate::catalog::DesignTokens;
use crate::error::TokenError;

static GLOBAL: TokenStore = TokenStore::new();

/// A write-once slot for a token catalog.
#[derive(Debug, Default)]
pub struct TokenStore {
    cell: OnceLock<DesignTokens>,
}

impl TokenStore {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Install a catalog. Fails if one is already in place, including the
    /// embedded default once [`TokenStore::get`] has been called.
    pub fn install(&self, tokens: DesignTokens) -> Result<&DesignTokens, TokenError> {
        let name = tokens.meta.name.clone();
        self.cell
            .set(tokens)
            .map_err(|_| TokenError::AlreadyInstalled)?;
        tracing::info!(name = %name, "Installed design tokens");
        self.cell.get().ok_or(TokenError::AlreadyInstalled)
    }

    /// The installed catalog, falling back to the embedded one.
    pub fn get(&self) -> &DesignTokens {
        self.cell.get_or_init(DesignTokens::embedded)
    }
}

/// Install the process-wide catalog. Call once at startup, before [`global`].
pub fn install(tokens: DesignTokens) -> Result<&'static DesignTokens, TokenError> {
    GLOBAL.install(tokens)
}

/// The process-wide catalog.
pub fn global() -> &'static DesignTokens {
    GLOBAL.get()
}
