//! Application state management

use tedrag_core::{Credentials, RagSettings};

/// State shared across handlers: configuration only.
///
/// Service clients are constructed per request, so nothing here needs
/// interior mutability.
pub struct AppState {
    pub settings: RagSettings,
    pub credentials: Credentials,
}

impl AppState {
    /// Create application state with explicit values.
    pub fn new(settings: RagSettings, credentials: Credentials) -> Self {
        Self {
            settings,
            credentials,
        }
    }

    /// Create application state from the process environment.
    ///
    /// Credential validation is deferred to first use per request; this
    /// never fails.
    pub fn from_env() -> Self {
        Self::new(RagSettings::default(), Credentials::from_env())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RagSettings::default(), Credentials::default())
    }
}
