use crate::generation::generator::QaGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Immutable after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Credential and model backend, both fixed at startup.
    pub generator: QaGenerator,
}
