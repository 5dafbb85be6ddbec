// ============================================================================
// SERVICE ERROR - Taxonomía de errores del service layer
// ============================================================================

use thiserror::Error;

/// Errores del service layer
/// - `Validation`: detectados localmente antes de tocar la red
/// - `Network` / `Http` / `Parse`: errores de transporte o del servidor,
///   se loguean y se propagan al caller sin modificar (sin retries)
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}
