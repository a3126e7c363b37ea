use thiserror::Error;

/// Errors that can occur while creating, mutating, or rendering billing
/// documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FacturierError {
    /// One or more required fields are missing or malformed.
    #[error("validation échouée: {}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),

    /// A referenced entity (client, produit, document) does not exist.
    #[error("{entite} introuvable: {id}")]
    NotFound { entite: &'static str, id: String },

    /// A uniqueness rule was violated (email, code client, nom produit,
    /// numéro de document).
    #[error("conflit d'unicité: {0}")]
    Conflict(String),

    /// Document number allocation failed (retry budget exhausted or the
    /// existence check itself failed).
    #[error("attribution du numéro échouée: {0}")]
    Numbering(String),

    /// PDF generation failed. The message stays generic; engine details are
    /// logged, never surfaced.
    #[error("génération du PDF échouée: {0}")]
    Rendering(String),

    /// The underlying store failed.
    #[error("erreur de persistance: {0}")]
    Store(String),
}

impl FacturierError {
    /// Shorthand for a single-field validation failure.
    pub fn champ(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![ValidationError::new(field, message)])
    }

    pub fn not_found(entite: &'static str, id: &str) -> Self {
        Self::NotFound {
            entite,
            id: id.to_string(),
        }
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "client.email").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
