use thiserror::Error;

/// Failures of the booking domain. Every operation that returns one of these
/// has left the store untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("No such {0}")]
    NotFound(&'static str),
    #[error("Day index {0} is out of range")]
    Range(i64),
    #[error("{0}")]
    Conflict(String),
    #[error("Store lock poisoned")]
    Poisoned,
}

impl DomainError {
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation",
            DomainError::NotFound(_) => "not_found",
            DomainError::Range(_) => "range",
            DomainError::Conflict(_) => "conflict",
            DomainError::Poisoned => "internal",
        }
    }
}

pub fn error_kind(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<DomainError>()
        .map_or("internal", DomainError::kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn kind_survives_context() {
        let err: anyhow::Result<()> = Err(DomainError::NotFound("appointment"))
            .context("Cancelling appointment");
        assert_eq!(error_kind(&err.unwrap_err()), "not_found");
    }

    #[test]
    fn foreign_errors_are_internal() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(error_kind(&err), "internal");
    }
}
