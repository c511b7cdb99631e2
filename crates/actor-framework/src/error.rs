//! # Framework Errors
//!
//! Errors raised by the plumbing between clients and actors, plus the boxed
//! wrapper that carries an entity's own error type across the channel.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's typed error from an [`EntityError`](FrameworkError::EntityError).
    ///
    /// Returns `Err(self)` unchanged when this is a plumbing error or when the boxed
    /// error is of a different type.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FrameworkError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("closed: {0}")]
    struct Closed(u32);

    #[test]
    fn test_into_entity_error_recovers_typed_error() {
        let err = FrameworkError::EntityError(Box::new(Closed(7)));
        assert_eq!(err.into_entity_error::<Closed>().unwrap(), Closed(7));
    }

    #[test]
    fn test_into_entity_error_keeps_foreign_errors() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let back = err.into_entity_error::<Closed>().unwrap_err();
        assert!(back.to_string().contains("disk"));

        let err = FrameworkError::NotFound("user_1".into());
        assert!(err.into_entity_error::<Closed>().unwrap_err().is_not_found());
    }
}
