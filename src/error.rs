use thiserror::Error;

/// Error category reported for client-safe failures so the host's
/// exception-translation layer can filter them.
pub const CLIENT_ERROR_CATEGORY: &str = "graphql";

/// Central error type for all mapper operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapperError {
    /// The class or schema name does not match the one shape this mapper
    /// supports. Also raised by every refused capability. Not client-safe;
    /// the host surfaces it through its generic type-mapping failure path.
    #[error("cannot map \"{identifier}\" to a GraphQL type")]
    CannotMapType { identifier: String },

    /// A required parameter was not supplied. Client-safe: the message is
    /// meant to be shown verbatim to the API consumer.
    #[error("{message}")]
    MissingParameter { message: String },
}

impl MapperError {
    /// Creates a cannot-map error carrying the rejected identifier
    pub fn cannot_map(identifier: impl Into<String>) -> Self {
        Self::CannotMapType {
            identifier: identifier.into(),
        }
    }

    /// Creates the missing-subtype error raised by class-based mapping
    pub fn missing_subtype() -> Self {
        Self::MissingParameter {
            message: "paginated query results must declare the type of their items; \
                      no subtype was provided"
                .to_string(),
        }
    }

    /// Creates the offset-without-limit error raised at field resolution
    pub fn offset_without_limit() -> Self {
        Self::MissingParameter {
            message: "the \"offset\" argument of a paginated result cannot be used \
                      without a \"limit\" argument"
                .to_string(),
        }
    }

    /// Whether the message may be forwarded to the API consumer as-is
    pub fn is_client_safe(&self) -> bool {
        match self {
            Self::CannotMapType { .. } => false,
            Self::MissingParameter { .. } => true,
        }
    }

    /// Category under which client-safe errors are reported
    pub fn category(&self) -> Option<&'static str> {
        match self {
            Self::CannotMapType { .. } => None,
            Self::MissingParameter { .. } => Some(CLIENT_ERROR_CATEGORY),
        }
    }
}

/// Type alias for Results that use MapperError
pub type MapperResult<T> = Result<T, MapperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cannot_map_is_not_client_safe_test() {
        let err = MapperError::cannot_map("SomeClass");
        assert!(!err.is_client_safe());
        assert_eq!(err.category(), None);
        assert!(err.to_string().contains("SomeClass"));
    }

    #[test]
    fn missing_parameter_is_client_safe_test() {
        let err = MapperError::offset_without_limit();
        assert!(err.is_client_safe());
        assert_eq!(err.category(), Some(CLIENT_ERROR_CATEGORY));
        assert!(err.to_string().contains("offset"));
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn missing_subtype_mentions_subtype_test() {
        let err = MapperError::missing_subtype();
        assert!(err.is_client_safe());
        assert!(err.to_string().contains("subtype"));
    }
}
