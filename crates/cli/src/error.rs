//! CLI-specific error types and exit code mapping.

use stockroom_core::DomainError;
use stockroom_infra::StoreError;

/// CLI-specific error type.
///
/// `exit_code()` maps each failure to a process exit code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The inventory rejected the operation.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Loading or saving the inventory file failed.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                          |
    /// |------|----------------------------------|
    /// | 0    | Success                          |
    /// | 1    | General error                    |
    /// | 3    | Invalid quantity, price or name  |
    /// | 4    | Item not found                   |
    /// | 10   | Inventory file could not be used |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Domain(DomainError::Validation(_)) => 3,
            Self::Domain(DomainError::NotFound(_)) => 4,
            Self::Store(_) | Self::Io(_) => 10,
            Self::Domain(DomainError::InvariantViolation(_)) | Self::JsonSerialize(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_exits_with_3() {
        let err = CliError::from(DomainError::validation("bad"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn not_found_exits_with_4() {
        let err = CliError::from(DomainError::not_found("apple"));
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.to_string(), "item not found: apple");
    }

    #[test]
    fn store_errors_exit_with_10() {
        let err = CliError::from(StoreError::Io {
            path: "inventory.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn invariant_violation_is_a_general_error() {
        let err = CliError::from(DomainError::invariant("duplicate item name: apple"));
        assert_eq!(err.exit_code(), 1);
    }
}
