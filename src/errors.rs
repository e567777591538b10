//! Error types for mixin composition operations

use thiserror::Error;

/// Errors that can occur when composing or invoking mixed objects
///
/// Composition itself is total over well-formed inputs; errors surface only
/// where the original preconditions were implicit: unresolvable type names,
/// registry access on an unpromoted object, and behavior dispatch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MixError {
    /// A type name could not be determined for a query or object
    #[error("Unresolvable type name: {reason}")]
    UnresolvableType {
        /// Why resolution failed
        reason: String,
    },

    /// The object has no mixin registry attached
    #[error("Object '{object}' is not mixable; wrap it first")]
    NotMixable {
        /// Nominal type name of the object
        object: String,
    },

    /// No method attribute of the given name exists on the object
    #[error("Method not found: '{name}' on '{object}'")]
    MethodNotFound {
        /// Nominal type name of the object
        object: String,
        /// Name of the method that was looked up
        name: String,
    },

    /// The attribute exists but is not a method
    #[error("Attribute '{name}' is not callable")]
    NotCallable {
        /// Name of the attribute
        name: String,
    },

    /// No attribute of the given name exists on the object
    #[error("Attribute not found: '{name}'")]
    AttributeNotFound {
        /// Name of the attribute that was looked up
        name: String,
    },

    /// The attribute exists but holds a different kind of value
    #[error("Type mismatch for attribute '{attr}': expected {expected}")]
    TypeMismatch {
        /// Name of the attribute
        attr: String,
        /// Value kind that was expected
        expected: &'static str,
    },
}

/// Result type for composition operations
pub type MixResult<T> = Result<T, MixError>;

impl MixError {
    /// Create an unresolvable-type error
    pub fn unresolvable(reason: impl Into<String>) -> Self {
        MixError::UnresolvableType {
            reason: reason.into(),
        }
    }

    /// Check if this is a lookup failure (missing attribute or method)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MixError::MethodNotFound { .. } | MixError::AttributeNotFound { .. }
        )
    }

    /// Check if this is a violated caller precondition
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            MixError::UnresolvableType { .. } | MixError::NotMixable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages
    ///
    /// ```mermaid
    /// graph TD
    ///     A[MixError] -->|Display| B[Error Message]
    ///     A -->|Clone| C[Cloned Error]
    /// ```
    #[test]
    fn test_error_display_messages() {
        let err = MixError::UnresolvableType {
            reason: "blank type name".to_string(),
        };
        assert_eq!(err.to_string(), "Unresolvable type name: blank type name");

        let err = MixError::NotMixable {
            object: "AttrOwner1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Object 'AttrOwner1' is not mixable; wrap it first"
        );

        let err = MixError::MethodNotFound {
            object: "AttrOwner1".to_string(),
            name: "jump".to_string(),
        };
        assert_eq!(err.to_string(), "Method not found: 'jump' on 'AttrOwner1'");

        let err = MixError::NotCallable {
            name: "age".to_string(),
        };
        assert_eq!(err.to_string(), "Attribute 'age' is not callable");

        let err = MixError::AttributeNotFound {
            name: "h".to_string(),
        };
        assert_eq!(err.to_string(), "Attribute not found: 'h'");

        let err = MixError::TypeMismatch {
            attr: "h".to_string(),
            expected: "Int",
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch for attribute 'h': expected Int"
        );
    }

    /// Test unresolvable constructor
    #[test]
    fn test_unresolvable_constructor() {
        let err = MixError::unresolvable("empty name");
        assert_eq!(err.to_string(), "Unresolvable type name: empty name");
        assert!(err.is_precondition());
    }

    /// Test is_not_found helper
    #[test]
    fn test_is_not_found() {
        assert!(MixError::MethodNotFound {
            object: "X".to_string(),
            name: "jump".to_string(),
        }
        .is_not_found());
        assert!(MixError::AttributeNotFound {
            name: "h".to_string()
        }
        .is_not_found());

        assert!(!MixError::unresolvable("blank").is_not_found());
        assert!(!MixError::NotCallable {
            name: "age".to_string()
        }
        .is_not_found());
    }

    /// Test is_precondition helper
    #[test]
    fn test_is_precondition() {
        assert!(MixError::unresolvable("blank").is_precondition());
        assert!(MixError::NotMixable {
            object: "X".to_string()
        }
        .is_precondition());

        assert!(!MixError::AttributeNotFound {
            name: "h".to_string()
        }
        .is_precondition());
    }

    /// Test error cloning preserves the message
    #[test]
    fn test_error_clone() {
        let original = MixError::NotCallable {
            name: "age".to_string(),
        };
        let cloned = original.clone();
        assert_eq!(original, cloned);
        assert_eq!(original.to_string(), cloned.to_string());
    }

    /// Test MixResult type alias
    #[test]
    fn test_mix_result() {
        fn may_fail(should_fail: bool) -> MixResult<i64> {
            if should_fail {
                Err(MixError::AttributeNotFound {
                    name: "h".to_string(),
                })
            } else {
                Ok(10)
            }
        }

        assert_eq!(may_fail(false), Ok(10));
        assert!(may_fail(true).unwrap_err().is_not_found());
    }
}
