//! Error types for condkv
//!
//! All fallible operations return [`Result<T>`]. Error production is
//! centralized in the conditional put path; store lookups and upserts never
//! fail.

use thiserror::Error;

/// All condkv errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The item at the target key carries at least one attribute the
    /// condition required to be absent.
    ///
    /// `expression` lists every *requested* attribute, not only the ones that
    /// were present. `present` holds the names that actually tripped the check.
    #[error("failed {expression}")]
    ConditionalCheckFailed {
        /// Rendered condition, e.g. `attribute_not_exists(pk) AND attribute_not_exists(sk)`
        expression: String,
        /// Requested names found on the existing item, in request order
        present: Vec<String>,
    },

    /// The item being written lacks one of its own key attributes
    #[error("item is missing key attribute {attribute}")]
    MissingKeyAttribute {
        /// Name of the missing key attribute
        attribute: String,
    },

    /// A key attribute holds a non-string value
    #[error("key attribute {attribute} must be a String, got {actual}")]
    InvalidKeyAttribute {
        /// Name of the offending key attribute
        attribute: String,
        /// Type name of the value found
        actual: &'static str,
    },

    /// Condition expression outside the `attribute_not_exists(..) AND ..` grammar
    #[error("unsupported condition expression {expression:?}: {reason}")]
    UnsupportedExpression {
        /// The expression as supplied
        expression: String,
        /// What was wrong with it
        reason: String,
    },

    /// Key schema with empty or clashing attribute names
    #[error("invalid key schema: {0}")]
    InvalidSchema(String),
}

/// Result type for condkv operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a conditional check failure.
    pub fn is_conditional_check_failed(&self) -> bool {
        matches!(self, Error::ConditionalCheckFailed { .. })
    }

    /// Check if the caller broke the put contract (bad key attributes).
    ///
    /// These are never retried; the item itself has to be fixed.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::MissingKeyAttribute { .. } | Error::InvalidKeyAttribute { .. }
        )
    }
}
