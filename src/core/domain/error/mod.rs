use thiserror::Error;

/// The main error type for cluster adapter operations.
///
/// Covers failures from the provisioning service, the Kubernetes record
/// store, and request validation.
#[derive(Error, Debug)]
pub enum CmaError {
    /// Represents errors that occur while reaching the provisioning service
    ///
    /// # Fields
    /// * `0` - A description of what went wrong during the request
    #[error("Connection error: {0}")]
    Connection(String),

    /// The provisioning service does not know the requested cluster
    #[error("Cluster not found: {0}")]
    NotFound(String),

    /// The provisioning service rejected the request
    ///
    /// # Fields
    /// * `status` - HTTP status code returned by the service
    /// * `message` - Response body or a description of the failure
    #[error("Provisioning error ({status}): {message}")]
    Provisioning { status: u16, message: String },

    /// A request or response body could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Kubernetes API error from the cluster record store
    #[error("Kubernetes error: {0}")]
    Kube(#[from] kube::Error),

    /// Represents validation failures with detailed context
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CmaError {
    /// Create a provisioning error with the given status and message
    pub fn provisioning(status: u16, message: impl Into<String>) -> Self {
        Self::Provisioning {
            status,
            message: message.into(),
        }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ValidationError {
    pub(crate) fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Type alias for Results that may fail with a CmaError
pub type CmaResult<T> = Result<T, CmaError>;
