use crate::lookup::ResponseWarning;
use crate::rcode::Rcode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Label '{label}' is {len} octets long (maximum is 63)")]
    LabelTooLong { label: String, len: usize },

    #[error("Encoded name is {0} octets long (maximum is 255)")]
    NameTooLong(usize),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Response ID {received:#06x} does not match query ID {expected:#06x}")]
    IdMismatch { expected: u16, received: u16 },

    #[error("{}", .0.description())]
    ServerError(Rcode),

    #[error("{} (non-authoritative answer)", Rcode::NameError.description())]
    NameError,

    #[error("Timeout waiting for response from {server}")]
    TransportTimeout { server: String },

    #[error("Maximum number of retries [{max_retries}] exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("I/O error: {0}")]
    IoError(String),

    /// A fatal response error together with the anomalies noticed before it.
    #[error("{error}")]
    WithWarnings {
        error: Box<DomainError>,
        warnings: Vec<ResponseWarning>,
    },
}

impl DomainError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        DomainError::MalformedMessage(reason.into())
    }

    /// Attaches response warnings; an empty list leaves the error unchanged.
    pub fn with_warnings(self, warnings: Vec<ResponseWarning>) -> Self {
        if warnings.is_empty() {
            return self;
        }
        match self {
            DomainError::WithWarnings {
                error,
                warnings: mut earlier,
            } => {
                earlier.extend(warnings);
                DomainError::WithWarnings {
                    error,
                    warnings: earlier,
                }
            }
            error => DomainError::WithWarnings {
                error: Box::new(error),
                warnings,
            },
        }
    }

    /// The error without any attached warnings.
    pub fn root(&self) -> &DomainError {
        match self {
            DomainError::WithWarnings { error, .. } => error.root(),
            error => error,
        }
    }

    pub fn warnings(&self) -> &[ResponseWarning] {
        match self {
            DomainError::WithWarnings { warnings, .. } => warnings,
            _ => &[],
        }
    }

    /// Errors caused by the response content rather than by the exchange itself.
    pub fn is_unexpected_response(&self) -> bool {
        matches!(
            self.root(),
            DomainError::MalformedMessage(_) | DomainError::IdMismatch { .. }
        )
    }
}
