use thiserror::Error;

/// Result type alias using RedlineError
pub type Result<T> = std::result::Result<T, RedlineError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The diff pipeline itself is total; these kinds cover the surfaces around
/// it (decoding input documents, loading configuration, writing output).
/// Each kind maps to a stable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// An input document is not valid UTF-8
    InvalidEncoding,
    /// A configuration file or value could not be understood
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidEncoding => "ERR_INVALID_ENCODING",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation,
/// the document or file involved, and a free-form message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    side: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            side: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add document side context ("old" or "new")
    pub fn with_side(mut self, side: impl Into<String>) -> Self {
        self.side = Some(side.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the document side context, if any
    pub fn side(&self) -> Option<&str> {
        self.side.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(side) = &self.side {
            write!(f, " (side: {})", side)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised around the comparison pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RedlineError {
    /// A document's bytes are not valid UTF-8
    #[error("{side} document is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { side: String, valid_up_to: usize },

    /// A document could not be read
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    /// Output could not be written
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    /// Configuration text could not be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Serialization of a result failed
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl From<RedlineError> for ExError {
    fn from(err: RedlineError) -> Self {
        match err {
            RedlineError::InvalidUtf8 { side, valid_up_to } => {
                ExError::new(ExErrorKind::InvalidEncoding)
                    .with_side(side)
                    .with_message(format!(
                        "document is not valid UTF-8 (first invalid byte at offset {})",
                        valid_up_to
                    ))
            }
            RedlineError::ReadFailed { path, reason } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(format!("read failed: {}", reason)),
            RedlineError::WriteFailed { path, reason } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(format!("write failed: {}", reason)),
            RedlineError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }
            RedlineError::Serialization { reason } => {
                ExError::new(ExErrorKind::Serialization).with_message(reason)
            }
        }
    }
}

impl From<toml::de::Error> for RedlineError {
    fn from(err: toml::de::Error) -> Self {
        RedlineError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RedlineError {
    fn from(err: serde_json::Error) -> Self {
        RedlineError::Serialization {
            reason: err.to_string(),
        }
    }
}
