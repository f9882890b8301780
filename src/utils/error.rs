use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoilError {
    #[error("Malformed input for {field}: {reason}")]
    MalformedInput { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SoilError {
    pub fn malformed(field: &str, reason: impl Into<String>) -> Self {
        SoilError::MalformedInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, SoilError::MalformedInput { .. })
    }

    /// Short message meant for whoever spawned the process.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SoilError::MalformedInput { field, reason } => {
                format!("MalformedInput: could not read {}: {}", field, reason)
            }
            SoilError::IoError(e) => format!("Failed to read or write a stream: {}", e),
            SoilError::SerializationError(e) => format!("Failed to encode the report: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SoilError::MalformedInput { .. } => {
                "Provide three decimal numbers in order: pH moisture nitrogen"
            }
            SoilError::IoError(_) => "Check that the input file exists and the output stream is open",
            SoilError::SerializationError(_) => "Retry with --format text",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SoilError::MalformedInput { .. } => 1,
            SoilError::SerializationError(_) => 2,
            SoilError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SoilError>;
