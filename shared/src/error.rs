/// Failure of a single call to the analysis backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Server error: {status}")]
    Status { status: u16 },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Request timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("Please select a valid image. \"{name}\" is not an image file.")]
    NotAnImage { name: String, media_type: String },
}
