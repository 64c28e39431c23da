use thiserror::Error;

/// An error surfaced by a single remediation invocation.
#[derive(Debug, Error)]
pub enum RemediationError {
    /// The invocation payload does not carry a usable bucket name.
    #[error("invalid invocation event: {0}")]
    InvalidEvent(String),

    /// The storage provider rejected or failed the configuration request.
    #[error(transparent)]
    Provider(#[from] aws_sdk_s3::Error),
}
