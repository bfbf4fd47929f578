/// Convenience result type used across carver.
pub type CarverResult<T> = Result<T, CarverError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum CarverError {
    /// Invalid user-provided values (colors, anchors, sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// The font could not be read or parsed.
    #[error("font error: {0}")]
    Font(String),

    /// Reading text or writing output failed.
    #[error("io error: {0}")]
    Io(String),

    /// The canvas image could not be opened or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The rasterizer rejected the configured font or scale.
    #[error("render error: {0}")]
    Render(String),

    /// Encoding the composited canvas failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarverError {
    /// Build a [`CarverError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CarverError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`CarverError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`CarverError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`CarverError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CarverError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
