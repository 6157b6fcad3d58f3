/// Convenience result type used across Framepress.
pub type FramepressResult<T> = Result<T, FramepressError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is terminal for the current render attempt: the compositor
/// never retries internally and never returns partial output.
#[derive(thiserror::Error, Debug)]
pub enum FramepressError {
    /// Malformed or degenerate frame layout data.
    #[error("invalid layout: {0}")]
    Layout(String),

    /// Frame artwork or catalog data could not be read or decoded.
    #[error("asset read error: {0}")]
    AssetRead(String),

    /// A visitor photo could not be decoded.
    #[error("photo decode error at slot {index}: {reason}")]
    PhotoDecode {
        /// Slot index of the offending photo.
        index: usize,
        /// Decoder failure description.
        reason: String,
    },

    /// The final composite could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramepressError {
    /// Build a [`FramepressError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`FramepressError::AssetRead`] value.
    pub fn asset_read(msg: impl Into<String>) -> Self {
        Self::AssetRead(msg.into())
    }

    /// Build a [`FramepressError::PhotoDecode`] value.
    pub fn photo_decode(index: usize, reason: impl Into<String>) -> Self {
        Self::PhotoDecode {
            index,
            reason: reason.into(),
        }
    }

    /// Build a [`FramepressError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
