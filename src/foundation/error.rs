use crate::foundation::core::FrameIndex;

/// Convenience result type used across rayframe.
pub type RayframeResult<T> = Result<T, RayframeError>;

/// Top-level error taxonomy used by the animation and output APIs.
#[derive(thiserror::Error, Debug)]
pub enum RayframeError {
    /// Invalid change, driver option or project data.
    #[error("config error: {0}")]
    Config(String),

    /// An attribute value does not have the kind or length the operation needs.
    #[error("shape mismatch: {record}.{attribute} expected {expected}, found {found}")]
    ShapeMismatch {
        /// Record kind label (`camera`, `light`, ...).
        record: String,
        /// Attribute name on the record.
        attribute: String,
        /// Expected kind description.
        expected: String,
        /// Observed kind description.
        found: String,
    },

    /// The named attribute does not exist on the record.
    #[error("missing attribute: {record} has no attribute '{attribute}'")]
    MissingAttribute {
        /// Record kind label.
        record: String,
        /// Attribute name that was requested.
        attribute: String,
    },

    /// A frame document (or other output) could not be persisted.
    #[error("io failure{}: {message}", frame_suffix(.frame))]
    Io {
        /// Frame being written, when the failure is tied to one.
        frame: Option<FrameIndex>,
        /// Underlying failure description.
        message: String,
    },

    /// Errors when serializing or deserializing documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A change failed while being applied for a frame.
    #[error("change #{change} failed at frame {frame}: {source}")]
    Evaluation {
        /// Position of the change in its timeline.
        change: usize,
        /// Frame being evaluated.
        frame: FrameIndex,
        /// The underlying failure.
        #[source]
        source: Box<RayframeError>,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn frame_suffix(frame: &Option<FrameIndex>) -> String {
    match frame {
        Some(f) => format!(" at frame {f}"),
        None => String::new(),
    }
}

impl RayframeError {
    /// Build a [`RayframeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RayframeError::Io`] value that is not tied to a frame.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io {
            frame: None,
            message: msg.into(),
        }
    }

    /// Build a [`RayframeError::Io`] value for a frame write.
    pub fn frame_io(frame: FrameIndex, msg: impl Into<String>) -> Self {
        Self::Io {
            frame: Some(frame),
            message: msg.into(),
        }
    }

    /// Build a [`RayframeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`RayframeError::MissingAttribute`] value.
    pub fn missing_attribute(record: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            record: record.into(),
            attribute: attribute.into(),
        }
    }

    /// Build a [`RayframeError::ShapeMismatch`] value.
    pub fn shape_mismatch(
        record: impl Into<String>,
        attribute: impl Into<String>,
        expected: impl std::fmt::Display,
        found: impl std::fmt::Display,
    ) -> Self {
        Self::ShapeMismatch {
            record: record.into(),
            attribute: attribute.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Strip [`RayframeError::Evaluation`] wrappers and return the underlying error.
    pub fn root_cause(&self) -> &RayframeError {
        match self {
            Self::Evaluation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
