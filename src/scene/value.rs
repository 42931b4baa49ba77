//! Dynamic attribute values used when records are addressed by attribute name.

use crate::foundation::{
    core::Vec3,
    error::{RayframeError, RayframeResult},
};

/// Kind tag of an attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrKind {
    /// Real scalar.
    Scalar,
    /// Fixed-length sequence of reals.
    Vector(usize),
    /// Integer (image dimensions); not interpolable.
    Int,
    /// Boolean flag; not interpolable.
    Bool,
    /// Optional string; not interpolable.
    Text,
}

impl std::fmt::Display for AttrKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar => f.write_str("scalar"),
            Self::Vector(n) => write!(f, "vector[{n}]"),
            Self::Int => f.write_str("int"),
            Self::Bool => f.write_str("bool"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Owned copy of one record attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Real scalar.
    Scalar(f64),
    /// Sequence of reals (length 3 for every vector attribute in the scene model).
    Vector(Vec<f64>),
    /// Integer.
    Int(i64),
    /// Boolean.
    Bool(bool),
    /// Optional string; `None` is the document's `null`.
    Text(Option<String>),
}

impl AttrValue {
    /// Kind tag of this value.
    pub fn kind(&self) -> AttrKind {
        match self {
            Self::Scalar(_) => AttrKind::Scalar,
            Self::Vector(v) => AttrKind::Vector(v.len()),
            Self::Int(_) => AttrKind::Int,
            Self::Bool(_) => AttrKind::Bool,
            Self::Text(_) => AttrKind::Text,
        }
    }

    pub(crate) fn into_scalar(self, record: &str, attribute: &str) -> RayframeResult<f64> {
        match self {
            Self::Scalar(v) => Ok(v),
            other => Err(RayframeError::shape_mismatch(
                record,
                attribute,
                AttrKind::Scalar,
                other.kind(),
            )),
        }
    }

    pub(crate) fn into_vec3(self, record: &str, attribute: &str) -> RayframeResult<Vec3> {
        match self {
            Self::Vector(v) if v.len() == 3 => Ok([v[0], v[1], v[2]]),
            other => Err(RayframeError::shape_mismatch(
                record,
                attribute,
                AttrKind::Vector(3),
                other.kind(),
            )),
        }
    }

    pub(crate) fn into_u32(self, record: &str, attribute: &str) -> RayframeResult<u32> {
        match self {
            Self::Int(v) => u32::try_from(v).map_err(|_| {
                RayframeError::config(format!(
                    "{record}.{attribute} must fit in an unsigned 32-bit integer (got {v})"
                ))
            }),
            other => Err(RayframeError::shape_mismatch(
                record,
                attribute,
                AttrKind::Int,
                other.kind(),
            )),
        }
    }

    pub(crate) fn into_bool(self, record: &str, attribute: &str) -> RayframeResult<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            other => Err(RayframeError::shape_mismatch(
                record,
                attribute,
                AttrKind::Bool,
                other.kind(),
            )),
        }
    }

    pub(crate) fn into_text(self, record: &str, attribute: &str) -> RayframeResult<Option<String>> {
        match self {
            Self::Text(v) => Ok(v),
            other => Err(RayframeError::shape_mismatch(
                record,
                attribute,
                AttrKind::Text,
                other.kind(),
            )),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec3> for AttrValue {
    fn from(v: Vec3) -> Self {
        Self::Vector(v.to_vec())
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Option<String>> for AttrValue {
    fn from(v: Option<String>) -> Self {
        Self::Text(v)
    }
}
