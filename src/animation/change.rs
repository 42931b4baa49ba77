use crate::{
    foundation::{
        core::{FrameIndex, Vec3},
        error::{RayframeError, RayframeResult},
    },
    scene::{
        record::{RecordHandle, read_attr},
        value::{AttrKind, AttrValue},
    },
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec<f64> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.iter()
            .zip(b)
            .map(|(a, b)| <f64 as Lerp>::lerp(a, b, t))
            .collect()
    }
}

/// Value a [`Change`] moves its attribute towards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Target {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl Target {
    pub fn kind(&self) -> AttrKind {
        match self {
            Self::Scalar(_) => AttrKind::Scalar,
            Self::Vector(v) => AttrKind::Vector(v.len()),
        }
    }

    fn to_value(&self) -> AttrValue {
        match self {
            Self::Scalar(v) => AttrValue::Scalar(*v),
            Self::Vector(v) => AttrValue::Vector(v.clone()),
        }
    }
}

impl From<f64> for Target {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec3> for Target {
    fn from(v: Vec3) -> Self {
        Self::Vector(v.to_vec())
    }
}

impl From<Vec<f64>> for Target {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(v)
    }
}

/// Linear transition of one record attribute over the frames `(start, end]`.
///
/// Two baselines are kept:
/// - `initial`: the attribute when the change was built; restored by [`Change::reset`].
/// - `activation`: the attribute when the running frame reaches `start`. Interpolation starts
///   from here, so an earlier change that already moved the attribute is picked up.
pub struct Change {
    record: RecordHandle,
    attribute: String,
    target: Target,
    kind: AttrKind, // fixed from `target` at construction
    start: FrameIndex,
    end: FrameIndex,
    initial: AttrValue,
    activation: AttrValue,
    armed: bool, // activation captured during the current pass
}

impl std::fmt::Debug for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Change")
            .field("record", &self.record.borrow().record_kind())
            .field("attribute", &self.attribute)
            .field("target", &self.target)
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl Change {
    /// Build a change and capture both baselines from the record's current value.
    ///
    /// Fails with [`RayframeError::Config`] when `end <= start` and with
    /// [`RayframeError::MissingAttribute`] when the record has no such attribute.
    pub fn new(
        record: RecordHandle,
        attribute: impl Into<String>,
        target: impl Into<Target>,
        start: FrameIndex,
        end: FrameIndex,
    ) -> RayframeResult<Self> {
        let attribute = attribute.into();
        if end <= start {
            return Err(RayframeError::config(format!(
                "change of '{attribute}' must end after it starts (start {start}, end {end})"
            )));
        }

        let initial = read_attr(&*record.borrow(), &attribute)?;
        let target = target.into();
        Ok(Self {
            kind: target.kind(),
            activation: initial.clone(),
            initial,
            record,
            attribute,
            target,
            start,
            end,
            armed: false,
        })
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn record_kind(&self) -> &'static str {
        self.record.borrow().record_kind()
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn start(&self) -> FrameIndex {
        self.start
    }

    pub fn end(&self) -> FrameIndex {
        self.end
    }

    /// Attribute value when the change was built.
    pub fn initial(&self) -> &AttrValue {
        &self.initial
    }

    /// Attribute value captured at the most recent activation.
    pub fn activation(&self) -> &AttrValue {
        &self.activation
    }

    /// Apply this change for `frame`.
    ///
    /// At `start` the activation baseline is re-captured (once per pass). For
    /// `start < frame <= end` the attribute is set to the interpolated value; `end` yields
    /// `target` exactly. Other frames leave the record untouched.
    pub fn evaluate(&mut self, frame: FrameIndex) -> RayframeResult<()> {
        if frame == self.start && !self.armed {
            self.activation = read_attr(&*self.record.borrow(), &self.attribute)?;
            self.armed = true;
            tracing::debug!(
                record = self.record_kind(),
                attribute = %self.attribute,
                frame = frame.0,
                "change armed"
            );
        }

        if frame <= self.start || frame > self.end {
            return Ok(());
        }

        let value = self.value_at(frame)?;
        self.record.borrow_mut().set_attr(&self.attribute, value)
    }

    /// Restore the attribute to its construction-time value and disarm.
    pub fn reset(&mut self) -> RayframeResult<()> {
        self.record
            .borrow_mut()
            .set_attr(&self.attribute, self.initial.clone())?;
        self.activation = self.initial.clone();
        self.armed = false;
        Ok(())
    }

    fn value_at(&self, frame: FrameIndex) -> RayframeResult<AttrValue> {
        if self.activation.kind() != self.kind {
            return Err(RayframeError::shape_mismatch(
                self.record_kind(),
                &self.attribute,
                self.kind,
                self.activation.kind(),
            ));
        }
        if frame == self.end {
            return Ok(self.target.to_value());
        }

        let t = (frame.0 - self.start.0) as f64 / (self.end.0 - self.start.0) as f64;
        Ok(match (&self.target, &self.activation) {
            (Target::Scalar(b), AttrValue::Scalar(a)) => {
                AttrValue::Scalar(<f64 as Lerp>::lerp(a, b, t))
            }
            (Target::Vector(b), AttrValue::Vector(a)) => {
                AttrValue::Vector(<Vec<f64> as Lerp>::lerp(a, b, t))
            }
            (_, found) => {
                return Err(RayframeError::shape_mismatch(
                    self.record_kind(),
                    &self.attribute,
                    self.kind,
                    found.kind(),
                ));
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/change.rs"]
mod tests;
