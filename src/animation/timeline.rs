use crate::{
    animation::change::Change,
    foundation::{
        core::FrameIndex,
        error::{RayframeError, RayframeResult},
    },
};

/// Ordered set of independent changes, applied in registration order every frame.
///
/// Changes on the same attribute are allowed; the one registered last wins for a frame.
#[derive(Debug, Default)]
pub struct Timeline {
    changes: Vec<Change>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change and return its position.
    pub fn push(&mut self, change: Change) -> usize {
        self.changes.push(change);
        self.changes.len() - 1
    }

    /// Swap the change at `index` for another one, returning the old change.
    pub fn replace(&mut self, index: usize, change: Change) -> RayframeResult<Change> {
        let slot = self.changes.get_mut(index).ok_or_else(|| out_of_range(index))?;
        Ok(std::mem::replace(slot, change))
    }

    pub fn remove(&mut self, index: usize) -> RayframeResult<Change> {
        if index >= self.changes.len() {
            return Err(out_of_range(index));
        }
        Ok(self.changes.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Change> {
        self.changes.get(index)
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter()
    }

    /// Last frame any change writes to, if there are changes.
    pub fn last_frame(&self) -> Option<FrameIndex> {
        self.changes.iter().map(Change::end).max()
    }

    /// Evaluate every change for `frame`, stopping at the first failure.
    pub fn apply(&mut self, frame: FrameIndex) -> RayframeResult<()> {
        for (index, change) in self.changes.iter_mut().enumerate() {
            change
                .evaluate(frame)
                .map_err(|e| RayframeError::Evaluation {
                    change: index,
                    frame,
                    source: Box::new(e),
                })?;
        }
        Ok(())
    }

    /// Restore every change's attribute to its construction-time value, in registration order.
    ///
    /// All changes are reset even if one fails; the first failure is returned.
    pub fn reset(&mut self) -> RayframeResult<()> {
        let mut first_err = None;
        for change in &mut self.changes {
            if let Err(e) = change.reset() {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Extend<Change> for Timeline {
    fn extend<I: IntoIterator<Item = Change>>(&mut self, iter: I) {
        self.changes.extend(iter);
    }
}

fn out_of_range(index: usize) -> RayframeError {
    RayframeError::config(format!("timeline has no change at position {index}"))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
