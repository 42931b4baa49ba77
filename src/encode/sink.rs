use crate::{
    foundation::{core::FrameIndex, error::RayframeResult},
    scene::document::RootDocument,
};

/// Consumer of per-frame documents.
///
/// Ordering contract: `write` is called in strictly increasing [`FrameIndex`] order within one
/// run. `end` is only called when the run completes; an aborted run calls `abort` instead.
pub trait DocumentSink {
    /// Called once before any document is written.
    fn begin(&mut self) -> RayframeResult<()>;
    /// Persist the document for `frame`.
    fn write(&mut self, frame: FrameIndex, doc: &RootDocument) -> RayframeResult<()>;
    /// Called once after the last document is written.
    fn end(&mut self) -> RayframeResult<()>;
    /// Called once when the run fails. Documents already accepted by `write` must still be
    /// persisted; nothing else is expected.
    fn abort(&mut self) -> RayframeResult<()> {
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Documents in frame order.
    pub(crate) frames: Vec<(FrameIndex, RootDocument)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[(FrameIndex, RootDocument)] {
        &self.frames
    }

    pub fn document(&self, frame: FrameIndex) -> Option<&RootDocument> {
        self.frames
            .iter()
            .find(|(f, _)| *f == frame)
            .map(|(_, doc)| doc)
    }

    /// `true` once `end` has been called for the current run.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl DocumentSink for InMemorySink {
    fn begin(&mut self) -> RayframeResult<()> {
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn write(&mut self, frame: FrameIndex, doc: &RootDocument) -> RayframeResult<()> {
        self.frames.push((frame, doc.clone()));
        Ok(())
    }

    fn end(&mut self) -> RayframeResult<()> {
        self.finished = true;
        Ok(())
    }
}
