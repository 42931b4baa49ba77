use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    encode::sink::DocumentSink,
    foundation::{
        core::FrameIndex,
        error::{RayframeError, RayframeResult},
    },
    scene::document::RootDocument,
};

/// Options for [`JsonDirSink`].
#[derive(Clone, Debug)]
pub struct JsonDirOpts {
    /// Directory receiving `NNNNN.json` files. Created on `begin`.
    pub dir: PathBuf,
    /// Spaces per indentation level.
    pub indent: usize,
    /// Buffer encoded frames and write them in parallel chunks.
    pub parallel: bool,
    /// Frames per parallel chunk.
    pub chunk_size: usize,
    /// Override rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
}

impl JsonDirOpts {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            indent: 4,
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Writes one pretty-printed JSON document per frame into a directory.
///
/// Documents are encoded as soon as they arrive. In parallel mode the encoded bytes are queued
/// and written a chunk at a time, so a write failure surfaces when its chunk is flushed. An
/// aborted run flushes whatever is still queued.
pub struct JsonDirSink {
    opts: JsonDirOpts,
    pool: Option<rayon::ThreadPool>,
    pending: Vec<(FrameIndex, Vec<u8>)>,
}

impl JsonDirSink {
    pub fn new(opts: JsonDirOpts) -> Self {
        Self {
            opts,
            pool: None,
            pending: Vec::new(),
        }
    }

    /// Path the document for `frame` is written to.
    pub fn path_for(&self, frame: FrameIndex) -> PathBuf {
        frame_path(&self.opts.dir, frame)
    }

    fn flush(&mut self) -> RayframeResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let dir = &self.opts.dir;
        let pending = &self.pending;
        let write_all = || {
            pending
                .par_iter()
                .try_for_each(|(frame, bytes)| write_frame(dir, *frame, bytes))
        };
        match &self.pool {
            Some(pool) => pool.install(write_all)?,
            None => write_all()?,
        }
        tracing::debug!(frames = self.pending.len(), "flushed chunk");
        self.pending.clear();
        Ok(())
    }
}

impl DocumentSink for JsonDirSink {
    fn begin(&mut self) -> RayframeResult<()> {
        std::fs::create_dir_all(&self.opts.dir).map_err(|e| {
            RayframeError::io(format!(
                "create output dir '{}': {e}",
                self.opts.dir.display()
            ))
        })?;
        self.pending.clear();
        if self.opts.parallel && self.pool.is_none() {
            self.pool = Some(build_thread_pool(self.opts.threads)?);
        }
        Ok(())
    }

    fn write(&mut self, frame: FrameIndex, doc: &RootDocument) -> RayframeResult<()> {
        let bytes = doc.to_json_bytes(self.opts.indent)?;
        if !self.opts.parallel {
            return write_frame(&self.opts.dir, frame, &bytes);
        }

        self.pending.push((frame, bytes));
        if self.pending.len() >= normalized_chunk_size(self.opts.chunk_size) {
            self.flush()?;
        }
        Ok(())
    }

    fn end(&mut self) -> RayframeResult<()> {
        self.flush()
    }

    fn abort(&mut self) -> RayframeResult<()> {
        if !self.pending.is_empty() {
            tracing::debug!(frames = self.pending.len(), "flushing queued frames of aborted run");
        }
        self.flush()
    }
}

fn frame_path(dir: &Path, frame: FrameIndex) -> PathBuf {
    dir.join(format!("{}.json", frame.file_stem()))
}

fn write_frame(dir: &Path, frame: FrameIndex, bytes: &[u8]) -> RayframeResult<()> {
    let path = frame_path(dir, frame);
    std::fs::write(&path, bytes)
        .map_err(|e| RayframeError::frame_io(frame, format!("write '{}': {e}", path.display())))
}

fn build_thread_pool(threads: Option<usize>) -> RayframeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RayframeError::config(
            "output 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RayframeError::config(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    chunk_size.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/json_dir.rs"]
mod tests;
