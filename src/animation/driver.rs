use crate::{
    animation::timeline::Timeline,
    encode::sink::DocumentSink,
    foundation::{
        core::{FrameIndex, FrameRange},
        error::RayframeResult,
    },
    scene::graph::SceneGraph,
};

/// Frame window for one driver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverOpts {
    /// First frame whose document is written. Earlier frames still advance the timeline.
    pub output_start: FrameIndex,
    /// Number of frames ticked, starting at frame 0.
    pub frame_count: u64,
}

impl DriverOpts {
    /// Frames whose documents reach the sink.
    pub fn written_range(&self) -> RayframeResult<FrameRange> {
        FrameRange::new(
            FrameIndex(self.output_start.0.min(self.frame_count)),
            FrameIndex(self.frame_count),
        )
    }
}

impl Default for DriverOpts {
    fn default() -> Self {
        Self {
            output_start: FrameIndex(0),
            frame_count: 25,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub frames_total: u64,
    pub frames_written: u64,
}

/// Tick frames `0..frame_count`, writing a document for each frame at or past `output_start`.
///
/// For every frame the document is assembled first and the timeline applied second, so the
/// document for frame `i` shows the changes applied through frame `i - 1`.
///
/// When the loop ends, successfully or not, every change's attribute is restored to its
/// construction-time value so the same graph can drive another run. On failure the sink's
/// `abort` runs instead of `end`, so documents it already accepted still reach their
/// destination. The original error is returned after both.
#[tracing::instrument(skip(graph, timeline, sink), fields(changes = timeline.len()))]
pub fn run_frames(
    graph: &SceneGraph,
    timeline: &mut Timeline,
    opts: DriverOpts,
    sink: &mut dyn DocumentSink,
) -> RayframeResult<RunStats> {
    let outcome = drive(graph, timeline, opts, sink);
    let reset = timeline.reset();

    match outcome {
        Ok(stats) => {
            reset?;
            tracing::info!(
                frames = stats.frames_total,
                written = stats.frames_written,
                "run complete"
            );
            Ok(stats)
        }
        Err(e) => {
            if let Err(abort_err) = sink.abort() {
                tracing::warn!(error = %abort_err, "sink abort after failed run also failed");
            }
            if let Err(reset_err) = reset {
                tracing::warn!(error = %reset_err, "reset after aborted run also failed");
            }
            tracing::warn!(error = %e, "run aborted; records restored");
            Err(e)
        }
    }
}

fn drive(
    graph: &SceneGraph,
    timeline: &mut Timeline,
    opts: DriverOpts,
    sink: &mut dyn DocumentSink,
) -> RayframeResult<RunStats> {
    let mut stats = RunStats::default();
    let written = opts.written_range()?;
    if written.is_empty() {
        tracing::warn!(
            output_start = opts.output_start.0,
            frames = opts.frame_count,
            "output start is past the last frame; no documents will be written"
        );
    } else {
        tracing::debug!(frames = written.len_frames(), "expected writes");
    }
    if let Some(last) = timeline.last_frame()
        && last.0 >= opts.frame_count
    {
        tracing::debug!(last_change_frame = last.0, "some changes end after the last frame");
    }
    sink.begin()?;

    for i in 0..opts.frame_count {
        let frame = FrameIndex(i);
        if written.contains(frame) {
            let doc = graph.assemble();
            sink.write(frame, &doc)?;
            stats.frames_written += 1;
            tracing::debug!(frame = i, "frame written");
        }

        timeline.apply(frame)?;
        stats.frames_total += 1;
    }

    sink.end()?;
    Ok(stats)
}

/// A record graph together with the timeline that animates it.
#[derive(Debug, Default)]
pub struct AnimationContext {
    pub graph: SceneGraph,
    pub timeline: Timeline,
}

impl AnimationContext {
    pub fn new(graph: SceneGraph) -> Self {
        Self {
            graph,
            timeline: Timeline::new(),
        }
    }

    /// Run the driver over this context's graph and timeline.
    pub fn run(
        &mut self,
        opts: DriverOpts,
        sink: &mut dyn DocumentSink,
    ) -> RayframeResult<RunStats> {
        run_frames(&self.graph, &mut self.timeline, opts, sink)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
