//! Rayframe generates per-frame scene documents for an external ray tracer.
//!
//! A run starts from a [`SceneGraph`] of live records (camera, lights, shapes, materials) and a
//! [`Timeline`] of [`Change`]s, each interpolating one record attribute over a frame window.
//!
//! # Frame loop
//!
//! For every frame `i` in `0..frame_count`:
//!
//! 1. **Assemble**: if `i >= output_start`, merge the current records into a [`RootDocument`]
//!    and hand it to a [`DocumentSink`].
//! 2. **Apply**: evaluate every change in timeline order at frame `i`.
//!
//! After the loop, and also when it aborts, every change restores its attribute to the value
//! it held when the change was created.
//!
//! Documents can be written to a directory as `NNNNN.json` ([`JsonDirSink`]), and rendered frame
//! images can be turned into a video with the system `ffmpeg` binary ([`render_video`]).
#![forbid(unsafe_code)]

mod animation;
mod encode;
mod foundation;
mod project;
mod scene;

pub use animation::change::{Change, Lerp, Target};
pub use animation::driver::{AnimationContext, DriverOpts, RunStats, run_frames};
pub use animation::timeline::Timeline;
pub use encode::ffmpeg::{VideoConfig, ensure_parent_dir, is_ffmpeg_on_path, render_video};
pub use encode::json_dir::{JsonDirOpts, JsonDirSink};
pub use encode::sink::{DocumentSink, InMemorySink};
pub use foundation::core::{FrameIndex, FrameRange, Vec3, translate3};
pub use foundation::error::{RayframeError, RayframeResult};
pub use project::file::{ChangeSpec, ImportSpec, ProjectFile};
pub use project::record_ref::RecordRef;
pub use scene::document::{RootDocument, SceneDocument, assemble};
pub use scene::graph::SceneGraph;
pub use scene::import::{import_shapes, translate_shapes};
pub use scene::model::{
    Camera, CameraKind, Cylinder, Light, LightKind, Material, RootConfig, SceneConfig, Shape,
    Sphere, Triangle,
};
pub use scene::record::{Record, RecordHandle, Shared, read_attr, shared};
pub use scene::value::{AttrKind, AttrValue};
