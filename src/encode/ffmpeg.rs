use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::foundation::error::{RayframeError, RayframeResult};

/// Settings for turning a directory of rendered frame images into a video.
#[derive(Clone, Debug)]
pub struct VideoConfig {
    /// Directory holding the rendered frame images.
    pub frames_dir: PathBuf,
    /// `ffmpeg` image-sequence pattern inside `frames_dir`.
    pub pattern: String,
    pub fps: u32,
    pub out_path: PathBuf,
    pub overwrite: bool,
}

impl VideoConfig {
    pub fn new(frames_dir: impl Into<PathBuf>, out_path: impl Into<PathBuf>) -> Self {
        Self {
            frames_dir: frames_dir.into(),
            pattern: "%05d.png".to_owned(),
            fps: 25,
            out_path: out_path.into(),
            overwrite: true,
        }
    }

    pub fn validate(&self) -> RayframeResult<()> {
        if self.fps == 0 {
            return Err(RayframeError::config("video fps must be non-zero"));
        }
        if self.pattern.trim().is_empty() {
            return Err(RayframeError::config("video frame pattern must be non-empty"));
        }
        Ok(())
    }

    /// Arguments passed to `ffmpeg` for this configuration.
    pub fn ffmpeg_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(16);
        let overwrite = if self.overwrite { "-y" } else { "-n" };
        args.push(overwrite.into());
        for a in ["-loglevel", "error", "-framerate"] {
            args.push(a.into());
        }
        args.push(self.fps.to_string().into());
        args.push("-i".into());
        args.push(self.frames_dir.join(&self.pattern).into_os_string());
        for a in ["-c:v", "libx264", "-pix_fmt", "yuv420p", "-movflags", "+faststart"] {
            args.push(a.into());
        }
        args.push(self.out_path.clone().into_os_string());
        args
    }
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub fn ensure_parent_dir(path: &Path) -> RayframeResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode the rendered frame images into a video with the system `ffmpeg` binary.
#[tracing::instrument(skip(cfg), fields(out = %cfg.out_path.display()))]
pub fn render_video(cfg: &VideoConfig) -> RayframeResult<()> {
    cfg.validate()?;
    if !cfg.overwrite && cfg.out_path.exists() {
        return Err(RayframeError::config(format!(
            "output file '{}' already exists",
            cfg.out_path.display()
        )));
    }
    if !is_ffmpeg_on_path() {
        return Err(RayframeError::io(
            "ffmpeg is required for video output, but was not found on PATH",
        ));
    }
    ensure_parent_dir(&cfg.out_path)?;

    let output = Command::new("ffmpeg")
        .args(cfg.ffmpeg_args())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            RayframeError::io(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(RayframeError::io(format!(
            "ffmpeg exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    tracing::info!("video written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
