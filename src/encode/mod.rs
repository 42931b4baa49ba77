pub mod ffmpeg;
pub mod json_dir;
pub mod sink;
