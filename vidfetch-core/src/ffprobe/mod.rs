//! Media probing via the external ffprobe tool.

pub mod exec;
pub mod media;

pub use exec::FFprobe;
pub use media::VideoMetadata;
