pub mod app;
pub mod audio;
pub mod wave;

pub use app::{StartupConfig, WaveScribe};

#[cfg(feature = "kittest")]
pub mod kittest;
