use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use arc_swap::ArcSwapOption;
use atomic_float::AtomicF32;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

#[derive(Debug)]
pub struct AudioBuffer {
    pub channels: Vec<Vec<f32>>, // per-channel samples in [-1, 1]
}

impl AudioBuffer {
    pub fn from_channels(channels: Vec<Vec<f32>>) -> Self {
        if channels.is_empty() {
            Self {
                channels: vec![Vec::new()],
            }
        } else {
            Self { channels }
        }
    }

    pub fn len(&self) -> usize {
        self.channels.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len().max(1)
    }
}

/// Shared with the realtime callback; all access is lock-free.
pub struct SharedAudio {
    pub samples: ArcSwapOption<AudioBuffer>,
    pub vol: AtomicF32, // 0.0..1.0 linear gain
    pub playing: AtomicBool,
    pub play_pos: AtomicUsize,
    pub out_sample_rate: u32,
}

pub struct AudioEngine {
    _stream: Option<cpal::Stream>,
    pub shared: Arc<SharedAudio>,
}

impl AudioEngine {
    fn new_shared(out_sample_rate: u32) -> Arc<SharedAudio> {
        Arc::new(SharedAudio {
            samples: ArcSwapOption::from(None),
            vol: AtomicF32::new(1.0),
            playing: AtomicBool::new(false),
            play_pos: AtomicUsize::new(0),
            out_sample_rate,
        })
    }

    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .context("No default output device")?;
        let cfg = device
            .default_output_config()
            .context("No default output config")?;

        let shared = Self::new_shared(cfg.sample_rate());

        let stream = match cfg.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &cfg.into(), shared.clone())?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &cfg.into(), shared.clone())?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &cfg.into(), shared.clone())?
            }
            _ => anyhow::bail!("Unsupported sample format"),
        };

        Ok(Self {
            _stream: Some(stream),
            shared,
        })
    }

    /// Engine without a device; used by tests and the kittest harness.
    pub fn new_for_test() -> Self {
        Self {
            _stream: None,
            shared: Self::new_shared(48_000),
        }
    }

    fn build_stream<T>(
        device: &cpal::Device,
        cfg: &cpal::StreamConfig,
        shared: Arc<SharedAudio>,
    ) -> Result<cpal::Stream>
    where
        T: cpal::SizedSample + cpal::FromSample<f32>,
    {
        let channels = cfg.channels as usize;
        let err_fn = |e| log::error!("cpal stream error: {e}");
        let stream = device.build_output_stream(
            cfg,
            move |data: &mut [T], _| {
                let maybe_samples = shared.samples.load();
                let playing = shared.playing.load(Ordering::Relaxed);
                let vol = shared.vol.load(Ordering::Relaxed);
                let samples = match maybe_samples.as_ref() {
                    Some(s) if playing && !s.is_empty() => s,
                    _ => {
                        for out in data.iter_mut() {
                            *out = T::from_sample(0.0);
                        }
                        return;
                    }
                };
                let len = samples.len();
                let src_channels = samples.channel_count();
                let mut pos = shared.play_pos.load(Ordering::Relaxed);
                for frame in data.chunks_mut(channels) {
                    if pos >= len {
                        shared.playing.store(false, Ordering::Relaxed);
                        for ch in frame.iter_mut() {
                            *ch = T::from_sample(0.0);
                        }
                        continue;
                    }
                    for (out_ch, out_sample) in frame.iter_mut().enumerate() {
                        let src_ch = if src_channels == 1 {
                            0
                        } else if out_ch < src_channels {
                            out_ch
                        } else {
                            src_channels - 1
                        };
                        let s = (samples.channels[src_ch][pos] * vol).clamp(-1.0, 1.0);
                        *out_sample = T::from_sample(s);
                    }
                    pos += 1;
                }
                shared.play_pos.store(pos, Ordering::Relaxed);
            },
            err_fn,
            None,
        )?;
        stream.play()?;
        Ok(stream)
    }

    pub fn set_samples(&self, samples: Arc<AudioBuffer>) {
        self.shared.samples.store(Some(samples));
        self.shared.playing.store(false, Ordering::Relaxed);
        self.shared.play_pos.store(0, Ordering::Relaxed);
    }

    pub fn set_volume(&self, v: f32) {
        self.shared.vol.store(v.clamp(0.0, 1.0), Ordering::Relaxed);
    }

    pub fn buffer_len(&self) -> usize {
        self.shared
            .samples
            .load()
            .as_ref()
            .map(|s| s.len())
            .unwrap_or(0)
    }

    pub fn is_playing(&self) -> bool {
        self.shared.playing.load(Ordering::Relaxed)
    }

    /// Resume from the current position; rewinds when the position is at or
    /// past the end. No-op without a loaded buffer.
    pub fn play(&self) {
        let len = self.buffer_len();
        if len == 0 {
            return;
        }
        if self.shared.play_pos.load(Ordering::Relaxed) >= len {
            self.shared.play_pos.store(0, Ordering::Relaxed);
        }
        self.shared.playing.store(true, Ordering::Relaxed);
    }

    /// Stop, retaining the current position.
    pub fn pause(&self) {
        self.shared.playing.store(false, Ordering::Relaxed);
    }

    pub fn seek_to_sample(&self, pos: usize) {
        let len = self.buffer_len();
        if len == 0 {
            return;
        }
        self.shared.play_pos.store(pos.min(len), Ordering::Relaxed);
    }

    pub fn seek_to_end(&self) {
        let len = self.buffer_len();
        if len == 0 {
            return;
        }
        self.shared.play_pos.store(len, Ordering::Relaxed);
    }
}
