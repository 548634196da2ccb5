use std::path::Path;

use thiserror::Error;

/// Default presentation density when reducing raw audio to timeline bars.
pub const DEFAULT_POINTS_PER_SECOND: u32 = 25;

/// Raw decoded audio: per-channel samples in [-1, 1] plus the source rate.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub channels: Vec<Vec<f32>>,
    pub sample_rate: u32,
}

impl DecodedAudio {
    pub fn len(&self) -> usize {
        self.channels.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Presentation buffer for the timeline: one normalized magnitude in [0, 1]
/// per (channel, index) pair, both channels the same length.
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    pub left: Vec<f32>,
    pub right: Vec<f32>,
}

impl SampleBuffer {
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: hound::Error,
    },
    #[error("expected a two-channel file, found {found} channel(s) in {path}")]
    Channels { path: String, found: u16 },
    #[error("failed to read samples from {path}: {source}")]
    Read {
        path: String,
        source: hound::Error,
    },
}

/// Decode a two-channel WAV file. Int and float PCM are both accepted and
/// normalized to [-1, 1]. Anything that is not exactly two channels is
/// rejected so timeline indices always address a left/right pair.
pub fn decode_stereo(path: &Path) -> Result<DecodedAudio, DecodeError> {
    let display = path.display().to_string();
    let mut reader = hound::WavReader::open(path).map_err(|source| DecodeError::Open {
        path: display.clone(),
        source,
    })?;
    let spec = reader.spec();
    if spec.channels != 2 {
        return Err(DecodeError::Channels {
            path: display,
            found: spec.channels,
        });
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| DecodeError::Read {
                path: display.clone(),
                source,
            })?,
        hound::SampleFormat::Int => {
            let max = (1i64 << (spec.bits_per_sample.saturating_sub(1))).max(1) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| (v as f32 / max).clamp(-1.0, 1.0)))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| DecodeError::Read {
                    path: display.clone(),
                    source,
                })?
        }
    };

    let frames = interleaved.len() / 2;
    let mut left = Vec::with_capacity(frames);
    let mut right = Vec::with_capacity(frames);
    for frame in interleaved.chunks_exact(2) {
        left.push(frame[0]);
        right.push(frame[1]);
    }
    Ok(DecodedAudio {
        channels: vec![left, right],
        sample_rate: spec.sample_rate,
    })
}

/// Reduce raw audio to timeline bars: one absolute-peak magnitude per bin,
/// `points_per_second` bins per second of audio. Both channels come out the
/// same length even if the source channels differ by a frame.
pub fn build_presentation(audio: &DecodedAudio, points_per_second: u32) -> SampleBuffer {
    let frames = audio.len();
    if frames == 0 || audio.channels.len() < 2 {
        return SampleBuffer::default();
    }
    let pps = points_per_second.max(1);
    let bin = (audio.sample_rate.max(1) / pps).max(1) as usize;
    let points = frames.div_ceil(bin);
    let mut out = SampleBuffer {
        left: Vec::with_capacity(points),
        right: Vec::with_capacity(points),
    };
    for p in 0..points {
        let start = p * bin;
        let end = (start + bin).min(frames);
        out.left.push(peak_abs(&audio.channels[0][start..end]));
        out.right.push(peak_abs(&audio.channels[1][start..end]));
    }
    out
}

fn peak_abs(slice: &[f32]) -> f32 {
    let mut peak = 0.0f32;
    for &v in slice {
        let a = v.abs();
        if a.is_finite() && a > peak {
            peak = a;
        }
    }
    peak.min(1.0)
}

/// Write per-channel samples as a float WAV. Used by tests and fixtures.
pub fn write_stereo_wav(channels: &[Vec<f32>], sample_rate: u32, dst: &Path) -> anyhow::Result<()> {
    anyhow::ensure!(channels.len() == 2, "expected two channels");
    let frames = channels[0].len().min(channels[1].len());
    let mut writer = hound::WavWriter::create(
        dst,
        hound::WavSpec {
            channels: 2,
            sample_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        },
    )?;
    for i in 0..frames {
        writer.write_sample(channels[0][i])?;
        writer.write_sample(channels[1][i])?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio(sr: u32, left: Vec<f32>, right: Vec<f32>) -> DecodedAudio {
        DecodedAudio {
            channels: vec![left, right],
            sample_rate: sr,
        }
    }

    #[test]
    fn presentation_bins_use_abs_peak() {
        let a = audio(4, vec![0.1, -0.9, 0.0, 0.5], vec![0.2, 0.2, -0.3, 0.0]);
        // 4 Hz at 2 points/sec -> 2 frames per bin
        let buf = build_presentation(&a, 2);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.left, vec![0.9, 0.5]);
        assert_eq!(buf.right, vec![0.2, 0.3]);
    }

    #[test]
    fn presentation_channels_share_length() {
        let a = audio(8, vec![0.0; 7], vec![0.0; 7]);
        let buf = build_presentation(&a, 4);
        assert_eq!(buf.left.len(), buf.right.len());
        assert_eq!(buf.len(), 4); // ceil(7 / 2)
    }

    #[test]
    fn presentation_values_stay_normalized() {
        let a = audio(4, vec![2.0, -3.0], vec![f32::NAN, 0.25]);
        let buf = build_presentation(&a, 4);
        assert!(buf.left.iter().all(|v| (0.0..=1.0).contains(v)));
        assert!(buf.right.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn empty_audio_yields_empty_buffer() {
        let a = audio(44_100, Vec::new(), Vec::new());
        assert!(build_presentation(&a, 25).is_empty());
    }
}
