use std::path::Path;
use std::sync::Arc;

use crate::audio::AudioBuffer;
use crate::wave::{self, DecodedAudio, SampleBuffer};

use super::viewport::SETTLE_FRAMES;

impl super::WaveScribe {
    /// Load flow behind the "Open WAV" button. A cancelled dialog aborts
    /// before decode; a decode failure is logged and prior state (buffer,
    /// selection, labels) is left untouched.
    pub(super) fn open_file_via_dialog(&mut self) {
        let Some(path) = self.pick_wav_dialog() else {
            return;
        };
        self.load_audio_path(&path);
    }

    pub fn load_audio_path(&mut self, path: &Path) -> bool {
        match wave::decode_stereo(path) {
            Ok(audio) => {
                let buffer = wave::build_presentation(&audio, self.points_per_second);
                self.install_audio(audio, buffer);
                self.loaded_path = Some(path.to_path_buf());
                log::info!(
                    "loaded {} ({} timeline samples)",
                    path.display(),
                    self.session.len()
                );
                true
            }
            Err(err) => {
                log::warn!("failed to load audio: {err}");
                false
            }
        }
    }

    fn install_audio(&mut self, audio: DecodedAudio, buffer: SampleBuffer) {
        self.audio
            .set_samples(Arc::new(AudioBuffer::from_channels(audio.channels)));
        self.session.install(buffer);
        self.scroll_to_selected = false;
        self.viewport.scroll.set(0.0, 0.0);
        self.viewport.settle_frames = SETTLE_FRAMES;
    }

    /// Synthetic buffer for screenshots and GUI tests (`--dummy-samples`).
    pub fn install_dummy_samples(&mut self, count: usize) {
        let left: Vec<f32> = (0..count).map(|i| ((i * 7) % 11) as f32 / 10.0).collect();
        let right: Vec<f32> = (0..count).map(|i| ((i * 3) % 11) as f32 / 10.0).collect();
        let playback: Vec<Vec<f32>> = vec![
            left.iter().map(|v| v * 0.5).collect(),
            right.iter().map(|v| v * 0.5).collect(),
        ];
        let buffer = SampleBuffer { left, right };
        let audio = DecodedAudio {
            channels: playback,
            sample_rate: self.audio.shared.out_sample_rate,
        };
        self.install_audio(audio, buffer);
        self.loaded_path = None;
    }
}
