use super::db_to_amp;

impl super::WaveScribe {
    /// The four transport buttons map 1:1 onto these. All of them no-op when
    /// no audio is loaded; the playing/paused UI state is derived from the
    /// engine's shared flag rather than tracked separately.
    pub(in crate::app) fn transport_play(&mut self) {
        self.audio.play();
    }

    pub(in crate::app) fn transport_pause(&mut self) {
        self.audio.pause();
    }

    pub(in crate::app) fn transport_step_to_start(&mut self) {
        self.audio.pause();
        self.audio.seek_to_sample(0);
    }

    pub(in crate::app) fn transport_step_to_end(&mut self) {
        self.audio.pause();
        self.audio.seek_to_end();
    }

    pub(in crate::app) fn apply_volume(&mut self) {
        self.audio.set_volume(db_to_amp(self.volume_db));
    }
}
