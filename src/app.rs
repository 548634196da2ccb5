use std::path::PathBuf;

use anyhow::Result;
use egui::{Color32, FontId, TextStyle, Visuals};

use crate::audio::AudioEngine;
use crate::wave;

mod dialogs;
mod input_ops;
pub mod labels;
mod loading_ops;
pub mod selection;
pub mod session;
mod transport_ops;
pub mod types;
mod ui;
pub mod viewport;

pub use session::Session;
pub use types::Channel;
pub use viewport::Viewport;

#[cfg(feature = "kittest")]
pub use dialogs::TestDialogQueue;

/// Startup behavior parsed from the command line (and used verbatim by the
/// kittest harness so GUI tests never touch native dialogs).
#[derive(Clone, Debug, Default)]
pub struct StartupConfig {
    pub open_file: Option<PathBuf>,
    pub dummy_samples: Option<usize>,
    pub points_per_second: Option<u32>,
}

struct StartupState {
    cfg: StartupConfig,
    pending: bool,
}

pub struct WaveScribe {
    pub audio: AudioEngine,
    pub session: Session,
    pub viewport: Viewport,
    pub loaded_path: Option<PathBuf>,
    pub volume_db: f32,
    pub points_per_second: u32,
    /// Set on every transition into Selected; consumed by the timeline once
    /// the viewport width is known, centering the selected sample.
    pub scroll_to_selected: bool,
    startup: StartupState,
    #[cfg(feature = "kittest")]
    pub test_dialogs: dialogs::TestDialogQueue,
}

impl WaveScribe {
    pub fn new(cc: &eframe::CreationContext<'_>, startup: StartupConfig) -> Result<Self> {
        let audio = AudioEngine::new()?;
        Ok(Self::with_engine(cc, startup, audio))
    }

    /// Device-less constructor for tests and the kittest harness.
    pub fn new_for_test(cc: &eframe::CreationContext<'_>, startup: StartupConfig) -> Result<Self> {
        Ok(Self::with_engine(cc, startup, AudioEngine::new_for_test()))
    }

    fn with_engine(
        cc: &eframe::CreationContext<'_>,
        startup: StartupConfig,
        audio: AudioEngine,
    ) -> Self {
        apply_theme(&cc.egui_ctx);
        let volume_db = -12.0;
        audio.set_volume(db_to_amp(volume_db));
        let points_per_second = startup
            .points_per_second
            .unwrap_or(wave::DEFAULT_POINTS_PER_SECOND)
            .max(1);
        Self {
            audio,
            session: Session::default(),
            viewport: Viewport::default(),
            loaded_path: None,
            volume_db,
            points_per_second,
            scroll_to_selected: false,
            startup: StartupState {
                cfg: startup,
                pending: true,
            },
            #[cfg(feature = "kittest")]
            test_dialogs: dialogs::TestDialogQueue::default(),
        }
    }

    fn apply_startup(&mut self) {
        let cfg = self.startup.cfg.clone();
        if let Some(count) = cfg.dummy_samples {
            self.install_dummy_samples(count);
            return;
        }
        if let Some(path) = cfg.open_file {
            self.load_audio_path(&path);
        }
    }
}

impl eframe::App for WaveScribe {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The propagation latch lives for exactly one frame.
        self.viewport.scroll.begin_frame();

        if self.startup.pending {
            self.startup.pending = false;
            self.apply_startup();
        }

        self.handle_global_shortcuts(ctx);
        self.ui_top_bar(ctx);
        self.ui_timeline(ctx);

        // Post-load/zoom settle: re-clamp the offset against the recomputed
        // content width for a couple of frames.
        if self.viewport.settle_frames > 0 {
            self.viewport.settle_frames -= 1;
            let width = self.viewport.content_width(self.session.len());
            self.viewport.scroll.clamp_to(width);
            ctx.request_repaint();
        }

        if self.audio.is_playing() {
            ctx.request_repaint();
        }
    }
}

fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(20, 20, 23);
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(28, 28, 32);
    visuals.panel_fill = Color32::from_rgb(18, 18, 20);
    ctx.set_visuals(visuals);
    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(15.0));
    style
        .text_styles
        .insert(TextStyle::Monospace, FontId::monospace(14.0));
    ctx.set_style(style);
}

pub(crate) fn db_to_amp(db: f32) -> f32 {
    10f32.powf(db / 20.0)
}
