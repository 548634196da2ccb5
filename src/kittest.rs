use egui::Vec2;
use egui_kittest::Harness;

use crate::{StartupConfig, WaveScribe};

pub fn harness_with_startup(startup: StartupConfig) -> Harness<'static, WaveScribe> {
    Harness::builder()
        .with_size(Vec2::new(1100.0, 560.0))
        .with_os(egui::os::OperatingSystem::from_target_os())
        .build_eframe(|cc| WaveScribe::new_for_test(cc, startup).expect("init test app"))
}

pub fn harness_default() -> Harness<'static, WaveScribe> {
    harness_with_startup(StartupConfig::default())
}
