#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use wavescribe::app;

fn parse_startup_config() -> app::StartupConfig {
    let mut cfg = app::StartupConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--open-file" => {
                if let Some(p) = args.next() {
                    cfg.open_file = Some(std::path::PathBuf::from(p));
                }
            }
            "--dummy-samples" => {
                if let Some(v) = args.next() {
                    if let Ok(n) = v.parse::<usize>() {
                        cfg.dummy_samples = Some(n);
                    }
                }
            }
            "--points-per-second" => {
                if let Some(v) = args.next() {
                    if let Ok(n) = v.parse::<u32>() {
                        cfg.points_per_second = Some(n.max(1));
                    }
                }
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage:\n  wavescribe [options]\n\nOptions:\n  --open-file <audio.wav>\n  --dummy-samples <count>\n  --points-per-second <n>\n  --help"
                );
                std::process::exit(0);
            }
            _ => {
                if arg.starts_with('-') {
                    continue;
                }
                cfg.open_file = Some(std::path::PathBuf::from(arg));
            }
        }
    }
    cfg
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let startup = parse_startup_config();
    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size([720.0, 420.0])
        .with_inner_size([1100.0, 560.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "WaveScribe Sample Labeling Editor",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(
                app::WaveScribe::new(cc, startup.clone()).expect("failed to init app"),
            ))
        }),
    )
}
