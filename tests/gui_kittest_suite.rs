#[cfg(feature = "kittest")]
mod kittest_suite {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    use egui::Key;
    use egui_kittest::{kittest::Queryable, Harness};
    use wavescribe::app::viewport::{MAX_ZOOM, MIN_ZOOM};
    use wavescribe::kittest::harness_with_startup;
    use wavescribe::{StartupConfig, WaveScribe};

    fn make_temp_dir(tag: &str) -> PathBuf {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let seq = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let mut dir = std::env::temp_dir();
        dir.push(format!(
            "wavescribe_kittest_{tag}_{}_{}_{}",
            std::process::id(),
            now_ms,
            seq
        ));
        std::fs::create_dir_all(&dir).expect("create temp test dir");
        dir
    }

    fn synth_stereo(sr: u32, secs: f32) -> Vec<Vec<f32>> {
        let frames = ((sr as f32) * secs).max(1.0) as usize;
        let mut left = Vec::with_capacity(frames);
        let mut right = Vec::with_capacity(frames);
        for i in 0..frames {
            let t = (i as f32) / (sr as f32);
            left.push((t * 220.0 * std::f32::consts::TAU).sin() * 0.30);
            right.push((t * 440.0 * std::f32::consts::TAU).sin() * 0.25);
        }
        vec![left, right]
    }

    fn harness_with_dummy(count: usize) -> Harness<'static, WaveScribe> {
        let mut cfg = StartupConfig::default();
        cfg.dummy_samples = Some(count);
        let mut harness = harness_with_startup(cfg);
        harness.run_steps(3);
        assert_eq!(harness.state().session.len(), count);
        harness
    }

    #[test]
    fn letter_keys_label_the_selected_sample() {
        let mut harness = harness_with_dummy(16);
        assert!(harness.state_mut().session.select(2));
        harness.run_steps(1);

        harness.key_press(Key::A);
        harness.run_steps(1);
        assert_eq!(harness.state().session.label_at(2), Some('A'));

        harness.key_press(Key::ArrowRight);
        harness.run_steps(1);
        assert_eq!(harness.state().session.selection.index(), Some(3));
        assert_eq!(harness.state().session.label_at(3), None);

        // Backspace on the blank sample is a no-op; #2 keeps its letter.
        harness.key_press(Key::Backspace);
        harness.run_steps(1);
        assert_eq!(harness.state().session.label_at(3), None);
        assert_eq!(harness.state().session.label_at(2), Some('A'));
    }

    #[test]
    fn keyboard_is_inert_without_selection() {
        let mut harness = harness_with_dummy(8);
        harness.key_press(Key::B);
        harness.key_press(Key::ArrowRight);
        harness.run_steps(1);
        assert!(harness.state().session.labels.is_empty());
        assert_eq!(harness.state().session.selection.index(), None);
    }

    #[test]
    fn escape_deselects() {
        let mut harness = harness_with_dummy(8);
        harness.state_mut().session.select(4);
        harness.run_steps(1);
        harness.key_press(Key::Escape);
        harness.run_steps(1);
        assert_eq!(harness.state().session.selection.index(), None);
    }

    #[test]
    fn arrows_clamp_at_the_edges() {
        let mut harness = harness_with_dummy(4);
        harness.state_mut().session.select(0);
        harness.run_steps(1);
        harness.key_press(Key::ArrowLeft);
        harness.run_steps(1);
        assert_eq!(harness.state().session.selection.index(), Some(0));

        harness.state_mut().session.select(3);
        harness.run_steps(1);
        harness.key_press(Key::ArrowRight);
        harness.run_steps(1);
        assert_eq!(harness.state().session.selection.index(), Some(3));
    }

    #[test]
    fn zoom_buttons_respect_bounds() {
        let mut harness = harness_with_dummy(8);
        for _ in 0..12 {
            harness.get_by_label("Zoom In").click();
            harness.run_steps(1);
        }
        assert_eq!(harness.state().viewport.zoom, MAX_ZOOM);
        for _ in 0..12 {
            harness.get_by_label("Zoom Out").click();
            harness.run_steps(1);
        }
        assert_eq!(harness.state().viewport.zoom, MIN_ZOOM);
    }

    #[test]
    fn transport_buttons_drive_the_engine() {
        let mut harness = harness_with_dummy(32);
        harness.get_by_label("▶").click();
        harness.run_steps(1);
        assert!(harness.state().audio.is_playing());

        harness.get_by_label("⏸").click();
        harness.run_steps(1);
        assert!(!harness.state().audio.is_playing());

        harness.get_by_label("⏭").click();
        harness.run_steps(1);
        assert!(!harness.state().audio.is_playing());
        let len = harness.state().audio.buffer_len();
        assert_eq!(
            harness
                .state()
                .audio
                .shared
                .play_pos
                .load(Ordering::Relaxed),
            len
        );

        harness.get_by_label("⏮").click();
        harness.run_steps(1);
        assert_eq!(
            harness
                .state()
                .audio
                .shared
                .play_pos
                .load(Ordering::Relaxed),
            0
        );
    }

    #[test]
    fn moving_selection_auto_scrolls_toward_it() {
        let mut harness = harness_with_dummy(400);
        harness.state_mut().session.select(399);
        harness.run_steps(1);
        let before = harness.state().viewport.scroll.offset();
        harness.key_press(Key::ArrowLeft);
        harness.run_steps(2);
        let after = harness.state().viewport.scroll.offset();
        assert!(
            after > before,
            "centering on a far-right sample must scroll right (before={before}, after={after})"
        );
    }

    #[test]
    fn cancelled_dialog_leaves_state_untouched() {
        let mut harness = harness_with_dummy(10);
        harness.state_mut().session.select(1);
        harness.run_steps(1);
        harness.key_press(Key::C);
        harness.run_steps(1);

        harness.state_mut().test_queue_file_dialog(None);
        harness.get_by_label("Open WAV…").click();
        harness.run_steps(2);

        assert_eq!(harness.state().session.len(), 10);
        assert_eq!(harness.state().session.label_at(1), Some('C'));
    }

    #[test]
    fn loading_a_file_replaces_buffer_and_clears_labels() {
        let dir = make_temp_dir("load");
        let path = dir.join("fixture.wav");
        wavescribe::wave::write_stereo_wav(&synth_stereo(48_000, 1.0), 48_000, &path)
            .expect("write fixture");

        let mut harness = harness_with_dummy(10);
        harness.state_mut().session.select(1);
        harness.run_steps(1);
        harness.key_press(Key::D);
        harness.run_steps(1);
        assert_eq!(harness.state().session.label_at(1), Some('D'));

        harness.state_mut().test_queue_file_dialog(Some(path));
        harness.get_by_label("Open WAV…").click();
        harness.run_steps(3);

        assert!(harness.state().session.len() > 10);
        assert!(harness.state().session.labels.is_empty());
        assert_eq!(harness.state().session.selection.index(), None);
        assert_eq!(harness.state().audio.buffer_len(), 48_000);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn decode_failure_keeps_prior_buffer() {
        let dir = make_temp_dir("bad");
        let path = dir.join("not_audio.wav");
        std::fs::write(&path, b"definitely not a riff").expect("write junk");

        let mut harness = harness_with_dummy(10);
        harness.state_mut().test_queue_file_dialog(Some(path));
        harness.get_by_label("Open WAV…").click();
        harness.run_steps(2);

        assert_eq!(harness.state().session.len(), 10);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
