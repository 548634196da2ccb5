use egui::RichText;

impl crate::app::WaveScribe {
    pub(in crate::app) fn ui_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                if ui.button("Open WAV…").clicked() {
                    self.open_file_via_dialog();
                }
                if let Some(name) = self
                    .loaded_path
                    .as_deref()
                    .and_then(|p| p.file_name())
                    .and_then(|s| s.to_str())
                {
                    ui.label(RichText::new(name).weak());
                }
                if self.session.is_loaded() {
                    ui.label(
                        RichText::new(format!("{} samples", self.session.len())).monospace(),
                    );
                }
                ui.separator();

                let playing = self.audio.is_playing();
                if ui.button("⏮").on_hover_text("To start").clicked() {
                    self.transport_step_to_start();
                }
                if ui.selectable_label(playing, "▶").on_hover_text("Play").clicked() {
                    self.transport_play();
                }
                if ui
                    .selectable_label(!playing, "⏸")
                    .on_hover_text("Pause")
                    .clicked()
                {
                    self.transport_pause();
                }
                if ui.button("⏭").on_hover_text("To end").clicked() {
                    self.transport_step_to_end();
                }
                ui.separator();

                if ui.button("Zoom Out").clicked() {
                    self.viewport.zoom_out();
                }
                if ui.button("Zoom In").clicked() {
                    self.viewport.zoom_in();
                }
                ui.separator();

                ui.label("Volume (dB)");
                if ui
                    .add(egui::Slider::new(&mut self.volume_db, -80.0..=6.0))
                    .changed()
                {
                    self.apply_volume();
                }
                ui.separator();

                // Selection readout, like the status line of the timeline.
                match self.session.selection.index() {
                    Some(i) => {
                        let letter = self.session.label_at(i).unwrap_or('—');
                        ui.label(RichText::new(format!("#{i}: {letter}")).monospace());
                    }
                    None => {
                        if self.session.is_loaded() {
                            ui.label(RichText::new("click a sample to label it").weak());
                        }
                    }
                }
            });
        });
    }
}
