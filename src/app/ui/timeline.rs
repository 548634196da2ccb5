use egui::scroll_area::ScrollBarVisibility;
use egui::{Align2, Color32, FontId, Rect, RichText, Sense, Stroke, StrokeKind};

use crate::app::types::Channel;

const AMPLITUDE_TRACK_H: f32 = 110.0;
const INPUT_TRACK_H: f32 = 36.0;
const INDEX_STRIP_H: f32 = 12.0;
/// Floor for bar height so near-zero samples stay visible and clickable.
const MIN_BAR_PX: f32 = 2.0;

const TRACK_BG: Color32 = Color32::from_rgb(24, 24, 28);
const CELL_BG: Color32 = Color32::from_rgb(32, 32, 38);
const CELL_LABELED_BG: Color32 = Color32::from_rgb(38, 46, 40);
const CELL_SELECTED_BG: Color32 = Color32::from_rgb(44, 56, 80);
const BAR_COLOR: Color32 = Color32::from_rgb(90, 170, 255);
const BAR_SELECTED: Color32 = Color32::from_rgb(150, 205, 255);
const ACCENT: Color32 = Color32::from_rgb(110, 170, 255);
const LETTER_COLOR: Color32 = Color32::from_rgb(235, 235, 240);

impl crate::app::WaveScribe {
    pub(in crate::app) fn ui_timeline(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.session.is_loaded() {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("Open a two-channel WAV to begin").weak());
                });
                return;
            }
            let count = self.session.len();
            let view_w = ui.available_width();

            // Auto-scroll set by select/move transitions; applied here where
            // the viewport width is known. Takes the propagation latch so
            // the centered offset survives this frame's track reports.
            if self.scroll_to_selected {
                if let Some(i) = self.session.selection.index() {
                    self.viewport.center_on(i, count, view_w);
                }
                self.scroll_to_selected = false;
            }

            let mut clicked: Option<usize> = None;
            for channel in Channel::ALL {
                self.ui_track(ui, channel, &mut clicked);
            }
            self.ui_unified_scrollbar(ui, count);

            if let Some(index) = clicked {
                if self.session.select(index) {
                    self.scroll_to_selected = true;
                    ctx.request_repaint();
                }
            }
        });
    }

    /// One horizontally scrollable track. Every track renders from the
    /// shared offset; whatever offset the scroll area reports back is fed
    /// into the sync latch so a user scroll on any track propagates to the
    /// rest on the next frame.
    fn ui_track(&mut self, ui: &mut egui::Ui, channel: Channel, clicked: &mut Option<usize>) {
        let height = if channel.is_amplitude() {
            AMPLITUDE_TRACK_H
        } else {
            INPUT_TRACK_H
        };
        ui.label(RichText::new(channel.title()).small().weak());
        let output = egui::ScrollArea::horizontal()
            .id_salt(channel.title())
            .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden)
            .auto_shrink([false, true])
            .scroll_offset(egui::vec2(self.viewport.scroll.offset(), 0.0))
            .show(ui, |ui| {
                self.paint_track(ui, channel, height, clicked);
            });
        self.viewport.scroll.observe(output.state.offset.x);
        ui.add_space(4.0);
    }

    fn paint_track(
        &self,
        ui: &mut egui::Ui,
        channel: Channel,
        height: f32,
        clicked: &mut Option<usize>,
    ) {
        let count = self.session.len();
        let width = self.viewport.content_width(count);
        let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), Sense::click());
        let painter = ui.painter_at(rect.intersect(ui.clip_rect()));
        painter.rect_filled(rect, 3.0, TRACK_BG);

        let pitch = self.viewport.cell_pitch();
        let clip = ui.clip_rect();
        let (first, last) = visible_index_range(clip.min.x - rect.min.x, clip.width(), pitch, count);

        let buffer = match self.session.buffer() {
            Some(b) => b,
            None => return,
        };
        for i in first..last {
            let x = rect.min.x + i as f32 * pitch;
            let cell = Rect::from_min_size(
                egui::pos2(x, rect.min.y),
                egui::vec2(self.viewport.zoom, height),
            );
            let selected = self.session.selection.is_selected(i);
            let label = self.session.label_at(i);
            let bg = if selected {
                CELL_SELECTED_BG
            } else if label.is_some() {
                CELL_LABELED_BG
            } else {
                CELL_BG
            };
            painter.rect_filled(cell.shrink(1.0), 2.0, bg);

            match channel {
                Channel::Left | Channel::Right => {
                    let value = if channel == Channel::Left {
                        buffer.left[i]
                    } else {
                        buffer.right[i]
                    };
                    let bar_area = Rect::from_min_max(
                        cell.min + egui::vec2(3.0, 3.0),
                        egui::pos2(cell.max.x - 3.0, cell.max.y - INDEX_STRIP_H),
                    );
                    let h = (value.clamp(0.0, 1.0) * bar_area.height()).max(MIN_BAR_PX);
                    let bar = Rect::from_min_max(
                        egui::pos2(bar_area.min.x, bar_area.max.y - h),
                        bar_area.max,
                    );
                    painter.rect_filled(
                        bar,
                        1.0,
                        if selected { BAR_SELECTED } else { BAR_COLOR },
                    );
                    painter.text(
                        egui::pos2(cell.center().x, cell.max.y - 1.0),
                        Align2::CENTER_BOTTOM,
                        i.to_string(),
                        FontId::proportional(9.0),
                        Color32::from_gray(120),
                    );
                }
                Channel::Input => {
                    if let Some(letter) = label {
                        painter.text(
                            cell.center(),
                            Align2::CENTER_CENTER,
                            letter,
                            FontId::monospace(18.0),
                            LETTER_COLOR,
                        );
                    }
                }
            }
            if selected {
                painter.rect_stroke(
                    cell.shrink(1.0),
                    2.0,
                    Stroke::new(1.5, ACCENT),
                    StrokeKind::Inside,
                );
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(index) = self.viewport.index_at_x(pos.x - rect.min.x, count) {
                    *clicked = Some(index);
                }
            }
        }
    }

    /// The one visible scrollbar. Its content is an empty strip of the full
    /// content width, so dragging it reports offsets through the same sync
    /// latch as the tracks.
    fn ui_unified_scrollbar(&mut self, ui: &mut egui::Ui, count: usize) {
        let width = self.viewport.content_width(count);
        let output = egui::ScrollArea::horizontal()
            .id_salt("unified_scrollbar")
            .auto_shrink([false, true])
            .scroll_offset(egui::vec2(self.viewport.scroll.offset(), 0.0))
            .show(ui, |ui| {
                ui.allocate_space(egui::vec2(width, 2.0));
            });
        self.viewport.scroll.observe(output.state.offset.x);
    }
}

/// First and one-past-last sample index intersecting the visible span; only
/// those cells get painted per frame.
fn visible_index_range(offset_x: f32, span: f32, pitch: f32, count: usize) -> (usize, usize) {
    if count == 0 || span <= 0.0 {
        return (0, 0);
    }
    let pitch = pitch.max(1.0);
    let first = (offset_x.max(0.0) / pitch) as usize;
    let last = ((offset_x.max(0.0) + span) / pitch).ceil() as usize + 1;
    (first.min(count), last.min(count))
}
