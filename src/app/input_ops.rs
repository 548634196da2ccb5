use egui::{Key, Modifiers};

const LETTER_KEYS: [(Key, char); 26] = [
    (Key::A, 'A'),
    (Key::B, 'B'),
    (Key::C, 'C'),
    (Key::D, 'D'),
    (Key::E, 'E'),
    (Key::F, 'F'),
    (Key::G, 'G'),
    (Key::H, 'H'),
    (Key::I, 'I'),
    (Key::J, 'J'),
    (Key::K, 'K'),
    (Key::L, 'L'),
    (Key::M, 'M'),
    (Key::N, 'N'),
    (Key::O, 'O'),
    (Key::P, 'P'),
    (Key::Q, 'Q'),
    (Key::R, 'R'),
    (Key::S, 'S'),
    (Key::T, 'T'),
    (Key::U, 'U'),
    (Key::V, 'V'),
    (Key::W, 'W'),
    (Key::X, 'X'),
    (Key::Y, 'Y'),
    (Key::Z, 'Z'),
];

impl super::WaveScribe {
    /// Keyboard surface of the timeline. Inert while no sample is selected
    /// or while some widget owns keyboard focus; every key outside the
    /// mapping below is ignored.
    pub(super) fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        if self.session.selection.index().is_none() {
            return;
        }

        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Escape)) {
            self.session.deselect();
            return;
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::ArrowLeft)) {
            if self.session.move_left() {
                self.scroll_to_selected = true;
            }
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::ArrowRight)) {
            if self.session.move_right() {
                self.scroll_to_selected = true;
            }
        }
        let clear = ctx.input_mut(|i| {
            i.consume_key(Modifiers::NONE, Key::Backspace)
                || i.consume_key(Modifiers::NONE, Key::Delete)
        });
        if clear {
            self.session.clear_label();
        }
        // Letters are matched case-insensitively: key_pressed is
        // modifier-agnostic, so Shift+A assigns the same as A.
        for (key, letter) in LETTER_KEYS {
            if ctx.input(|i| i.key_pressed(key)) {
                self.session.assign_label(letter);
            }
        }
    }
}
