/// Timeline tracks, top to bottom. Left/Right visualize amplitude; Input is
/// the synthetic third track that hosts the assigned letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Left,
    Right,
    Input,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Left, Channel::Right, Channel::Input];

    pub fn title(self) -> &'static str {
        match self {
            Channel::Left => "Left",
            Channel::Right => "Right",
            Channel::Input => "Input",
        }
    }

    pub fn is_amplitude(self) -> bool {
        !matches!(self, Channel::Input)
    }
}
