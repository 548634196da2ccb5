use std::path::PathBuf;

use super::WaveScribe;

#[cfg(feature = "kittest")]
use std::collections::VecDeque;

/// Scriptable stand-in for the native file dialog; tests queue answers
/// (including `None` for a cancelled dialog) ahead of time.
#[cfg(feature = "kittest")]
#[derive(Default)]
pub struct TestDialogQueue {
    files: VecDeque<Option<PathBuf>>,
}

#[cfg(feature = "kittest")]
impl TestDialogQueue {
    fn next_file(&mut self) -> Option<PathBuf> {
        self.files.pop_front().unwrap_or(None)
    }

    fn push_file(&mut self, path: Option<PathBuf>) {
        self.files.push_back(path);
    }
}

impl WaveScribe {
    pub(super) fn pick_wav_dialog(&mut self) -> Option<PathBuf> {
        #[cfg(feature = "kittest")]
        {
            return self.test_dialogs.next_file();
        }
        #[cfg(not(feature = "kittest"))]
        {
            rfd::FileDialog::new()
                .add_filter("WAV Audio", &["wav"])
                .pick_file()
        }
    }

    #[cfg(feature = "kittest")]
    pub fn test_queue_file_dialog(&mut self, path: Option<PathBuf>) {
        self.test_dialogs.push_file(path);
    }
}
