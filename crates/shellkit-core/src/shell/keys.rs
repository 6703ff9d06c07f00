//! Line-editing keys bound to history and autocomplete

use crate::autocomplete::Completer;
use crate::history::History;
use crate::prompt::{BufferEdit, EditKey, KeyHandler};

/// Key handler for the command prompt
pub struct LineKeys<'a> {
    history: &'a mut History,
    completer: &'a Completer,
    width: Option<usize>,
}

impl<'a> LineKeys<'a> {
    pub fn new(history: &'a mut History, completer: &'a Completer, width: Option<usize>) -> Self {
        Self {
            history,
            completer,
            width,
        }
    }
}

impl KeyHandler for LineKeys<'_> {
    fn on_key(&mut self, key: EditKey, buffer: &str) -> Vec<BufferEdit> {
        match key {
            EditKey::Up => match self.history.older() {
                Some(entry) => vec![BufferEdit::Clear, BufferEdit::Insert(entry.to_string())],
                None => Vec::new(),
            },
            EditKey::Down => match self.history.newer() {
                Some(entry) => vec![BufferEdit::Clear, BufferEdit::Insert(entry.to_string())],
                None => vec![BufferEdit::Clear],
            },
            EditKey::Complete => self.completer.begin(buffer, self.width),
        }
    }
}
