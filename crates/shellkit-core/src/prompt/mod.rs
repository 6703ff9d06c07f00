//! Prompt collaborator seam
//!
//! The core never touches the terminal. Everything it needs from the line
//! editor goes through [`Prompter`]: reading one command line, collecting
//! answers to wizard questions, and printing. Key gestures that edit the
//! in-progress line (history navigation, completion) are delivered to a
//! [`KeyHandler`] which answers with [`BufferEdit`] commands for the
//! prompter to apply.

mod question;
mod scripted;

pub use question::{Answers, Question, QuestionKind};
pub use scripted::{ScriptStep, ScriptedPrompter};

use crate::error::ShellResult;
use async_trait::async_trait;

/// Key gestures that act on the in-progress line without submitting it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Previous history entry
    Up,
    /// Next history entry
    Down,
    /// Autocomplete the current line
    Complete,
}

/// Mutation the prompter applies to its input buffer or display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferEdit {
    /// Empty the input buffer
    Clear,
    /// Append text at the end of the input buffer
    Insert(String),
    /// Print a block above the prompt line
    PrintAbove(String),
    /// Redraw the prompt and the current buffer
    Redraw,
}

/// Reacts to edit keys pressed while a line is being typed
pub trait KeyHandler {
    fn on_key(&mut self, key: EditKey, buffer: &str) -> Vec<BufferEdit>;
}

/// Apply `edits` to a plain string buffer
///
/// Returns the blocks that were requested to be printed above the prompt.
pub fn apply_edits(buffer: &mut String, edits: &[BufferEdit]) -> Vec<String> {
    let mut printed = Vec::new();
    for edit in edits {
        match edit {
            BufferEdit::Clear => buffer.clear(),
            BufferEdit::Insert(text) => buffer.push_str(text),
            BufferEdit::PrintAbove(block) => printed.push(block.clone()),
            BufferEdit::Redraw => {}
        }
    }
    printed
}

/// Line-editing and answer-collection facility used by the shell
#[async_trait]
pub trait Prompter: Send {
    /// Read one command line
    ///
    /// Returns `None` at end of input.
    async fn read_line(
        &mut self,
        prompt: &str,
        keys: &mut (dyn KeyHandler + Send),
    ) -> ShellResult<Option<String>>;

    /// Ask the questions of a wizard round and collect the answers
    async fn ask(&mut self, questions: &[Question]) -> ShellResult<Answers>;

    /// Print one line of shell output
    fn print_line(&mut self, text: &str);

    /// Print one line reporting a failure
    fn print_error(&mut self, text: &str) {
        self.print_line(text);
    }

    /// Terminal width in columns, if known
    fn terminal_width(&self) -> Option<usize> {
        None
    }
}
