//! Scripted prompter for tests and headless hosts

use super::{Answers, EditKey, KeyHandler, Prompter, Question, apply_edits};
use crate::error::{ShellError, ShellResult};
use async_trait::async_trait;
use std::collections::VecDeque;

/// One scripted input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Submit a line at the command prompt
    Line(String),
    /// Type into the buffer without submitting
    Type(String),
    /// Press an edit key against the current buffer
    Key(EditKey),
    /// Submit whatever is in the buffer
    Enter,
    /// Answer a wizard round
    Answers(Answers),
    /// End of input
    Eof,
}

/// Prompter driven by a queue of [`ScriptStep`]s
///
/// Records every prompt shown, every question round asked and every line
/// printed so tests can assert on the conversation.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    steps: VecDeque<ScriptStep>,
    width: Option<usize>,
    /// Prompt texts passed to `read_line`, in order
    pub prompts: Vec<String>,
    /// Question rounds passed to `ask`, in order
    pub asked: Vec<Vec<Question>>,
    /// Lines printed through `print_line` and `print_error`
    pub output: Vec<String>,
    /// Blocks the key handler asked to print above the prompt
    pub above: Vec<String>,
    /// Buffer contents after each edit key
    pub buffers: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Script submitting each line in turn
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(|l| ScriptStep::Line(l.into())))
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn push(&mut self, step: ScriptStep) {
        self.steps.push_back(step);
    }

    /// Whether the printed output contains `needle`
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn read_line(
        &mut self,
        prompt: &str,
        keys: &mut (dyn KeyHandler + Send),
    ) -> ShellResult<Option<String>> {
        self.prompts.push(prompt.to_string());
        let mut buffer = String::new();

        while let Some(step) = self.steps.pop_front() {
            match step {
                ScriptStep::Line(line) => return Ok(Some(line)),
                ScriptStep::Type(text) => buffer.push_str(&text),
                ScriptStep::Key(key) => {
                    let edits = keys.on_key(key, &buffer);
                    self.above.extend(apply_edits(&mut buffer, &edits));
                    self.buffers.push(buffer.clone());
                }
                ScriptStep::Enter => return Ok(Some(buffer)),
                ScriptStep::Eof => return Ok(None),
                ScriptStep::Answers(_) => {
                    return Err(ShellError::prompt("script expected a command line"));
                }
            }
        }
        Ok(None)
    }

    async fn ask(&mut self, questions: &[Question]) -> ShellResult<Answers> {
        self.asked.push(questions.to_vec());
        match self.steps.pop_front() {
            Some(ScriptStep::Answers(answers)) => Ok(answers),
            Some(other) => Err(ShellError::prompt(format!(
                "script expected answers, found {:?}",
                other
            ))),
            None => Err(ShellError::prompt("script exhausted while asking")),
        }
    }

    fn print_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn terminal_width(&self) -> Option<usize> {
        self.width
    }
}
