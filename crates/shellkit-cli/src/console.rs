//! Terminal prompter

use async_trait::async_trait;
use colored::*;
use console::{Key, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};
use shellkit_core::error::{ShellError, ShellResult};
use shellkit_core::prompt::{
    Answers, BufferEdit, EditKey, KeyHandler, Prompter, Question, QuestionKind,
};
use std::io::{self, BufRead};
use tokio::task;

/// Ctrl-D as delivered by `read_key`
const END_OF_TRANSMISSION: char = '\u{4}';
/// Ctrl-U, clears the line
const KILL_LINE: char = '\u{15}';

/// Prompter reading keys from the controlling terminal
///
/// Falls back to plain line reads when stdin is not a terminal, in which
/// case history and completion keys are unavailable. Terminal reads block,
/// so they run through `block_in_place` and need the multi-threaded runtime.
pub struct TerminalPrompter {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }

    fn redraw(&self, prompt: &str, buffer: &str) -> io::Result<()> {
        self.term.clear_line()?;
        self.term.write_str(&format!("{} {}", prompt.bold(), buffer))?;
        self.term.flush()
    }

    fn apply(&self, prompt: &str, buffer: &mut String, edits: &[BufferEdit]) -> io::Result<()> {
        for edit in edits {
            match edit {
                BufferEdit::Clear => buffer.clear(),
                BufferEdit::Insert(text) => buffer.push_str(text),
                BufferEdit::PrintAbove(block) => {
                    self.term.clear_line()?;
                    self.term.write_line(block)?;
                }
                BufferEdit::Redraw => {}
            }
        }
        self.redraw(prompt, buffer)
    }

    fn read_keys(
        &self,
        prompt: &str,
        keys: &mut (dyn KeyHandler + Send),
    ) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        self.redraw(prompt, &buffer)?;

        loop {
            let key = match self.term.read_key() {
                Ok(key) => key,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(err) => return Err(err),
            };
            match key {
                Key::Enter => {
                    self.term.write_line("")?;
                    return Ok(Some(buffer));
                }
                Key::Backspace => {
                    buffer.pop();
                    self.redraw(prompt, &buffer)?;
                }
                Key::ArrowUp | Key::ArrowDown | Key::Tab => {
                    let edit_key = match key {
                        Key::ArrowUp => EditKey::Up,
                        Key::ArrowDown => EditKey::Down,
                        _ => EditKey::Complete,
                    };
                    let edits = keys.on_key(edit_key, &buffer);
                    self.apply(prompt, &mut buffer, &edits)?;
                }
                Key::CtrlC => {
                    buffer.clear();
                    self.term.write_line("")?;
                    self.redraw(prompt, &buffer)?;
                }
                Key::Char(END_OF_TRANSMISSION) if buffer.is_empty() => {
                    self.term.write_line("")?;
                    return Ok(None);
                }
                Key::Char(KILL_LINE) => {
                    buffer.clear();
                    self.redraw(prompt, &buffer)?;
                }
                Key::Char(c) if !c.is_control() => {
                    buffer.push(c);
                    self.term.write_str(&c.to_string())?;
                }
                _ => {}
            }
        }
    }

    fn read_plain(&self, prompt: &str) -> io::Result<Option<String>> {
        self.term.write_str(&format!("{prompt} "))?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask_one(&self, question: &Question) -> Result<String, dialoguer::Error> {
        let theme = &self.theme;
        let message = question.message.as_str();
        let default = question.default.as_deref();

        match &question.kind {
            QuestionKind::Input => {
                let mut input = Input::<String>::with_theme(theme).with_prompt(message);
                if let Some(default) = default {
                    input = input.default(default.to_string());
                }
                input.interact_text()
            }
            QuestionKind::Confirm => Confirm::with_theme(theme)
                .with_prompt(message)
                .default(default == Some("true"))
                .interact()
                .map(|yes| yes.to_string()),
            QuestionKind::Password => Password::with_theme(theme).with_prompt(message).interact(),
            QuestionKind::Select { choices } => {
                let selected = default
                    .and_then(|d| choices.iter().position(|c| c == d))
                    .unwrap_or(0);
                Select::with_theme(theme)
                    .with_prompt(message)
                    .items(choices.as_slice())
                    .default(selected)
                    .interact()
                    .map(|index| choices.get(index).cloned().unwrap_or_default())
            }
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn read_line(
        &mut self,
        prompt: &str,
        keys: &mut (dyn KeyHandler + Send),
    ) -> ShellResult<Option<String>> {
        let line = task::block_in_place(|| {
            if self.term.is_term() {
                self.read_keys(prompt, keys)
            } else {
                self.read_plain(prompt)
            }
        })?;
        Ok(line)
    }

    async fn ask(&mut self, questions: &[Question]) -> ShellResult<Answers> {
        task::block_in_place(|| {
            let mut answers = Answers::default();
            for question in questions {
                let value = self
                    .ask_one(question)
                    .map_err(|e| ShellError::prompt(e.to_string()))?;
                answers.insert(question.name.clone(), value);
            }
            Ok(answers)
        })
    }

    fn print_line(&mut self, text: &str) {
        println!("{text}");
    }

    fn print_error(&mut self, text: &str) {
        eprintln!("{} {}", "✗".red().bold(), text.red());
    }

    fn terminal_width(&self) -> Option<usize> {
        self.term.size_checked().map(|(_, cols)| usize::from(cols))
    }
}
