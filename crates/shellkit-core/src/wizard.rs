//! Wizard continuation protocol
//!
//! A handler finishes with a [`Completion`]. `Completion::Done` returns
//! control to the command prompt. `Completion::Wizard` hands the next prompt
//! cycles to a sub-prompt: every answer set is passed to the wizard's
//! continuation, which decides whether the wizard is done or the same
//! questions are shown again.
//!
//! The payload is only honoured for arguments registered with
//! `wizard: true`; for any other argument it is dropped.

use crate::prompt::{Answers, Question};
use std::fmt;

/// Decision returned by a wizard continuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Leave the wizard and return to the command prompt
    Done,
    /// Show the same questions again
    Repeat,
}

impl From<bool> for WizardStep {
    fn from(done: bool) -> Self {
        if done { Self::Done } else { Self::Repeat }
    }
}

type Continuation = Box<dyn FnMut(&Answers) -> WizardStep + Send>;

/// A sub-prompt plus the continuation that consumes its answers
pub struct Wizard {
    questions: Vec<Question>,
    on_answers: Continuation,
}

impl Wizard {
    pub fn new(
        questions: Vec<Question>,
        on_answers: impl FnMut(&Answers) -> WizardStep + Send + 'static,
    ) -> Self {
        Self {
            questions,
            on_answers: Box::new(on_answers),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Run the continuation on one answer set
    pub fn answer(&mut self, answers: &Answers) -> WizardStep {
        (self.on_answers)(answers)
    }
}

impl fmt::Debug for Wizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wizard")
            .field("questions", &self.questions)
            .finish_non_exhaustive()
    }
}

/// How a handler finished
#[derive(Debug)]
pub enum Completion {
    Done,
    Wizard(Wizard),
}

impl Completion {
    /// Finish by starting a wizard
    pub fn wizard(
        questions: Vec<Question>,
        on_answers: impl FnMut(&Answers) -> WizardStep + Send + 'static,
    ) -> Self {
        Self::Wizard(Wizard::new(questions, on_answers))
    }
}

/// Sub-machine state of an active wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    AwaitingAnswer,
    Repeat,
    Done,
}

/// A running wizard owned by the REPL
#[derive(Debug)]
pub struct WizardSession {
    command: String,
    wizard: Wizard,
    state: WizardState,
    rounds: usize,
}

impl WizardSession {
    pub fn new(command: impl Into<String>, wizard: Wizard) -> Self {
        Self {
            command: command.into(),
            wizard,
            state: WizardState::AwaitingAnswer,
            rounds: 0,
        }
    }

    /// Command that started the wizard
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn questions(&self) -> &[Question] {
        self.wizard.questions()
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Number of answer sets fed so far
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Feed one answer set and move to `Done` or `Repeat`
    ///
    /// Once done, further answers are ignored.
    pub fn feed(&mut self, answers: &Answers) -> WizardState {
        if self.state == WizardState::Done {
            return self.state;
        }
        self.rounds += 1;
        self.state = match self.wizard.answer(answers) {
            WizardStep::Done => WizardState::Done,
            WizardStep::Repeat => WizardState::Repeat,
        };
        tracing::debug!(
            command = %self.command,
            round = self.rounds,
            state = ?self.state,
            "wizard answers handled"
        );
        self.state
    }
}
