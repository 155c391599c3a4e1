//! Interactive fallbacks for values that were not given on the command line.

use anyhow::Context;
use appctl_common::warn;
use console::Term;

/// Source of answers to questions asked on the terminal.
pub trait Prompt {
    fn ask(&self, question: &str) -> anyhow::Result<String>;
}

pub struct ConsolePrompt {
    term: Term,
    disabled: bool,
}

impl ConsolePrompt {
    pub fn new(disabled: bool) -> Self {
        Self {
            term: Term::stderr(),
            disabled,
        }
    }
}

impl Prompt for ConsolePrompt {
    fn ask(&self, question: &str) -> anyhow::Result<String> {
        anyhow::ensure!(
            !self.disabled,
            "input is disabled and no value was given for: {question}"
        );
        anyhow::ensure!(
            self.term.is_term(),
            "not attached to a terminal, cannot ask: {question}"
        );

        self.term.write_str(&format!("{question}: "))?;
        let answer = self
            .term
            .read_line()
            .context("failed to read from terminal")?;
        Ok(answer.trim().to_string())
    }
}

/// Asks until the answer is one of `options`.
pub fn read_choice(prompt: &dyn Prompt, question: &str, options: &[&str]) -> anyhow::Result<String> {
    loop {
        let answer = prompt.ask(question)?;
        if options.contains(&answer.as_str()) {
            return Ok(answer);
        }
        warn!("'{answer}' is not one of: {}", options.join(", "));
    }
}

/// Asks until a non-empty answer is given.
pub fn read_non_empty(prompt: &dyn Prompt, question: &str) -> anyhow::Result<String> {
    loop {
        let answer = prompt.ask(question)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        warn!("a value is required");
    }
}
