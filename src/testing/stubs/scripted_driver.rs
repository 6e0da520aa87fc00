use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Context, Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One pre-recorded reply to a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Number(f64),
    /// Picks the first option whose label starts with this text.
    Pick(String),
    /// Accepts whatever default the prompt offers.
    Default,
}

impl Answer {
    pub fn text(s: impl Into<String>) -> Self {
        Answer::Text(s.into())
    }

    pub fn pick(label: impl Into<String>) -> Self {
        Answer::Pick(label.into())
    }
}

/// Replays answers in order and records every prompt title it was asked.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.prompts.borrow_mut().push(title.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .with_context(|| format!("no scripted answer left for '{title}'"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        match self.next(title)? {
            Answer::Text(s) => Ok(s),
            Answer::Default => Ok(default.to_string()),
            other => bail!("'{title}' expects text, script has {other:?}"),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let x = match self.next(title)? {
            Answer::Number(x) => x,
            Answer::Default => default,
            other => bail!("'{title}' expects a number, script has {other:?}"),
        };
        if min.is_some_and(|lo| x < lo) || max.is_some_and(|hi| x > hi) {
            bail!("'{title}': {x} is outside the allowed range");
        }
        Ok(x)
    }

    fn ask_select(&self, title: &str, _help: &str, options: Vec<String>) -> Result<usize> {
        match self.next(title)? {
            Answer::Pick(label) => options
                .iter()
                .position(|o| o.starts_with(&label))
                .with_context(|| format!("'{title}' has no option starting with '{label}'")),
            Answer::Default => Ok(0),
            other => bail!("'{title}' expects a selection, script has {other:?}"),
        }
    }
}
