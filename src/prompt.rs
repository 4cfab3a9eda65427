//! Interactive questions
//!
//! Operations take a `&mut dyn Prompter` so tests can script the answers.

use anyhow::Result;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Ask a yes/no question
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Ask for a line of text
    fn input(&mut self, question: &str) -> Result<String>;
}

/// Interpret a yes/no answer. `None` means the answer wasn't understood.
pub fn parse_bool(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "on" => Some(true),
        "n" | "no" | "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Prompts on stdin/stdout
pub struct Terminal;

impl Terminal {
    /// Returns `None` at end of input
    fn ask(question: &str) -> Result<Option<String>> {
        print!("{}: ", question);
        io::stdout().flush()?;

        let mut response = String::new();
        if io::stdin().lock().read_line(&mut response)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(response.trim().to_string()))
    }
}

impl Prompter for Terminal {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            let Some(answer) = Self::ask(question)? else {
                return Ok(false);
            };
            match parse_bool(&answer) {
                Some(value) => return Ok(value),
                None => println!("Error: {} is not a valid boolean", answer),
            }
        }
    }

    fn input(&mut self, question: &str) -> Result<String> {
        loop {
            let Some(answer) = Self::ask(question)? else {
                anyhow::bail!("No answer given to: {}", question);
            };
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }
}

/// Answers questions from a fixed script, in order
#[derive(Debug, Default)]
pub struct Scripted {
    answers: VecDeque<String>,
    /// Every question asked, for assertions
    pub asked: Vec<String>,
}

impl Scripted {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    fn next(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted answer for: {}", question))
    }
}

impl Prompter for Scripted {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.next(question)?;
        parse_bool(&answer).ok_or_else(|| anyhow::anyhow!("{} is not a valid boolean", answer))
    }

    fn input(&mut self, question: &str) -> Result<String> {
        self.next(question)
    }
}
