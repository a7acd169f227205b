//! Interactive trip planning
//!
//! Asks the visitor for an id, greets them based on what they saved last
//! time, asks the trip questions, then saves and prints the itinerary.

use colored::*;
use eyre::Result;
use prefstore::{PreferenceRecord, PreferenceStore};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;
use tracing::debug;

use crate::session::{Planner, QUESTIONS};

/// Source of visitor answers
pub trait Prompter {
    /// Ask one question. `None` means the visitor is gone (EOF).
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line-editing prompter on the terminal
pub struct ReadlinePrompter {
    editor: DefaultEditor,
}

impl ReadlinePrompter {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        Ok(Self { editor })
    }
}

impl Prompter for ReadlinePrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.editor.readline(&format!("{} {} ", prompt, ">".bright_green())) {
                Ok(line) => {
                    let _ = self.editor.add_history_entry(line.as_str());
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - ask again
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(eyre::eyre!("Readline error: {}", err)),
            }
        }
    }
}

/// One interactive planning conversation
pub struct ChatSession<'a, S: PreferenceStore, P: Prompter, W: Write> {
    planner: &'a Planner<S>,
    prompter: P,
    out: W,
}

impl<'a, S: PreferenceStore, P: Prompter, W: Write> ChatSession<'a, S, P, W> {
    pub fn new(planner: &'a Planner<S>, prompter: P, out: W) -> Self {
        Self {
            planner,
            prompter,
            out,
        }
    }

    /// Run the conversation. Returns the saved record, or `None` if the
    /// visitor left before answering everything.
    pub fn run(&mut self, user_id: Option<String>) -> Result<Option<PreferenceRecord>> {
        writeln!(self.out, "{}", "Personalized Tour Plan Bot".bright_cyan().bold())?;
        writeln!(self.out)?;

        let user_id = match user_id.filter(|u| !u.trim().is_empty()) {
            Some(id) => id,
            None => match self.ask_required("Enter your User ID:", "Please enter a user ID.")? {
                Some(id) => id,
                None => return self.goodbye(),
            },
        };

        writeln!(self.out, "Hello, User {}!", user_id.cyan())?;
        let greeting = self.planner.greet(&user_id)?;
        self.bot(&greeting.to_string())?;

        let mut answers = Vec::with_capacity(QUESTIONS.len());
        for (_, question) in QUESTIONS {
            match self.ask_required(question, "Please fill in all fields.")? {
                Some(answer) => answers.push(answer),
                None => return self.goodbye(),
            }
        }

        let [city, time, budget, interests, start]: [String; 5] = answers
            .try_into()
            .map_err(|_| eyre::eyre!("Expected {} answers", QUESTIONS.len()))?;
        let record = PreferenceRecord::new(user_id, city, time, budget, interests, start);

        let document = self.planner.plan(&record)?;
        if document.used_default_window() {
            writeln!(
                self.out,
                "{} Couldn't read that time range, assuming {} - {}.",
                "warning:".yellow(),
                document.time_range.start,
                document.time_range.end
            )?;
        }
        self.bot("Here's your personalized itinerary:")?;
        writeln!(self.out)?;
        write!(self.out, "{}", document)?;

        Ok(Some(record))
    }

    fn ask_required(&mut self, question: &str, complaint: &str) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.prompter.ask(question)? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if !answer.is_empty() {
                debug!(question, "Visitor answered");
                return Ok(Some(answer.to_string()));
            }
            writeln!(self.out, "{} {}", "error:".red(), complaint)?;
        }
    }

    fn bot(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{} {}", "Bot:".bright_red(), message)?;
        Ok(())
    }

    fn goodbye(&mut self) -> Result<Option<PreferenceRecord>> {
        writeln!(self.out)?;
        writeln!(self.out, "Goodbye!")?;
        Ok(None)
    }
}
