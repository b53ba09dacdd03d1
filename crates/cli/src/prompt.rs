// ABOUTME: Stdin-backed prompter implementing the AnswerSource trait.
// ABOUTME: Writes labels and defaults to stderr, reads answers line by line.

use std::io::{self, BufRead, Write};

use postpress_markup::AnswerSource;

/// Interactive prompter. A blank answer takes the default.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl AnswerSource for StdinPrompter {
    fn ask(&mut self, label: &str, default: &str) -> io::Result<String> {
        if default.is_empty() {
            eprint!("{}: ", label);
        } else {
            eprint!("{} [{}]: ", label, default);
        }
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        let input = input.trim();
        Ok(if input.is_empty() {
            default.to_string()
        } else {
            input.to_string()
        })
    }

    fn confirm(&mut self, label: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        eprint!("{} {} ", label, hint);
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;

        Ok(match input.trim().to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }
}
