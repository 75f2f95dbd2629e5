//! Validated line-based prompts for the interactive menu.
//!
//! Every free-text field goes through [`Prompter::ask`]: the answer is handed
//! to a parser, and on failure the parser's message is shown and the field
//! is asked again. Repeated empty answers, or the end of input, abort the
//! current operation and return control to the menu.

use std::io::{self, BufRead, Write};

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_empty: u32,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter that gives up after `max_empty` consecutive empty
    /// answers.
    pub fn new(input: R, output: W, max_empty: u32) -> Self {
        Self {
            input,
            output,
            max_empty: max_empty.max(1),
        }
    }

    /// The writer prompts go to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one line with the trailing newline removed.
    ///
    /// Returns `None` at the end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks for a value until `parse` accepts it.
    ///
    /// Returns `None` when the operator gave up: `max_empty` empty answers
    /// in a row, or the end of input.
    pub fn ask<T, F>(&mut self, label: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        let mut empties = 0;
        loop {
            write!(self.output, "{label}: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };

            let answer = line.trim();
            if answer.is_empty() {
                empties += 1;
                if empties >= self.max_empty {
                    writeln!(self.output, "No answer given, returning to the menu.")?;
                    return Ok(None);
                }
                let left = self.max_empty - empties;
                writeln!(
                    self.output,
                    "A value is required (press Enter {left} more time(s) to return to the menu)."
                )?;
                continue;
            }

            empties = 0;
            match parse(answer) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
    }

    /// Asks a yes/no question.
    pub fn confirm(&mut self, question: &str) -> io::Result<Option<bool>> {
        self.ask(&format!("{question} (y/n)"), parse_yes_no)
    }
}

/// Accepts y/yes/s/si and n/no, case-insensitively.
pub fn parse_yes_no(answer: &str) -> Result<bool, String> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "s" | "si" | "sí" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(format!("'{other}' is not an answer; type y or n.")),
    }
}
