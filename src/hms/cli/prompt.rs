use hms::error::{HmsError, Result};
use std::io::{BufRead, Write};

/// Line-oriented operator input paired with the output it prompts on.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prompts once and returns the line as typed, minus its terminator.
    /// End of input is `InputClosed`.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(HmsError::InputClosed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Re-prompts until the operator types a whole number.
    pub fn ask_int(&mut self, label: &str) -> Result<i64> {
        loop {
            let answer = self.ask(label)?;
            match answer.trim().parse() {
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    /// Blank means "leave unchanged".
    pub fn ask_optional(&mut self, label: &str) -> Result<Option<String>> {
        let answer = self.ask(label)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    pub fn ask_optional_int(&mut self, label: &str) -> Result<Option<i64>> {
        loop {
            let answer = self.ask(label)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }
}
