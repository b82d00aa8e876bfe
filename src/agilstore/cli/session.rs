use agilstore::error::Result;
use std::io::{BufRead, Write};

/// The interactive prompt: one input stream, one output stream.
///
/// Every prompt returns `None` once input is exhausted, and callers treat that as the
/// operator closing the session.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.output.write_all(b"\n")?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Writes `question` and reads one line, without its line terminator.
    pub fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompts until `parse` accepts the answer, printing each rejection.
    pub fn prompt_parsed<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    /// Yes/no question. Only `y`, `yes`, `s` and `sim` count as yes.
    pub fn confirm(&mut self, question: &str) -> Result<Option<bool>> {
        Ok(self.prompt(question)?.map(|answer| {
            matches!(
                answer.trim().to_lowercase().as_str(),
                "y" | "yes" | "s" | "sim"
            )
        }))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
