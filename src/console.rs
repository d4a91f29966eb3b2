use std::io::{self, BufRead, Write};

/// Line-oriented operator console over a reader/writer pair.
///
/// The driver runs it on locked stdin/stdout; tests feed it in-memory
/// buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    prompt: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, prompt: &str) -> Self {
        Self {
            input,
            output,
            prompt: prompt.to_string(),
        }
    }

    /// Print `question` and the prompt, then read the next
    /// whitespace-delimited token from the input.
    ///
    /// Blank lines are skipped; of a line with several tokens only the
    /// first is taken. End of input while a token is still expected is an
    /// error.
    pub fn prompt(&mut self, question: &str) -> io::Result<String> {
        writeln!(self.output, "{}", question)?;
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()?;
        loop {
            let mut line = String::new();
            let n = self.input.read_line(&mut line)?;
            if n == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended while waiting for a folder name",
                ));
            }
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }

    /// Write a status line to the output.
    pub fn status(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{}", msg)
    }
}
