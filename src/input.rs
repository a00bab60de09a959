//! Bounded integer prompts.

use std::io::{self, BufRead, Write};

/// Wording around a bounded-integer prompt.
///
/// Renders as `Please select <noun> from <pre>1<suf> to <pre>N<suf>: <input>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    /// What is being asked for, e.g. `"an option"`.
    pub noun: &'static str,
    /// Printed before each bound.
    pub value_prefix: &'static str,
    /// Printed after each bound.
    pub value_suffix: &'static str,
    /// Printed right before the cursor.
    pub input_prefix: &'static str,
}

impl Prompt {
    /// Prompt for a numbered menu option.
    pub const OPTION: Self = Self {
        noun: "an option",
        value_prefix: "(",
        value_suffix: ")",
        input_prefix: "",
    };

    /// Prompt for an amount of money.
    pub const BET: Self = Self {
        noun: "a value",
        value_prefix: "£",
        value_suffix: "",
        input_prefix: "£",
    };

    /// Returns the question for the range `1..=max`, without the cursor.
    #[must_use]
    pub fn question(&self, max: usize) -> String {
        format!(
            "Please select {} from {pre}1{suf} to {pre}{max}{suf}",
            self.noun,
            pre = self.value_prefix,
            suf = self.value_suffix,
        )
    }

    /// Returns the full prompt line for the range `1..=max`.
    ///
    /// ```
    /// use bjtable::Prompt;
    ///
    /// assert_eq!(Prompt::OPTION.text(3), "Please select an option from (1) to (3): ");
    /// assert_eq!(Prompt::BET.text(80), "Please select a value from £1 to £80: £");
    /// ```
    #[must_use]
    pub fn text(&self, max: usize) -> String {
        format!("{}: {}", self.question(max), self.input_prefix)
    }
}

/// Source of bounded integers.
///
/// Implementations keep asking until they get a number in `1..=max`; invalid
/// input never reaches the caller. The call blocks until then.
pub trait Input {
    /// Requests an integer in `1..=max`.
    ///
    /// # Errors
    ///
    /// Returns an error only when input can no longer be read at all, such as
    /// at end of input.
    fn request(&mut self, max: usize, prompt: &Prompt) -> io::Result<usize>;
}

impl<T: Input + ?Sized> Input for &mut T {
    fn request(&mut self, max: usize, prompt: &Prompt) -> io::Result<usize> {
        (**self).request(max, prompt)
    }
}

/// Line-based [`Input`] over any reader, echoing prompts to a writer.
///
/// Each line must hold a single whole number (surrounding whitespace is
/// ignored). Anything else prints `Invalid Input.` and asks again.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Creates a prompt reading from `reader` and writing to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineInput<io::StdinLock<'static>, io::Stdout> {
    /// Creates a prompt on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Input for LineInput<R, W> {
    fn request(&mut self, max: usize, prompt: &Prompt) -> io::Result<usize> {
        let mut line = String::new();
        loop {
            write!(self.writer, "{}", prompt.text(max))?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for a number",
                ));
            }

            match line.trim().parse::<usize>() {
                Ok(value) if (1..=max).contains(&value) => return Ok(value),
                _ => {
                    log::debug!("rejected input {:?}", line.trim());
                    writeln!(self.writer, "Invalid Input.")?;
                }
            }
        }
    }
}
