//! Line-oriented prompt loops.
//!
//! [`Prompter::input`] asks for a single value and keeps asking until the
//! text converts to the requested kind and lies in the optional range.
//! [`Prompter::file_input`] layers a caller-supplied action on top of it for
//! paths: the action decides whether the path is usable and the loop keeps
//! asking until it is.
//!
//! Both loops are unbounded. The only way out besides acceptable input is
//! the end of the input stream, reported as [`MolToolError::InputClosed`].

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{MolToolError, Result};

/// The type a prompt answer must convert to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    String,
    Int,
    Double,
}

impl FromStr for InputKind {
    type Err = std::convert::Infallible;

    /// Case-insensitive; unknown tags fall back to `String`.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match value.to_lowercase().as_str() {
            "int" => InputKind::Int,
            "double" => InputKind::Double,
            _ => InputKind::String,
        })
    }
}

/// Closed interval an accepted number must lie in.
#[derive(Debug, Clone, PartialEq)]
pub enum InputRange {
    Int(RangeInclusive<i64>),
    Double(RangeInclusive<f64>),
}

impl InputRange {
    /// Integer range; `low` must not exceed `high`.
    pub fn int(low: i64, high: i64) -> Result<Self> {
        if low > high {
            return Err(empty_range(low, high));
        }
        Ok(InputRange::Int(low..=high))
    }

    /// Floating-point range with finite bounds; `low` must not exceed `high`.
    pub fn double(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(MolToolError::InvalidInput(format!(
                "Range bounds must be finite: {}..={}",
                low, high
            )));
        }
        if low > high {
            return Err(empty_range(low, high));
        }
        Ok(InputRange::Double(low..=high))
    }
}

fn empty_range(low: impl std::fmt::Display, high: impl std::fmt::Display) -> MolToolError {
    MolToolError::InvalidInput(format!("Empty range: {} is greater than {}", low, high))
}

/// What to ask for and how to validate it.
#[derive(Debug, Clone, Default)]
pub struct PromptSpec {
    pub name: String,
    pub kind: InputKind,
    pub default: Option<String>,
    pub range: Option<InputRange>,
    pub echo: bool,
}

impl PromptSpec {
    pub fn new(name: &str, kind: InputKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            ..Self::default()
        }
    }

    pub fn with_default(mut self, default: impl ToString) -> Self {
        self.default = Some(default.to_string());
        self
    }

    pub fn with_range(mut self, range: InputRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    fn prompt_text(&self) -> String {
        match &self.default {
            Some(default) => format!("Please enter {} [{} by default]: ", self.name, default),
            None => format!("Please enter {}: ", self.name),
        }
    }
}

/// Outcome of one [`Prompter::file_input`] action.
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt<T> {
    /// Stop asking and return the value.
    Accept(T),
    /// Ask again without printing anything.
    Reject,
    /// Print the message, then ask again.
    RejectWith(String),
}

/// Options for a path prompt.
#[derive(Debug, Clone)]
pub struct FileInputSpec {
    /// Used in the success message, and as `{name} path` when no message is set.
    pub name: String,
    pub message: Option<String>,
    pub success_message: bool,
}

impl FileInputSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            message: None,
            success_message: true,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_success_message(mut self, success_message: bool) -> Self {
        self.success_message = success_message;
        self
    }

    fn prompt_name(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => format!("{} path", self.name),
        }
    }
}

/// Reads answers from `R` and writes prompts and diagnostics to `W`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write one line of user-facing text.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Ask for a value until one converts and fits the range.
    ///
    /// Numbers are returned exactly as typed (trimmed); strings keep their
    /// surrounding whitespace and lose only the line terminator.
    pub fn input(&mut self, spec: &PromptSpec) -> Result<String> {
        let accepted = loop {
            write!(self.writer, "{}", spec.prompt_text())?;
            self.writer.flush()?;

            let line = self.read_line()?;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                if let Some(default) = &spec.default {
                    break default.clone();
                }
            }

            match check_value(spec, &line) {
                Check::Accepted(value) => break value,
                Check::WrongFormat => self.say("Wrong format. Please try again.")?,
                Check::OutOfRange => self.say("Out of range. Please try again.")?,
            }
        };

        if spec.echo {
            self.say(&format!("{} is set as {}.", spec.name, accepted))?;
        }
        Ok(accepted)
    }

    /// Ask for a path until `action` accepts it.
    ///
    /// The answer is trimmed and every backslash is removed before the
    /// action sees it. Recoverable action errors are printed and the prompt
    /// repeats; [`MolToolError::InputClosed`] is returned as-is.
    pub fn file_input<T, F>(&mut self, spec: &FileInputSpec, mut action: F) -> Result<T>
    where
        F: FnMut(&mut Self, &str) -> Result<Attempt<T>>,
    {
        let prompt = PromptSpec::new(&spec.prompt_name(), InputKind::String);
        loop {
            let raw = self.input(&prompt)?;
            let path = raw.trim().replace('\\', "");

            match action(self, &path) {
                Ok(Attempt::Accept(value)) => {
                    if spec.success_message {
                        self.say(&format!("Successfully imported from {}.", spec.name))?;
                    }
                    return Ok(value);
                }
                Ok(Attempt::Reject) => {}
                Ok(Attempt::RejectWith(message)) => self.say(&message)?,
                Err(err) if err.is_recoverable() => {
                    tracing::debug!(path = %path, error = %err, "path rejected");
                    self.say(&format!("Error:\n {}.\n Please try again.", err))?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Invalid UTF-8 is replaced rather than treated as end of input.
    fn read_line(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        match self.reader.read_until(b'\n', &mut bytes) {
            Ok(0) => Err(MolToolError::InputClosed),
            Ok(_) => {
                let mut line = String::from_utf8_lossy(&bytes).into_owned();
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(line)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to read from input");
                Err(MolToolError::InputClosed)
            }
        }
    }
}

enum Check {
    Accepted(String),
    WrongFormat,
    OutOfRange,
}

fn check_value(spec: &PromptSpec, line: &str) -> Check {
    let trimmed = line.trim();
    match spec.kind {
        InputKind::String => Check::Accepted(line.to_string()),
        InputKind::Int => match trimmed.parse::<i64>() {
            Err(_) => Check::WrongFormat,
            Ok(value) => match &spec.range {
                Some(InputRange::Int(range)) if !range.contains(&value) => Check::OutOfRange,
                _ => Check::Accepted(trimmed.to_string()),
            },
        },
        InputKind::Double => match trimmed.parse::<f64>() {
            Err(_) => Check::WrongFormat,
            Ok(value) => match &spec.range {
                Some(InputRange::Double(range)) if !range.contains(&value) => Check::OutOfRange,
                _ => Check::Accepted(trimmed.to_string()),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_writer()).unwrap()
    }

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("INT".parse::<InputKind>().unwrap(), InputKind::Int);
        assert_eq!("Double".parse::<InputKind>().unwrap(), InputKind::Double);
        assert_eq!("path".parse::<InputKind>().unwrap(), InputKind::String);
    }

    #[test]
    fn test_int_in_range_accepted_first_try() {
        let mut p = prompter("7\n");
        let spec = PromptSpec::new("depth", InputKind::Int).with_range(InputRange::Int(1..=7));
        assert_eq!(p.input(&spec).unwrap(), "7");
        assert_eq!(output(p), "Please enter depth: ");
    }

    #[test]
    fn test_out_of_range_then_valid() {
        let mut p = prompter("0\n3\n");
        let spec = PromptSpec::new("depth", InputKind::Int).with_range(InputRange::Int(1..=7));
        assert_eq!(p.input(&spec).unwrap(), "3");
        let printed = output(p);
        assert!(printed.contains("Out of range. Please try again."));
        assert_eq!(printed.matches("Please enter depth: ").count(), 2);
    }

    #[test]
    fn test_double_range_bounds_are_inclusive() {
        let mut p = prompter("1.5\n");
        let spec = PromptSpec::new("tolerance", InputKind::Double)
            .with_range(InputRange::Double(0.0..=1.5));
        assert_eq!(p.input(&spec).unwrap(), "1.5");
    }

    #[test]
    fn test_wrong_format_then_valid() {
        let mut p = prompter("abc\n 2.25 \n");
        let spec = PromptSpec::new("ratio", InputKind::Double);
        assert_eq!(p.input(&spec).unwrap(), "2.25");
        assert!(output(p).contains("Wrong format. Please try again."));
    }

    #[test]
    fn test_empty_input_takes_default() {
        let mut p = prompter("   \n");
        let spec = PromptSpec::new("digits", InputKind::Int)
            .with_default(4)
            .with_range(InputRange::Int(10..=20));
        assert_eq!(p.input(&spec).unwrap(), "4");
        assert_eq!(output(p), "Please enter digits [4 by default]: ");
    }

    #[test]
    fn test_empty_input_without_default_is_wrong_format_for_numbers() {
        let mut p = prompter("\n5\n");
        let spec = PromptSpec::new("count", InputKind::Int);
        assert_eq!(p.input(&spec).unwrap(), "5");
        assert!(output(p).contains("Wrong format"));
    }

    #[test]
    fn test_mismatched_range_is_ignored() {
        let mut p = prompter("100\n");
        let spec = PromptSpec::new("count", InputKind::Int)
            .with_range(InputRange::Double(0.0..=1.0));
        assert_eq!(p.input(&spec).unwrap(), "100");
    }

    #[test]
    fn test_nan_is_out_of_range() {
        let mut p = prompter("NaN\n0.5\n");
        let spec = PromptSpec::new("x", InputKind::Double)
            .with_range(InputRange::Double(0.0..=1.0));
        assert_eq!(p.input(&spec).unwrap(), "0.5");
    }

    #[test]
    fn test_string_keeps_inner_text() {
        let mut p = prompter(" name with spaces \r\n");
        let spec = PromptSpec::new("label", InputKind::String);
        assert_eq!(p.input(&spec).unwrap(), " name with spaces ");
    }

    #[test]
    fn test_echo_prints_confirmation() {
        let mut p = prompter("12\n");
        let spec = PromptSpec::new("digits", InputKind::Int).with_echo(true);
        p.input(&spec).unwrap();
        assert!(output(p).ends_with("digits is set as 12.\n"));
    }

    #[test]
    fn test_invalid_utf8_line_is_replaced_not_closed() {
        let mut p = Prompter::new(Cursor::new(b"caf\xe9\nok\n".to_vec()), Vec::new());
        let spec = PromptSpec::new("label", InputKind::String);
        assert_eq!(p.input(&spec).unwrap(), "caf\u{fffd}");
        assert_eq!(p.input(&spec).unwrap(), "ok");
    }

    #[test]
    fn test_invalid_utf8_number_is_wrong_format() {
        let mut p = Prompter::new(Cursor::new(b"\xff\n3\n".to_vec()), Vec::new());
        let spec = PromptSpec::new("count", InputKind::Int);
        assert_eq!(p.input(&spec).unwrap(), "3");
        assert!(output(p).contains("Wrong format. Please try again."));
    }

    #[test]
    fn test_range_constructors_reject_empty_and_non_finite() {
        assert_eq!(InputRange::int(1, 5).unwrap(), InputRange::Int(1..=5));
        assert_eq!(InputRange::int(2, 2).unwrap(), InputRange::Int(2..=2));
        assert!(matches!(
            InputRange::int(5, 1),
            Err(MolToolError::InvalidInput(_))
        ));
        assert_eq!(
            InputRange::double(-1.0, 0.5).unwrap(),
            InputRange::Double(-1.0..=0.5)
        );
        assert!(InputRange::double(1.0, 0.0).is_err());
        assert!(InputRange::double(f64::NAN, 1.0).is_err());
        assert!(InputRange::double(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_end_of_input_is_unrecoverable() {
        let mut p = prompter("oops\n");
        let spec = PromptSpec::new("count", InputKind::Int);
        let err = p.input(&spec).unwrap_err();
        assert!(matches!(err, MolToolError::InputClosed));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_file_input_strips_backslashes_and_trims() {
        let mut p = prompter("  /tmp/My\\ Dir  \n");
        let seen = p
            .file_input(&FileInputSpec::new("XYZ file"), |_, path| {
                Ok(Attempt::Accept(path.to_string()))
            })
            .unwrap();
        assert_eq!(seen, "/tmp/My Dir");
        let printed = output(p);
        assert!(printed.starts_with("Please enter XYZ file path: "));
        assert!(printed.ends_with("Successfully imported from XYZ file.\n"));
    }

    #[test]
    fn test_file_input_retries_on_reject_and_error() {
        let mut p = prompter("a\nb\nc\n");
        let spec = FileInputSpec::new("data")
            .with_message("the data directory")
            .with_success_message(false);
        let accepted = p
            .file_input(&spec, |_, path| match path {
                "a" => Ok(Attempt::Reject),
                "b" => Err(MolToolError::Parse("bad header".into())),
                _ => Ok(Attempt::Accept(path.len())),
            })
            .unwrap();
        assert_eq!(accepted, 1);
        let printed = output(p);
        assert_eq!(printed.matches("Please enter the data directory: ").count(), 3);
        assert!(printed.contains("Error:\n Parse error: bad header.\n Please try again.\n"));
        assert!(!printed.contains("Successfully imported"));
    }

    #[test]
    fn test_file_input_prints_reject_message() {
        let mut p = prompter("x\ny\n");
        let value = p
            .file_input(&FileInputSpec::new("f"), |_, path| {
                if path == "x" {
                    Ok(Attempt::RejectWith("Not usable.".to_string()))
                } else {
                    Ok(Attempt::Accept(()))
                }
            })
            .map(|_| "done");
        assert_eq!(value.unwrap(), "done");
        assert!(output(p).contains("Not usable.\n"));
    }

    #[test]
    fn test_file_input_propagates_input_closed() {
        let mut p = prompter("x\n");
        let result: Result<()> = p.file_input(&FileInputSpec::new("f"), |_, _| Ok(Attempt::Reject));
        assert!(matches!(result, Err(MolToolError::InputClosed)));
    }
}
