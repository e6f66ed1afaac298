use std::io::{self, BufRead, Write};

use serde_json::{Map, Value};

use hepa_core::models::patient::RawPatientRecord;

use crate::widgets::{FieldSpec, FIELDS};

/// A line-oriented form over any reader/writer pair.
pub struct Form<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Form<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Ask for one field until the answer is within bounds.
    pub fn ask(&mut self, field: &FieldSpec) -> io::Result<Option<Value>> {
        loop {
            write!(
                self.output,
                "{} [{}] (default {}): ",
                field.label,
                field.widget.bounds(),
                field.widget.default_display()
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match field.widget.parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(msg) => writeln!(self.output, "  {msg}")?,
            }
        }
    }

    /// Collect every field into a raw record. `None` if input ends midway.
    pub fn prompt_record(&mut self) -> eyre::Result<Option<RawPatientRecord>> {
        let mut answers = Map::new();
        for field in &FIELDS {
            let Some(value) = self.ask(field)? else {
                return Ok(None);
            };
            answers.insert(field.key.to_string(), value);
        }

        // Same deserialization the HTTP body goes through.
        let record = serde_json::from_value(Value::Object(answers))?;
        Ok(Some(record))
    }

    /// Yes/no question; blank input takes `default`, end of input is "no".
    pub fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{question} {hint} ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "  answer y or n")?,
            }
        }
    }
}
