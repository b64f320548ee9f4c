//! Console prompts with validation.
//!
//! Every prompt loops until it gets an acceptable answer. There is no retry
//! limit; only the end of input breaks the loop.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use colored::Colorize;

use crate::core::{is_supported_date, parse_entry_date, RatingScale, MAX_ENTRY_YEAR, MIN_ENTRY_YEAR};
use crate::error::TrackerError;

/// Why a line was rejected by [`parse_bounded_int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntInputError {
    /// The text is not an integer.
    NotAnInteger,
    /// The integer lies outside the allowed range.
    OutOfRange,
}

/// Interpret one line of integer input.
///
/// Blank input counts as `0`, whatever `min` is. A blank answer is only
/// accepted when `0` itself lies in `[min, max]`.
///
/// # Errors
///
/// Returns the reason the line cannot be accepted.
pub fn parse_bounded_int(input: &str, min: i64, max: i64) -> Result<i64, IntInputError> {
    let trimmed = input.trim();
    let value = if trimmed.is_empty() {
        0
    } else {
        trimmed
            .parse::<i64>()
            .map_err(|_| IntInputError::NotAnInteger)?
    };

    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(IntInputError::OutOfRange)
    }
}

/// Line-based prompts over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout and read answers from stdin.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and hand back its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn say(&mut self, message: &str) -> Result<(), TrackerError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<(), TrackerError> {
        writeln!(self.output, "{}", message.yellow())?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InputClosed` at end of input, or an I/O error.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, TrackerError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(TrackerError::InputClosed);
        }
        Ok(input.trim().to_string())
    }

    /// Ask for an integer in `[min, max]` until one is given.
    ///
    /// Blank input is read as `0`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InputClosed` if input ends first.
    pub fn prompt_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64, TrackerError> {
        loop {
            let line = self.prompt_line(prompt)?;
            match parse_bounded_int(&line, min, max) {
                Ok(value) => return Ok(value),
                Err(IntInputError::NotAnInteger) => {
                    self.warn("Invalid input! Please enter a valid integer.")?;
                }
                Err(IntInputError::OutOfRange) => {
                    self.warn(&format!("Input must be between {min} and {max}. Try again."))?;
                }
            }
        }
    }

    /// Ask for a severity on `scale`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InputClosed` if input ends first.
    pub fn prompt_rating(&mut self, prompt: &str, scale: &RatingScale) -> Result<u8, TrackerError> {
        let value = self.prompt_int(prompt, i64::from(scale.min), i64::from(scale.max))?;
        u8::try_from(value).map_err(|_| TrackerError::OutOfRange {
            field: "rating",
            value,
            min: i64::from(scale.min),
            max: i64::from(scale.max),
        })
    }

    /// Ask for a non-negative count.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InputClosed` if input ends first.
    pub fn prompt_count(&mut self, prompt: &str) -> Result<u32, TrackerError> {
        let max = i64::from(u32::MAX);
        let value = self.prompt_int(prompt, 0, max)?;
        u32::try_from(value).map_err(|_| TrackerError::OutOfRange {
            field: "count",
            value,
            min: 0,
            max,
        })
    }

    /// Ask for a `YYYY-MM-DD` date until one parses and falls in the years a
    /// spreadsheet can store.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InputClosed` if input ends first.
    pub fn prompt_date(&mut self, prompt: &str) -> Result<NaiveDate, TrackerError> {
        loop {
            let line = self.prompt_line(prompt)?;
            match parse_entry_date(&line) {
                Some(date) if is_supported_date(date) => return Ok(date),
                Some(_) => self.warn(&format!(
                    "Date must be between {MIN_ENTRY_YEAR}-01-01 and {MAX_ENTRY_YEAR}-12-31. Try again."
                ))?,
                None => {
                    self.warn("Invalid date format! Please enter the date in YYYY-MM-DD format.")?;
                }
            }
        }
    }

    /// Ask for optional free text. A blank answer gives `None`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InputClosed` if input ends first.
    pub fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>, TrackerError> {
        let line = self.prompt_line(prompt)?;
        Ok(if line.is_empty() { None } else { Some(line) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    fn transcript(p: Prompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_parse_blank_is_zero() {
        assert_eq!(parse_bounded_int("", 0, 5), Ok(0));
        assert_eq!(parse_bounded_int("   ", -3, 3), Ok(0));
    }

    #[test]
    fn test_parse_blank_is_zero_not_min() {
        assert_eq!(parse_bounded_int("", -2, 5), Ok(0));
        assert_eq!(parse_bounded_int("", 1, 5), Err(IntInputError::OutOfRange));
    }

    #[test]
    fn test_parse_bounds() {
        assert_eq!(parse_bounded_int("0", 0, 5), Ok(0));
        assert_eq!(parse_bounded_int("5", 0, 5), Ok(5));
        assert_eq!(parse_bounded_int("6", 0, 5), Err(IntInputError::OutOfRange));
        assert_eq!(parse_bounded_int("-1", 0, 5), Err(IntInputError::OutOfRange));
    }

    #[test]
    fn test_parse_not_an_integer() {
        assert_eq!(parse_bounded_int("abc", 0, 5), Err(IntInputError::NotAnInteger));
        assert_eq!(parse_bounded_int("2.5", 0, 5), Err(IntInputError::NotAnInteger));
    }

    #[test]
    fn test_parse_always_in_range() {
        for raw in ["-10", "-1", "0", "3", "5", "6", "99", "", "x"] {
            if let Ok(value) = parse_bounded_int(raw, 0, 5) {
                assert!((0..=5).contains(&value), "{raw} gave {value}");
            }
        }
    }

    #[test]
    fn test_prompt_int_retries_until_valid() {
        let mut p = prompter("six\n6\n-1\n4\n");
        assert_eq!(p.prompt_int("Rate: ", 0, 5).unwrap(), 4);

        let out = transcript(p);
        assert!(out.contains("Invalid input! Please enter a valid integer."));
        assert_eq!(out.matches("Input must be between 0 and 5. Try again.").count(), 2);
        assert_eq!(out.matches("Rate: ").count(), 4);
    }

    #[test]
    fn test_prompt_int_blank_defaults_to_zero() {
        let mut p = prompter("\n");
        assert_eq!(p.prompt_int("Rate: ", 0, 5).unwrap(), 0);
    }

    #[test]
    fn test_prompt_int_input_closed() {
        let mut p = prompter("9\n");
        assert!(matches!(p.prompt_int("Rate: ", 0, 5), Err(TrackerError::InputClosed)));
    }

    #[test]
    fn test_prompt_rating_respects_scale() {
        let mut p = prompter("0\n11\n10\n");
        let scale = RatingScale::new(1, 10);
        assert_eq!(p.prompt_rating("Rate: ", &scale).unwrap(), 10);
    }

    #[test]
    fn test_prompt_count() {
        let mut p = prompter("-2\n3\n");
        assert_eq!(p.prompt_count("How many? ").unwrap(), 3);
    }

    #[test]
    fn test_prompt_date_retries() {
        let mut p = prompter("tomorrow\n2024-13-01\n2024-01-01\n");
        let date = p.prompt_date("Date: ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let out = transcript(p);
        assert_eq!(
            out.matches("Invalid date format! Please enter the date in YYYY-MM-DD format.")
                .count(),
            2
        );
    }

    #[test]
    fn test_prompt_date_rejects_unsupported_years() {
        let mut p = prompter("1899-06-01\n1900-01-01\n");
        let date = p.prompt_date("Date: ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());

        let out = transcript(p);
        assert!(out.contains("Date must be between 1900-01-01 and 9999-12-31. Try again."));
        assert!(!out.contains("Invalid date format!"));
    }

    #[test]
    fn test_prompt_text_blank_is_none() {
        let mut p = prompter("\n  headache behind eyes  \n");
        assert_eq!(p.prompt_text("Other: ").unwrap(), None);
        assert_eq!(
            p.prompt_text("Other: ").unwrap(),
            Some("headache behind eyes".to_string())
        );
    }
}
