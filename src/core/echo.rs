use crate::core::extract::extract_i32;
use crate::core::Program;
use crate::domain::model::{Extraction, TipAmount};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

pub const DEFAULT_PROMPT: &str = "Enter tip amount: ";
pub const DEFAULT_LABEL: &str = "You paid ";
pub const DEFAULT_TRAILING: &str = " dollars. \n";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EchoMode {
    /// Prompt, read, then print the value back.
    #[default]
    Echo,
    /// Prompt and read only.
    ReadOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoTexts {
    pub prompt: String,
    pub label: String,
    pub trailing: String,
}

impl Default for EchoTexts {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            label: DEFAULT_LABEL.to_string(),
            trailing: DEFAULT_TRAILING.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EchoProgram {
    texts: EchoTexts,
    mode: EchoMode,
}

impl EchoProgram {
    pub fn new(texts: EchoTexts, mode: EchoMode) -> Self {
        Self { texts, mode }
    }

    pub fn with_mode(mut self, mode: EchoMode) -> Self {
        self.mode = mode;
        self
    }

    /// The line printed after the read, e.g. `"You paid 5 dollars. \n"`.
    pub fn echo_line(&self, tip: TipAmount) -> String {
        format!("{}{}{}", self.texts.label, tip, self.texts.trailing)
    }

    /// Prompts, blocks for one token and stores it. Returns the stored value.
    pub fn read_tip(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<TipAmount> {
        let mut tip = TipAmount::default();

        output.write_all(self.texts.prompt.as_bytes())?;
        output.flush()?;

        let extraction = extract_i32(input)?;
        match extraction {
            Extraction::Parsed(value) => tracing::debug!("Read tip amount {}", value),
            Extraction::OutOfRange(value) => {
                tracing::warn!("Tip amount out of range, stored {}", value)
            }
            Extraction::Failed => tracing::warn!("Tip amount was not a number, stored 0"),
            Extraction::EndOfInput => tracing::warn!("No tip amount before end of input, stored 0"),
        }
        tip.0 = extraction.stored_value();

        Ok(tip)
    }
}

impl Program for EchoProgram {
    fn name(&self) -> &'static str {
        "tip-echo"
    }

    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        let tip = self.read_tip(input, output)?;

        if self.mode == EchoMode::Echo {
            output.write_all(self.echo_line(tip).as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transcript(program: &EchoProgram, stdin: &str) -> String {
        let mut out = Vec::new();
        program
            .run(&mut Cursor::new(stdin.as_bytes()), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_echo_line() {
        let program = EchoProgram::default();
        assert_eq!(program.echo_line(TipAmount(5)), "You paid 5 dollars. \n");
        assert_eq!(program.echo_line(TipAmount(0)), "You paid 0 dollars. \n");
    }

    #[test]
    fn test_transcript_is_prompt_then_echo() {
        let program = EchoProgram::default();
        assert_eq!(
            transcript(&program, "5\n"),
            "Enter tip amount: You paid 5 dollars. \n"
        );
    }

    #[test]
    fn test_read_only_mode_prints_prompt_only() {
        let program = EchoProgram::default().with_mode(EchoMode::ReadOnly);
        assert_eq!(transcript(&program, "12\n"), "Enter tip amount: ");
    }

    #[test]
    fn test_stored_value_is_untransformed() {
        let program = EchoProgram::default();
        let mut out = Vec::new();
        let tip = program
            .read_tip(&mut Cursor::new("-17 ".as_bytes()), &mut out)
            .unwrap();
        assert_eq!(tip.value(), -17);
    }

    #[test]
    fn test_unreadable_input_echoes_zero() {
        let program = EchoProgram::default();
        assert_eq!(
            transcript(&program, "lots\n"),
            "Enter tip amount: You paid 0 dollars. \n"
        );
        assert_eq!(transcript(&program, ""), "Enter tip amount: You paid 0 dollars. \n");
    }
}
