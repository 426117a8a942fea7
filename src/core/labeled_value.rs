use crate::core::{Program, Segment};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

pub const DEFAULT_PREFIX: &str = "Hello, I am ";
pub const DEFAULT_AGE: i64 = 28;
pub const DEFAULT_SUFFIX: &str = " years old\n";

/// How the segments reach the output stream. Both produce the same bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputStyle {
    /// One write per segment.
    #[default]
    Separate,
    /// The whole line is rendered first and written once.
    Chained,
}

#[derive(Debug, Clone)]
pub struct LabeledValueProgram {
    segments: Vec<Segment>,
    style: OutputStyle,
}

impl LabeledValueProgram {
    pub fn new(segments: Vec<Segment>, style: OutputStyle) -> Self {
        Self { segments, style }
    }

    pub fn labeled(prefix: &str, value: i64, suffix: &str, style: OutputStyle) -> Self {
        Self::new(
            vec![
                Segment::Text(prefix.to_string()),
                Segment::Number(value),
                Segment::Text(suffix.to_string()),
            ],
            style,
        )
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// Concatenates every segment in order, with no separators.
    pub fn render(&self) -> String {
        self.segments.iter().map(ToString::to_string).collect()
    }
}

impl Default for LabeledValueProgram {
    fn default() -> Self {
        Self::labeled(
            DEFAULT_PREFIX,
            DEFAULT_AGE,
            DEFAULT_SUFFIX,
            OutputStyle::default(),
        )
    }
}

impl Program for LabeledValueProgram {
    fn name(&self) -> &'static str {
        "labeled-value"
    }

    fn run(&self, _input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        match self.style {
            OutputStyle::Separate => {
                for segment in &self.segments {
                    write!(output, "{}", segment)?;
                }
            }
            OutputStyle::Chained => output.write_all(self.render().as_bytes())?,
        }
        Ok(())
    }
}
