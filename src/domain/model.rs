use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The one scalar the echo lesson keeps in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipAmount(pub i32);

impl TipAmount {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TipAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Text(String),
    Number(i64),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Text(text) => f.write_str(text),
            Segment::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Result of one formatted integer read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    Parsed(i32),
    /// Digits were read but did not fit; carries the saturated value.
    OutOfRange(i32),
    /// A token was present but did not start with a number.
    Failed,
    EndOfInput,
}

impl Extraction {
    /// Value a failed read leaves in the target variable.
    pub fn stored_value(self) -> i32 {
        match self {
            Extraction::Parsed(v) | Extraction::OutOfRange(v) => v,
            Extraction::Failed | Extraction::EndOfInput => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonKind {
    CompileAndRun,
    Comments,
    Chaining,
    UserInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub id: u8,
    pub slug: &'static str,
    pub title: &'static str,
    pub recorded: NaiveDate,
    pub kind: LessonKind,
    pub notes: &'static str,
}
