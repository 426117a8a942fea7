pub mod build_plan;
pub mod catalog;
pub mod echo;
pub mod extract;
pub mod greeting;
pub mod labeled_value;
pub mod runner;

pub use crate::domain::model::{Extraction, Lesson, Segment, TipAmount};
pub use crate::domain::ports::Program;
pub use crate::utils::error::Result;
