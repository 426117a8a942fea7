pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::Settings;

pub use core::{
    build_plan::ArtifactPlan, echo::EchoProgram, greeting::GreetingProgram,
    labeled_value::LabeledValueProgram, runner::ProgramRunner, Program,
};
pub use utils::error::{LessonError, Result};
