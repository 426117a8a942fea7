use crate::core::labeled_value::OutputStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tutorial-log")]
#[command(about = "Run the console lessons from the tutorial log")]
pub struct CliConfig {
    /// Path to a TOML file overriding the lesson literals
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the greeting
    Greeting,

    /// Print the labeled age line
    LabeledValue {
        #[arg(long, value_enum)]
        style: Option<OutputStyle>,
    },

    /// Ask for a tip amount and print it back
    Tip {
        /// Prompt and read without echoing
        #[arg(long)]
        read_only: bool,
    },

    /// Show the compile and run commands for a source file
    BuildPlan {
        source: String,

        #[arg(short, long)]
        output: Option<String>,

        #[arg(long)]
        compiler: Option<String>,
    },

    /// List the lessons in the log
    Lessons {
        #[arg(long)]
        json: bool,
    },

    /// Print the notes for one lesson (id or slug)
    Notes { lesson: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_plan() {
        let cli = CliConfig::parse_from(["tutorial-log", "build-plan", "notes.cpp", "-o", "notes"]);
        match cli.command {
            Command::BuildPlan { source, output, compiler } => {
                assert_eq!(source, "notes.cpp");
                assert_eq!(output.as_deref(), Some("notes"));
                assert!(compiler.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = CliConfig::parse_from([
            "tutorial-log",
            "labeled-value",
            "--style",
            "chained",
            "-v",
        ]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::LabeledValue {
                style: Some(OutputStyle::Chained)
            }
        ));
    }
}
