//! Describes how a lesson source file is compiled and run. Nothing here
//! spawns a process; the plan is printed for the reader to type.

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_command_name, validate_file_name, validate_non_empty_string,
};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_COMPILER: &str = "g++";
pub const DEFAULT_ARTIFACT: &str = "a.out";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPlan {
    pub compiler: String,
    pub source: String,
    pub output: Option<String>,
    pub artifact: String,
}

impl ArtifactPlan {
    pub fn new(source: &str, output: Option<&str>) -> Result<Self> {
        Self::with_compiler(DEFAULT_COMPILER, source, output)
    }

    pub fn with_compiler(compiler: &str, source: &str, output: Option<&str>) -> Result<Self> {
        validate_command_name("build.compiler", compiler)?;
        validate_non_empty_string("source", source.trim())?;
        if let Some(name) = output {
            validate_file_name("output", name)?;
        }

        let artifact = output.unwrap_or(DEFAULT_ARTIFACT).to_string();

        Ok(Self {
            compiler: compiler.to_string(),
            source: source.to_string(),
            output: output.map(str::to_string),
            artifact,
        })
    }

    pub fn uses_default_artifact(&self) -> bool {
        self.output.is_none()
    }

    pub fn compile_args(&self) -> Vec<String> {
        let mut args = vec![self.source.clone()];
        if let Some(name) = &self.output {
            args.push("-o".to_string());
            args.push(name.clone());
        }
        args
    }

    pub fn compile_command(&self) -> String {
        let mut parts = vec![self.compiler.clone()];
        parts.extend(self.compile_args());
        parts.join(" ")
    }

    pub fn run_command(&self) -> String {
        format!("./{}", self.artifact)
    }
}

impl fmt::Display for ArtifactPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compile: {}", self.compile_command())?;
        if self.uses_default_artifact() {
            writeln!(f, "Output:  {} (no output name given)", self.artifact)?;
        } else {
            writeln!(f, "Output:  {}", self.artifact)?;
        }
        writeln!(f, "Run:     {}", self.run_command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_artifact_name() {
        let plan = ArtifactPlan::new("hello.cpp", None).unwrap();
        assert_eq!(plan.artifact, "a.out");
        assert_eq!(plan.compile_command(), "g++ hello.cpp");
        assert_eq!(plan.run_command(), "./a.out");
        assert!(plan.uses_default_artifact());
    }

    #[test]
    fn test_explicit_artifact_name() {
        let plan = ArtifactPlan::new("notes.cpp", Some("notes")).unwrap();
        assert_eq!(plan.artifact, "notes");
        assert_eq!(plan.compile_command(), "g++ notes.cpp -o notes");
        assert_eq!(plan.run_command(), "./notes");
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(ArtifactPlan::new("", None).is_err());
        assert!(ArtifactPlan::new("notes.cpp", Some("")).is_err());
        assert!(ArtifactPlan::new("notes.cpp", Some("out/notes")).is_err());
        assert!(ArtifactPlan::with_compiler("", "notes.cpp", None).is_err());
    }

    #[test]
    fn test_display() {
        let plan = ArtifactPlan::with_compiler("clang++", "notes.cpp", Some("notes")).unwrap();
        assert_eq!(
            plan.to_string(),
            "Compile: clang++ notes.cpp -o notes\nOutput:  notes\nRun:     ./notes\n"
        );
    }
}
