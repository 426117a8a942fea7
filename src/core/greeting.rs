use crate::core::Program;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const DEFAULT_GREETING: &str = "Codecademy\n";

/// Writes one fixed message and exits.
#[derive(Debug, Clone)]
pub struct GreetingProgram {
    message: String,
}

impl GreetingProgram {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for GreetingProgram {
    fn default() -> Self {
        Self::new(DEFAULT_GREETING)
    }
}

impl Program for GreetingProgram {
    fn name(&self) -> &'static str {
        "greeting"
    }

    fn run(&self, _input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        output.write_all(self.message.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::empty;

    #[test]
    fn test_writes_message_once() {
        let mut out = Vec::new();
        GreetingProgram::default()
            .run(&mut empty(), &mut out)
            .unwrap();
        assert_eq!(out, b"Codecademy\n");
    }
}
