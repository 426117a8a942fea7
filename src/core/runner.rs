use crate::core::Program;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub struct ProgramRunner<P: Program + ?Sized> {
    program: Box<P>,
}

impl<P: Program + ?Sized> ProgramRunner<P> {
    pub fn new(program: Box<P>) -> Self {
        Self { program }
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        tracing::debug!("Running {}", self.program.name());

        self.program.run(input, output)?;
        output.flush()?;

        tracing::debug!("{} finished", self.program.name());
        Ok(())
    }

    /// Runs against the process's own stdin and stdout.
    pub fn run_console(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run(&mut stdin.lock(), &mut stdout.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::greeting::GreetingProgram;
    use std::io::empty;

    #[test]
    fn test_runner_is_idempotent() {
        let runner = ProgramRunner::new(Box::new(GreetingProgram::default()));
        let mut first = Vec::new();
        let mut second = Vec::new();
        runner.run(&mut empty(), &mut first).unwrap();
        runner.run(&mut empty(), &mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(runner.program().name(), "greeting");
    }
}
