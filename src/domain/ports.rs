use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// A lesson program: reads from `input`, writes to `output`, and exits.
pub trait Program {
    fn name(&self) -> &'static str;

    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()>;
}
