use tutorial_log::utils::{error::exit_with, logger};
use tutorial_log::{LabeledValueProgram, ProgramRunner};

fn main() {
    logger::init_cli_logger("warn", false, logger::LogFormat::Compact);

    let runner = ProgramRunner::new(Box::new(LabeledValueProgram::default()));
    if let Err(e) = runner.run_console() {
        exit_with(&e);
    }
}
