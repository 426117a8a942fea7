use tutorial_log::utils::{error::exit_with, logger};
use tutorial_log::{EchoProgram, ProgramRunner};

fn main() {
    logger::init_cli_logger("warn", false, logger::LogFormat::Compact);

    // 輸入不是數字時照樣印出 0，只在 stderr 留下警告
    let runner = ProgramRunner::new(Box::new(EchoProgram::default()));
    if let Err(e) = runner.run_console() {
        exit_with(&e);
    }
}
