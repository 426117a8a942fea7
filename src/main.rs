use clap::Parser;
use std::io::Write;
use tutorial_log::core::catalog;
use tutorial_log::core::echo::EchoMode;
use tutorial_log::domain::model::LessonKind;
use tutorial_log::utils::error::exit_with;
use tutorial_log::utils::{logger, validation::Validate};
use tutorial_log::{ArtifactPlan, CliConfig, Command, Program, ProgramRunner, Result, Settings};

fn main() {
    let config = CliConfig::parse();

    // 載入配置；失敗時先以預設值初始化日誌再回報
    let settings = match Settings::load(config.config.as_deref()).and_then(|s| {
        s.validate()?;
        Ok(s)
    }) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger("warn", config.verbose, logger::LogFormat::Compact);
            exit_with(&e);
        }
    };

    logger::init_cli_logger(
        &settings.logging.level,
        config.verbose,
        settings.logging.format,
    );
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config.command, settings) {
        exit_with(&e);
    }
}

fn run(command: Command, settings: Settings) -> Result<()> {
    match command {
        Command::Greeting => run_program(Box::new(settings.greeting_program())),
        Command::LabeledValue { style } => {
            let mut program = settings.labeled_value_program();
            if let Some(style) = style {
                program = program.with_style(style);
            }
            run_program(Box::new(program))
        }
        Command::Tip { read_only } => {
            let mut program = settings.echo_program();
            if read_only {
                program = program.with_mode(EchoMode::ReadOnly);
            }
            run_program(Box::new(program))
        }
        Command::BuildPlan {
            source,
            output,
            compiler,
        } => {
            let compiler = compiler.unwrap_or(settings.build.compiler);
            let plan = ArtifactPlan::with_compiler(&compiler, &source, output.as_deref())?;
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{}", plan)?;
            stdout.flush()?;
            Ok(())
        }
        Command::Lessons { json } => {
            let lessons = catalog::catalog();
            let mut stdout = std::io::stdout().lock();
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&lessons)?)?;
            } else {
                for lesson in &lessons {
                    writeln!(
                        stdout,
                        "{:02}  {:<12} {} ({})",
                        lesson.id,
                        lesson.slug,
                        lesson.title,
                        lesson.recorded.format("%b %Y")
                    )?;
                }
            }
            stdout.flush()?;
            Ok(())
        }
        Command::Notes { lesson } => {
            let lesson = catalog::find(&lesson)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{:02} {}\n", lesson.id, lesson.title)?;
            write!(stdout, "{}", lesson.notes)?;
            if let Some(subcommand) = subcommand_for(lesson.kind) {
                writeln!(stdout, "\nRun it with: tutorial-log {}", subcommand)?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}

fn run_program(program: Box<dyn Program>) -> Result<()> {
    ProgramRunner::new(program).run_console()
}

fn subcommand_for(kind: LessonKind) -> Option<&'static str> {
    match kind {
        LessonKind::CompileAndRun => Some("greeting"),
        LessonKind::Comments => None,
        LessonKind::Chaining => Some("labeled-value"),
        LessonKind::UserInput => Some("tip"),
    }
}
