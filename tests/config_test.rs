use anyhow::Result;
use std::io::empty;
use tempfile::TempDir;
use tutorial_log::utils::logger::LogFormat;
use tutorial_log::utils::validation::Validate;
use tutorial_log::{ArtifactPlan, LessonError, Program, Settings};

#[test]
fn test_load_without_path_gives_defaults() -> Result<()> {
    let settings = Settings::load(None)?;
    assert_eq!(settings.greeting.message, "Codecademy\n");
    assert_eq!(settings.logging.level, "warn");
    Ok(())
}

#[test]
fn test_load_from_file_overrides_literals() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("lessons.toml");
    std::fs::write(
        &config_path,
        r#"
[greeting]
message = "Hello, world!\n"

[echo]
label = "Tip: "
trailing = "\n"

[build]
compiler = "clang++"

[logging]
level = "debug"
format = "json"
"#,
    )?;

    let settings = Settings::load(Some(config_path.as_path()))?;
    settings.validate()?;
    assert_eq!(settings.logging.format, LogFormat::Json);

    let mut out = Vec::new();
    settings.greeting_program().run(&mut empty(), &mut out)?;
    assert_eq!(out, b"Hello, world!\n");

    let echo = settings.echo_program();
    assert_eq!(echo.echo_line(tutorial_log::core::TipAmount(9)), "Tip: 9\n");

    let plan = ArtifactPlan::with_compiler(&settings.build.compiler, "notes.cpp", Some("notes"))?;
    assert_eq!(plan.compile_command(), "clang++ notes.cpp -o notes");
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope.toml");

    let err = Settings::load(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, LessonError::ConfigError { .. }));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn test_wrong_field_type_is_parse_error() {
    let err = Settings::from_toml_str("[labeled_value]\nvalue = \"twenty\"\n").unwrap_err();
    assert!(matches!(err, LessonError::ConfigParseError(_)));
}
