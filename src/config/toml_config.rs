use crate::core::build_plan::DEFAULT_COMPILER;
use crate::core::echo::{
    EchoMode, EchoProgram, EchoTexts, DEFAULT_LABEL, DEFAULT_PROMPT, DEFAULT_TRAILING,
};
use crate::core::greeting::{GreetingProgram, DEFAULT_GREETING};
use crate::core::labeled_value::{
    LabeledValueProgram, OutputStyle, DEFAULT_AGE, DEFAULT_PREFIX, DEFAULT_SUFFIX,
};
use crate::utils::error::{LessonError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_command_name, validate_non_empty_string, validate_one_of, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub greeting: GreetingConfig,
    pub labeled_value: LabeledValueConfig,
    pub echo: EchoConfig,
    pub build: BuildConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabeledValueConfig {
    pub prefix: String,
    pub value: i64,
    pub suffix: String,
    pub style: OutputStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EchoConfig {
    pub prompt: String,
    pub label: String,
    pub trailing: String,
    pub mode: EchoMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub compiler: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_GREETING.to_string(),
        }
    }
}

impl Default for LabeledValueConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            value: DEFAULT_AGE,
            suffix: DEFAULT_SUFFIX.to_string(),
            style: OutputStyle::default(),
        }
    }
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            label: DEFAULT_LABEL.to_string(),
            trailing: DEFAULT_TRAILING.to_string(),
            mode: EchoMode::default(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LessonError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }

    /// Loads `path` when given, otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn greeting_program(&self) -> GreetingProgram {
        GreetingProgram::new(self.greeting.message.clone())
    }

    pub fn labeled_value_program(&self) -> LabeledValueProgram {
        let c = &self.labeled_value;
        LabeledValueProgram::labeled(&c.prefix, c.value, &c.suffix, c.style)
    }

    pub fn echo_program(&self) -> EchoProgram {
        let c = &self.echo;
        EchoProgram::new(
            EchoTexts {
                prompt: c.prompt.clone(),
                label: c.label.clone(),
                trailing: c.trailing.clone(),
            },
            c.mode,
        )
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("greeting.message", &self.greeting.message)?;
        validate_command_name("build.compiler", &self.build.compiler)?;
        validate_one_of("logging.level", &self.logging.level, LOG_LEVELS)?;
        Ok(())
    }
}
