use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::command_line::script_path;
use crate::command_line::SEPARATORS;
use crate::error::ConfigError;

/// The script expected to sit next to the launcher executable
pub const DEFAULT_SCRIPT_NAME: &str = "gsm.py";
/// Windowless Python interpreter, resolved through the search path
pub const DEFAULT_INTERPRETER: &str = "pythonw";
/// Optional configuration file, looked up next to the launcher executable
pub const CONFIG_FILE_NAME: &str = "gsm-launcher.json";

/// What to do when the script could not be launched
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnFailurePolicy {
    /// Exit with a success status as if nothing happened
    #[default]
    Silent,
    /// Exit with a failure status and report the error
    Report,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LauncherConfig {
    /// File name of the script to launch (default: gsm.py)
    pub script_name: String,
    /// Interpreter used to run the script (default: pythonw)
    pub interpreter: String,
    /// Behaviour when the launch fails (default: silent)
    pub on_spawn_failure: SpawnFailurePolicy,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            script_name: String::from(DEFAULT_SCRIPT_NAME),
            interpreter: String::from(DEFAULT_INTERPRETER),
            on_spawn_failure: SpawnFailurePolicy::default(),
        }
    }
}

impl LauncherConfig {
    /// Location of the configuration file for a launcher running from `exe_path`
    pub fn path_beside(exe_path: &str) -> PathBuf {
        PathBuf::from(script_path(exe_path, CONFIG_FILE_NAME))
    }

    /// Reads and validates the configuration at `path`, falling back to the
    /// defaults when there is no file there.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => {
                    tracing::debug!("no configuration file at {}, using defaults", path.display());
                    return Ok(Self::default());
                }
                _ => {
                    return Err(ConfigError::Read {
                        path: path.to_path_buf(),
                        source: error,
                    });
                }
            },
        };

        let value = Self::read_raw(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        value.validate()?;

        tracing::debug!("loaded configuration file: {}", path.display());

        Ok(value)
    }

    pub fn read_raw(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // the script must stay next to the executable
        if self.script_name.is_empty()
            || self.script_name.contains(SEPARATORS)
            || self.script_name == "."
            || self.script_name == ".."
        {
            return Err(ConfigError::ScriptName(self.script_name.clone()));
        }

        if self.interpreter.is_empty()
            || self
                .interpreter
                .chars()
                .any(|c| c.is_whitespace() || c == '"')
        {
            return Err(ConfigError::Interpreter(self.interpreter.clone()));
        }

        Ok(())
    }
}
