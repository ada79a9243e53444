use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    PathResolution(#[from] PathResolutionError),
    #[error(transparent)]
    Spawn(#[from] SpawnError),
}

/// The absolute path of the running executable could not be determined.
#[derive(Debug, Error)]
pub enum PathResolutionError {
    #[error("could not query the path of the running executable")]
    Query(#[source] io::Error),
    #[error("the path of the running executable is not valid unicode: {}", .0.display())]
    NotUnicode(PathBuf),
}

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("could not start `{command_line}`")]
    Create {
        command_line: String,
        #[source]
        source: io::Error,
    },
    #[error("could not release the handles of the launched process")]
    Release(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("scriptName '{0}' must be a bare file name without any path separators")]
    ScriptName(String),
    #[error("interpreter '{0}' must be a single token without whitespace or quotes")]
    Interpreter(String),
}
