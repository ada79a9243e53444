#![warn(clippy::all)]
#![allow(clippy::missing_errors_doc)]

//! Windowless launcher for the `gsm.py` script.
//!
//! The launcher resolves its own location, starts the configured interpreter
//! on the script sitting in the same directory as a detached, hidden process,
//! and exits without waiting for it.

pub mod command_line;
pub mod config;
pub mod error;
pub mod launcher;
pub mod spawner;
#[cfg(windows)]
pub mod windows_api;

pub use command_line::*;
pub use config::*;
pub use error::*;
pub use launcher::*;
pub use spawner::*;
#[cfg(windows)]
pub use windows_api::*;

/// The spawner used by the binary on the current platform
#[cfg(windows)]
pub type PlatformSpawner = Win32Spawner;
#[cfg(not(windows))]
pub type PlatformSpawner = StdSpawner;

/// Absolute path of the running executable.
///
/// The standard library grows its buffer until the whole path fits, so a
/// long path is either returned in full or reported as an error.
pub fn current_exe_path() -> Result<String, PathResolutionError> {
    std::env::current_exe()
        .map_err(PathResolutionError::Query)?
        .into_os_string()
        .into_string()
        .map_err(|path| PathResolutionError::NotUnicode(path.into()))
}

/// Loads the configuration sitting next to `exe_path`, using the defaults
/// if it cannot be read.
pub fn load_configuration(exe_path: &str) -> LauncherConfig {
    let path = LauncherConfig::path_beside(exe_path);

    LauncherConfig::read(&path).unwrap_or_else(|error| {
        tracing::warn!(
            error = &error as &dyn std::error::Error,
            "falling back to the default configuration"
        );
        LauncherConfig::default()
    })
}

/// Runs the whole launch sequence once: resolves the running executable,
/// loads the configuration beside it and launches the script.
///
/// The returned `Launcher` carries the configuration that was in effect, so
/// the caller can apply its failure policy to the outcome.
pub fn run<S: ProcessSpawner>(spawner: &S) -> (Launcher, Result<CommandLine, LaunchError>) {
    let exe_path = match current_exe_path() {
        Ok(exe_path) => exe_path,
        Err(error) => return (Launcher::default(), Err(error.into())),
    };

    let launcher = Launcher::new(load_configuration(&exe_path));
    let result = launcher.launch_from(&exe_path, spawner);

    (launcher, result)
}
