use crate::command_line::script_path;
use crate::command_line::CommandLine;
use crate::config::LauncherConfig;
use crate::config::SpawnFailurePolicy;
use crate::error::LaunchError;
use crate::spawner::ProcessHandle;
use crate::spawner::ProcessSpawner;

#[derive(Debug, Clone, Default)]
pub struct Launcher {
    config: LauncherConfig,
}

impl Launcher {
    pub const fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn command_line_for(&self, exe_path: &str) -> CommandLine {
        CommandLine::new(
            self.config.interpreter.as_str(),
            script_path(exe_path, &self.config.script_name),
        )
    }

    /// Launches the script next to `exe_path` and releases the new process
    /// straight away without waiting on it.
    #[tracing::instrument(skip(self, spawner))]
    pub fn launch_from<S: ProcessSpawner>(
        &self,
        exe_path: &str,
        spawner: &S,
    ) -> Result<CommandLine, LaunchError> {
        let command_line = self.command_line_for(exe_path);
        tracing::debug!("spawning: {command_line}");

        let process = spawner.spawn_detached_hidden(&command_line)?;
        process.release()?;

        tracing::info!("launched: {command_line}");

        Ok(command_line)
    }

    /// Swallows a launch failure unless the configuration asks for it to be
    /// reported.
    pub fn apply_failure_policy(
        &self,
        result: Result<CommandLine, LaunchError>,
    ) -> Result<Option<CommandLine>, LaunchError> {
        match result {
            Ok(command_line) => Ok(Some(command_line)),
            Err(error) => match self.config.on_spawn_failure {
                SpawnFailurePolicy::Silent => {
                    tracing::debug!(
                        error = &error as &dyn std::error::Error,
                        "ignoring launch failure"
                    );
                    Ok(None)
                }
                SpawnFailurePolicy::Report => {
                    tracing::error!(
                        error = &error as &dyn std::error::Error,
                        "launch failed"
                    );
                    Err(error)
                }
            },
        }
    }
}
