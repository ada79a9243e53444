use std::process::Child;
use std::process::Command;
use std::process::Stdio;

use crate::command_line::CommandLine;
use crate::error::SpawnError;

/// Platform capability to start a process that is detached from the caller
/// and never shows a console or window.
pub trait ProcessSpawner {
    type Process: ProcessHandle;

    fn spawn_detached_hidden(&self, command_line: &CommandLine)
        -> Result<Self::Process, SpawnError>;
}

/// OS resources held for a freshly started process.
///
/// `release` consumes the handle, so it can run at most once, and it never
/// waits for the process to exit.
pub trait ProcessHandle {
    fn release(self) -> Result<(), SpawnError>;
}

/// Spawner built on `std::process::Command`
#[derive(Debug, Default, Copy, Clone)]
pub struct StdSpawner;

#[derive(Debug)]
pub struct StdProcess {
    child: Child,
}

impl StdProcess {
    pub fn id(&self) -> u32 {
        self.child.id()
    }
}

impl ProcessSpawner for StdSpawner {
    type Process = StdProcess;

    fn spawn_detached_hidden(&self, command_line: &CommandLine) -> Result<StdProcess, SpawnError> {
        let mut command = Command::new(command_line.interpreter());
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;

            const CREATE_NO_WINDOW: u32 = 0x08000000;

            command
                .raw_arg(command_line.quoted_script_path())
                .creation_flags(CREATE_NO_WINDOW);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;

            // own process group, so signals sent to ours do not reach the child
            command.arg(command_line.script_path()).process_group(0);
        }

        #[cfg(not(any(windows, unix)))]
        command.arg(command_line.script_path());

        let child = command.spawn().map_err(|source| SpawnError::Create {
            command_line: command_line.to_string(),
            source,
        })?;

        Ok(StdProcess { child })
    }
}

impl ProcessHandle for StdProcess {
    fn release(self) -> Result<(), SpawnError> {
        tracing::debug!("releasing process {}", self.child.id());
        // dropping a Child closes its handles without waiting on it
        drop(self.child);
        Ok(())
    }
}
