use std::mem::ManuallyDrop;

use windows::core::PCWSTR;
use windows::core::PWSTR;
use windows::Win32::Foundation::CloseHandle;
use windows::Win32::Foundation::HANDLE;
use windows::Win32::System::Threading::CreateProcessW;
use windows::Win32::System::Threading::CREATE_NO_WINDOW;
use windows::Win32::System::Threading::PROCESS_INFORMATION;
use windows::Win32::System::Threading::STARTF_USESHOWWINDOW;
use windows::Win32::System::Threading::STARTUPINFOW;
use windows::Win32::UI::WindowsAndMessaging::SW_HIDE;

use crate::command_line::CommandLine;
use crate::error::SpawnError;
use crate::spawner::ProcessHandle;
use crate::spawner::ProcessSpawner;

/// Spawner calling `CreateProcessW` directly, with a hidden main window and
/// no console
#[derive(Debug, Default, Copy, Clone)]
pub struct Win32Spawner;

/// Process and primary thread handles returned by `CreateProcessW`.
///
/// Both handles are closed exactly once, either by `release` or on drop.
#[derive(Debug)]
pub struct Win32Process {
    process: HANDLE,
    thread: HANDLE,
    process_id: u32,
}

impl Win32Process {
    pub const fn id(&self) -> u32 {
        self.process_id
    }
}

impl ProcessSpawner for Win32Spawner {
    type Process = Win32Process;

    fn spawn_detached_hidden(&self, command_line: &CommandLine) -> Result<Win32Process, SpawnError> {
        let mut buffer = command_line.to_wide();

        let startup_info = STARTUPINFOW {
            cb: std::mem::size_of::<STARTUPINFOW>() as u32,
            dwFlags: STARTF_USESHOWWINDOW,
            wShowWindow: SW_HIDE.0 as u16,
            ..Default::default()
        };
        let mut process_information = PROCESS_INFORMATION::default();

        unsafe {
            CreateProcessW(
                PCWSTR::null(),
                Some(PWSTR(buffer.as_mut_ptr())),
                None,
                None,
                false,
                CREATE_NO_WINDOW,
                None,
                PCWSTR::null(),
                &startup_info,
                &mut process_information,
            )
        }
        .map_err(|error| SpawnError::Create {
            command_line: command_line.to_string(),
            source: error.into(),
        })?;

        Ok(Win32Process {
            process: process_information.hProcess,
            thread: process_information.hThread,
            process_id: process_information.dwProcessId,
        })
    }
}

impl ProcessHandle for Win32Process {
    fn release(self) -> Result<(), SpawnError> {
        let this = ManuallyDrop::new(self);
        tracing::debug!("releasing handles of process {}", this.process_id);

        let process = unsafe { CloseHandle(this.process) };
        let thread = unsafe { CloseHandle(this.thread) };

        process
            .and(thread)
            .map_err(|error| SpawnError::Release(error.into()))
    }
}

impl Drop for Win32Process {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.process);
            let _ = CloseHandle(self.thread);
        }
    }
}
