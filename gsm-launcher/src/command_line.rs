use std::fmt::Display;
use std::fmt::Formatter;

/// Both Windows and Unix separators are accepted in executable paths
pub const SEPARATORS: &[char] = &['\\', '/'];

/// Replaces the file name component of `exe_path` with `script_name`.
///
/// Everything up to and including the last separator is kept as-is, so the
/// result always has exactly one separator in front of `script_name`. A path
/// without any separator yields `script_name` alone.
pub fn script_path(exe_path: &str, script_name: &str) -> String {
    let directory = exe_path
        .rfind(SEPARATORS)
        .map_or("", |idx| &exe_path[..=idx]);

    format!("{directory}{script_name}")
}

/// An interpreter invocation with the script path as its only argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    interpreter: String,
    script_path: String,
}

impl CommandLine {
    pub fn new(interpreter: impl Into<String>, script_path: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script_path: script_path.into(),
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    pub fn script_path(&self) -> &str {
        &self.script_path
    }

    /// The script path wrapped in double quotes so that spaces survive
    /// command line parsing in the child.
    pub fn quoted_script_path(&self) -> String {
        format!("\"{}\"", self.script_path)
    }

    /// A freshly allocated, nul-terminated UTF-16 copy of the command line.
    ///
    /// `CreateProcessW` may write into the buffer it is given, so every call
    /// site gets its own.
    pub fn to_wide(&self) -> Vec<u16> {
        self.to_string()
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect()
    }
}

impl Display for CommandLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.interpreter, self.quoted_script_path())
    }
}
