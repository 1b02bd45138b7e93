use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to start shell for `{line}`: {source}")]
    Spawn {
        line: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs an assembled command line to completion with inherited stdio.
/// Only a failure to start counts as an error; the exit status is not checked.
pub trait Launcher {
    fn launch(&mut self, line: &str) -> Result<(), LaunchError>;
}

/// Hands the line to the host shell (`sh -c`, or `cmd /C` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLauncher;

impl ShellLauncher {
    fn command(line: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", line]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", line]);
            cmd
        }
    }
}

impl Launcher for ShellLauncher {
    fn launch(&mut self, line: &str) -> Result<(), LaunchError> {
        let status = Self::command(line)
            .status()
            .map_err(|source| LaunchError::Spawn {
                line: line.to_string(),
                source,
            })?;
        log::debug!("Shell exited with {status}");
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn nonzero_exit_is_not_an_error() {
        assert!(ShellLauncher.launch("exit 3").is_ok());
    }

    #[test]
    fn unknown_tool_is_not_an_error() {
        let line = "./definitely-not-a-real-naep-binary -ogg x.ogg 2>/dev/null";
        assert!(ShellLauncher.launch(line).is_ok());
    }
}
