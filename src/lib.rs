pub mod command;
pub mod launcher;
pub mod matrix;
pub mod scanner;

use command::CommandLine;
use launcher::{LaunchError, Launcher};
use std::path::Path;

/// Directory scanned when no `--dir` is given, relative to the working directory.
pub const DEFAULT_TEST_DIR: &str = "test";

/// Converter executable that prefixes the assembled command line.
pub const DEFAULT_TOOL: &str = "./NAeP";

/// Scan `root` and assemble the complete command for `tool`.
///
/// Read-only: an unchanged directory always yields the same command.
pub fn build_command(root: &Path, tool: &str) -> Result<CommandLine, scanner::ScanError> {
    let scan = scanner::scan(root)?;
    let invocations = matrix::generate(&scan);
    Ok(CommandLine::new(tool, invocations))
}

/// Print the command line, then hand it to `launcher` unless `dry_run`.
pub fn run(
    command: &CommandLine,
    dry_run: bool,
    launcher: &mut impl Launcher,
) -> Result<(), LaunchError> {
    let line = command.to_line();
    println!("{line}");

    if dry_run {
        log::info!("Dry run, not executing");
        return Ok(());
    }
    launcher.launch(&line)
}
