//! Invocation matrix: one NAeP call per scanned asset.
//!
//! Option flags come from two independent sources. The file's index within
//! its category selects entries of that category's bit-to-flag table, and
//! the invocation's global position selects quiet/debug flags (the overlay).

use crate::scanner::ScanResult;
use crate::scanner::classify::Category;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Length of the `-q` repetition cycle in the overlay.
const QUIET_CYCLE: usize = 6;

/// Tokens of a single NAeP call: mode flag, option flags, then the file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Invocation {
    tokens: Vec<String>,
}

impl Invocation {
    pub fn new(category: Category, options: &[&str], path: &Path) -> Self {
        let mut tokens = Vec::with_capacity(options.len() + 2);
        tokens.push(category.flag().to_string());
        tokens.extend(options.iter().map(|o| o.to_string()));
        tokens.push(path.display().to_string());
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Insert `flags` right after the mode flag, keeping their order.
    pub fn insert_after_mode(&mut self, flags: &[&str]) {
        let at = self.tokens.len().min(1);
        self.tokens.splice(at..at, flags.iter().map(|f| f.to_string()));
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Option flags for the `index`-th file of `category`, in table order.
pub fn option_flags(category: Category, index: usize) -> Vec<&'static str> {
    category
        .option_table()
        .iter()
        .filter(|(bit, _)| index & bit != 0)
        .map(|&(_, flag)| flag)
        .collect()
}

/// Invocations for one category's files, before the overlay.
pub fn category_invocations(category: Category, files: &[PathBuf]) -> Vec<Invocation> {
    files
        .iter()
        .enumerate()
        .map(|(i, path)| Invocation::new(category, &option_flags(category, i), path))
        .collect()
}

/// All invocations in global order (oggs, weems, wisps, banks, autos), before the overlay.
pub fn build_invocations(scan: &ScanResult) -> Vec<Invocation> {
    Category::ALL
        .iter()
        .flat_map(|&category| category_invocations(category, scan.files(category)))
        .collect()
}

/// Flags the overlay inserts into the invocation at global position `index`.
///
/// Odd positions get `(index / 2) % 6` copies of `-q`. Even positions look
/// at the bits of `index - 1` in two's complement: `-d` if bit 2 is set,
/// otherwise `-Q`, plus `-c` if bit 4 is set. Position 0 wraps to all ones,
/// the same low bits as `-1`.
pub fn overlay_flags(index: usize) -> Vec<&'static str> {
    if index & 1 != 0 {
        let k = (index / 2) % QUIET_CYCLE;
        return vec!["-q"; k];
    }

    let prev = index.wrapping_sub(1);
    let mut flags = Vec::with_capacity(2);
    flags.push(if prev & 2 != 0 { "-d" } else { "-Q" });
    if prev & 4 != 0 {
        flags.push("-c");
    }
    flags
}

/// Apply the overlay to every invocation by its global position.
pub fn apply_overlay(invocations: &mut [Invocation]) {
    for (i, invocation) in invocations.iter_mut().enumerate() {
        let flags = overlay_flags(i);
        if !flags.is_empty() {
            log::trace!("#{i}: overlay {}", flags.join(" "));
        }
        invocation.insert_after_mode(&flags);
    }
}

/// Scan result to final invocation list: build, then overlay.
pub fn generate(scan: &ScanResult) -> Vec<Invocation> {
    let mut invocations = build_invocations(scan);
    apply_overlay(&mut invocations);
    log::debug!("Generated {} invocations", invocations.len());
    invocations
}
