use crate::matrix::Invocation;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The full NAeP run: tool path followed by every invocation, flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    pub tool: String,
    pub invocations: Vec<Invocation>,
}

impl CommandLine {
    pub fn new(tool: impl Into<String>, invocations: Vec<Invocation>) -> Self {
        Self {
            tool: tool.into(),
            invocations,
        }
    }

    /// Single-line form handed to the shell. Tokens are not quoted.
    pub fn to_line(&self) -> String {
        self.to_string()
    }

    /// Pretty JSON matrix: `{"tool": ..., "invocations": [[token, ...], ...]}`.
    pub fn to_json(&self) -> Result<String, CommandError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tool)?;
        for inv in &self.invocations {
            write!(f, " {inv}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::classify::Category;
    use std::path::Path;

    #[test]
    fn no_invocations_is_bare_tool() {
        let cmd = CommandLine::new("./NAeP", Vec::new());
        assert_eq!(cmd.to_line(), "./NAeP");
    }

    #[test]
    fn invocations_joined_with_single_spaces() {
        let cmd = CommandLine::new(
            "./NAeP",
            vec![
                Invocation::new(Category::Ogg, &["-ri"], Path::new("test/a.ogg")),
                Invocation::new(Category::Bank, &[], Path::new("test/b.bnk")),
            ],
        );
        assert_eq!(cmd.to_line(), "./NAeP -ogg -ri test/a.ogg -bank test/b.bnk");
    }

    #[test]
    fn json_matrix_keeps_invocation_boundaries() {
        let cmd = CommandLine::new(
            "./NAeP",
            vec![Invocation::new(Category::Weem, &["-oi"], Path::new("test/c.wem"))],
        );
        let value: serde_json::Value = serde_json::from_str(&cmd.to_json().unwrap()).unwrap();
        assert_eq!(value["tool"], "./NAeP");
        assert_eq!(
            value["invocations"],
            serde_json::json!([["-weem", "-oi", "test/c.wem"]])
        );
    }
}
