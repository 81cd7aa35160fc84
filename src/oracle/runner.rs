use crate::error::OracleError;
use std::process::Command;
use tracing::debug;

/// Executes one synthesis script and returns the tool's textual output.
pub trait ToolRunner {
    fn run(&mut self, script: &str) -> Result<String, OracleError>;
}

/// Spawns `<program> -c "<script>"` and waits for it. No timeout.
#[derive(Debug, Clone)]
pub struct AbcRunner {
    program: String,
}

impl AbcRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for AbcRunner {
    fn default() -> Self {
        Self::new("yosys-abc")
    }
}

impl ToolRunner for AbcRunner {
    fn run(&mut self, script: &str) -> Result<String, OracleError> {
        debug!("[{}] {}", self.program, script);

        let output = Command::new(&self.program)
            .arg("-c")
            .arg(script)
            .output()
            .map_err(|e| OracleError::Invocation {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let text = if stderr.trim().is_empty() {
                stdout.as_str()
            } else {
                stderr.as_ref()
            };
            let tail: Vec<&str> = text.lines().rev().take(3).collect();
            return Err(OracleError::ToolExit {
                status: output.status.to_string(),
                tail: tail.into_iter().rev().collect::<Vec<_>>().join(" | "),
            });
        }

        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_invocation_failure() {
        let mut runner = AbcRunner::new("synthforge-definitely-not-installed");
        let err = runner.run("print_stats;").unwrap_err();
        assert!(matches!(err, OracleError::Invocation { .. }));
    }
}
