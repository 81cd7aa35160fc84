use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Oracle Error: {0}")]
    Oracle(#[from] OracleError),
}

pub type SfResult<T> = Result<T, SynthForgeError>;

/// Every way a single QoR evaluation can fail.
///
/// The optimizer never propagates these: any `Err` is scored as a fixed
/// penalty and the search moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("failed to launch '{program}': {reason}")]
    Invocation { program: String, reason: String },

    #[error("synthesis tool exited with {status}: {tail}")]
    ToolExit { status: String, tail: String },

    #[error("no statistics line in tool output: {0}")]
    Parse(String),

    #[error("reference baseline unavailable: {0}")]
    BaselineUnavailable(String),
}
