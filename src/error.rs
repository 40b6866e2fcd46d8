use std::path::PathBuf;

/// Checked preconditions. Anything else surfaces as a plain `anyhow::Error`.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("PDF not found at {}", .0.display())]
    SourceMissing(PathBuf),
}

impl ExtractError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExtractError::SourceMissing(_) => 1,
        }
    }
}
