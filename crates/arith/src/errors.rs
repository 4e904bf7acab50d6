use thiserror::Error;

/// Errors that can occur while computing or printing a demo.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("integer overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("negative input not supported: {0}")]
    NegativeInput(i64),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl DemoError {
    pub fn overflow(operation: &'static str) -> Self {
        DemoError::Overflow { operation }
    }
}
