//! Process-level error type.
//!
//! Every fallible path in the crate surfaces an `AppError` carrying the exit
//! code the binary should terminate with. Exit codes:
//!
//! - 1: unexpected internal failure
//! - 2: usage / configuration (unknown workload, bad flags, export I/O)
//! - 3: not enough measurements to estimate a complexity

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// The estimator refuses to run on fewer than three samples: a degree-1
    /// fit is under-determined below two points and residual comparison is
    /// unreliable below three.
    pub fn insufficient_measurements(n: usize) -> Self {
        Self::new(
            3,
            format!("Not enough measurements to estimate complexity: got {n}, need at least 3."),
        )
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
