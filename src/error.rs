//! Error types.
//!
//! - `FitError`: typed failures of the fitting core (parse, validation, numerics).
//! - `AppError`: process-level error carrying the exit code for the `lsq` binary.
//!
//! Exit codes:
//! - 2: bad input (parse errors, mismatched/empty data, unreadable files)
//! - 3: not enough samples for the requested degree
//! - 4: numerical or rendering failure

use thiserror::Error;

/// Failures of a single fit request.
///
/// Every variant is terminal for the request: no partial results are returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// A token is not a finite real number.
    #[error("Parse error in {field} value #{position}: '{token}' is not a valid number")]
    Parse {
        field: &'static str,
        position: usize,
        token: String,
    },

    /// x and y have different lengths.
    #[error("x and y must have the same number of values (x has {x_len}, y has {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// No data provided.
    #[error("No data provided: {0} is empty")]
    EmptyInput(&'static str),

    /// Fewer samples than coefficients.
    #[error("Underdetermined fit: degree {degree} needs at least {required} samples, got {n}")]
    UnderdeterminedFit {
        degree: usize,
        required: usize,
        n: usize,
    },

    /// The solver failed or produced non-finite output.
    #[error("Numerical error: {0}")]
    Numerical(String),
}

impl FitError {
    /// Exit code used when this error terminates the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            FitError::Parse { .. } | FitError::LengthMismatch { .. } | FitError::EmptyInput(_) => 2,
            FitError::UnderdeterminedFit { .. } => 3,
            FitError::Numerical(_) => 4,
        }
    }
}

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

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_errors_map_to_exit_codes() {
        let parse = FitError::Parse {
            field: "x",
            position: 3,
            token: "a".to_string(),
        };
        assert_eq!(AppError::from(parse).exit_code(), 2);

        let under = FitError::UnderdeterminedFit {
            degree: 3,
            required: 4,
            n: 2,
        };
        assert_eq!(AppError::from(under).exit_code(), 3);

        assert_eq!(AppError::from(FitError::Numerical("nan".into())).exit_code(), 4);
    }

    #[test]
    fn messages_are_human_readable() {
        let err = FitError::LengthMismatch { x_len: 3, y_len: 2 };
        assert_eq!(
            err.to_string(),
            "x and y must have the same number of values (x has 3, y has 2)"
        );

        let app = AppError::from(FitError::EmptyInput("x"));
        assert_eq!(app.to_string(), "No data provided: x is empty");
    }
}
