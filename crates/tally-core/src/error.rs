//! Error types for the tally library.

use thiserror::Error;

/// Comprehensive error type for all calculator and tracker operations.
///
/// None of these are fatal: every operation that returns one of them has
/// already put its component back into a well-defined state (cleared
/// expression, clamped register, untouched log) before returning.
#[derive(Error, Debug)]
pub enum TallyError {
    /// Evaluation with a zero divisor
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// Evaluation produced a non-finite result
    #[error("Result is out of range")]
    Overflow,
    /// Memory register left its bounded range and was clamped
    #[error("Memory overflow: value clamped to {value}")]
    MemoryOverflow { value: f64 },
    /// Operand text that does not hold a number
    #[error("'{text}' is not a number")]
    InvalidOperand { text: String },
    /// Key or symbol the input adapter does not understand
    #[error("Unknown key '{symbol}'")]
    InvalidSymbol { symbol: String },
    /// Intake amount that is not a finite positive number
    #[error("Invalid amount {amount}: enter a positive number of millilitres")]
    InvalidAmount { amount: f64 },
    /// Daily goal that is not a finite positive number
    #[error("Invalid goal {goal}: enter a positive number of millilitres")]
    InvalidGoal { goal: f64 },
    /// Log entry index past the end of the log
    #[error("No log entry at index {index} (log has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    /// Reminder interval of zero minutes
    #[error("Reminder interval must be at least one minute")]
    InvalidInterval,
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TallyError {
    /// Creates a configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error left an expression in the calculator's error state.
    pub fn is_expression_error(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow)
    }
}

/// Result type alias for tally operations
pub type Result<T> = std::result::Result<T, TallyError>;
