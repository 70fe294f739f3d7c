//! Builder for creating and configuring Calculator instances.

use super::{
    memory::{MemoryRegister, DEFAULT_MEMORY_LIMIT},
    surface::{Headless, Surface},
    Calculator,
};
use crate::error::{Result, TallyError};

/// Default number of fractional digits kept in results.
pub const DEFAULT_PRECISION: u32 = 6;

/// Largest precision that still leaves room for integer digits in an `f64`.
const MAX_PRECISION: u32 = 15;

/// Builder for creating and configuring Calculator instances.
#[derive(Debug, Clone)]
pub struct CalculatorBuilder<S = Headless> {
    memory_limit: f64,
    precision: u32,
    surface: S,
}

impl CalculatorBuilder {
    /// Creates a new builder with default settings and a headless surface.
    pub fn new() -> Self {
        Self {
            memory_limit: DEFAULT_MEMORY_LIMIT,
            precision: DEFAULT_PRECISION,
            surface: Headless,
        }
    }
}

impl<S: Surface> CalculatorBuilder<S> {
    /// Sets the magnitude bound of the memory register.
    pub fn with_memory_limit(mut self, limit: f64) -> Self {
        self.memory_limit = limit;
        self
    }

    /// Sets how many fractional digits results are rounded to.
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = digits;
        self
    }

    /// Sets the surface that receives display updates.
    pub fn with_surface<T: Surface>(self, surface: T) -> CalculatorBuilder<T> {
        CalculatorBuilder {
            memory_limit: self.memory_limit,
            precision: self.precision,
            surface,
        }
    }

    /// Builds the configured calculator.
    ///
    /// The surface immediately receives the zero text, the way a freshly
    /// loaded keypad shows `0`.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Configuration` if the memory limit is not a
    /// finite positive number or the precision exceeds 15 digits.
    pub fn build(self) -> Result<Calculator<S>> {
        if !self.memory_limit.is_finite() || self.memory_limit <= 0.0 {
            return Err(TallyError::configuration(format!(
                "memory limit must be a finite positive number, got {}",
                self.memory_limit
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(TallyError::configuration(format!(
                "precision must be at most {MAX_PRECISION} digits, got {}",
                self.precision
            )));
        }

        Ok(Calculator::from_parts(
            MemoryRegister::new(self.memory_limit),
            self.precision,
            self.surface,
        ))
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
