//! Bounded memory register.

use log::warn;

use crate::error::{Result, TallyError};

/// Default magnitude bound for the memory register.
pub const DEFAULT_MEMORY_LIMIT: f64 = 1e12;

/// Single numeric register clamped to `[-limit, limit]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRegister {
    value: f64,
    limit: f64,
}

impl MemoryRegister {
    /// Creates an empty register with the given magnitude bound.
    pub fn new(limit: f64) -> Self {
        Self { value: 0.0, limit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replaces the register contents.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::MemoryOverflow` if the value had to be clamped.
    /// The clamped value is stored either way.
    pub fn set(&mut self, value: f64) -> Result<f64> {
        self.value = value.clamp(-self.limit, self.limit);
        if self.value != value {
            warn!("memory register clamped {value} to {}", self.value);
            return Err(TallyError::MemoryOverflow { value: self.value });
        }
        Ok(self.value)
    }

    /// Adds to the register contents, with the same clamping as [`set`].
    ///
    /// [`set`]: MemoryRegister::set
    pub fn add(&mut self, value: f64) -> Result<f64> {
        self.set(self.value + value)
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}

impl Default for MemoryRegister {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_LIMIT)
    }
}
