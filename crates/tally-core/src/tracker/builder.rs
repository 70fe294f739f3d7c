//! Builder for creating and configuring IntakeLog instances.

use super::IntakeLog;
use crate::error::{Result, TallyError};

/// Daily goal used when none is configured, in millilitres.
pub const DEFAULT_DAILY_GOAL: f64 = 2000.0;

/// Builder for creating and configuring IntakeLog instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    daily_goal: f64,
}

impl TrackerBuilder {
    /// Creates a new builder with the default daily goal.
    pub fn new() -> Self {
        Self {
            daily_goal: DEFAULT_DAILY_GOAL,
        }
    }

    /// Sets the daily goal, if one is given.
    pub fn with_daily_goal(mut self, goal: Option<f64>) -> Self {
        if let Some(goal) = goal {
            self.daily_goal = goal;
        }
        self
    }

    /// Builds the configured log.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidGoal` if the goal is not a finite positive
    /// number.
    pub fn build(self) -> Result<IntakeLog> {
        if !super::is_positive_volume(self.daily_goal) {
            return Err(TallyError::InvalidGoal {
                goal: self.daily_goal,
            });
        }
        Ok(IntakeLog::with_goal(self.daily_goal))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
