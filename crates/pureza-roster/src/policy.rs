//! Grading policy configuration.
//!
//! Configuration is validated at load time, with sensible defaults and
//! clear error messages.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::record::Student;

/// Grading policy on the workshop's 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradePolicy {
    /// Minimum grade that passes.
    #[serde(default = "default_passing_grade")]
    pub passing_grade: u32,
}

const fn default_passing_grade() -> u32 {
    6
}

impl Default for GradePolicy {
    fn default() -> Self {
        Self {
            passing_grade: default_passing_grade(),
        }
    }
}

impl GradePolicy {
    /// Creates a policy with the given passing grade.
    #[must_use]
    pub const fn new(passing_grade: u32) -> Self {
        Self { passing_grade }
    }

    /// Validates the policy.
    ///
    /// # Errors
    /// Returns an error if the passing grade is off the 0-10 scale.
    pub fn validate(&self) -> Result<()> {
        if self.passing_grade > 10 {
            return Err(RosterError::config(format!(
                "passing_grade must be on the 0-10 scale, got {}",
                self.passing_grade
            )));
        }
        Ok(())
    }

    /// Returns true if the student's grade meets the passing grade.
    #[must_use]
    pub const fn passes(&self, student: &Student) -> bool {
        student.grade >= self.passing_grade
    }

    /// Returns true if the student's grade strictly exceeds the passing
    /// grade.
    #[must_use]
    pub const fn exceeds(&self, student: &Student) -> bool {
        student.grade > self.passing_grade
    }

    /// Parses a policy from a TOML string and validates it.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or the policy is invalid.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let policy: Self = toml::from_str(raw).map_err(|e| RosterError::parse(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Loads a policy from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let policy = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), passing_grade = policy.passing_grade, "grade policy loaded");
        Ok(policy)
    }
}
