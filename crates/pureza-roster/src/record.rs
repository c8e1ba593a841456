//! Immutable records the combinators operate on.
//!
//! Record shapes are explicit structured types, not ad-hoc maps: anything
//! with a name implements [`Named`], so one generic projection serves
//! students and animals alike.

use serde::{Deserialize, Serialize};

/// Anything with a display name.
pub trait Named {
    /// Returns the record's name.
    fn name(&self) -> &str;
}

/// A student and their grade on the workshop's 0-10 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Student name.
    pub name: String,
    /// Grade, 0-10.
    pub grade: u32,
}

impl Student {
    /// Creates a student record.
    #[must_use]
    pub fn new(name: impl Into<String>, grade: u32) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }
}

impl Named for Student {
    fn name(&self) -> &str {
        &self.name
    }
}

/// An animal. It has a name and nothing else to declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Animal name.
    pub name: String,
}

impl Animal {
    /// Creates an animal record.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for Animal {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A person profile assembled by the curried [`profile`] builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: u32,
}

/// Curried profile builder: one field per link.
///
/// # Example
///
/// ```rust
/// use pureza_roster::{Profile, profile};
///
/// let built = profile("Matheus")("Lima")(26);
/// assert_eq!(
///     built,
///     Profile {
///         first_name: "Matheus".into(),
///         last_name: "Lima".into(),
///         age: 26,
///     }
/// );
/// ```
pub fn profile(first_name: impl Into<String>) -> impl Fn(&str) -> Box<dyn Fn(u32) -> Profile> {
    let first_name = first_name.into();
    move |last_name: &str| -> Box<dyn Fn(u32) -> Profile> {
        let first_name = first_name.clone();
        let last_name = last_name.to_string();
        Box::new(move |age| Profile {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            age,
        })
    }
}
