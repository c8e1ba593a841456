//! Canonical workshop data shared across suites.
//!
//! Fresh values on every call, so no test can poison another.

use pureza_roster::{Animal, Student};

/// The three-student workshop roster: Anna 6, John 4, Maria 9.
#[must_use]
pub fn workshop_roster() -> Vec<Student> {
    vec![
        Student::new("Anna", 6),
        Student::new("John", 4),
        Student::new("Maria", 9),
    ]
}

/// The zoo: Panda, Elephant, Dog.
#[must_use]
pub fn zoo() -> Vec<Animal> {
    vec![
        Animal::new("Panda"),
        Animal::new("Elephant"),
        Animal::new("Dog"),
    ]
}

/// The four small numbers every fold example starts from.
#[must_use]
pub fn small_numbers() -> Vec<i64> {
    vec![1, 2, 3, 4]
}

/// Perfect squares whose roots are exact: 1, 4, 9.
#[must_use]
pub fn perfect_squares() -> Vec<f64> {
    vec![1.0, 4.0, 9.0]
}
