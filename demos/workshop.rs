// Examples are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Pureza Workshop Example
//!
//! Walks the whole curriculum once: pure functions, sequence transforms,
//! composition, currying, and the roster pipelines.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example workshop
//!
//! # With combinator tracing
//! RUST_LOG=debug cargo run --example workshop
//! ```

use pureza::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Pure functions: the answer comes from the arguments
    tracing::info!(
        days = days_in_month(2016, 3).expect("March is a valid month"),
        "days in March 2016"
    );

    // The impure contrast: same call, different answers
    let mut counter = ImpureCounter::new();
    tracing::info!(first = counter.increment(), second = counter.increment(), "hidden state");

    // Map, filter, fold over the workshop numbers
    let numbers = [1, 2, 3, 4];
    let doubled = map(|n| double(*n), &numbers);
    let even = evens(&numbers);
    let total = fold(|acc, n| acc + n, &numbers, 0);
    println!("doubled: {doubled:?}, evens: {even:?}, total: {total}");

    // The roster pipelines
    let roster = vec![
        Student::new("Anna", 6),
        Student::new("John", 4),
        Student::new("Maria", 9),
    ];
    let policy = GradePolicy::default();
    println!("grades:         {:?}", grades(&roster));
    println!("approved names: {:?}", approved_names(&policy, &roster));
    println!(
        "grade total:    {}",
        grade_total(&roster).expect("roster is not empty")
    );
    println!("combined:       {}", combined_names(&roster));

    // Composition reads right-to-left
    let reversed_uppercase = compose(reverse, uppercase);
    println!("composed:       {}", reversed_uppercase("hello".into()));

    // Currying: one argument per link
    let hello = greet("Hello");
    println!("curried:        {}", hello("Matheus"));
    println!("add(2)(3)     = {}", add(2)(3));
    println!("volume(2)(3)(10) = {}", volume(2)(3)(10));
    let matheus = profile("Matheus")("Lima")(26);
    println!("profile:        {matheus:?}");
}
