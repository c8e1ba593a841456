//! Currying: multi-argument functions as single-argument chains.
//!
//! A curried function of N arguments is N chained functions, each taking one
//! argument and returning the next link (or the final result). The links are
//! explicit typed function values: the outer link is an `impl Fn`, the inner
//! links are boxed so the chain has a nameable type.
//!
//! [`curry2`] and [`curry3`] curry arbitrary binary/ternary functions;
//! [`greet`], [`add`] and [`volume`] are concrete curried reference
//! functions used throughout the workshop suites.

/// Curries a binary function into a two-link chain.
///
/// # Example
///
/// ```rust
/// use pureza_core::curry::curry2;
///
/// let sum = curry2(|x: i64, y: i64| x + y);
/// assert_eq!(sum(2)(3), 5);
/// ```
pub fn curry2<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    A: Clone + 'static,
    B: 'static,
    R: 'static,
    F: Fn(A, B) -> R + Clone + 'static,
{
    move |a: A| -> Box<dyn Fn(B) -> R> {
        let f = f.clone();
        Box::new(move |b: B| f(a.clone(), b))
    }
}

/// Curries a ternary function into a three-link chain.
///
/// # Example
///
/// ```rust
/// use pureza_core::curry::curry3;
///
/// let volume = curry3(|x: i64, y: i64, z: i64| (x + y + z) * 4);
/// assert_eq!(volume(2)(3)(10), 60);
/// ```
pub fn curry3<A, B, C, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
    F: Fn(A, B, C) -> R + Clone + 'static,
{
    move |a: A| -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>> {
        let f = f.clone();
        Box::new(move |b: B| -> Box<dyn Fn(C) -> R> {
            let f = f.clone();
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c))
        })
    }
}

/// Curried greeting: fix the greeting once, greet many names.
///
/// # Example
///
/// ```rust
/// let hello = pureza_core::curry::greet("Hello");
/// assert_eq!(hello("Matheus"), "Hello Matheus");
/// ```
pub fn greet(greeting: impl Into<String>) -> impl Fn(&str) -> String {
    let greeting = greeting.into();
    move |name| format!("{greeting} {name}")
}

/// Curried addition: `add(x)(y) = x + y`.
pub fn add(x: i64) -> impl Fn(i64) -> i64 {
    move |y| x + y
}

/// Curried volume: `volume(x)(y)(z) = (x + y + z) * 4`.
pub fn volume(x: i64) -> impl Fn(i64) -> Box<dyn Fn(i64) -> i64> {
    move |y| -> Box<dyn Fn(i64) -> i64> { Box::new(move |z| (x + y + z) * 4) }
}
