//! Function composition.
//!
//! [`compose`] reads right-to-left like the mathematical notation
//! `(f ∘ g)(x) = f(g(x))`; [`pipe`] is the same machine in left-to-right
//! reading order. [`identity`] is the unit of both.
//!
//! # Laws
//!
//! For pure total functions these hold unconditionally and are exercised by
//! the property suite in pureza-test:
//!
//! | Law | Statement |
//! |-----|-----------|
//! | COMP-ASSOC | `compose(f, compose(g, h)) = compose(compose(f, g), h)` |
//! | COMP-UNIT | `compose(f, identity) = f = compose(identity, f)` |
//! | PIPE-FLIP | `pipe(g, f) = compose(f, g)` |

/// Returns the composition `h(x) = f(g(x))`.
///
/// # Example
///
/// ```rust
/// use pureza_core::compose::compose;
/// use pureza_core::text::{reverse, uppercase};
///
/// let reversed_uppercase = compose(reverse, uppercase);
/// assert_eq!(reversed_uppercase("hello".into()), "OLLEH");
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Returns the pipeline `h(x) = g(f(x))`: `f` first, then `g`.
pub fn pipe<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |x| g(f(x))
}

/// The identity function, unit of composition.
#[must_use]
pub fn identity<T>(x: T) -> T {
    x
}
