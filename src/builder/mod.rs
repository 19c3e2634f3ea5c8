//! Variadic combinators over mixed operands.
//!
//! This module folds the binary combinators across sequences whose
//! elements may be fragments, single symbols or symbol sequences. The
//! first operand that cannot be coerced aborts the whole call and no
//! partial fragment is returned.

pub mod error;
pub mod json;
pub mod macros;
pub mod operand;

pub use error::BuildError;
pub use json::{from_json, from_value};
pub use operand::{IntoOperand, Operand};

use crate::core::Nfa;

/// Left-fold [`Nfa::concat`] across `operands`.
///
/// Zero operands give [`Nfa::empty`].
///
/// # Example
///
/// ```
/// use valgen::builder::concat_all;
/// use valgen::{IntoOperand, Nfa};
///
/// let pattern = concat_all([
///     "foo".into_operand(),
///     b'-'.into_operand(),
///     Nfa::from_string("bar").repeat().into_operand(),
/// ])
/// .unwrap();
///
/// assert!(pattern.matches("foo-"));
/// assert!(pattern.matches("foo-barbar"));
/// assert!(!pattern.matches("foo"));
/// ```
pub fn concat_all<I>(operands: I) -> Result<Nfa, BuildError>
where
    I: IntoIterator,
    I::Item: IntoOperand,
{
    let mut fragments = coerce(operands);
    let Some(first) = fragments.next() else {
        return Ok(Nfa::empty());
    };
    fragments.try_fold(first?, |acc, next| Ok(acc.concat(next?)))
}

/// Left-fold [`Nfa::union`] across `operands`.
///
/// Union has no identity fragment, so zero operands is
/// [`BuildError::NoOperands`].
///
/// # Example
///
/// ```
/// use valgen::builder::union_all;
///
/// let pattern = union_all(["cat", "dog", "bird"]).unwrap();
///
/// assert!(pattern.matches("dog"));
/// assert!(!pattern.matches("cow"));
/// ```
pub fn union_all<I>(operands: I) -> Result<Nfa, BuildError>
where
    I: IntoIterator,
    I::Item: IntoOperand,
{
    let mut fragments = coerce(operands);
    let first = fragments.next().ok_or(BuildError::NoOperands)??;
    fragments.try_fold(first, |acc, next| Ok(acc.union(next?)))
}

fn coerce<I>(operands: I) -> impl Iterator<Item = Result<Nfa, BuildError>>
where
    I: IntoIterator,
    I::Item: IntoOperand,
{
    operands
        .into_iter()
        .map(|operand| operand.into_operand().map(Operand::into_fragment))
}
