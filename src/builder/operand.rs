//! Operands accepted by the variadic combinators.

use crate::builder::error::BuildError;
use crate::builder::json;
use crate::core::{Nfa, Symbol};
use serde_json::Value;

/// One operand of a variadic `concat` or `union`.
///
/// Every operand is coerced to a fragment before combining: fragments pass
/// through, a symbol becomes [`Nfa::literal`] and a sequence becomes
/// [`Nfa::from_string`].
#[derive(Clone, Debug)]
pub enum Operand {
    Fragment(Nfa),
    Symbol(Symbol),
    Sequence(Vec<Symbol>),
}

impl Operand {
    pub fn into_fragment(self) -> Nfa {
        match self {
            Operand::Fragment(nfa) => nfa,
            Operand::Symbol(symbol) => Nfa::literal(symbol),
            Operand::Sequence(sequence) => Nfa::from_string(sequence),
        }
    }
}

/// Conversion of a value into an [`Operand`].
///
/// Strings contribute their UTF-8 bytes. A `char` is accepted only when
/// its UTF-8 encoding is a single byte, so `'a'` and `"a"` always agree.
pub trait IntoOperand {
    fn into_operand(self) -> Result<Operand, BuildError>;
}

impl IntoOperand for Operand {
    fn into_operand(self) -> Result<Operand, BuildError> {
        Ok(self)
    }
}

impl IntoOperand for Nfa {
    fn into_operand(self) -> Result<Operand, BuildError> {
        Ok(Operand::Fragment(self))
    }
}

impl IntoOperand for Symbol {
    fn into_operand(self) -> Result<Operand, BuildError> {
        Ok(Operand::Symbol(self))
    }
}

impl IntoOperand for char {
    fn into_operand(self) -> Result<Operand, BuildError> {
        if self.is_ascii() {
            Ok(Operand::Symbol(self as Symbol))
        } else {
            Err(BuildError::SymbolOutOfRange {
                value: u64::from(u32::from(self)),
            })
        }
    }
}

impl IntoOperand for &str {
    fn into_operand(self) -> Result<Operand, BuildError> {
        Ok(Operand::Sequence(self.as_bytes().to_vec()))
    }
}

impl IntoOperand for String {
    fn into_operand(self) -> Result<Operand, BuildError> {
        Ok(Operand::Sequence(self.into_bytes()))
    }
}

impl IntoOperand for &[Symbol] {
    fn into_operand(self) -> Result<Operand, BuildError> {
        Ok(Operand::Sequence(self.to_vec()))
    }
}

impl<const N: usize> IntoOperand for &[Symbol; N] {
    fn into_operand(self) -> Result<Operand, BuildError> {
        Ok(Operand::Sequence(self.to_vec()))
    }
}

impl IntoOperand for Vec<Symbol> {
    fn into_operand(self) -> Result<Operand, BuildError> {
        Ok(Operand::Sequence(self))
    }
}

impl IntoOperand for &Value {
    fn into_operand(self) -> Result<Operand, BuildError> {
        json::operand_from_value(self)
    }
}

impl IntoOperand for Value {
    fn into_operand(self) -> Result<Operand, BuildError> {
        json::operand_from_value(&self)
    }
}

/// Lets nested builder results be passed straight into another builder.
impl<T: IntoOperand> IntoOperand for Result<T, BuildError> {
    fn into_operand(self) -> Result<Operand, BuildError> {
        self?.into_operand()
    }
}
