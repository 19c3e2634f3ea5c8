//! Macros for composing automata from mixed operands.

/// Concatenate mixed operands into one automaton.
///
/// Each operand may be anything implementing
/// [`IntoOperand`](crate::builder::IntoOperand): a fragment, a symbol, a
/// string or byte sequence, a JSON value, or the result of another builder
/// macro. Expands to [`concat_all`](crate::builder::concat_all) and
/// evaluates to `Result<Nfa, BuildError>`.
///
/// # Example
///
/// ```
/// use valgen::{nfa_concat, nfa_union};
///
/// let pattern = nfa_concat!["foo", nfa_union!["bar", "foo"]].unwrap();
///
/// assert!(pattern.matches("foobar"));
/// assert!(pattern.matches("foofoo"));
/// assert!(!pattern.matches("foobaz"));
/// ```
#[macro_export]
macro_rules! nfa_concat {
    ($($operand:expr),* $(,)?) => {
        {
            let operands: ::std::vec::Vec<
                ::std::result::Result<$crate::builder::Operand, $crate::builder::BuildError>,
            > = ::std::vec![$($crate::builder::IntoOperand::into_operand($operand)),*];
            $crate::builder::concat_all(operands)
        }
    };
}

/// Union of mixed operands; see [`nfa_concat!`] for accepted operands.
///
/// # Example
///
/// ```
/// use valgen::{nfa_union, Nfa};
///
/// let digit = nfa_union![b'0', b'1', Nfa::literal(b'2')].unwrap();
///
/// assert!(digit.matches("1"));
/// assert!(!digit.matches("3"));
/// ```
#[macro_export]
macro_rules! nfa_union {
    ($($operand:expr),* $(,)?) => {
        {
            let operands: ::std::vec::Vec<
                ::std::result::Result<$crate::builder::Operand, $crate::builder::BuildError>,
            > = ::std::vec![$($crate::builder::IntoOperand::into_operand($operand)),*];
            $crate::builder::union_all(operands)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::BuildError;
    use crate::core::Nfa;
    use serde_json::json;

    #[test]
    fn concat_macro_accepts_mixed_operands() {
        let nfa = nfa_concat!["ab", b'c', 'd', Nfa::literal(b'e').repeat()].unwrap();

        assert!(nfa.matches("abcd"));
        assert!(nfa.matches("abcdeee"));
        assert!(!nfa.matches("abc"));
    }

    #[test]
    fn macros_nest() {
        let pattern = nfa_concat![nfa_union!["foo", "bar"], "!"].unwrap();

        assert!(pattern.matches("foo!"));
        assert!(pattern.matches("bar!"));
        assert!(!pattern.matches("foobar!"));
    }

    #[test]
    fn empty_concat_macro_is_empty() {
        let nfa = nfa_concat![].unwrap();
        assert!(nfa.matches(""));
    }

    #[test]
    fn empty_union_macro_fails() {
        assert!(matches!(nfa_union![], Err(BuildError::NoOperands)));
    }

    #[test]
    fn nested_failure_surfaces_from_outer_macro() {
        let result = nfa_concat!["x", nfa_union![json!(42), "y"]];
        assert!(matches!(result, Err(BuildError::InvalidOperand { .. })));
    }

    #[test]
    fn non_ascii_char_operand_fails() {
        let result = nfa_union!['a', 'ß'];
        assert!(matches!(result, Err(BuildError::SymbolOutOfRange { .. })));
    }
}
