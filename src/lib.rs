//! Valgen: combinator-built nondeterministic finite automata
//!
//! Valgen builds NFAs from a small algebra of combinators and answers two
//! questions about them: does a string belong to the automaton's language,
//! and what is a random string that does.
//!
//! # Core Concepts
//!
//! - **Fragment**: an [`Nfa`] with one entry and one exit state, the unit of
//!   composition
//! - **Combinators**: `literal`, `empty`, `concat`, `union`, `repeat` and
//!   `from_string`, plus variadic forms over mixed operands
//! - **Matching**: backtracking search guarded against epsilon cycles
//! - **Generation**: a budgeted random walk that only emits accepted strings
//! - **Snapshots**: serializable copies of built automata
//!
//! # Example
//!
//! ```rust
//! use valgen::{nfa_concat, Generator, GenerateConfig, Nfa};
//!
//! let words = Nfa::from_string("foo").union(Nfa::from_string("bar")).repeat();
//! let pattern = nfa_concat![words, "!"].unwrap();
//!
//! assert!(pattern.matches("foobarfoo!"));
//! assert!(!pattern.matches("farboo!"));
//!
//! let mut generator = Generator::new(GenerateConfig::default().with_seed(1)).unwrap();
//! let sample = generator.generate(&pattern).unwrap();
//! assert!(pattern.matches(&sample));
//! ```

pub mod builder;
pub mod core;
pub mod generate;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{concat_all, union_all, BuildError, IntoOperand, Operand};
pub use core::{concat, empty, from_string, literal, repeat, union, Nfa, StateId, Symbol};
pub use generate::{GenerateConfig, GenerateError, Generator};
pub use snapshot::{Snapshot, SnapshotError};
