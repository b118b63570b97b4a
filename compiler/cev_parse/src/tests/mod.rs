//! Parser tests.
//!
//! - `parser`: literals, operators and precedence, displays and postfix forms
//! - `errors`: malformed input and nesting limits

mod parser;
