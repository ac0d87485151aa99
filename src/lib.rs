//! Structural pattern matching over dynamically typed values.
//!
//! Patterns are small strings: literals (`10`, `-1.5`, `true`, `"text"`),
//! identifiers (`x`), the wildcard `_`, arrays (`[a, b]`), cons groups
//! (`(head:tail)`) and as-bindings (`all@(x:xs)`). A successful match yields
//! the bound names in the order they appear in the pattern.
//!
//! ```
//! use patmatch::Value;
//!
//! let value = Value::from(vec![1, 2, 3]);
//! let bound = patmatch::parse("all@(x:xs)", &value)?.expect("list has a head");
//! assert_eq!(bound.get("x"), Some(&Value::from(1)));
//! assert_eq!(bound.get("xs"), Some(&Value::from(vec![2, 3])));
//! assert!(patmatch::parse("(x:xs)", &Value::from(Vec::<i64>::new()))?.is_none());
//! # Ok::<(), patmatch::MatchError>(())
//! ```

pub mod bindings;
pub mod dispatch;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod splitter;
pub mod value;

pub use bindings::Bindings;
pub use dispatch::{Arm, Dispatcher};
pub use error::{MatchError, SplitError};
pub use matcher::{extract, parse, Limits, Matcher};
pub use parser::Pattern;
pub use splitter::split_enclosed;
pub use value::{Number, Value};
