//! Find-all, submatch projection and template substitution over byte
//! buffers, built on a pluggable single-shot regex [`Engine`].
//!
//! ```
//! use regsub_rs::Regex;
//!
//! let mut re = Regex::new(r"(?<greeting>hello) (?<name>\w+)").unwrap();
//! let out = re.replace_all_str("hello world", r"\k<name> \k<greeting>").unwrap();
//! assert_eq!(out, "world hello");
//! ```

pub mod capture;
pub mod compiled;
pub mod engine;
pub mod errors;
pub mod find;
pub mod options;
pub mod project;
mod quote;
pub mod reader;
mod regexp;
pub mod replace;
mod sync;
mod utf8;

pub use capture::{MatchResult, MatchSet, NameMap, Span};
pub use compiled::CompiledPattern;
pub use engine::{CompileError, Engine, EngineError, RegexEngine, Region};
pub use errors::{RegexError, RegexResult};
pub use find::{Matches, find_all};
pub use options::{CompileOptions, RegexConfig, RegexConfigBuilder, RegexConfigError, SearchOptions};
pub use quote::quote;
pub use regexp::{Regex, is_match};
pub use replace::{Submatches, TemplateError};
pub use sync::SharedRegex;
