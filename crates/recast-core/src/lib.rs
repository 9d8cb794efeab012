//! # recast-core
//!
//! A small, self-contained JSON parser paired with YAML and TOML re-emitters.
//!
//! The parser is hand-rolled recursive descent over a byte cursor — no
//! third-party parsing machinery — and produces a [`Value`] tree that keeps
//! object key order, array order, and the lexical integer/float distinction
//! intact. The emitters walk that tree once and render it as YAML or TOML
//! text with the quoting, nesting, and empty-container rules each format
//! needs.
//!
//! ## Quick start
//!
//! ```rust
//! use recast_core::{parse, to_yaml, to_toml};
//!
//! let value = parse(r#"{"name": "Alice", "scores": [95, 87]}"#).unwrap();
//!
//! let yaml = to_yaml(&value);
//! assert_eq!(yaml, "name: Alice\nscores:\n  - 95\n  - 87\n");
//!
//! let toml = to_toml(&value).unwrap();
//! assert_eq!(toml, "name = \"Alice\"\nscores = [95, 87]");
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — JSON text → [`Value`] tree
//! - [`yaml`] — [`Value`] tree → YAML text
//! - [`toml`] — [`Value`] tree → TOML text
//! - [`value`] — the `Value` tagged union
//! - [`error`] — error types shared by parsing and emission

pub mod error;
pub mod parser;
pub mod toml;
pub mod value;
pub mod yaml;

pub use error::{RecastError, Result};
pub use parser::{parse, parse_document, parse_document_with, parse_with, ParserOptions};
pub use toml::to_toml;
pub use value::Value;
pub use yaml::{to_yaml, to_yaml_with, YamlOptions};
