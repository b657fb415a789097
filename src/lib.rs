//! bundlecheck - resource bundle checker for Java projects
//!
//! bundlecheck verifies that user-visible string literals in Java sources are
//! either present as keys in the package's `Bundle.properties` or explicitly
//! exempted with a `// NOI18N` comment, reports bundle keys nothing uses, and
//! round-trips translations through a CSV table.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and report rendering)
//! - `config`: Configuration file loading and parsing
//! - `core`: Verification engine (discovery, parsing, cross-reference, translation)
//! - `findings`: Finding types reported by the rules
//! - `rules`: Detection rules producing findings

pub mod cli;
pub mod config;
pub mod core;
pub mod findings;
pub mod rules;
