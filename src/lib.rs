//! # CODEMAP
//!
//! Function call graph extraction for TypeScript and JavaScript codebases.
//!
//! CODEMAP walks a source tree, discovers function-like definitions (free
//! functions, function-valued variables and class methods), records which
//! defined functions each one calls, and renders the result.
//!
//! ## Output Formats
//!
//! - **DOT**: Graphviz directed graph of resolved calls
//! - **Report**: Markdown ranking of the busiest callers and most-called functions
//!
//! ## Supported Sources
//!
//! TypeScript (`.ts`, `.tsx`), JavaScript (`.js`, `.jsx`) and Vue single-file
//! components (`<script>` blocks).

pub mod core;
pub mod formatters;
pub mod parsers;
