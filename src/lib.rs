//! Reslint - cross-module lint for XML resource packs
//!
//! Reslint is a CLI tool and library for linting resource packs: trees of XML
//! documents grouped into build modules. Its main check flags usages of
//! deprecated colour resources even when the usage and the deprecation live in
//! different modules, by running a per-module analysis phase that produces
//! serializable partial results and a merge phase that unions them.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, exit codes)
//! - `commands`: Subcommand implementations (`check`, `analyze`, `merge`)
//! - `config`: Configuration file loading and parsing
//! - `analysis`: Module discovery and per-unit document traversal
//! - `checks`: The individual lint checks
//! - `store`: Persistence of per-unit partial results
//! - `issue`: Issue type definitions
//! - `reporter`: Diagnostic output formatting

pub mod analysis;
pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod issue;
pub mod reporter;
pub mod resref;
pub mod store;
pub mod suppress;
pub mod utils;
