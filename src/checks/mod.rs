//! The individual lint checks.
//!
//! `deprecated_color` is the cross-module check: it contributes to a
//! per-unit partial result and reports during the merge phase. The other
//! checks are single-document: they report directly while their document is
//! being analyzed and share no state across files or units.

pub mod binding_format;
pub mod deprecated_color;
pub mod resource_name;
pub mod todo_format;

use clap::ValueEnum;

/// Selectable check groups, as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckType {
    DeprecatedColor,
    ResourceNameFormat,
    BindingExpressionFormat,
    TodoFormat,
}

/// Which checks a run should execute. Defaults to all of them.
#[derive(Debug, Clone, Copy)]
pub struct CheckSet {
    pub deprecated_color: bool,
    pub resource_name: bool,
    pub binding_format: bool,
    pub todo_format: bool,
}

impl Default for CheckSet {
    fn default() -> Self {
        Self {
            deprecated_color: true,
            resource_name: true,
            binding_format: true,
            todo_format: true,
        }
    }
}

impl CheckSet {
    /// Builds a set from command-line selections; an empty selection means all.
    pub fn from_selection(selection: &[CheckType]) -> Self {
        if selection.is_empty() {
            return Self::default();
        }
        Self {
            deprecated_color: selection.contains(&CheckType::DeprecatedColor),
            resource_name: selection.contains(&CheckType::ResourceNameFormat),
            binding_format: selection.contains(&CheckType::BindingExpressionFormat),
            todo_format: selection.contains(&CheckType::TodoFormat),
        }
    }
}
