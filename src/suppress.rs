//! Suppression directives.
//!
//! An element may carry an attribute with the local name `ignore` (typically
//! namespaced, e.g. `tools:ignore`) listing comma-separated rule ids. A
//! listed rule is silenced for that element, its attributes and all of its
//! descendants. The special token `all` silences every rule.
//!
//! Checks that drive their own traversal carry a [`SuppressionState`]
//! top-down so sibling sites share the already-resolved ancestor state;
//! one-shot checks use [`is_suppressed_at`], a plain ancestor-chain walk.

use roxmltree::Node;

use crate::issue::Rule;

pub const IGNORE_ATTR: &str = "ignore";
const ALL_RULES: &str = "all";

/// Rule ids suppressed at the current point of a top-down traversal.
#[derive(Debug, Clone, Default)]
pub struct SuppressionState {
    ids: Vec<String>,
}

impl SuppressionState {
    /// State for a child element: the inherited ids plus whatever the
    /// element's own `ignore` attribute lists.
    pub fn enter(&self, element: Node) -> Self {
        let mut ids = self.ids.clone();
        ids.extend(listed_ids(element));
        Self { ids }
    }

    pub fn is_suppressed(&self, rule: Rule) -> bool {
        self.ids
            .iter()
            .any(|id| id == rule.id() || id == ALL_RULES)
    }
}

/// Resolves suppression for a single site by walking from `node` up to the
/// document root.
pub fn is_suppressed_at(node: Node, rule: Rule) -> bool {
    node.ancestors()
        .filter(|a| a.is_element())
        .any(|a| listed_ids(a).any(|id| id == rule.id() || id == ALL_RULES))
}

fn listed_ids<'a>(element: Node<'a, '_>) -> impl Iterator<Item = String> + 'a {
    element
        .attributes()
        .filter(|a| a.name() == IGNORE_ATTR)
        .flat_map(|a| a.value().split(','))
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
}
