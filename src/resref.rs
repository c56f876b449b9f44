//! Parsing of resource references out of raw attribute values and element
//! text.
//!
//! A reference has the canonical shape `@[+][namespace:]type/name`, for
//! example `@color/primary`, `@android:color/white` or `@+id/toolbar`.
//! Anything else - plain text, binding expressions, theme references
//! (`?attr/...`), empty strings - is not a reference.

/// Namespace reserved for platform-provided resources. References into it are
/// never actionable by any check.
pub const PLATFORM_NAMESPACE: &str = "android";

/// Marker for references that create the resource on first use (`@+id/...`).
const CREATE_MARKER: char = '+';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Color,
    Drawable,
    Id,
    Layout,
    String,
    Style,
    Other,
}

impl ResourceKind {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "color" => ResourceKind::Color,
            "drawable" => ResourceKind::Drawable,
            "id" => ResourceKind::Id,
            "layout" => ResourceKind::Layout,
            "string" => ResourceKind::String,
            "style" => ResourceKind::Style,
            _ => ResourceKind::Other,
        }
    }
}

/// A parsed resource reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub name: String,
    pub namespace: Option<String>,
    pub create: bool,
}

impl ResourceRef {
    /// Attempts to parse a raw value as a resource reference.
    ///
    /// Total and side-effect free: returns `None` for any string that does
    /// not match the reference grammar, never panics. Platform references
    /// parse successfully so callers can recognize and discard them.
    pub fn parse(value: &str) -> Option<Self> {
        let rest = value.strip_prefix('@')?;
        let (create, rest) = match rest.strip_prefix(CREATE_MARKER) {
            Some(stripped) => (true, stripped),
            None => (false, rest),
        };

        let (head, name) = rest.split_once('/')?;
        let (namespace, tag) = match head.split_once(':') {
            Some((ns, tag)) => (Some(ns), tag),
            None => (None, head),
        };

        if !is_token(tag) || !is_token(name) {
            return None;
        }
        if let Some(ns) = namespace
            && !is_token(ns)
        {
            return None;
        }

        Some(Self {
            kind: ResourceKind::from_tag(tag),
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
            create,
        })
    }

    /// Whether this reference points into the reserved platform namespace.
    pub fn is_platform(&self) -> bool {
        self.namespace.as_deref() == Some(PLATFORM_NAMESPACE)
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_color_reference() {
        let r = ResourceRef::parse("@color/primary_dark").unwrap();
        assert_eq!(r.kind, ResourceKind::Color);
        assert_eq!(r.name, "primary_dark");
        assert_eq!(r.namespace, None);
        assert!(!r.create);
        assert!(!r.is_platform());
    }

    #[test]
    fn parses_platform_reference() {
        let r = ResourceRef::parse("@android:color/white").unwrap();
        assert_eq!(r.kind, ResourceKind::Color);
        assert_eq!(r.name, "white");
        assert!(r.is_platform());
    }

    #[test]
    fn parses_create_reference() {
        let r = ResourceRef::parse("@+id/toolbar").unwrap();
        assert_eq!(r.kind, ResourceKind::Id);
        assert!(r.create);
    }

    #[test]
    fn parses_unknown_kind_as_other() {
        let r = ResourceRef::parse("@anim/fade_in").unwrap();
        assert_eq!(r.kind, ResourceKind::Other);
        assert_eq!(r.name, "fade_in");
    }

    #[test]
    fn rejects_non_references() {
        assert_eq!(ResourceRef::parse(""), None);
        assert_eq!(ResourceRef::parse("#ff0000"), None);
        assert_eq!(ResourceRef::parse("plain text"), None);
        assert_eq!(ResourceRef::parse("@color"), None);
        assert_eq!(ResourceRef::parse("@color/"), None);
        assert_eq!(ResourceRef::parse("@/name"), None);
        assert_eq!(ResourceRef::parse("?attr/colorPrimary"), None);
        // Binding expressions are a different grammar entirely
        assert_eq!(ResourceRef::parse("@{user.color}"), None);
        assert_eq!(ResourceRef::parse("@{ a / b }"), None);
    }

    #[test]
    fn rejects_embedded_references() {
        // A reference inside a larger expression is not the whole value
        assert_eq!(ResourceRef::parse("prefix @color/x"), None);
        assert_eq!(ResourceRef::parse("@color/x suffix"), None);
    }
}
