//! Hierarchical context names
//!
//! A context is a dot-delimited name identifying the logical origin of a
//! record, e.g. `server.http.router`. The empty name resolves to the root
//! context.

/// Separator between context name segments.
pub const CONTEXT_SEPARATOR: char = '.';

/// Name of the root context, used when no segments are given.
pub const ROOT_CONTEXT_NAME: &str = "root";

/// Join context segments into a full context name.
#[must_use]
pub fn logger_context(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(&CONTEXT_SEPARATOR.to_string());

    if joined.is_empty() {
        ROOT_CONTEXT_NAME.to_string()
    } else {
        joined
    }
}

/// Extend a parent context with additional segments.
#[must_use]
pub fn child_context(parent: &str, parts: &[&str]) -> String {
    if parent.is_empty() || parent == ROOT_CONTEXT_NAME {
        return logger_context(parts);
    }

    let mut all = vec![parent];
    all.extend_from_slice(parts);
    logger_context(&all)
}

/// Name of the enclosing context, or the root name once exhausted.
#[must_use]
pub fn parent_context(context: &str) -> &str {
    match context.rfind(CONTEXT_SEPARATOR) {
        Some(idx) => &context[..idx],
        None => ROOT_CONTEXT_NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_context_joins_with_dots() {
        assert_eq!(logger_context(&["context", "parent", "child"]), "context.parent.child");
        assert_eq!(logger_context(&["server"]), "server");
    }

    #[test]
    fn test_empty_parts_resolve_to_root() {
        assert_eq!(logger_context(&[]), "root");
        assert_eq!(logger_context(&["", ""]), "root");
    }

    #[test]
    fn test_child_context_extends_parent() {
        assert_eq!(child_context("server", &["http"]), "server.http");
        assert_eq!(child_context("server.http", &["router", "v2"]), "server.http.router.v2");
    }

    #[test]
    fn test_child_of_root_drops_root_prefix() {
        assert_eq!(child_context("root", &["server"]), "server");
        assert_eq!(child_context("", &["server"]), "server");
    }

    #[test]
    fn test_parent_context_walks_upward() {
        assert_eq!(parent_context("a.b.c"), "a.b");
        assert_eq!(parent_context("a.b"), "a");
        assert_eq!(parent_context("a"), "root");
    }
}
