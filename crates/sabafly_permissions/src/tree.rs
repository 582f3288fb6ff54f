//! Permission tree storage and lookup.

use crate::{Checker, PermissionError, PermissionErrorKind, PermissionResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, instrument, trace};

/// Label that grants everything below its parent.
pub const WILDCARD: &str = "*";

static PERMISSION_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\*|[a-z0-9_-]+)(\.(\*|[a-z0-9_-]+))*$").expect("permission syntax regex")
});

/// A set of granted permission paths stored as a tree of labels.
///
/// Each node maps a path segment to its child node; the root has no label.
/// A `*` child at any level visited by a query satisfies the query.
///
/// The tree has no internal locking. Share it behind a lock if it is mutated
/// while other threads read it.
///
/// Serializes as the list of every path in the tree and deserializes from a
/// list of permission strings, so grants can be kept in config files:
///
/// ```
/// use sabafly_permissions::PermissionTree;
///
/// let grants: PermissionTree = serde_json::from_str(r#"["mod.*", "poll.create"]"#).unwrap();
/// assert!(grants.has("mod.kick"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PermissionTree {
    children: BTreeMap<String, PermissionTree>,
}

impl PermissionTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing has been granted.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Grant a permission, creating every missing node along its path.
    ///
    /// Granting an existing path is a no-op. Any string is accepted; an empty
    /// segment creates a node labelled by the empty string.
    pub fn add(&mut self, permission: &str) -> &mut Self {
        trace!(permission, "Granting permission");
        let mut node = &mut *self;
        for segment in permission.split('.') {
            node = node.children.entry(segment.to_string()).or_default();
        }
        self
    }

    /// Grant a permission after checking it is a well-formed path.
    ///
    /// Segments must be non-empty runs of ASCII lowercase letters, digits,
    /// `_` or `-`, or the wildcard `*`.
    ///
    /// # Errors
    ///
    /// Returns [`PermissionErrorKind::InvalidPath`] for malformed input; the
    /// tree is left unchanged.
    #[instrument(skip(self))]
    pub fn try_add(&mut self, permission: &str) -> PermissionResult<()> {
        if !PERMISSION_SYNTAX.is_match(permission) {
            debug!("Rejected malformed permission");
            let reason = if permission.is_empty() {
                "empty permission"
            } else if permission.split('.').any(str::is_empty) {
                "empty segment"
            } else {
                "segments must be lowercase ASCII tokens or '*'"
            };
            return Err(PermissionError::new(PermissionErrorKind::InvalidPath {
                path: permission.to_string(),
                reason: reason.to_string(),
            }));
        }
        self.add(permission);
        Ok(())
    }

    /// Whether a permission is granted.
    ///
    /// Walks the path one segment at a time. A `*` child at any visited level
    /// grants the query outright. A `*` segment in the query matches when the
    /// level it probes has any child at all. Reaching the end of the query
    /// grants it, so every prefix of a granted path is granted as well.
    pub fn has(&self, permission: &str) -> bool {
        let mut node = self;
        for segment in permission.split('.') {
            if node.children.contains_key(WILDCARD) {
                return true;
            }
            match node.children.get(segment) {
                Some(child) => node = child,
                None if segment == WILDCARD => return !node.is_empty(),
                None => return false,
            }
        }
        true
    }

    /// Revoke a permission.
    ///
    /// Removes only the final segment's node together with everything below
    /// it; ancestors stay granted. Revoking a path that is not in the tree is
    /// a no-op.
    pub fn remove(&mut self, permission: &str) -> &mut Self {
        trace!(permission, "Revoking permission");
        let segments: Vec<&str> = permission.split('.').collect();
        self.remove_path(&segments);
        self
    }

    fn remove_path(&mut self, segments: &[&str]) {
        match segments {
            [] => {}
            [last] => {
                self.children.remove(*last);
            }
            [first, rest @ ..] => {
                if let Some(child) = self.children.get_mut(*first) {
                    child.remove_path(rest);
                }
            }
        }
    }

    /// Every path in the tree, intermediate nodes included.
    ///
    /// Recomputed on each call. Paths come out depth first with siblings in
    /// label order, but callers should not rely on the order.
    pub fn list(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for (label, child) in &self.children {
            child.collect_paths(label.clone(), &mut paths);
        }
        paths
    }

    fn collect_paths(&self, prefix: String, paths: &mut Vec<String>) {
        for (label, child) in &self.children {
            child.collect_paths(format!("{prefix}.{label}"), paths);
        }
        paths.push(prefix);
    }

    /// Start a combined check with `permission` as the first operand.
    ///
    /// See [`Checker`] for how `and`/`or` accumulate.
    pub fn check(&self, permission: &str) -> Checker<'_> {
        Checker::new(self, permission)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PermissionTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<S: AsRef<str>> Extend<S> for PermissionTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for permission in iter {
            self.add(permission.as_ref());
        }
    }
}

impl From<Vec<String>> for PermissionTree {
    fn from(permissions: Vec<String>) -> Self {
        permissions.into_iter().collect()
    }
}

impl From<PermissionTree> for Vec<String> {
    fn from(tree: PermissionTree) -> Self {
        tree.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tree() -> PermissionTree {
        let mut tree = PermissionTree::new();
        tree.add("test.perm")
            .add("test.perm.test")
            .add("test.yes.no")
            .add("test.yes.perm")
            .add("test2.yes")
            .add("test3.*");
        tree
    }

    #[test]
    fn test_granted_paths() {
        let tree = create_test_tree();
        assert!(tree.has("test.perm"));
        assert!(tree.has("test.yes.perm"));
        assert!(tree.has("test2.yes"));
        assert!(!tree.has("test.no.perm"));
    }

    #[test]
    fn test_remove_keeps_siblings() {
        let mut tree = create_test_tree();
        tree.remove("test.perm");
        assert!(!tree.has("test.perm"));
        assert!(!tree.has("test.perm.test"));
        assert!(tree.has("test.yes.perm"));
    }

    #[test]
    fn test_wildcard_child_grants_descendants() {
        let tree = create_test_tree();
        assert!(tree.has("test3.test.yes"));
        assert!(tree.has("test3"));
        assert!(!tree.has("test4.test"));
    }

    #[test]
    fn test_wildcard_probe_needs_children() {
        let mut tree = create_test_tree();
        assert!(tree.has("test.*"));
        tree.add("lonely");
        assert!(!tree.has("lonely.*"));
        assert!(tree.has("*"));
        assert!(!PermissionTree::new().has("*"));
    }

    #[test]
    fn test_remove_missing_path_is_noop() {
        let mut tree = create_test_tree();
        let before = tree.clone();
        tree.remove("test.nothing.here");
        tree.remove("absent");
        assert_eq!(tree, before);
    }

    #[test]
    fn test_try_add_rejects_malformed() {
        let mut tree = PermissionTree::new();
        for bad in ["", "a..b", "Guild.manage", "a.b.", "a b"] {
            let err = tree.try_add(bad).unwrap_err();
            assert!(matches!(err.kind, PermissionErrorKind::InvalidPath { .. }));
        }
        assert!(tree.is_empty());

        tree.try_add("guild.manage-roles.*").unwrap();
        assert!(tree.has("guild.manage-roles.anything"));
    }
}
