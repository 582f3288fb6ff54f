//! Chained permission checks.

use crate::PermissionTree;

/// A running boolean accumulator over [`PermissionTree::has`] queries.
///
/// Operands are evaluated strictly left to right as they are chained; there
/// is no operator precedence.
///
/// - [`and`](Checker::and) is skipped once a previous operand has failed the
///   chain; otherwise it replaces the result and stops the chain on failure.
/// - [`or`](Checker::or) resumes the chain and sets the result when its
///   permission is granted, whatever the result was before.
///
/// The operand passed to [`PermissionTree::check`] only seeds the result;
/// a following `and` still runs and replaces it.
///
/// ```
/// use sabafly_permissions::PermissionTree;
///
/// let grants: PermissionTree = ["x.y", "x.z"].into_iter().collect();
/// assert!(grants.check("x.y").and("other").or("x.z").result());
/// assert!(!grants.check("x.y").and("other").and("x.z").result());
/// ```
#[derive(Debug, Clone)]
#[must_use = "a checker does nothing until its result is read"]
pub struct Checker<'a> {
    tree: &'a PermissionTree,
    result: bool,
    finished: bool,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(tree: &'a PermissionTree, permission: &str) -> Self {
        Self {
            tree,
            result: tree.has(permission),
            finished: false,
        }
    }

    /// Require `permission` as well.
    pub fn and(mut self, permission: &str) -> Self {
        if self.finished {
            return self;
        }
        self.result = self.tree.has(permission);
        self.finished = !self.result;
        self
    }

    /// Accept `permission` as an alternative.
    pub fn or(mut self, permission: &str) -> Self {
        self.finished = false;
        if self.tree.has(permission) {
            self.result = true;
        }
        self
    }

    /// The accumulated result.
    pub fn result(&self) -> bool {
        self.result
    }
}

impl From<Checker<'_>> for bool {
    fn from(checker: Checker<'_>) -> Self {
        checker.result
    }
}
