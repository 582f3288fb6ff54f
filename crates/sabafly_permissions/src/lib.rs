//! Hierarchical permission checking for bot commands.
//!
//! Permissions are dotted paths such as `guild.manage.roles`. A
//! [`PermissionTree`] stores granted paths as a tree of labels, so granting
//! `guild.manage` also satisfies queries for `guild`, and granting
//! `guild.manage.*` satisfies every query below `guild.manage`.
//!
//! ```
//! use sabafly_permissions::PermissionTree;
//!
//! let mut grants = PermissionTree::new();
//! grants.add("guild.manage.*").add("poll.create");
//!
//! assert!(grants.has("guild.manage.roles"));
//! assert!(grants.has("poll"));
//! assert!(!grants.has("poll.delete"));
//!
//! let allowed = grants
//!     .check("poll.delete")
//!     .or("guild.manage.channels")
//!     .result();
//! assert!(allowed);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod checker;
mod tree;

pub use checker::Checker;
pub use sabafly_error::{PermissionError, PermissionErrorKind};
pub use tree::{PermissionTree, WILDCARD};

/// Result type for strict permission parsing.
pub type PermissionResult<T> = Result<T, PermissionError>;
