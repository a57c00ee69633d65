//! Write options

use serde::{Deserialize, Serialize};

/// Options controlling [`update`](crate::update)
///
/// Loadable from JSON or YAML; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateOptions {
    /// Fail with `PathConflict` when deleting under a parent that doesn't exist
    pub require_parent_on_delete: bool,
    /// Remove containers left empty by a delete
    pub prune_empty_containers: bool,
}

impl UpdateOptions {
    /// Create default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With strict deletes
    #[inline]
    #[must_use]
    pub fn with_require_parent_on_delete(mut self, require: bool) -> Self {
        self.require_parent_on_delete = require;
        self
    }

    /// With pruning of emptied containers
    #[inline]
    #[must_use]
    pub fn with_prune_empty_containers(mut self, prune: bool) -> Self {
        self.prune_empty_containers = prune;
        self
    }
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            require_parent_on_delete: false,
            prune_empty_containers: true,
        }
    }
}
