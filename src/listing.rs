//! Mount list queries for the configuration window
//!
//! The window shows the catalog filtered by lock state, enabled state and a
//! name search, split into fixed-size pages. Bulk select/deselect works on the
//! same filtered list, either one page at a time or all of it.

use serde::{Deserialize, Serialize};

use crate::catalog::MountRecord;
use crate::group::GroupPolicy;

/// Page grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub rows: usize,
    pub columns: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self { rows: 6, columns: 5 }
    }
}

impl PageLayout {
    pub fn page_size(&self) -> usize {
        self.rows.saturating_mul(self.columns).max(1)
    }

    /// Number of pages needed for `count` items
    pub fn page_count(&self, count: usize) -> usize {
        count.div_ceil(self.page_size())
    }

    /// Items on a 1-based page; empty past the end
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        if page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(self.page_size());
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size()).min(items.len());
        &items[start..end]
    }
}

/// Filter applied to the mount list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Include mounts that are not unlocked yet
    pub show_locked: bool,
    /// Only mounts with this enabled state in the group
    pub enabled: Option<bool>,
    /// Case-insensitive substring of the display name
    pub name: Option<String>,
}

impl ListFilter {
    /// Unlocked mounts only, no other restriction
    pub fn unlocked() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_locked(mut self) -> Self {
        self.show_locked = true;
        self
    }

    pub fn matches(&self, mount: &MountRecord, group: &GroupPolicy) -> bool {
        if !self.show_locked && !mount.unlocked {
            return false;
        }

        if let Some(enabled) = self.enabled {
            if group.is_enabled(mount.id) != enabled {
                return false;
            }
        }

        match self.name.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => mount
                .display_name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }

    /// Filter `mounts`, keeping catalog order
    pub fn apply(&self, mounts: &[MountRecord], group: &GroupPolicy) -> Vec<MountRecord> {
        mounts
            .iter()
            .filter(|m| self.matches(m, group))
            .cloned()
            .collect()
    }
}

/// Which part of the filtered list a bulk update touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkTarget {
    All,
    /// 1-based page number
    Page(usize),
}

/// Enable or disable every mount in the target range. Returns how many
/// stored ids changed.
pub fn bulk_update(
    group: &mut GroupPolicy,
    filtered: &[MountRecord],
    layout: &PageLayout,
    target: BulkTarget,
    enabled: bool,
) -> usize {
    let range = match target {
        BulkTarget::All => filtered,
        BulkTarget::Page(page) => layout.page(filtered, page),
    };

    let changed = group.set_enabled_many(range.iter().map(|m| m.id), enabled);
    log::debug!(
        "Group '{}': {} {} mounts ({:?}), {} changed",
        group.name,
        if enabled { "selected" } else { "unselected" },
        range.len(),
        target,
        changed
    );
    changed
}
