//! Group membership mutations
//!
//! Every mutation goes through the polarity flag so that "enabled" keeps its
//! meaning no matter which way the set is currently stored.

use std::collections::{BTreeSet, HashSet};

use super::GroupPolicy;

/// Effective enabled set for an included set, polarity and unlocked universe
pub fn effective_enabled(
    included: &BTreeSet<u32>,
    included_means_active: bool,
    unlocked: &HashSet<u32>,
) -> BTreeSet<u32> {
    unlocked
        .iter()
        .copied()
        .filter(|id| included.contains(id) == included_means_active)
        .collect()
}

impl GroupPolicy {
    /// Enable or disable one mount. Returns whether the stored set changed.
    pub fn set_enabled(&mut self, mount_id: u32, enabled: bool) -> bool {
        if enabled == self.included_means_active {
            self.included_mount_ids.insert(mount_id)
        } else {
            self.included_mount_ids.remove(&mount_id)
        }
    }

    /// Flip one mount between enabled and disabled. Returns the new state.
    pub fn toggle(&mut self, mount_id: u32) -> bool {
        let enabled = !self.is_enabled(mount_id);
        self.set_enabled(mount_id, enabled);
        enabled
    }

    /// Switch "enable new mounts automatically" on or off.
    ///
    /// When the requested value disagrees with the stored polarity, the
    /// polarity flips and the set is replaced by its complement against the
    /// unlocked mounts, leaving the effective selection untouched. Returns
    /// whether a flip happened.
    pub fn set_auto_enable_new_mounts(&mut self, enable: bool, unlocked: &HashSet<u32>) -> bool {
        if enable != self.included_means_active {
            return false;
        }

        self.included_means_active = !enable;
        let complement: BTreeSet<u32> = unlocked
            .iter()
            .copied()
            .filter(|id| !self.included_mount_ids.contains(id))
            .collect();
        self.included_mount_ids = complement;

        log::debug!(
            "Group '{}': auto-enable new mounts {}, {} ids stored",
            self.name,
            if enable { "on" } else { "off" },
            self.included_mount_ids.len()
        );
        true
    }

    /// Enable or disable every mount in `mount_ids`
    pub fn set_enabled_many(&mut self, mount_ids: impl IntoIterator<Item = u32>, enabled: bool) -> usize {
        mount_ids
            .into_iter()
            .filter(|&id| self.set_enabled(id, enabled))
            .count()
    }

    /// Enabled ids among the given unlocked universe
    pub fn enabled_among(&self, unlocked: &HashSet<u32>) -> BTreeSet<u32> {
        effective_enabled(&self.included_mount_ids, self.included_means_active, unlocked)
    }
}
