//! Availability filter: group membership plus live usability

use crate::catalog::MountRecord;
use crate::group::GroupPolicy;

/// Mounts a group may use right now
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Availability {
    /// Candidates in catalog order
    pub mounts: Vec<MountRecord>,
    /// Largest `extra_seats` among `mounts` (0 when empty)
    pub max_extra_seats: i32,
}

/// Keep every unlocked mount the group enables and the host reports usable
pub fn available<F>(group: &GroupPolicy, unlocked: &[MountRecord], mut is_usable: F) -> Availability
where
    F: FnMut(&MountRecord) -> bool,
{
    let mut result = Availability {
        mounts: Vec::with_capacity(unlocked.len()),
        max_extra_seats: 0,
    };

    for mount in unlocked {
        if group.is_enabled(mount.id) && is_usable(mount) {
            result.max_extra_seats = result.max_extra_seats.max(mount.extra_seats);
            result.mounts.push(mount.clone());
        }
    }

    result
}
