//! Mount selection pipeline
//!
//! 1. `available` - group membership and live usability over unlocked mounts
//! 2. `narrow_candidates` - speed tier, then seat count (each fails open)
//! 3. `select` - uniform random pick

mod availability;
mod context;
mod narrowing;
mod selector;

pub use availability::{available, Availability};
pub use context::SelectionContext;
pub use narrowing::{narrow, narrow_by_seats, narrow_by_speed, narrow_candidates, required_extra_seats};
pub use selector::select;

use rand::Rng;

use crate::catalog::MountRecord;
use crate::group::GroupPolicy;

/// Run all three stages over an already refreshed unlocked list
pub fn pick_mount<F, R>(
    group: &GroupPolicy,
    unlocked: &[MountRecord],
    ctx: &SelectionContext,
    is_usable: F,
    rng: &mut R,
) -> Option<u32>
where
    F: FnMut(&MountRecord) -> bool,
    R: Rng + ?Sized,
{
    let availability = available(group, unlocked, is_usable);
    let candidates = narrow_candidates(group, ctx, availability);
    select(&candidates, rng)
}
