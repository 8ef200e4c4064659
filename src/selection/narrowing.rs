//! Contextual narrowing
//!
//! Speed tier first, then seat count. Every step fails open: if its predicate
//! would remove every candidate, the candidates are left as they were.

use crate::catalog::MountRecord;
use crate::group::GroupPolicy;

use super::{Availability, SelectionContext};

/// Keep only items matching `predicate`, unless none match.
/// Returns whether the restriction was applied. Order is preserved.
pub fn narrow<T, P>(items: &mut Vec<T>, mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    if !items.iter().any(&mut predicate) {
        return false;
    }
    items.retain(|item| predicate(item));
    true
}

/// Restrict to fast mounts where the zone offers a speed bonus the player lacks
pub fn narrow_by_speed(candidates: &mut Vec<MountRecord>, group: &GroupPolicy, ctx: &SelectionContext) {
    if !group.fast_mode.applies(ctx.flight_unlocked) || !ctx.speed_bonus_missing() {
        return;
    }

    if narrow(candidates, |m| m.is_fast) {
        log::debug!("Group '{}': restricted to {} fast mounts", group.name, candidates.len());
    } else {
        log::debug!("Group '{}': no fast mount available, keeping all candidates", group.name);
    }
}

/// Extra seats a mount needs to carry the party, or `None` if seat rules don't apply
pub fn required_extra_seats(group: &GroupPolicy, ctx: &SelectionContext, max_extra_seats: i32) -> Option<i32> {
    let policy = group.seat_policy(ctx.is_pvp);
    if !(policy.multi_seat_in_party && ctx.party_size > 1) {
        return None;
    }

    Some(if policy.prefer_more_seats {
        max_extra_seats.min(ctx.party_size - 1)
    } else {
        1
    })
}

/// Apply the multi-seat-in-party or single-seat-while-solo rule
pub fn narrow_by_seats(
    candidates: &mut Vec<MountRecord>,
    group: &GroupPolicy,
    ctx: &SelectionContext,
    max_extra_seats: i32,
) {
    let policy = group.seat_policy(ctx.is_pvp);

    if let Some(required) = required_extra_seats(group, ctx, max_extra_seats) {
        let applied = narrow(candidates, |m| m.extra_seats >= required);
        log::debug!(
            "Group '{}': party of {}, need {} extra seats ({})",
            group.name,
            ctx.party_size,
            required,
            if applied { "applied" } else { "no match, kept all" }
        );
    } else if policy.single_seat_while_solo && ctx.party_size <= 1 {
        let applied = narrow(candidates, |m| m.extra_seats == 0);
        log::debug!(
            "Group '{}': solo, single seaters only ({})",
            group.name,
            if applied { "applied" } else { "no match, kept all" }
        );
    }
}

/// Run the full pipeline over an availability result
pub fn narrow_candidates(group: &GroupPolicy, ctx: &SelectionContext, availability: Availability) -> Vec<MountRecord> {
    let Availability {
        mut mounts,
        max_extra_seats,
    } = availability;

    narrow_by_speed(&mut mounts, group, ctx);
    narrow_by_seats(&mut mounts, group, ctx, max_extra_seats);
    mounts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::FastMode;

    fn ids(mounts: &[MountRecord]) -> Vec<u32> {
        mounts.iter().map(|m| m.id).collect()
    }

    fn seated(seats: &[i32]) -> Vec<MountRecord> {
        seats
            .iter()
            .enumerate()
            .map(|(i, &s)| MountRecord::new(i as u32 + 1, s, false))
            .collect()
    }

    fn party(size: i32) -> SelectionContext {
        SelectionContext {
            party_size: size,
            ..Default::default()
        }
    }

    #[test]
    fn test_narrow_fails_open() {
        let mut items = vec![1, 2, 3];
        assert!(!narrow(&mut items, |&x| x > 10));
        assert_eq!(items, vec![1, 2, 3]);

        assert!(narrow(&mut items, |&x| x != 2));
        assert_eq!(items, vec![1, 3]);

        let mut empty: Vec<i32> = Vec::new();
        assert!(!narrow(&mut empty, |_| true));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_narrow_never_empties_nonempty_input() {
        let predicates: [fn(&u32) -> bool; 4] = [|_| false, |_| true, |x| x % 2 == 0, |x| *x > 3];
        for len in 0..6u32 {
            for predicate in predicates {
                let mut items: Vec<u32> = (0..len).collect();
                narrow(&mut items, predicate);
                assert_eq!(items.is_empty(), len == 0);
            }
        }
    }

    #[test]
    fn test_prefer_more_seats_full_party() {
        let group = GroupPolicy {
            force_multi_seat_in_party: true,
            prefer_more_seats: true,
            ..GroupPolicy::new("g")
        };

        let mut candidates = seated(&[0, 1, 3]);
        narrow_by_seats(&mut candidates, &group, &party(4), 3);
        assert_eq!(ids(&candidates), vec![3]);
    }

    #[test]
    fn test_prefer_more_seats_fails_open() {
        let group = GroupPolicy {
            force_multi_seat_in_party: true,
            prefer_more_seats: true,
            ..GroupPolicy::new("g")
        };

        let mut candidates = seated(&[0, 1]);
        narrow_by_seats(&mut candidates, &group, &party(4), 3);
        assert_eq!(ids(&candidates), vec![1, 2]);
    }

    #[test]
    fn test_prefer_more_seats_capped_by_party() {
        let group = GroupPolicy {
            force_multi_seat_in_party: true,
            prefer_more_seats: true,
            ..GroupPolicy::new("g")
        };

        assert_eq!(required_extra_seats(&group, &party(2), 7), Some(1));
        assert_eq!(required_extra_seats(&group, &party(8), 3), Some(3));

        let mut candidates = seated(&[0, 1, 3, 7]);
        narrow_by_seats(&mut candidates, &group, &party(2), 7);
        assert_eq!(ids(&candidates), vec![2, 3, 4]);
    }

    #[test]
    fn test_multi_seat_without_preference_needs_one_seat() {
        let group = GroupPolicy {
            force_multi_seat_in_party: true,
            ..GroupPolicy::new("g")
        };

        let mut candidates = seated(&[0, 1, 3]);
        narrow_by_seats(&mut candidates, &group, &party(8), 3);
        assert_eq!(ids(&candidates), vec![2, 3]);
    }

    #[test]
    fn test_single_seat_while_solo() {
        let group = GroupPolicy {
            force_single_seat_while_solo: true,
            ..GroupPolicy::new("g")
        };

        let mut candidates = seated(&[0, 1, 0]);
        narrow_by_seats(&mut candidates, &group, &party(1), 1);
        assert_eq!(ids(&candidates), vec![1, 3]);

        let mut candidates = seated(&[2, 1]);
        narrow_by_seats(&mut candidates, &group, &party(1), 2);
        assert_eq!(ids(&candidates), vec![1, 2]);
    }

    #[test]
    fn test_seat_rules_mutually_exclusive() {
        let group = GroupPolicy {
            force_multi_seat_in_party: true,
            force_single_seat_while_solo: true,
            ..GroupPolicy::new("g")
        };

        // in a party only the multi-seat rule runs
        let mut candidates = seated(&[0, 1]);
        narrow_by_seats(&mut candidates, &group, &party(2), 1);
        assert_eq!(ids(&candidates), vec![2]);

        // solo only the single-seat rule runs
        let mut candidates = seated(&[0, 1]);
        narrow_by_seats(&mut candidates, &group, &party(1), 1);
        assert_eq!(ids(&candidates), vec![1]);
    }

    #[test]
    fn test_single_seat_rule_ignored_in_party() {
        let group = GroupPolicy {
            force_single_seat_while_solo: true,
            ..GroupPolicy::new("g")
        };

        let mut candidates = seated(&[0, 1]);
        narrow_by_seats(&mut candidates, &group, &party(3), 1);
        assert_eq!(ids(&candidates), vec![1, 2]);
    }

    #[test]
    fn test_pvp_override_seat_rules() {
        let group = GroupPolicy {
            force_multi_seat_in_party: true,
            pvp_override: true,
            ..GroupPolicy::new("g")
        };

        let ctx = SelectionContext {
            party_size: 4,
            is_pvp: true,
            ..Default::default()
        };
        let mut candidates = seated(&[0, 1]);
        narrow_by_seats(&mut candidates, &group, &ctx, 1);
        assert_eq!(ids(&candidates), vec![1, 2]);
    }

    fn speed_candidates() -> Vec<MountRecord> {
        vec![
            MountRecord::new(71, 1, true),
            MountRecord::new(318, 1, true),
            MountRecord::new(5, 0, false),
        ]
    }

    fn speed_zone(flight_unlocked: bool) -> SelectionContext {
        SelectionContext {
            flight_unlocked,
            zone_max_speed_tier: 1,
            zone_current_speed_tier: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_speed_tier_on() {
        let group = GroupPolicy {
            fast_mode: FastMode::On,
            ..GroupPolicy::new("g")
        };

        let mut candidates = speed_candidates();
        narrow_by_speed(&mut candidates, &group, &speed_zone(true));
        assert_eq!(ids(&candidates), vec![71, 318]);
    }

    #[test]
    fn test_speed_tier_if_grounded() {
        let group = GroupPolicy {
            fast_mode: FastMode::IfGrounded,
            ..GroupPolicy::new("g")
        };

        let mut candidates = speed_candidates();
        narrow_by_speed(&mut candidates, &group, &speed_zone(true));
        assert_eq!(candidates.len(), 3);

        narrow_by_speed(&mut candidates, &group, &speed_zone(false));
        assert_eq!(ids(&candidates), vec![71, 318]);
    }

    #[test]
    fn test_speed_tier_requires_missing_bonus() {
        let group = GroupPolicy {
            fast_mode: FastMode::On,
            ..GroupPolicy::new("g")
        };

        let mut ctx = speed_zone(true);
        ctx.zone_current_speed_tier = 1;
        let mut candidates = speed_candidates();
        narrow_by_speed(&mut candidates, &group, &ctx);
        assert_eq!(candidates.len(), 3);

        let mut candidates = speed_candidates();
        narrow_by_speed(&mut candidates, &group, &SelectionContext::default());
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_speed_tier_fails_open() {
        let group = GroupPolicy {
            fast_mode: FastMode::On,
            ..GroupPolicy::new("g")
        };

        let mut candidates = vec![MountRecord::new(5, 0, false), MountRecord::new(6, 0, false)];
        narrow_by_speed(&mut candidates, &group, &speed_zone(true));
        assert_eq!(ids(&candidates), vec![5, 6]);
    }

    #[test]
    fn test_pipeline_speed_before_seats() {
        let group = GroupPolicy {
            fast_mode: FastMode::On,
            force_multi_seat_in_party: true,
            prefer_more_seats: true,
            ..GroupPolicy::new("g")
        };
        let ctx = SelectionContext {
            party_size: 4,
            ..speed_zone(true)
        };
        let availability = Availability {
            mounts: vec![
                MountRecord::new(71, 1, true),
                MountRecord::new(318, 1, true),
                MountRecord::new(8, 3, false),
            ],
            max_extra_seats: 3,
        };

        // speed keeps the fast pair; needing 3 seats then fails open on them
        let result = narrow_candidates(&group, &ctx, availability);
        assert_eq!(ids(&result), vec![71, 318]);
    }
}
