//! Mount group policies
//!
//! A group is a named set of mounts plus the rules that narrow it down at
//! selection time. Membership is stored relative to a polarity flag:
//!
//! - `included_means_active == true`: `included_mount_ids` lists the enabled mounts
//! - `included_means_active == false`: `included_mount_ids` lists the disabled
//!   mounts, so every newly unlocked mount is enabled automatically
//!
//! The serialized field names are the ones the plugin has always written to
//! its per-character files.

mod mutation;

pub use mutation::effective_enabled;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Speed-tier restriction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FastMode {
    #[default]
    Off,
    /// Restrict to fast mounts only while flight is not unlocked
    IfGrounded,
    /// Restrict to fast mounts regardless of flight
    On,
}

impl FastMode {
    /// Whether the restriction applies given the flight unlock state
    pub fn applies(self, flight_unlocked: bool) -> bool {
        match self {
            FastMode::On => true,
            FastMode::IfGrounded => !flight_unlocked,
            FastMode::Off => false,
        }
    }
}

/// How a `/pmount` summon is presented in the cast bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayType {
    /// Show as Mount Roulette
    #[default]
    Grounded,
    /// Show as Flying Mount Roulette
    Flying,
    /// Reveal the mount during the cast
    Show,
}

/// Effective seat-count rules for one selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeatPolicy {
    pub multi_seat_in_party: bool,
    pub prefer_more_seats: bool,
    pub single_seat_while_solo: bool,
}

/// A named mount group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupPolicy {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "EnabledMounts")]
    pub included_mount_ids: BTreeSet<u32>,

    #[serde(rename = "IncludeNewMounts")]
    pub included_means_active: bool,

    #[serde(rename = "ForceMultiseatersInParty")]
    pub force_multi_seat_in_party: bool,

    #[serde(rename = "PreferMoreSeats")]
    pub prefer_more_seats: bool,

    #[serde(rename = "ForceSingleSeatersWhileSolo")]
    pub force_single_seat_while_solo: bool,

    #[serde(rename = "PvpOverrideMultiseaterSettings")]
    pub pvp_override: bool,

    #[serde(rename = "PvpForceMultiseatersInParty")]
    pub pvp_force_multi_seat_in_party: bool,

    #[serde(rename = "PvpPreferMoreSeats")]
    pub pvp_prefer_more_seats: bool,

    #[serde(rename = "PvpForceSingleSeatersWhileSolo")]
    pub pvp_force_single_seat_while_solo: bool,

    #[serde(rename = "FastMode")]
    pub fast_mode: FastMode,

    #[serde(rename = "DisplayType")]
    pub display_type: DisplayType,
}

impl GroupPolicy {
    /// New group with no mounts selected
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Seat rules in effect; PvP copies win when the override is set in PvP
    pub fn seat_policy(&self, is_pvp: bool) -> SeatPolicy {
        if is_pvp && self.pvp_override {
            SeatPolicy {
                multi_seat_in_party: self.pvp_force_multi_seat_in_party,
                prefer_more_seats: self.pvp_prefer_more_seats,
                single_seat_while_solo: self.pvp_force_single_seat_while_solo,
            }
        } else {
            SeatPolicy {
                multi_seat_in_party: self.force_multi_seat_in_party,
                prefer_more_seats: self.prefer_more_seats,
                single_seat_while_solo: self.force_single_seat_while_solo,
            }
        }
    }

    /// Whether the group enables the given mount
    pub fn is_enabled(&self, mount_id: u32) -> bool {
        self.included_mount_ids.contains(&mount_id) == self.included_means_active
    }

    /// Whether newly unlocked mounts are enabled without user action
    pub fn auto_enables_new_mounts(&self) -> bool {
        !self.included_means_active
    }

    pub fn matches_name(&self, name: &str) -> bool {
        names_equal(&self.name, name)
    }
}

/// Case-insensitive group name comparison
pub(crate) fn names_equal(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
