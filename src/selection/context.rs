//! Per-call selection context

use crate::host::HostGame;

/// Live state a selection is evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionContext {
    pub party_size: i32,
    pub is_pvp: bool,
    pub flight_unlocked: bool,
    pub zone_max_speed_tier: u8,
    pub zone_current_speed_tier: u8,
}

impl Default for SelectionContext {
    fn default() -> Self {
        Self {
            party_size: 1,
            is_pvp: false,
            flight_unlocked: true,
            zone_max_speed_tier: 0,
            zone_current_speed_tier: 0,
        }
    }
}

impl SelectionContext {
    /// Snapshot the host's current state
    pub fn capture(host: &dyn HostGame) -> Self {
        let (zone_max_speed_tier, zone_current_speed_tier) = host.zone_speed_tier_info();
        Self {
            party_size: host.party_size(),
            is_pvp: host.is_pvp(),
            flight_unlocked: host.is_flight_unlocked(),
            zone_max_speed_tier,
            zone_current_speed_tier,
        }
    }

    /// The zone offers a mount speed bonus the player has not unlocked yet
    pub fn speed_bonus_missing(&self) -> bool {
        self.zone_max_speed_tier > 0 && self.zone_current_speed_tier == 0
    }

    pub fn in_party(&self) -> bool {
        self.party_size > 1
    }
}
