//! Mock host for testing
//!
//! State sits behind a lock so tests can flip unlock/recast/party state
//! between calls while the roulette holds a shared reference.

use std::collections::HashSet;

use parking_lot::RwLock;

use super::HostGame;

#[derive(Debug, Clone)]
struct MockState {
    logged_in: bool,
    unlocked: HashSet<u32>,
    on_recast: HashSet<u32>,
    mounted: bool,
    party_size: i32,
    pvp: bool,
    flight_unlocked: bool,
    speed_tier: (u8, u8),
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            logged_in: true,
            unlocked: HashSet::new(),
            on_recast: HashSet::new(),
            mounted: false,
            party_size: 1,
            pvp: false,
            flight_unlocked: true,
            speed_tier: (0, 0),
        }
    }
}

/// Mock host that answers every port from pre-configured state
#[derive(Debug, Default)]
pub struct MockHost {
    state: RwLock<MockState>,
}

impl MockHost {
    /// Create a logged-in, solo host with nothing unlocked
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the given mounts as unlocked
    pub fn with_unlocked(self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.state.write().unlocked.extend(ids);
        self
    }

    /// Set the party size
    pub fn with_party_size(self, size: i32) -> Self {
        self.set_party_size(size);
        self
    }

    /// Set whether the zone is PvP
    pub fn with_pvp(self, pvp: bool) -> Self {
        self.state.write().pvp = pvp;
        self
    }

    /// Set whether flight is unlocked
    pub fn with_flight_unlocked(self, unlocked: bool) -> Self {
        self.state.write().flight_unlocked = unlocked;
        self
    }

    /// Set zone speed tier info
    pub fn with_speed_tier(self, max: u8, current: u8) -> Self {
        self.state.write().speed_tier = (max, current);
        self
    }

    /// Set whether a character is logged in
    pub fn with_logged_in(self, logged_in: bool) -> Self {
        self.set_logged_in(logged_in);
        self
    }

    /// Unlock a mount
    pub fn unlock(&self, id: u32) {
        self.state.write().unlocked.insert(id);
    }

    /// Lock a mount again
    pub fn lock(&self, id: u32) {
        self.state.write().unlocked.remove(&id);
    }

    /// Put a mount on recast (or take it off again)
    pub fn set_on_recast(&self, id: u32, on_recast: bool) {
        let mut state = self.state.write();
        if on_recast {
            state.on_recast.insert(id);
        } else {
            state.on_recast.remove(&id);
        }
    }

    pub fn set_party_size(&self, size: i32) {
        self.state.write().party_size = size;
    }

    pub fn set_mounted(&self, mounted: bool) {
        self.state.write().mounted = mounted;
    }

    pub fn set_logged_in(&self, logged_in: bool) {
        self.state.write().logged_in = logged_in;
    }
}

impl HostGame for MockHost {
    fn is_logged_in(&self) -> bool {
        self.state.read().logged_in
    }

    fn is_mount_unlocked(&self, mount_id: u32) -> bool {
        self.state.read().unlocked.contains(&mount_id)
    }

    fn is_mount_usable(&self, mount_id: u32) -> bool {
        !self.state.read().on_recast.contains(&mount_id)
    }

    fn is_mounted(&self) -> bool {
        self.state.read().mounted
    }

    fn party_size(&self) -> i32 {
        self.state.read().party_size
    }

    fn is_pvp(&self) -> bool {
        self.state.read().pvp
    }

    fn is_flight_unlocked(&self) -> bool {
        self.state.read().flight_unlocked
    }

    fn zone_speed_tier_info(&self) -> (u8, u8) {
        self.state.read().speed_tier
    }
}
