//! Host game ports
//!
//! The roulette never touches game memory itself. Everything it needs to know
//! about the running client (unlock state, recast state, party and zone
//! information) is read through the `HostGame` trait, so the plugin shell can
//! back it with real game structures and tests can substitute `MockHost`.

mod mock;

pub use mock::MockHost;

/// Live game state consumed by the roulette
pub trait HostGame: Send + Sync {
    /// Whether a character is logged in. Unlock refreshes are skipped otherwise.
    fn is_logged_in(&self) -> bool {
        true
    }

    /// Whether the given mount is unlocked for the current character
    fn is_mount_unlocked(&self, mount_id: u32) -> bool;

    /// Whether the mount action can be used right now (not on recast).
    /// Queried on every selection, never cached.
    fn is_mount_usable(&self, _mount_id: u32) -> bool {
        true
    }

    /// Whether the player is already mounted or riding pillion
    fn is_mounted(&self) -> bool {
        false
    }

    /// Number of members in the main party (1 while solo)
    fn party_size(&self) -> i32 {
        1
    }

    /// Whether the current zone is a PvP zone
    fn is_pvp(&self) -> bool {
        false
    }

    /// Whether flying is unlocked in the current zone
    fn is_flight_unlocked(&self) -> bool {
        true
    }

    /// Zone mount speed info as `(max_tier, current_tier)`
    fn zone_speed_tier_info(&self) -> (u8, u8) {
        (0, 0)
    }
}

impl<T: HostGame + ?Sized> HostGame for &T {
    fn is_logged_in(&self) -> bool {
        (**self).is_logged_in()
    }

    fn is_mount_unlocked(&self, mount_id: u32) -> bool {
        (**self).is_mount_unlocked(mount_id)
    }

    fn is_mount_usable(&self, mount_id: u32) -> bool {
        (**self).is_mount_usable(mount_id)
    }

    fn is_mounted(&self) -> bool {
        (**self).is_mounted()
    }

    fn party_size(&self) -> i32 {
        (**self).party_size()
    }

    fn is_pvp(&self) -> bool {
        (**self).is_pvp()
    }

    fn is_flight_unlocked(&self) -> bool {
        (**self).is_flight_unlocked()
    }

    fn zone_speed_tier_info(&self) -> (u8, u8) {
        (**self).zone_speed_tier_info()
    }
}
