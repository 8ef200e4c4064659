//! Action interception types
//!
//! The plugin hooks the game's "use action" call. A roulette general action
//! may be swapped for a concrete mount action, and the cast bar may be told to
//! keep showing a roulette (or show the real mount) instead.

use crate::character::{CharacterConfig, RouletteSlot};
use crate::config::ActionSettings;
use crate::group::DisplayType;

/// Kind of action being used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    GeneralAction,
    Mount,
    /// Any other action category, by its raw game value
    Other(u8),
}

/// An action about to be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionRequest {
    pub action_type: ActionType,
    pub action_id: u32,
}

impl ActionRequest {
    pub fn general(action_id: u32) -> Self {
        Self {
            action_type: ActionType::GeneralAction,
            action_id,
        }
    }

    pub fn mount(mount_id: u32) -> Self {
        Self {
            action_type: ActionType::Mount,
            action_id: mount_id,
        }
    }

    /// Roulette slot this request triggers, if it is one of the roulette actions
    pub fn roulette_slot(&self, actions: &ActionSettings) -> Option<RouletteSlot> {
        if self.action_type != ActionType::GeneralAction {
            return None;
        }
        if self.action_id == actions.normal_roulette {
            Some(RouletteSlot::Normal)
        } else if self.action_id == actions.flying_roulette {
            Some(RouletteSlot::Flying)
        } else {
            None
        }
    }
}

/// What the cast bar shows for the next mount action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastBarOverride {
    NormalRoulette,
    FlyingRoulette,
    /// The actual mount being summoned
    PlainMount,
}

impl CastBarOverride {
    /// Cast bar for a group's display type; `Show` leaves the cast bar alone
    pub fn for_display(display: DisplayType) -> Option<Self> {
        match display {
            DisplayType::Grounded => Some(CastBarOverride::NormalRoulette),
            DisplayType::Flying => Some(CastBarOverride::FlyingRoulette),
            DisplayType::Show => None,
        }
    }

    fn for_slot(slot: RouletteSlot) -> Self {
        match slot {
            RouletteSlot::Normal => CastBarOverride::NormalRoulette,
            RouletteSlot::Flying => CastBarOverride::FlyingRoulette,
        }
    }
}

/// Result of intercepting an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Action to forward to the game
    pub request: ActionRequest,
    pub cast_bar: Option<CastBarOverride>,
}

impl ActionOutcome {
    pub fn unchanged(request: ActionRequest) -> Self {
        Self {
            request,
            cast_bar: None,
        }
    }
}

/// Decide the cast bar for an intercepted action.
///
/// A pending override from a group command wins. Otherwise only the roulette
/// actions are affected: the reveal setting shows the plain mount, and a
/// substituted roulette keeps its own roulette on the cast bar.
pub fn cast_bar_override(
    original: ActionRequest,
    forwarded: ActionRequest,
    config: &CharacterConfig,
    pending: Option<DisplayType>,
    actions: &ActionSettings,
) -> Option<CastBarOverride> {
    if let Some(display) = pending {
        return CastBarOverride::for_display(display);
    }

    let slot = original.roulette_slot(actions)?;
    let reveal = match slot {
        RouletteSlot::Normal => config.reveal_mounts_normal,
        RouletteSlot::Flying => config.reveal_mounts_flying,
    };

    if reveal {
        Some(CastBarOverride::PlainMount)
    } else if forwarded.action_type != original.action_type {
        Some(CastBarOverride::for_slot(slot))
    } else {
        None
    }
}
