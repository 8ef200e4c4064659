//! Per-character configuration
//!
//! Each character owns its mount groups and the two roulette slots (normal and
//! flying Mount Roulette) that point at them by name. Group names are unique
//! ignoring case, and there is always at least one group.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouletteError};
use crate::group::{names_equal, GroupPolicy};

/// Name of the group every new character starts with
pub const DEFAULT_GROUP_NAME: &str = "Default";

/// Which roulette action a slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouletteSlot {
    Normal,
    Flying,
}

impl RouletteSlot {
    pub const ALL: [RouletteSlot; 2] = [RouletteSlot::Normal, RouletteSlot::Flying];
}

/// Collapse runs of whitespace into one space and trim the ends
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Settings for one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CharacterConfig {
    pub groups: Vec<GroupPolicy>,
    pub mount_roulette_group: Option<String>,
    pub flying_mount_roulette_group: Option<String>,
    /// Show the real mount in the cast bar for the normal roulette
    pub reveal_mounts_normal: bool,
    /// Show the real mount in the cast bar for the flying roulette
    pub reveal_mounts_flying: bool,
    pub suppress_chat_errors: bool,
    pub enable_flying_roulette_button: bool,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterConfig {
    /// Fresh config with a single "Default" group and no slot assigned
    pub fn new() -> Self {
        Self {
            groups: vec![GroupPolicy::new(DEFAULT_GROUP_NAME)],
            mount_roulette_group: None,
            flying_mount_roulette_group: None,
            reveal_mounts_normal: false,
            reveal_mounts_flying: false,
            suppress_chat_errors: false,
            enable_flying_roulette_button: true,
        }
    }

    /// Parse a persisted record
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: CharacterConfig =
            serde_json::from_str(json).map_err(|e| RouletteError::Config(e.to_string()))?;
        if config.groups.is_empty() {
            log::warn!("Character config has no groups, adding '{}'", DEFAULT_GROUP_NAME);
            config.groups.push(GroupPolicy::new(DEFAULT_GROUP_NAME));
        }
        Ok(config)
    }

    /// Serialize for the config store
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RouletteError::Config(e.to_string()))
    }

    /// Whether the user created groups beyond the initial one
    pub fn has_non_default_groups(&self) -> bool {
        self.groups.len() > 1
    }

    /// Case-insensitive group lookup
    pub fn group(&self, name: &str) -> Option<&GroupPolicy> {
        self.groups.iter().find(|g| g.matches_name(name))
    }

    pub fn group_mut(&mut self, name: &str) -> Option<&mut GroupPolicy> {
        self.groups.iter_mut().find(|g| g.matches_name(name))
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    /// Group name assigned to a roulette slot
    pub fn slot(&self, slot: RouletteSlot) -> Option<&str> {
        match slot {
            RouletteSlot::Normal => self.mount_roulette_group.as_deref(),
            RouletteSlot::Flying => self.flying_mount_roulette_group.as_deref(),
        }
    }

    fn slot_mut(&mut self, slot: RouletteSlot) -> &mut Option<String> {
        match slot {
            RouletteSlot::Normal => &mut self.mount_roulette_group,
            RouletteSlot::Flying => &mut self.flying_mount_roulette_group,
        }
    }

    /// Assign a group to a slot, or clear it with `None`
    pub fn set_slot(&mut self, slot: RouletteSlot, group: Option<&str>) -> Result<()> {
        let value = match group {
            Some(name) => Some(
                self.group(name)
                    .map(|g| g.name.clone())
                    .ok_or_else(|| RouletteError::GroupNotFound(name.to_string()))?,
            ),
            None => None,
        };
        *self.slot_mut(slot) = value;
        Ok(())
    }

    /// Group assigned to a slot, if the slot is set and the group exists
    pub fn slot_group(&self, slot: RouletteSlot) -> Option<&GroupPolicy> {
        self.slot(slot).and_then(|name| self.group(name))
    }

    /// Normalize a candidate name and check it against sibling groups.
    /// `current` is the group being renamed, which may keep its own name.
    pub fn validate_group_name(&self, name: &str, current: Option<&str>) -> Result<String> {
        let name = normalize_whitespace(name);
        if name.is_empty() {
            return Err(RouletteError::EmptyGroupName);
        }

        let taken = self.groups.iter().any(|g| {
            g.matches_name(&name) && !current.is_some_and(|c| names_equal(&g.name, c))
        });
        if taken {
            return Err(RouletteError::DuplicateGroupName(name));
        }

        Ok(name)
    }

    /// Add an empty group
    pub fn add_group(&mut self, name: &str) -> Result<&mut GroupPolicy> {
        let name = self.validate_group_name(name, None)?;
        log::info!("Adding mount group '{}'", name);
        self.groups.push(GroupPolicy::new(name));
        let index = self.groups.len() - 1;
        Ok(&mut self.groups[index])
    }

    /// Rename a group and repoint any slot that referenced it
    pub fn rename_group(&mut self, current: &str, new_name: &str) -> Result<()> {
        let index = self
            .groups
            .iter()
            .position(|g| g.matches_name(current))
            .ok_or_else(|| RouletteError::GroupNotFound(current.to_string()))?;
        let new_name = self.validate_group_name(new_name, Some(current))?;

        let group = &mut self.groups[index];
        let old_name = std::mem::replace(&mut group.name, new_name.clone());
        for slot in RouletteSlot::ALL {
            let reference = self.slot_mut(slot);
            if reference.as_deref().is_some_and(|r| names_equal(r, &old_name)) {
                *reference = Some(new_name.clone());
            }
        }

        log::info!("Renamed mount group '{}' to '{}'", old_name, new_name);
        Ok(())
    }

    /// Remove a group; slots pointing at it are cleared. The last group
    /// cannot be deleted.
    pub fn delete_group(&mut self, name: &str) -> Result<GroupPolicy> {
        let index = self
            .groups
            .iter()
            .position(|g| g.matches_name(name))
            .ok_or_else(|| RouletteError::GroupNotFound(name.to_string()))?;

        if self.groups.len() == 1 {
            return Err(RouletteError::LastGroup);
        }

        let removed = self.groups.remove(index);
        for slot in RouletteSlot::ALL {
            let reference = self.slot_mut(slot);
            if reference.as_deref().is_some_and(|r| names_equal(r, &removed.name)) {
                log::info!("Clearing {:?} roulette slot that used '{}'", slot, removed.name);
                *reference = None;
            }
        }

        log::info!("Deleted mount group '{}'", removed.name);
        Ok(removed)
    }

    /// Take over another character's groups and slot assignments
    pub fn copy_from(&mut self, other: &CharacterConfig) {
        self.groups = other.groups.clone();
        self.mount_roulette_group = other.mount_roulette_group.clone();
        self.flying_mount_roulette_group = other.flying_mount_roulette_group.clone();
    }

    /// Resolve a `/pmount` argument: whitespace is normalized, and surrounding
    /// double quotes are stripped if the quoted form matches nothing.
    pub fn resolve_group_argument(&self, argument: &str) -> Option<&GroupPolicy> {
        let argument = normalize_whitespace(argument);
        if let Some(group) = self.group(&argument) {
            return Some(group);
        }

        argument
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .and_then(|unquoted| self.group(unquoted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(names: &[&str]) -> CharacterConfig {
        let mut config = CharacterConfig::new();
        for name in names {
            config.add_group(name).unwrap();
        }
        config
    }

    #[test]
    fn test_new_config_has_default_group() {
        let config = CharacterConfig::new();
        assert_eq!(config.group_names(), vec![DEFAULT_GROUP_NAME]);
        assert!(!config.has_non_default_groups());
        assert!(config.slot(RouletteSlot::Normal).is_none());
        assert!(config.enable_flying_roulette_button);
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Big \t  Birds \n"), "Big Birds");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_group_lookup_ignores_case() {
        let config = config_with(&["Fliers"]);
        assert!(config.group("fliers").is_some());
        assert!(config.group("FLIERS").is_some());
        assert!(config.group("fliers2").is_none());
    }

    #[test]
    fn test_add_duplicate_rejected_before_mutation() {
        let mut config = config_with(&["Fliers"]);

        let err = config.add_group("  fLiErS ").unwrap_err();
        assert_eq!(err, RouletteError::DuplicateGroupName("fLiErS".to_string()));
        assert_eq!(config.groups.len(), 2);

        assert_eq!(config.add_group(" \t").unwrap_err(), RouletteError::EmptyGroupName);
        assert_eq!(config.groups.len(), 2);
    }

    #[test]
    fn test_add_group_normalizes_name() {
        let mut config = CharacterConfig::new();
        let group = config.add_group("  Party   Mounts ").unwrap();
        assert_eq!(group.name, "Party Mounts");
        assert!(config.has_non_default_groups());
    }

    #[test]
    fn test_rename_propagates_to_slots() {
        let mut config = CharacterConfig::new();
        config.set_slot(RouletteSlot::Normal, Some("Default")).unwrap();
        config.set_slot(RouletteSlot::Flying, Some("Default")).unwrap();

        config.rename_group("Default", "Primary").unwrap();

        assert_eq!(config.mount_roulette_group.as_deref(), Some("Primary"));
        assert_eq!(config.flying_mount_roulette_group.as_deref(), Some("Primary"));
        assert!(config.group("Primary").is_some());
        assert!(config.group("Default").is_none());
    }

    #[test]
    fn test_rename_leaves_other_slots() {
        let mut config = config_with(&["Fliers"]);
        config.set_slot(RouletteSlot::Normal, Some("Default")).unwrap();
        config.set_slot(RouletteSlot::Flying, Some("Fliers")).unwrap();

        config.rename_group("Fliers", "Sky").unwrap();

        assert_eq!(config.slot(RouletteSlot::Normal), Some("Default"));
        assert_eq!(config.slot(RouletteSlot::Flying), Some("Sky"));
    }

    #[test]
    fn test_rename_to_own_name_with_different_case() {
        let mut config = config_with(&["Fliers"]);
        config.rename_group("Fliers", "FLIERS").unwrap();
        assert_eq!(config.groups[1].name, "FLIERS");
    }

    #[test]
    fn test_rename_validation() {
        let mut config = config_with(&["Fliers"]);
        assert_eq!(
            config.rename_group("Fliers", "default").unwrap_err(),
            RouletteError::DuplicateGroupName("default".to_string())
        );
        assert_eq!(
            config.rename_group("Missing", "Other").unwrap_err(),
            RouletteError::GroupNotFound("Missing".to_string())
        );
        assert_eq!(config.groups[1].name, "Fliers");
    }

    #[test]
    fn test_rename_missing_group_to_taken_name() {
        let mut config = config_with(&["Fliers"]);
        assert_eq!(
            config.rename_group("Missing", "fliers").unwrap_err(),
            RouletteError::GroupNotFound("Missing".to_string())
        );
    }

    #[test]
    fn test_delete_clears_slot() {
        let mut config = config_with(&["Fliers"]);
        config.set_slot(RouletteSlot::Normal, Some("Default")).unwrap();
        config.set_slot(RouletteSlot::Flying, Some("Fliers")).unwrap();

        let removed = config.delete_group("fliers").unwrap();

        assert_eq!(removed.name, "Fliers");
        assert_eq!(config.slot(RouletteSlot::Flying), None);
        assert_eq!(config.slot(RouletteSlot::Normal), Some("Default"));
    }

    #[test]
    fn test_delete_last_group_rejected() {
        let mut config = CharacterConfig::new();
        assert_eq!(config.delete_group("Default").unwrap_err(), RouletteError::LastGroup);
        assert_eq!(config.groups.len(), 1);

        assert!(matches!(
            config.delete_group("nope"),
            Err(RouletteError::GroupNotFound(_))
        ));
    }

    #[test]
    fn test_set_slot_requires_existing_group() {
        let mut config = CharacterConfig::new();
        assert!(config.set_slot(RouletteSlot::Normal, Some("Nope")).is_err());

        config.set_slot(RouletteSlot::Normal, Some("default")).unwrap();
        assert_eq!(config.slot(RouletteSlot::Normal), Some("Default"));
        assert!(config.slot_group(RouletteSlot::Normal).is_some());

        config.set_slot(RouletteSlot::Normal, None).unwrap();
        assert!(config.slot_group(RouletteSlot::Normal).is_none());
    }

    #[test]
    fn test_resolve_group_argument() {
        let config = config_with(&["Big Birds"]);

        assert_eq!(config.resolve_group_argument("big   birds").unwrap().name, "Big Birds");
        assert_eq!(config.resolve_group_argument("\"Big Birds\"").unwrap().name, "Big Birds");
        assert!(config.resolve_group_argument("\"Small Birds\"").is_none());
        assert!(config.resolve_group_argument("").is_none());
    }

    #[test]
    fn test_copy_from() {
        let source = {
            let mut c = config_with(&["A", "B"]);
            c.set_slot(RouletteSlot::Flying, Some("B")).unwrap();
            c
        };
        let mut target = CharacterConfig::new();
        target.suppress_chat_errors = true;

        target.copy_from(&source);

        assert_eq!(target.group_names(), vec!["Default", "A", "B"]);
        assert_eq!(target.slot(RouletteSlot::Flying), Some("B"));
        assert!(target.suppress_chat_errors);
    }

    #[test]
    fn test_json_round_trip_shape() {
        let mut config = config_with(&["Fliers"]);
        config.set_slot(RouletteSlot::Normal, Some("Fliers")).unwrap();
        config.group_mut("Fliers").unwrap().set_enabled(12, false);

        let json = config.to_json().unwrap();
        assert!(json.contains("\"MountRouletteGroup\": \"Fliers\""));
        assert!(json.contains("\"FlyingMountRouletteGroup\": null"));
        assert!(json.contains("\"Groups\""));

        let parsed = CharacterConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_json_restores_group_invariant() {
        let parsed = CharacterConfig::from_json(r#"{"Groups": []}"#).unwrap();
        assert_eq!(parsed.group_names(), vec![DEFAULT_GROUP_NAME]);

        assert!(matches!(
            CharacterConfig::from_json("not json"),
            Err(RouletteError::Config(_))
        ));
    }
}
