//! Mount roulette engine
//!
//! `MountRoulette` owns the catalog and the random source and ties the
//! selection pipeline to the two entry points the plugin shell drives: the
//! intercepted roulette action and the `/pmount <group>` command.

mod action;

pub use action::{cast_bar_override, ActionOutcome, ActionRequest, ActionType, CastBarOverride};

use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::catalog::{MountCatalog, MountRecord, MountSource};
use crate::character::CharacterConfig;
use crate::config::RouletteSettings;
use crate::error::{Result, RouletteError};
use crate::events::{EventCallback, EventHandler, RouletteEvent};
use crate::group::{DisplayType, GroupPolicy};
use crate::host::HostGame;
use crate::listing::{bulk_update, BulkTarget, ListFilter};
use crate::selection::{pick_mount, SelectionContext};

/// Long-lived roulette instance, one per plugin load
pub struct MountRoulette {
    catalog: MountCatalog,
    settings: RouletteSettings,
    rng: Mutex<SmallRng>,
    /// Event listeners
    events: Mutex<EventHandler>,
    /// Cast bar display requested by the last group command, consumed by the
    /// next intercepted action
    pending_display: Mutex<Option<DisplayType>>,
}

impl MountRoulette {
    /// Create a roulette over the given mount source
    pub fn new(source: impl MountSource + 'static, settings: RouletteSettings) -> Self {
        Self::with_rng(source, settings, SmallRng::from_entropy())
    }

    /// Create a roulette with a fixed seed, for reproducible draws
    pub fn with_seed(source: impl MountSource + 'static, settings: RouletteSettings, seed: u64) -> Self {
        Self::with_rng(source, settings, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(source: impl MountSource + 'static, settings: RouletteSettings, rng: SmallRng) -> Self {
        let catalog =
            MountCatalog::new(source).with_fast_mounts(settings.mounts.fast_mount_ids.iter().copied());
        Self {
            catalog,
            settings,
            rng: Mutex::new(rng),
            events: Mutex::new(EventHandler::new()),
            pending_display: Mutex::new(None),
        }
    }

    pub fn catalog(&self) -> &MountCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &RouletteSettings {
        &self.settings
    }

    /// Register a callback for roulette events. Listeners may call back
    /// into the roulette; one added during an emit sees the next event.
    pub fn on_event(&self, callback: EventCallback) {
        self.events.lock().subscribe(callback);
    }

    fn emit(&self, event: RouletteEvent) {
        let listeners = self.events.lock().listeners();
        for listener in listeners {
            listener(&event);
        }
    }

    /// Pick a mount from the named group, or `None` if the group does not
    /// exist or nothing in it can be summoned right now
    pub fn select_mount(&self, config: &CharacterConfig, group_name: &str, host: &dyn HostGame) -> Option<u32> {
        match config.group(group_name) {
            Some(group) => self.select_from_group(group, host),
            None => {
                log::warn!("Mount group '{}' not found", group_name);
                self.emit(RouletteEvent::GroupNotFound {
                    group: group_name.to_string(),
                });
                None
            }
        }
    }

    /// Refresh unlock state and pick a mount from `group` using the host's
    /// current party and zone state
    pub fn select_from_group(&self, group: &GroupPolicy, host: &dyn HostGame) -> Option<u32> {
        let ctx = SelectionContext::capture(host);
        self.select_mount_with_context(group, host, &ctx)
    }

    /// Pick a mount from `group` against an explicit context. Unlock and
    /// recast state still come from the host.
    pub fn select_mount_with_context(
        &self,
        group: &GroupPolicy,
        host: &dyn HostGame,
        ctx: &SelectionContext,
    ) -> Option<u32> {
        self.catalog.refresh_unlocked(host);
        let unlocked = self.catalog.unlocked_mounts();

        let picked = {
            let mut rng = self.rng.lock();
            pick_mount(group, &unlocked, ctx, |m| host.is_mount_usable(m.id), &mut *rng)
        };

        match picked {
            Some(mount_id) => {
                log::debug!("Group '{}' selected mount {}", group.name, mount_id);
                self.emit(RouletteEvent::MountSelected {
                    group: group.name.clone(),
                    mount_id,
                });
            }
            None => {
                log::debug!("Group '{}' has no usable mount", group.name);
                self.emit(RouletteEvent::NoMountAvailable {
                    group: group.name.clone(),
                });
            }
        }

        picked
    }

    /// Intercept an action about to be used.
    ///
    /// Roulette general actions are replaced by a mount from the group in the
    /// matching slot. Anything else, or a roulette whose slot is unset or
    /// yields no mount, is forwarded as is. A pending command display is
    /// consumed by this call even when the action passes through.
    pub fn on_use_action(
        &self,
        config: Option<&CharacterConfig>,
        host: &dyn HostGame,
        request: ActionRequest,
    ) -> ActionOutcome {
        let pending = self.pending_display.lock().take();

        let config = match config {
            Some(config) if !host.is_mounted() => config,
            _ => return ActionOutcome::unchanged(request),
        };

        let mut forwarded = request;
        if let Some(slot) = request.roulette_slot(&self.settings.actions) {
            if let Some(group_name) = config.slot(slot) {
                if let Some(mount_id) = self.select_mount(config, group_name, host) {
                    log::debug!("{:?} roulette replaced by mount {}", slot, mount_id);
                    forwarded = ActionRequest::mount(mount_id);
                }
            }
        }

        ActionOutcome {
            request: forwarded,
            cast_bar: cast_bar_override(request, forwarded, config, pending, &self.settings.actions),
        }
    }

    /// Handle `/pmount <group>`. Returns the mount to summon; the group's
    /// display type is applied to the cast bar of the next intercepted action.
    pub fn summon_from_command(&self, config: &CharacterConfig, host: &dyn HostGame, argument: &str) -> Result<u32> {
        let result = self.resolve_command(config, host, argument);
        if let Err(err) = &result {
            self.report_error(config, err);
        }
        result
    }

    fn resolve_command(&self, config: &CharacterConfig, host: &dyn HostGame, argument: &str) -> Result<u32> {
        if argument.trim().is_empty() {
            return Err(RouletteError::MissingGroupArgument);
        }

        let group = config
            .resolve_group_argument(argument)
            .ok_or_else(|| RouletteError::GroupNotFound(unquote(argument)))?;

        let mount_id = self
            .select_from_group(group, host)
            .ok_or_else(|| RouletteError::NoMountAvailable(group.name.clone()))?;

        *self.pending_display.lock() = Some(group.display_type);
        log::info!("Summoning mount {} from group '{}'", mount_id, group.name);
        Ok(mount_id)
    }

    fn report_error(&self, config: &CharacterConfig, err: &RouletteError) {
        log::error!("{}", err);
        if !config.suppress_chat_errors {
            self.emit(RouletteEvent::Error(err.to_string()));
        }
    }

    /// Display type waiting for the next intercepted action
    pub fn pending_display(&self) -> Option<DisplayType> {
        *self.pending_display.lock()
    }

    /// Flip a group's auto-enable setting against the current unlock state
    pub fn set_auto_enable_new_mounts(&self, group: &mut GroupPolicy, enable: bool, host: &dyn HostGame) -> bool {
        self.catalog.refresh_unlocked(host);
        group.set_auto_enable_new_mounts(enable, &self.catalog.unlocked_ids())
    }

    /// Catalog mounts matching `filter` for the given group, in catalog order
    pub fn list_mounts(&self, group: &GroupPolicy, filter: &ListFilter) -> Vec<MountRecord> {
        filter.apply(&self.catalog.all_mounts(), group)
    }

    /// Enable or disable a page of (or all of) the filtered mount list
    pub fn bulk_update(&self, group: &mut GroupPolicy, filter: &ListFilter, target: BulkTarget, enabled: bool) -> usize {
        let filtered = self.list_mounts(group, filter);
        bulk_update(group, &filtered, &self.settings.layout, target, enabled)
    }
}

fn unquote(argument: &str) -> String {
    let argument = crate::character::normalize_whitespace(argument);
    match argument.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner.to_string(),
        None => argument,
    }
}

impl std::fmt::Debug for MountRoulette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountRoulette")
            .field("catalog", &self.catalog)
            .field("settings", &self.settings)
            .field("pending_display", &self.pending_display())
            .finish_non_exhaustive()
    }
}
