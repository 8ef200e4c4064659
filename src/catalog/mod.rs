//! Mount catalog
//!
//! Holds every known mount in mount-guide order together with a per-mount
//! `unlocked` flag. The static part is loaded once, on first access, and is
//! safe against two callers racing to initialize it (the first action use and
//! the first UI draw can arrive at the same time). The `unlocked` flags are
//! refreshed from the host on every selection.

mod source;

pub use source::{MountMetadata, MountSource, StaticMountSource};

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::host::HostGame;

/// Mounts with elevated ground speed in zones offering speed upgrades
pub const DEFAULT_FAST_MOUNT_IDS: &[u32] = &[71, 318];

/// One mount as the roulette sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRecord {
    pub id: u32,
    pub icon_id: u32,
    pub display_name: String,
    pub extra_seats: i32,
    pub is_fast: bool,
    pub unlocked: bool,
}

impl MountRecord {
    /// Build a locked record, mostly for tests
    pub fn new(id: u32, extra_seats: i32, is_fast: bool) -> Self {
        Self {
            id,
            icon_id: 0,
            display_name: String::new(),
            extra_seats,
            is_fast,
            unlocked: false,
        }
    }

    /// Display name with its first letter upper-cased
    pub fn capitalized_name(&self) -> String {
        let mut chars = self.display_name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Process-lifetime registry of all mounts
pub struct MountCatalog {
    source: Box<dyn MountSource>,
    fast_mount_ids: HashSet<u32>,
    records: OnceCell<RwLock<Vec<MountRecord>>>,
    unlocked_count: AtomicUsize,
    fast_mount_names: OnceCell<Vec<String>>,
}

impl MountCatalog {
    /// Create a catalog over the given source. Nothing is loaded yet.
    pub fn new(source: impl MountSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            fast_mount_ids: DEFAULT_FAST_MOUNT_IDS.iter().copied().collect(),
            records: OnceCell::new(),
            unlocked_count: AtomicUsize::new(0),
            fast_mount_names: OnceCell::new(),
        }
    }

    /// Override which mount ids are tagged as fast
    pub fn with_fast_mounts(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.fast_mount_ids = ids.into_iter().collect();
        self
    }

    /// Load the static mount list. Idempotent; concurrent first callers
    /// block until one of them has finished loading.
    pub fn initialize(&self) {
        self.records();
    }

    /// Whether the static list has been loaded
    pub fn is_initialized(&self) -> bool {
        self.records.get().is_some()
    }

    fn records(&self) -> &RwLock<Vec<MountRecord>> {
        self.records.get_or_init(|| {
            let records = self.load();
            log::info!("Mount catalog initialized with {} mounts", records.len());
            RwLock::new(records)
        })
    }

    fn load(&self) -> Vec<MountRecord> {
        let mut rows: Vec<MountMetadata> = self
            .source
            .mounts()
            .into_iter()
            .filter(MountMetadata::is_valid)
            .collect();
        rows.sort_by_key(|m| (m.ui_priority, m.id));

        rows.into_iter()
            .map(|m| MountRecord {
                is_fast: self.fast_mount_ids.contains(&m.id),
                id: m.id,
                icon_id: m.icon_id,
                display_name: m.name,
                extra_seats: m.extra_seats,
                unlocked: false,
            })
            .collect()
    }

    /// Re-read the unlock state of every mount. Skipped while logged out.
    pub fn refresh_unlocked(&self, host: &dyn HostGame) {
        if !host.is_logged_in() {
            log::debug!("Not logged in, skipping unlock refresh");
            return;
        }

        let mut records = self.records().write();
        let mut count = 0;
        for record in records.iter_mut() {
            record.unlocked = host.is_mount_unlocked(record.id);
            if record.unlocked {
                count += 1;
            }
        }

        self.unlocked_count.store(count, Ordering::Relaxed);
        log::debug!("Refreshed unlock state: {}/{} mounts unlocked", count, records.len());
    }

    /// Unlocked mounts in catalog order
    pub fn unlocked_mounts(&self) -> Vec<MountRecord> {
        self.records()
            .read()
            .iter()
            .filter(|m| m.unlocked)
            .cloned()
            .collect()
    }

    /// Every mount in catalog order, locked or not
    pub fn all_mounts(&self) -> Vec<MountRecord> {
        self.records().read().clone()
    }

    /// Unlocked ids, used as the universe for polarity flips
    pub fn unlocked_ids(&self) -> HashSet<u32> {
        self.records()
            .read()
            .iter()
            .filter(|m| m.unlocked)
            .map(|m| m.id)
            .collect()
    }

    /// Number of unlocked mounts as of the last refresh
    pub fn unlocked_count(&self) -> usize {
        self.unlocked_count.load(Ordering::Relaxed)
    }

    /// Look up a mount by id (cast bar icon and name)
    pub fn get(&self, id: u32) -> Option<MountRecord> {
        self.records().read().iter().find(|m| m.id == id).cloned()
    }

    /// Names of all fast mounts, for tooltips. Computed once.
    pub fn fast_mount_names(&self) -> &[String] {
        self.fast_mount_names.get_or_init(|| {
            self.records()
                .read()
                .iter()
                .filter(|m| m.is_fast)
                .map(MountRecord::capitalized_name)
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.records().read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for MountCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountCatalog")
            .field("initialized", &self.is_initialized())
            .field("unlocked_count", &self.unlocked_count())
            .finish()
    }
}
