//! Static mount metadata sources

/// Raw mount row from game data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountMetadata {
    pub id: u32,
    pub icon_id: u32,
    pub name: String,
    /// Additional riders beyond the owner (0 = single-seat)
    pub extra_seats: i32,
    /// Sort key in the mount guide. Zero marks rows that are not real mounts.
    pub ui_priority: u32,
}

impl MountMetadata {
    pub fn new(id: u32, icon_id: u32, name: impl Into<String>, extra_seats: i32, ui_priority: u32) -> Self {
        Self {
            id,
            icon_id,
            name: name.into(),
            extra_seats,
            ui_priority,
        }
    }

    /// Rows without an icon or guide priority are placeholders
    pub fn is_valid(&self) -> bool {
        self.ui_priority > 0 && self.icon_id != 0
    }
}

/// Source of static mount metadata (the game's mount sheet)
pub trait MountSource: Send + Sync {
    /// All rows, in any order. The catalog filters and sorts them.
    fn mounts(&self) -> Vec<MountMetadata>;
}

/// Vec-backed mount source
#[derive(Debug, Clone, Default)]
pub struct StaticMountSource {
    rows: Vec<MountMetadata>,
}

impl StaticMountSource {
    pub fn new(rows: Vec<MountMetadata>) -> Self {
        Self { rows }
    }

    /// Add a row
    pub fn with(mut self, row: MountMetadata) -> Self {
        self.rows.push(row);
        self
    }
}

impl MountSource for StaticMountSource {
    fn mounts(&self) -> Vec<MountMetadata> {
        self.rows.clone()
    }
}
