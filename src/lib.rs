//! Mount Roulette
//!
//! Mount selection and filtering engine for a game-client plugin that
//! replaces the built-in "Mount Roulette" actions with user-defined mount
//! groups.
//!
//! - `catalog` - every known mount, loaded once, with live unlock flags
//! - `group` - per-group policy and the enable/disable mutation API
//! - `character` - a character's groups and roulette slot assignments
//! - `selection` - availability filter, speed/seat narrowing, random pick
//! - `roulette` - the engine tying it together for actions and commands
//!
//! The game itself is reached only through the `HostGame` trait.

pub mod catalog;
pub mod character;
pub mod config;
pub mod error;
pub mod events;
pub mod group;
pub mod host;
pub mod listing;
pub mod roulette;
pub mod selection;

// Re-export commonly used types
pub use catalog::{MountCatalog, MountMetadata, MountRecord, MountSource, StaticMountSource};
pub use character::{CharacterConfig, RouletteSlot, DEFAULT_GROUP_NAME};
pub use config::RouletteSettings;
pub use error::{Result, RouletteError};
pub use events::{EventCallback, EventHandler, RouletteEvent};
pub use group::{DisplayType, FastMode, GroupPolicy, SeatPolicy};
pub use host::{HostGame, MockHost};
pub use listing::{BulkTarget, ListFilter, PageLayout};
pub use roulette::{ActionOutcome, ActionRequest, ActionType, CastBarOverride, MountRoulette};
pub use selection::{select, SelectionContext};
