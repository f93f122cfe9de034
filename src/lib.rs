//! # Football Stats
//!
//! Football player statistics served from a flat CSV file.
//!
//! ## Features
//!
//! - **Player Store**: load, save, add, find (with previous/next neighbours),
//!   update, delete, search and paginate over a whole-file CSV dataset
//! - **Backends**: CSV file backend and an in-memory backend for tests
//! - **Web UI**: listing, detail and comparison pages plus a JSON API
//!
//! ## Usage
//!
//! ```no_run
//! use football_stats::store::{CsvBackend, PlayerStore};
//!
//! let store = PlayerStore::new(CsvBackend::new("database/players.csv"));
//! let page = store.paginate(1, 5)?;
//! for player in &page.players {
//!     println!("{} ({})", player.name, player.team);
//! }
//! # Ok::<(), football_stats::StoreError>(())
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Player record and field identifiers
pub mod player;

/// CSV-backed player store
pub mod store;

/// Web UI server
pub mod servers;

/// Logger setup
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use player::{Player, PlayerField};
pub use servers::{WebUiConfig, WebUiServer};
pub use store::{
    CsvBackend, MemoryBackend, Page, PlayerBackend, PlayerLookup, PlayerStore, Result, StoreError,
};

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
