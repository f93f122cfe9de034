//! CSV-backed player store.
//!
//! Every operation is a whole-dataset transaction: load everything from the
//! backend, work on the in-memory list, and write everything back when the
//! list changed. Nothing is cached between calls, and concurrent writers are
//! not coordinated (the last save wins).

pub mod backend;
pub mod csv_backend;
mod error;
pub mod pagination;

use serde::Serialize;

use crate::player::{Player, PlayerField};

pub use backend::{MemoryBackend, PlayerBackend};
pub use csv_backend::CsvBackend;
pub use error::{Result, StoreError};
pub use pagination::Page;

/// A looked-up player with its neighbours in stored order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerLookup {
    pub player: Player,
    pub prev: Option<Player>,
    pub next: Option<Player>,
}

/// Player store over an injected backend.
pub struct PlayerStore<B> {
    backend: B,
}

impl<B: PlayerBackend> PlayerStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// All players in stored order.
    pub fn load_all(&self) -> Result<Vec<Player>> {
        self.backend.load()
    }

    /// Replace the stored dataset with `players`, in the given order.
    pub fn save_all(&self, players: &[Player]) -> Result<()> {
        self.backend.save(players)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.load_all()?.len())
    }

    /// Append a player. Names are not checked for duplicates.
    pub fn add(&self, player: Player) -> Result<()> {
        let mut players = self.load_all()?;
        log::info!("Adding player '{}'", player.name);
        players.push(player);
        self.save_all(&players)
    }

    /// First player whose name matches case-insensitively, with the players
    /// stored right before and after it.
    pub fn find_by_name(&self, name: &str) -> Result<Option<PlayerLookup>> {
        let mut players = self.load_all()?;
        let Some(index) = players.iter().position(|p| p.has_name(name)) else {
            log::debug!("No player named '{}'", name);
            return Ok(None);
        };

        let next = if index + 1 < players.len() {
            Some(players.remove(index + 1))
        } else {
            None
        };
        let player = players.remove(index);
        let prev = index.checked_sub(1).map(|i| players.swap_remove(i));

        Ok(Some(PlayerLookup { player, prev, next }))
    }

    /// Apply `changes` (field name, new value) to the first player matching
    /// `name`. Field names are resolved before the store is read, so an
    /// unknown field, or two names for the same field, fails without touching
    /// anything. Returns whether a player matched.
    pub fn update<I, K, V>(&self, name: &str, changes: I) -> Result<bool>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let changes = changes
            .into_iter()
            .map(|(key, value)| -> Result<(PlayerField, String)> {
                Ok((key.as_ref().parse()?, value.into()))
            })
            .collect::<Result<Vec<(PlayerField, String)>>>()?;

        for (i, (field, _)) in changes.iter().enumerate() {
            if changes[..i].iter().any(|(seen, _)| seen == field) {
                return Err(StoreError::DuplicateField(*field));
            }
        }

        self.update_fields(name, &changes)
    }

    /// Typed form of [`PlayerStore::update`].
    pub fn update_fields(&self, name: &str, changes: &[(PlayerField, String)]) -> Result<bool> {
        let mut players = self.load_all()?;
        let Some(player) = players.iter_mut().find(|p| p.has_name(name)) else {
            log::debug!("Update skipped, no player named '{}'", name);
            return Ok(false);
        };

        let mut updated = player.clone();
        for (field, value) in changes {
            updated.set(*field, value)?;
        }
        *player = updated;

        log::info!("Updating player '{}' ({} fields)", name, changes.len());
        self.save_all(&players)?;
        Ok(true)
    }

    /// Remove the first player matching `name`. Returns whether one was removed.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let mut players = self.load_all()?;
        let Some(index) = players.iter().position(|p| p.has_name(name)) else {
            log::debug!("Delete skipped, no player named '{}'", name);
            return Ok(false);
        };

        let removed = players.remove(index);
        log::info!("Deleting player '{}'", removed.name);
        self.save_all(&players)?;
        Ok(true)
    }

    /// One page of players; see [`Page::from_records`] for the slicing rules.
    pub fn paginate(&self, page: i64, per_page: i64) -> Result<Page> {
        Ok(Page::from_records(self.load_all()?, page, per_page))
    }

    /// Players whose name or team starts with `query`, ignoring case.
    /// A blank query matches everyone.
    pub fn search(&self, query: &str) -> Result<Vec<Player>> {
        let query = query.trim().to_lowercase();
        let players = self.load_all()?;
        if query.is_empty() {
            return Ok(players);
        }

        Ok(players
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().starts_with(&query)
                    || p.team.to_lowercase().starts_with(&query)
            })
            .collect())
    }
}
