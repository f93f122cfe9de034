//! Load/save capability behind the player store.

use std::sync::{Arc, Mutex};

use super::Result;
use crate::player::Player;

/// Whole-dataset persistence. `load` returns every record in stored order and
/// `save` replaces the stored dataset with exactly the given records.
pub trait PlayerBackend: Send + Sync {
    fn load(&self) -> Result<Vec<Player>>;

    fn save(&self, players: &[Player]) -> Result<()>;
}

impl<T: PlayerBackend + ?Sized> PlayerBackend for Box<T> {
    fn load(&self) -> Result<Vec<Player>> {
        (**self).load()
    }

    fn save(&self, players: &[Player]) -> Result<()> {
        (**self).save(players)
    }
}

impl<T: PlayerBackend + ?Sized> PlayerBackend for Arc<T> {
    fn load(&self) -> Result<Vec<Player>> {
        (**self).load()
    }

    fn save(&self, players: &[Player]) -> Result<()> {
        (**self).save(players)
    }
}

/// In-memory backend, used by tests and as a stand-in for the CSV file.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    players: Mutex<Vec<Player>>,
    saves: Mutex<usize>,
}

impl MemoryBackend {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players: Mutex::new(players),
            saves: Mutex::new(0),
        }
    }

    /// Snapshot of the current contents.
    pub fn players(&self) -> Vec<Player> {
        self.players
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        *self
            .saves
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PlayerBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<Player>> {
        Ok(self.players())
    }

    fn save(&self, players: &[Player]) -> Result<()> {
        *self
            .players
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = players.to_vec();
        *self
            .saves
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) += 1;
        Ok(())
    }
}
