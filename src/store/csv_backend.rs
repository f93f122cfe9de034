//! CSV file backend.
//!
//! Columns are located by header name, so extra columns are ignored and the
//! column order on disk does not matter when reading. Rating columns may be
//! missing entirely. Writing always uses [`PlayerField::ALL`] order. A leading
//! UTF-8 byte-order mark is tolerated on read and never written.

use csv::StringRecord;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::backend::PlayerBackend;
use super::{Result, StoreError};
use crate::player::{Player, PlayerField};

const BOM: char = '\u{feff}';

/// Player backend reading and writing a single CSV file
#[derive(Debug, Clone)]
pub struct CsvBackend {
    path: PathBuf,
}

impl CsvBackend {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the dataset is written to before it replaces the original.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Position of each field's column in the file header.
struct ColumnIndex {
    positions: Vec<(PlayerField, usize)>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches(BOM) } else { h })
            .map(str::trim)
            .collect();

        let mut positions = Vec::with_capacity(PlayerField::ALL.len());
        for field in PlayerField::ALL {
            match names.iter().position(|name| *name == field.as_str()) {
                Some(pos) => positions.push((field, pos)),
                // Rating columns are optional; their values load as absent
                None if PlayerField::RATINGS.contains(&field) => {
                    log::debug!("No '{}' column, ratings left empty", field)
                }
                None => return Err(StoreError::MissingColumn(field)),
            }
        }

        Ok(Self { positions })
    }

    /// `row` is the 1-based data row, used in error messages. Cells missing
    /// from a short row read as empty.
    fn parse(&self, record: &StringRecord, row: usize) -> Result<Player> {
        let mut player = Player::default();
        for (field, pos) in &self.positions {
            let value = record.get(*pos).unwrap_or("");
            player
                .set(*field, value)
                .map_err(|err| StoreError::Parse {
                    field: err.field,
                    row,
                    value: err.value,
                })?;
        }
        Ok(player)
    }
}

impl PlayerBackend for CsvBackend {
    fn load(&self) -> Result<Vec<Player>> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            log::debug!("{} has no header, treating as empty", self.path.display());
            return Ok(Vec::new());
        }
        let columns = ColumnIndex::from_headers(&headers)?;

        let mut players = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result?;
            players.push(columns.parse(&record, i + 1)?);
        }

        log::debug!(
            "Loaded {} players from {}",
            players.len(),
            self.path.display()
        );
        Ok(players)
    }

    fn save(&self, players: &[Player]) -> Result<()> {
        let temp_path = self.temp_path();
        {
            let mut writer = csv::Writer::from_path(&temp_path)?;
            writer.write_record(PlayerField::ALL.iter().map(|f| f.as_str()))?;
            for player in players {
                writer.write_record(player.to_row())?;
            }
            writer.flush()?;
        }
        fs::rename(&temp_path, &self.path)?;

        log::debug!("Saved {} players to {}", players.len(), self.path.display());
        Ok(())
    }
}
