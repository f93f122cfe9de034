//! Player record and its closed set of fields.
//!
//! Every column of the backing CSV maps onto one [`PlayerField`] variant. The
//! declaration order of [`PlayerField::ALL`] is the header order used when the
//! store is written back, so it must not be reshuffled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::store::StoreError;

/// One player's statistics, one row of the backing store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Player {
    pub name: String,
    pub team: String,
    pub season: i32,
    pub photo: String,
    pub position: String,
    pub age: i32,
    /// Height in centimetres
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,

    // Ratings (0-100); absent when the source data had no value
    pub physical: Option<i32>,
    pub speed: Option<i32>,
    pub vision: Option<i32>,
    pub attacking: Option<i32>,
    pub technical: Option<i32>,
    pub aerial: Option<i32>,
    pub defending: Option<i32>,
    pub mental: Option<i32>,

    pub goals: i32,
    pub assists: i32,
    pub matches: i32,
    pub minutes: i32,
}

/// Closed set of player field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerField {
    Name,
    Team,
    Season,
    Photo,
    Position,
    Age,
    Height,
    Weight,
    Physical,
    Speed,
    Vision,
    Attacking,
    Technical,
    Aerial,
    Defending,
    Mental,
    Goals,
    Assists,
    Matches,
    Minutes,
}

impl PlayerField {
    /// All fields in header order.
    pub const ALL: [PlayerField; 20] = [
        PlayerField::Name,
        PlayerField::Team,
        PlayerField::Season,
        PlayerField::Photo,
        PlayerField::Position,
        PlayerField::Age,
        PlayerField::Height,
        PlayerField::Weight,
        PlayerField::Physical,
        PlayerField::Speed,
        PlayerField::Vision,
        PlayerField::Attacking,
        PlayerField::Technical,
        PlayerField::Aerial,
        PlayerField::Defending,
        PlayerField::Mental,
        PlayerField::Goals,
        PlayerField::Assists,
        PlayerField::Matches,
        PlayerField::Minutes,
    ];

    /// Rating attributes, in the order they are shown on the detail page.
    pub const RATINGS: [PlayerField; 8] = [
        PlayerField::Physical,
        PlayerField::Speed,
        PlayerField::Vision,
        PlayerField::Attacking,
        PlayerField::Technical,
        PlayerField::Aerial,
        PlayerField::Defending,
        PlayerField::Mental,
    ];

    pub const MATCH_STATS: [PlayerField; 4] = [
        PlayerField::Goals,
        PlayerField::Assists,
        PlayerField::Matches,
        PlayerField::Minutes,
    ];

    /// Column name as it appears in the CSV header.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerField::Name => "Name",
            PlayerField::Team => "Team",
            PlayerField::Season => "Season",
            PlayerField::Photo => "Photo",
            PlayerField::Position => "Position",
            PlayerField::Age => "Age",
            PlayerField::Height => "Height",
            PlayerField::Weight => "Weight",
            PlayerField::Physical => "Physical",
            PlayerField::Speed => "Speed",
            PlayerField::Vision => "Vision",
            PlayerField::Attacking => "Attacking",
            PlayerField::Technical => "Technical",
            PlayerField::Aerial => "Aerial",
            PlayerField::Defending => "Defending",
            PlayerField::Mental => "Mental",
            PlayerField::Goals => "Goals",
            PlayerField::Assists => "Assists",
            PlayerField::Matches => "Matches",
            PlayerField::Minutes => "Minutes",
        }
    }
}

impl fmt::Display for PlayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerField {
    type Err = StoreError;

    /// Field names are matched case-insensitively; anything outside the closed
    /// set is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PlayerField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StoreError::UnknownField(s.to_string()))
    }
}

/// Why a piece of text could not be coerced into a field's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    pub field: PlayerField,
    pub value: String,
}

impl Player {
    /// Case-insensitive comparison against the player's name.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Text form of a field, exactly as it is written to CSV.
    pub fn get(&self, field: PlayerField) -> String {
        match field {
            PlayerField::Name => self.name.clone(),
            PlayerField::Team => self.team.clone(),
            PlayerField::Season => self.season.to_string(),
            PlayerField::Photo => self.photo.clone(),
            PlayerField::Position => self.position.clone(),
            PlayerField::Age => self.age.to_string(),
            PlayerField::Height => self.height.to_string(),
            PlayerField::Weight => self.weight.to_string(),
            PlayerField::Physical => rating_text(self.physical),
            PlayerField::Speed => rating_text(self.speed),
            PlayerField::Vision => rating_text(self.vision),
            PlayerField::Attacking => rating_text(self.attacking),
            PlayerField::Technical => rating_text(self.technical),
            PlayerField::Aerial => rating_text(self.aerial),
            PlayerField::Defending => rating_text(self.defending),
            PlayerField::Mental => rating_text(self.mental),
            PlayerField::Goals => self.goals.to_string(),
            PlayerField::Assists => self.assists.to_string(),
            PlayerField::Matches => self.matches.to_string(),
            PlayerField::Minutes => self.minutes.to_string(),
        }
    }

    /// Coerce `value` to the field's type and store it. On failure the player
    /// is left unchanged.
    pub fn set(&mut self, field: PlayerField, value: &str) -> Result<(), CoercionError> {
        let fail = || CoercionError {
            field,
            value: value.to_string(),
        };

        match field {
            PlayerField::Name => self.name = value.to_string(),
            PlayerField::Team => self.team = value.to_string(),
            PlayerField::Photo => self.photo = value.to_string(),
            PlayerField::Position => self.position = value.to_string(),
            PlayerField::Season => self.season = value.trim().parse().map_err(|_| fail())?,
            PlayerField::Age => self.age = parse_int(value).ok_or_else(fail)?,
            PlayerField::Height => self.height = parse_float(value).ok_or_else(fail)?,
            PlayerField::Weight => self.weight = parse_float(value).ok_or_else(fail)?,
            PlayerField::Physical => self.physical = parse_rating(value).ok_or_else(fail)?,
            PlayerField::Speed => self.speed = parse_rating(value).ok_or_else(fail)?,
            PlayerField::Vision => self.vision = parse_rating(value).ok_or_else(fail)?,
            PlayerField::Attacking => self.attacking = parse_rating(value).ok_or_else(fail)?,
            PlayerField::Technical => self.technical = parse_rating(value).ok_or_else(fail)?,
            PlayerField::Aerial => self.aerial = parse_rating(value).ok_or_else(fail)?,
            PlayerField::Defending => self.defending = parse_rating(value).ok_or_else(fail)?,
            PlayerField::Mental => self.mental = parse_rating(value).ok_or_else(fail)?,
            PlayerField::Goals => self.goals = parse_int(value).ok_or_else(fail)?,
            PlayerField::Assists => self.assists = parse_int(value).ok_or_else(fail)?,
            PlayerField::Matches => self.matches = parse_int(value).ok_or_else(fail)?,
            PlayerField::Minutes => self.minutes = parse_int(value).ok_or_else(fail)?,
        }
        Ok(())
    }

    /// Row of CSV cells in header order.
    pub fn to_row(&self) -> Vec<String> {
        PlayerField::ALL.iter().map(|field| self.get(*field)).collect()
    }
}

fn rating_text(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_int(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Only finite numbers; `NaN` and `inf` have no JSON form.
fn parse_float(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// `Some(None)` for an empty cell, `None` when the text is not a number.
fn parse_rating(value: &str) -> Option<Option<i32>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(None)
    } else {
        trimmed.parse().ok().map(Some)
    }
}
