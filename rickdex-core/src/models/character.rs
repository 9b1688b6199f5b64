//! Character model types.
//!
//! This module contains the catalog's item record and its enumerations:
//! - [`Character`] - One catalog entry
//! - [`CharacterStatus`] - Life status, also the filterable dimension
//! - [`Gender`] - Gender
//! - [`LocationRef`] - Named reference to an origin or location

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Character
// ============================================================================

/// A single character record from the catalog.
///
/// Identity is the `id` field; every other field is descriptive and never
/// changes after the record is created upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Stable unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Life status.
    pub status: CharacterStatus,
    /// Species label.
    pub species: String,
    /// Free-text subtype, often empty.
    #[serde(rename = "type")]
    pub kind: String,
    /// Gender.
    pub gender: Gender,
    /// Where the character is from.
    pub origin: LocationRef,
    /// Last known location.
    pub location: LocationRef,
    /// Portrait image URL.
    pub image: String,
    /// Episode URLs the character appears in.
    pub episode: Vec<String>,
    /// Canonical URL of this record.
    pub url: String,
    /// When the record was created upstream.
    pub created: DateTime<Utc>,
}

// ============================================================================
// Character Status
// ============================================================================

/// Life status of a character.
///
/// This is the dimension the catalog can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterStatus {
    /// Alive.
    Alive,
    /// Dead.
    Dead,
    /// Status unknown.
    #[serde(rename = "unknown")]
    Unknown,
}

impl CharacterStatus {
    /// Returns the raw value this status carries on the wire.
    pub fn wire_value(&self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns all statuses, in display order.
    pub fn all() -> &'static [CharacterStatus] {
        &[Self::Alive, Self::Dead, Self::Unknown]
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Gender
// ============================================================================

/// Gender of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Female.
    Female,
    /// Male.
    Male,
    /// Gender unknown.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Gender {
    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Location Reference
// ============================================================================

/// Named reference to a location resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    /// Location name.
    pub name: String,
    /// Location resource URL, empty when the location is unknown.
    pub url: String,
}

// ============================================================================
// Tests
// ============================================================================
