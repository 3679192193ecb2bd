//! Location metadata: GPS coordinates and campus tags for map rendering.
//!
//! Metadata is keyed by location name but is independent of the graph:
//! graph nodes without metadata and metadata without graph nodes are both
//! allowed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::error::StorageError;
use super::json_file::{read_json, write_json_atomic};

/// Errors from location metadata operations.
#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Location with this name already exists: {name}")]
    Duplicate { name: String },

    #[error("Location not found: {name}")]
    NotFound { name: String },

    #[error("Invalid coordinates ({lat}, {lng}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("Location name must not be empty")]
    EmptyName,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A location's map metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Campus grouping tag (e.g. "North", "South")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,
}

impl Location {
    /// Check name and coordinate ranges.
    pub fn validate(&self) -> Result<(), LocationError> {
        if self.name.trim().is_empty() {
            return Err(LocationError::EmptyName);
        }
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lng_ok = self.lng.is_finite() && (-180.0..=180.0).contains(&self.lng);
        if !lat_ok || !lng_ok {
            return Err(LocationError::InvalidCoordinates {
                lat: self.lat,
                lng: self.lng,
            });
        }
        Ok(())
    }
}

/// File-backed list of location metadata, in insertion order.
#[derive(Debug)]
pub struct LocationStore {
    path: PathBuf,
    locations: Vec<Location>,
}

impl LocationStore {
    /// Load metadata from `path`. A missing file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let locations: Vec<Location> = read_json(&path)?.unwrap_or_default();
        info!("Loaded {} GPS locations from {:?}", locations.len(), path);
        Ok(Self { path, locations })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> &[Location] {
        &self.locations
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Add a new record and persist. Nothing changes if validation or the
    /// write fails.
    ///
    /// Blocking I/O; the daemon calls this under its locations lock, same as
    /// graph saves in `AppState::mutate`.
    pub fn add(&mut self, location: Location) -> Result<(), LocationError> {
        location.validate()?;
        if self.get(&location.name).is_some() {
            return Err(LocationError::Duplicate {
                name: location.name,
            });
        }

        self.locations.push(location);
        if let Err(e) = write_json_atomic(&self.path, &self.locations) {
            self.locations.pop();
            return Err(e.into());
        }
        Ok(())
    }

    /// Replace the record with the same name and persist. Nothing changes if
    /// validation or the write fails.
    pub fn update(&mut self, location: Location) -> Result<(), LocationError> {
        location.validate()?;
        let index = self
            .locations
            .iter()
            .position(|l| l.name == location.name)
            .ok_or_else(|| LocationError::NotFound {
                name: location.name.clone(),
            })?;

        let previous = std::mem::replace(&mut self.locations[index], location);
        if let Err(e) = write_json_atomic(&self.path, &self.locations) {
            self.locations[index] = previous;
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn location(name: &str, lat: f64, lng: f64) -> Location {
        Location {
            name: name.to_string(),
            lat,
            lng,
            campus: Some("North".to_string()),
        }
    }

    #[test]
    fn test_add_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gps.json");

        let mut store = LocationStore::load(&path).unwrap();
        assert!(store.is_empty());
        store.add(location("Library", 18.529, 73.856)).unwrap();
        store.add(location("Canteen", 18.530, 73.857)).unwrap();

        let reloaded = LocationStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.list()[0].name, "Library");
        assert_eq!(reloaded.get("Canteen").map(|l| l.lat), Some(18.530));
    }

    #[test]
    fn test_add_duplicate() {
        let dir = tempdir().unwrap();
        let mut store = LocationStore::load(dir.path().join("gps.json")).unwrap();
        store.add(location("Library", 18.5, 73.8)).unwrap();

        let err = store.add(location("Library", 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, LocationError::Duplicate { .. }));
        assert_eq!(store.get("Library").map(|l| l.lat), Some(18.5));
    }

    #[test]
    fn test_invalid_coordinates() {
        let dir = tempdir().unwrap();
        let mut store = LocationStore::load(dir.path().join("gps.json")).unwrap();

        for (lat, lng) in [(91.0, 0.0), (0.0, -181.0), (f64::NAN, 0.0)] {
            let err = store.add(location("Bad", lat, lng)).unwrap_err();
            assert!(matches!(err, LocationError::InvalidCoordinates { .. }));
        }
        assert!(matches!(
            store.add(location("  ", 0.0, 0.0)).unwrap_err(),
            LocationError::EmptyName
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gps.json");
        let mut store = LocationStore::load(&path).unwrap();
        store.add(location("Library", 18.5, 73.8)).unwrap();

        let mut moved = location("Library", 18.6, 73.9);
        moved.campus = None;
        store.update(moved.clone()).unwrap();

        let reloaded = LocationStore::load(&path).unwrap();
        assert_eq!(reloaded.get("Library"), Some(&moved));
    }

    #[test]
    fn test_update_unknown() {
        let dir = tempdir().unwrap();
        let mut store = LocationStore::load(dir.path().join("gps.json")).unwrap();
        let err = store.update(location("Ghost", 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, LocationError::NotFound { .. }));
    }

    #[test]
    fn test_campus_is_optional_in_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gps.json");
        std::fs::write(&path, r#"[{"name": "Gate", "lat": 18.5, "lng": 73.8}]"#).unwrap();

        let store = LocationStore::load(&path).unwrap();
        assert_eq!(store.get("Gate").and_then(|l| l.campus.clone()), None);
    }
}
