//! services/client/src/adapters/nasa.rs
//!
//! This module contains the adapter for the NASA Mars Photos catalog.
//! It implements the `PhotoCatalog` port from the `core` crate over plain
//! HTTP/JSON: one request, no retries; a non-success status fails the
//! calling operation.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use rover_story_core::domain::{PhotoId, PhotoRecord, Source};
use rover_story_core::ports::{CatalogError, CatalogResult, PhotoCatalog};

const USER_AGENT: &str = concat!("rover-stories/", env!("CARGO_PKG_VERSION"));

//=========================================================================================
// Wire Format Structs
//=========================================================================================
// Parsed as the declared shape with no further schema validation; fields the
// server omits simply come back absent.

#[derive(Debug, Deserialize)]
struct RoversResponse {
    #[serde(default)]
    rovers: Vec<RoverEntry>,
}

#[derive(Debug, Deserialize)]
struct RoverEntry {
    name: String,
    landing_date: NaiveDate,
    max_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct PhotosResponse {
    #[serde(default)]
    photos: Vec<PhotoEntry>,
}

#[derive(Debug, Deserialize)]
struct PhotoEntry {
    id: u64,
    img_src: String,
    sol: u64,
    earth_date: NaiveDate,
    camera: CameraEntry,
    rover: RoverRef,
}

#[derive(Debug, Deserialize)]
struct CameraEntry {
    name: String,
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct RoverRef {
    name: String,
}

impl PhotoEntry {
    fn into_domain(self) -> PhotoRecord {
        PhotoRecord {
            id: PhotoId(self.id),
            source_name: self.rover.name,
            camera_name: self.camera.name,
            camera_full_name: self.camera.full_name,
            earth_date: self.earth_date,
            sol: self.sol,
            image_url: self.img_src,
        }
    }
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `PhotoCatalog` port against the NASA
/// Mars Photos API.
#[derive(Clone)]
pub struct NasaPhotoCatalog {
    http_client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl NasaPhotoCatalog {
    /// Creates a new `NasaPhotoCatalog`. The timeout bounds a single HTTP
    /// request at the transport level; the search engine itself imposes none.
    pub fn new(
        api_base: String,
        api_key: String,
        request_timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .build()
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        Ok(Self {
            http_client,
            api_base,
            api_key,
        })
    }
}

//=========================================================================================
// `PhotoCatalog` Trait Implementation
//=========================================================================================

#[async_trait]
impl PhotoCatalog for NasaPhotoCatalog {
    async fn fetch_sources(&self) -> CatalogResult<Vec<Source>> {
        let url = format!("{}?api_key={}", self.api_base, self.api_key);
        debug!(url = %self.api_base, "Fetching source list");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Unavailable(format!(
                "catalog returned HTTP {}",
                response.status()
            )));
        }

        let body: RoversResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        Ok(body
            .rovers
            .into_iter()
            .map(|rover| Source {
                name: rover.name,
                activity_start: rover.landing_date,
                activity_end: rover.max_date,
            })
            .collect())
    }

    async fn fetch_photos(
        &self,
        source_name: &str,
        earth_date: NaiveDate,
    ) -> CatalogResult<Vec<PhotoRecord>> {
        let url = format!(
            "{}/{}/photos?api_key={}&earth_date={}",
            self.api_base,
            source_name,
            self.api_key,
            earth_date.format("%Y-%m-%d")
        );
        debug!(source = source_name, date = %earth_date, "Fetching photos");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Fetch(format!(
                "catalog returned HTTP {}",
                response.status()
            )));
        }

        let body: PhotosResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Fetch(e.to_string()))?;

        Ok(body.photos.into_iter().map(PhotoEntry::into_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_rover_manifest() {
        let json = r#"{
            "rovers": [
                {
                    "id": 5,
                    "name": "Curiosity",
                    "landing_date": "2012-08-06",
                    "launch_date": "2011-11-26",
                    "max_date": "2023-01-01",
                    "status": "active"
                }
            ]
        }"#;

        let parsed: RoversResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.rovers.len(), 1);
        assert_eq!(parsed.rovers[0].name, "Curiosity");
        assert_eq!(
            parsed.rovers[0].landing_date,
            NaiveDate::from_ymd_opt(2012, 8, 6).unwrap()
        );
    }

    #[test]
    fn deserializes_a_photos_page() {
        let json = r#"{
            "photos": [
                {
                    "id": 102693,
                    "sol": 1004,
                    "camera": {
                        "id": 20,
                        "name": "FHAZ",
                        "rover_id": 5,
                        "full_name": "Front Hazard Avoidance Camera"
                    },
                    "img_src": "http://mars.jpl.nasa.gov/msl-raw-images/FLB_486265257EDR.JPG",
                    "earth_date": "2015-06-03",
                    "rover": { "id": 5, "name": "Curiosity" }
                }
            ]
        }"#;

        let parsed: PhotosResponse = serde_json::from_str(json).unwrap();
        let record = parsed.photos.into_iter().next().unwrap().into_domain();

        assert_eq!(record.id, PhotoId(102693));
        assert_eq!(record.source_name, "Curiosity");
        assert_eq!(record.camera_name, "FHAZ");
        assert_eq!(record.camera_full_name, "Front Hazard Avoidance Camera");
        assert_eq!(record.sol, 1004);
    }

    #[test]
    fn missing_photos_field_reads_as_empty() {
        let parsed: PhotosResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.photos.is_empty());
    }
}
