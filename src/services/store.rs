use crate::models::{GeoPoint, VenueRecord};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the venue store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Row layout of the play space table
///
/// Coordinates and ids come back as numbers or strings depending on how the
/// row was written, so they are read loosely and normalized.
#[derive(Debug, Deserialize)]
struct StoredVenue {
    id: Value,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    location: Option<StoredLocation>,
    #[serde(default)]
    sports: Vec<String>,
    #[serde(default)]
    facilities: Vec<String>,
    #[serde(default)]
    price: Option<Value>,
    #[serde(rename = "availableTime", default)]
    available_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StoredLocation {
    #[serde(default)]
    lat: Value,
    #[serde(default)]
    lng: Value,
    #[serde(default)]
    address: Option<String>,
}

/// Read a JSON number or numeric string. Anything else becomes NaN,
/// which the proximity search treats as an invalid coordinate.
fn loose_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn loose_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl StoredVenue {
    fn into_venue(self) -> Result<VenueRecord, StoreError> {
        let id = loose_string(&self.id)
            .ok_or_else(|| StoreError::InvalidResponse(format!("Unusable venue id: {}", self.id)))?;

        // A missing location is kept as NaN so the search counts it as skipped
        let (location, address) = match self.location {
            Some(stored) => (
                GeoPoint::new(loose_f64(&stored.lat), loose_f64(&stored.lng)),
                stored.address,
            ),
            None => (GeoPoint::new(f64::NAN, f64::NAN), None),
        };

        Ok(VenueRecord {
            name: self.name.unwrap_or_else(|| format!("Play space {}", id)),
            id,
            location,
            address,
            sports: self.sports,
            facilities: self.facilities,
            price: self.price.as_ref().and_then(loose_string),
            available_time: self.available_time,
        })
    }
}

/// REST client for the hosted venue table
///
/// Speaks the PostgREST dialect: rows are fetched with `select=*` and
/// filtered with `column=eq.value`.
pub struct VenueStore {
    base_url: String,
    api_key: String,
    table: String,
    client: Client,
}

impl VenueStore {
    /// Create a new venue store client
    pub fn new(
        base_url: String,
        api_key: String,
        table: String,
        timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            table,
            client,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), self.table)
    }

    async fn fetch_rows(&self, url: &str) -> Result<Vec<Value>, StoreError> {
        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Venue store request failed: {} - {}", status, body);
            return Err(StoreError::ApiError(format!("Failed to fetch venues: {}", status)));
        }

        let json: Value = response.json().await?;

        match json {
            Value::Array(rows) => Ok(rows),
            _ => Err(StoreError::InvalidResponse("Expected an array of rows".into())),
        }
    }

    /// Fetch every venue in the table
    ///
    /// Rows that cannot be parsed are logged and dropped.
    pub async fn list_venues(&self) -> Result<Vec<VenueRecord>, StoreError> {
        let url = format!("{}?select=*", self.table_url());

        tracing::debug!("Fetching venues from: {}", url);

        let rows = self.fetch_rows(&url).await?;
        let total = rows.len();

        let venues: Vec<VenueRecord> = rows
            .into_iter()
            .filter_map(|row| {
                match serde_json::from_value::<StoredVenue>(row)
                    .map_err(|e| StoreError::InvalidResponse(e.to_string()))
                    .and_then(StoredVenue::into_venue)
                {
                    Ok(venue) => Some(venue),
                    Err(e) => {
                        tracing::warn!("Dropping unreadable venue row: {}", e);
                        None
                    }
                }
            })
            .collect();

        tracing::debug!("Loaded {} venues (rows: {})", venues.len(), total);

        Ok(venues)
    }

    /// Fetch a single venue by id
    pub async fn get_venue(&self, id: &str) -> Result<VenueRecord, StoreError> {
        let url = format!(
            "{}?id=eq.{}&select=*",
            self.table_url(),
            urlencoding::encode(id)
        );

        tracing::debug!("Fetching venue: {}", id);

        let row = self
            .fetch_rows(&url)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("Venue {} not found", id)))?;

        let stored: StoredVenue = serde_json::from_value(row)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse venue: {}", e)))?;

        stored.into_venue()
    }

    /// Health check for the store connection
    pub async fn health_check(&self) -> bool {
        let url = format!("{}?select=id&limit=1", self.table_url());
        self.fetch_rows(&url).await.is_ok()
    }
}
