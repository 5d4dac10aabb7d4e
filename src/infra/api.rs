//! Thin asynchronous client for the Piol listings API.
//!
//! - Typed accessors for listing search and single-listing lookup.
//! - Favorites of the authenticated user (requires a bearer token).
//! - Keeps listing pages in memory for a short TTL with stale fallbacks.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

use reqwest::{Client, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::Property;
use crate::util::{config::AppConfig, version::user_agent};

const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Error)]
pub enum PiolClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Fresh,
    Cached,
    Stale,
}

#[derive(Clone, Debug)]
pub struct CachedPayload<T> {
    pub data: T,
    pub fetched_at: SystemTime,
    pub status: CacheStatus,
}

impl<T> CachedPayload<T> {
    fn new(data: T, fetched_at: SystemTime, status: CacheStatus) -> Self {
        Self {
            data,
            fetched_at,
            status,
        }
    }

    /// Time since the payload was fetched from the backend.
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PropertyPage {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub total: u64,
}

/// Search criteria forwarded to `GET /properties` as query parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyFilters {
    pub search: Option<String>,
    pub city_id: Option<String>,
    pub kind: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub furnished: Option<bool>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PropertyFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let text = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        if let Some(search) = text(&self.search) {
            pairs.push(("search", search));
        }
        if let Some(city) = text(&self.city_id) {
            pairs.push(("cityId", city));
        }
        if let Some(kind) = text(&self.kind) {
            pairs.push(("type", kind));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", format!("{min}")));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", format!("{max}")));
        }
        if let Some(bedrooms) = self.bedrooms {
            pairs.push(("bedrooms", bedrooms.to_string()));
        }
        if let Some(furnished) = self.furnished {
            pairs.push(("furnished", furnished.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }

    fn cache_key(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Default)]
struct ApiCache {
    pages: HashMap<String, Cached<PropertyPage>>,
}

#[derive(Debug, Deserialize)]
struct PropertyEnvelope {
    property: Property,
}

/// Result of `POST users/favorites/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggle {
    pub is_favorite: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FavoritesEnvelope {
    #[serde(default)]
    favorites: Vec<FavoriteEntry>,
}

/// The backend returns favorite rows wrapping the listing; older builds
/// returned the bare listing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FavoriteEntry {
    Wrapped { property: Property },
    Bare(Property),
}

impl FavoriteEntry {
    fn into_property(self) -> Property {
        match self {
            Self::Wrapped { property } | Self::Bare(property) => property,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone)]
pub struct PiolClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
    cache: Arc<Mutex<ApiCache>>,
    ttl: Duration,
}

impl PiolClient {
    pub fn from_config(config: &AppConfig) -> Result<Self, PiolClientError> {
        let client = Self::with_base_url(&config.api_base_url)?;
        Ok(match &config.api_token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        })
    }

    pub fn with_base_url(base: &str) -> Result<Self, PiolClientError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self {
            http,
            base_url,
            token: None,
            cache: Arc::new(Mutex::new(ApiCache::default())),
            ttl: DEFAULT_TTL,
        })
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub async fn get_properties(
        &self,
        filters: &PropertyFilters,
    ) -> Result<CachedPayload<PropertyPage>, PiolClientError> {
        let key = filters.cache_key();
        if let Some(payload) = self.cached_page(&key).await {
            debug!(query = %key, "serving cached listings");
            return Ok(payload);
        }

        let url = self.properties_url(filters)?;
        info!(%url, "requesting listings");
        match self.fetch_json::<PropertyPage>(self.http.get(url)).await {
            Ok(page) => {
                info!(count = page.properties.len(), total = page.total, "listings loaded");
                Ok(self.store_page(key, page).await)
            }
            Err(error) => {
                if let Some(stale) = self.cached_page_stale(&key).await {
                    warn!(%error, "listing request failed; serving stale copy");
                    return Ok(stale);
                }
                Err(error)
            }
        }
    }

    pub async fn get_property(&self, id: &str) -> Result<Property, PiolClientError> {
        let url = self.url(&format!("properties/{id}"))?;
        let envelope: PropertyEnvelope = self.fetch_json(self.http.get(url)).await?;
        Ok(envelope.property)
    }

    pub async fn get_favorites(&self) -> Result<Vec<Property>, PiolClientError> {
        let url = self.url("users/favorites")?;
        let envelope: FavoritesEnvelope = self.fetch_json(self.http.get(url)).await?;
        let favorites: Vec<Property> = envelope
            .favorites
            .into_iter()
            .map(FavoriteEntry::into_property)
            .collect();
        debug!(count = favorites.len(), "favorites loaded");
        Ok(favorites)
    }

    pub async fn toggle_favorite(&self, id: &str) -> Result<FavoriteToggle, PiolClientError> {
        let url = self.url(&format!("users/favorites/{id}"))?;
        let toggle: FavoriteToggle = self.fetch_json(self.http.post(url)).await?;
        info!(property = %id, favorite = toggle.is_favorite, "favorite toggled");
        Ok(toggle)
    }

    pub async fn health_check(&self) -> Result<(), PiolClientError> {
        let url = self.url("health")?;
        self.fetch_json::<serde_json::Value>(self.http.get(url))
            .await
            .map(|_| ())
    }

    pub async fn clear_cache(&self) {
        self.cache.lock().await.pages.clear();
    }

    async fn cached_page(&self, key: &str) -> Option<CachedPayload<PropertyPage>> {
        let cache = self.cache.lock().await;
        cache.pages.get(key).and_then(|entry| entry.if_fresh(self.ttl))
    }

    async fn cached_page_stale(&self, key: &str) -> Option<CachedPayload<PropertyPage>> {
        let cache = self.cache.lock().await;
        cache.pages.get(key).map(Cached::stale)
    }

    async fn store_page(&self, key: String, page: PropertyPage) -> CachedPayload<PropertyPage> {
        let fetched_at = SystemTime::now();
        let payload = CachedPayload::new(page.clone(), fetched_at, CacheStatus::Fresh);
        let mut cache = self.cache.lock().await;
        cache.pages.insert(key, Cached::new(page, fetched_at));
        payload
    }

    async fn fetch_json<T>(&self, builder: RequestBuilder) -> Result<T, PiolClientError>
    where
        T: DeserializeOwned,
    {
        let builder = match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PiolClientError::Api(error_message(status.as_u16(), &body)));
        }
        Ok(response.json::<T>().await?)
    }

    fn properties_url(&self, filters: &PropertyFilters) -> Result<Url, url::ParseError> {
        let mut url = self.url("properties")?;
        let pairs = filters.query_pairs();
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

/// Prefers the backend's `message` field, falling back to the status code.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"))
}

struct Cached<T> {
    value: T,
    fetched_at: SystemTime,
}

impl<T: Clone> Cached<T> {
    fn new(value: T, fetched_at: SystemTime) -> Self {
        Self { value, fetched_at }
    }

    fn if_fresh(&self, ttl: Duration) -> Option<CachedPayload<T>> {
        if self
            .fetched_at
            .elapsed()
            .map(|elapsed| elapsed <= ttl)
            .unwrap_or(false)
        {
            Some(CachedPayload::new(
                self.value.clone(),
                self.fetched_at,
                CacheStatus::Cached,
            ))
        } else {
            None
        }
    }

    fn stale(&self) -> CachedPayload<T> {
        CachedPayload::new(self.value.clone(), self.fetched_at, CacheStatus::Stale)
    }
}
