use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::PlaceTypeOption,
    protocol::{
        GetLocationRequest, GetLocationResponse, SearchParameters, SearchPlacesResponse,
        GET_LOCATION_PATH, GET_PLACE_TYPES_PATH, SEARCH_PLACES_PATH,
    },
};
use url::Url;

/// The server side of the page: location resolution and place search.
#[async_trait]
pub trait PlacesBackend: Send + Sync {
    async fn get_location(&self, request: GetLocationRequest) -> Result<GetLocationResponse>;
    async fn search_places(&self, params: SearchParameters) -> Result<SearchPlacesResponse>;
    async fn get_place_types(&self) -> Result<Vec<PlaceTypeOption>>;
}

pub struct HttpPlacesBackend {
    http: Client,
    base_url: Url,
}

impl HttpPlacesBackend {
    pub fn new(server_url: &str) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            base_url: normalize_base_url(server_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("invalid endpoint path '{path}'"))
    }
}

/// Parses the server URL and makes sure relative joins land under its path.
pub fn normalize_base_url(server_url: &str) -> Result<Url> {
    let trimmed = server_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).with_context(|| format!("invalid server url '{trimmed}'"))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("server url '{trimmed}' cannot be used as a base");
    }
    Ok(url)
}

#[async_trait]
impl PlacesBackend for HttpPlacesBackend {
    async fn get_location(&self, request: GetLocationRequest) -> Result<GetLocationResponse> {
        let res = self
            .http
            .post(self.endpoint(GET_LOCATION_PATH)?)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    async fn search_places(&self, params: SearchParameters) -> Result<SearchPlacesResponse> {
        let res = self
            .http
            .post(self.endpoint(SEARCH_PLACES_PATH)?)
            .json(&params)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    async fn get_place_types(&self) -> Result<Vec<PlaceTypeOption>> {
        let options = self
            .http
            .get(self.endpoint(GET_PLACE_TYPES_PATH)?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(options)
    }
}
