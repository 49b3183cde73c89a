use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::config::Config;
use crate::models::AssetRecord;

/// PostgREST select joining each asset to its optional category.
pub const ASSETS_SELECT: &str = "current_value,is_liquid,categories(name,color_hex,icon)";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Request to Supabase failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Supabase returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed asset data from Supabase: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where the dashboard gets its asset rows from.
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>, UpstreamError>;
}

pub struct SupabaseClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.supabase_url.clone(),
            api_key: config.supabase_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn assets_url(&self) -> Url {
        let mut url = self.base_url.clone();
        // Config only admits http(s) URLs, which always have path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["rest", "v1", "assets"]);
        }
        url.query_pairs_mut().append_pair("select", ASSETS_SELECT);
        url
    }
}

#[async_trait]
impl AssetSource for SupabaseClient {
    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>, UpstreamError> {
        let url = self.assets_url();
        tracing::debug!("Fetching assets from {}", url.path());

        let response = self
            .http
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> SupabaseClient {
        let config = Config::from_lookup(|key| match key {
            "SUPABASE_URL" => Some(url.to_string()),
            "SUPABASE_KEY" => Some("anon-key".to_string()),
            _ => None,
        })
        .unwrap();
        SupabaseClient::new(&config).unwrap()
    }

    #[test]
    fn assets_url_targets_rest_endpoint() {
        let url = client("https://demo.supabase.co").assets_url();
        assert_eq!(url.path(), "/rest/v1/assets");
        assert_eq!(
            url.query_pairs().find(|(k, _)| k == "select").map(|(_, v)| v.into_owned()),
            Some(ASSETS_SELECT.to_string())
        );
    }

    #[test]
    fn assets_url_keeps_path_prefix() {
        let url = client("http://127.0.0.1:54321/proxy").assets_url();
        assert_eq!(url.path(), "/proxy/rest/v1/assets");
    }

    #[test]
    fn assets_url_tolerates_trailing_slash() {
        let url = client("https://demo.supabase.co/proxy/").assets_url();
        assert_eq!(url.path(), "/proxy/rest/v1/assets");
    }

    #[test]
    fn decodes_joined_rows() {
        let body = r##"[
            {"current_value": 1200.5, "is_liquid": true, "categories": {"name": "Cash", "color_hex": "#00ff00", "icon": "Wallet"}},
            {"current_value": 300, "is_liquid": false, "categories": null}
        ]"##;
        let rows: Vec<AssetRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(rows.len(), 2);
        let cash = rows[0].category.as_ref().unwrap();
        assert_eq!(cash.name, "Cash");
        assert_eq!(cash.color, "#00ff00");
        assert_eq!(cash.icon.as_deref(), Some("Wallet"));
        assert!(rows[1].category.is_none());
    }

    #[test]
    fn null_value_is_a_decode_error() {
        let body = r#"[{"current_value": null, "is_liquid": true, "categories": null}]"#;
        assert!(serde_json::from_str::<Vec<AssetRecord>>(body).is_err());
    }

    #[test]
    fn value_beyond_decimal_range_is_a_decode_error() {
        let body = r#"[{"current_value": 1e30, "is_liquid": true, "categories": null}]"#;
        assert!(serde_json::from_str::<Vec<AssetRecord>>(body).is_err());
    }
}
