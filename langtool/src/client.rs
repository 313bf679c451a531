//! Async client for the Vista Language API.
//!
//! Wraps a [`reqwest::Client`] carrying the `API-Token` and `Accept` headers
//! on every request. List filters repeat their query key per value; values
//! are percent-encoded when the query string is assembled. A non-success
//! status fails the whole invocation; no retries are performed.

use std::cmp::Ordering;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use crate::error::Error;
use crate::types::{Application, Entry, EntryFilter, Language, Section, Translation};

/// Where the API lives unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:60632/api/v1/";

// The server pages at this cap; one page is plenty for a filtered fetch.
const PAGE_SIZE: &str = "1000";

#[derive(Debug, Clone)]
pub struct LangApi {
    http: reqwest::Client,
    base_url: String,
}

impl LangApi {
    /// Builds a client for `base_url` authenticating with `token`.
    pub fn new(base_url: impl Into<String>, token: &str) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "API-Token",
            HeaderValue::from_str(token)
                .map_err(|_| Error::config("API token contains invalid header characters"))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { http, base_url })
    }

    /// `GET applications`
    pub async fn applications(&self) -> Result<Vec<Application>, Error> {
        self.get("applications", &[]).await
    }

    /// `GET sections`, optionally filtered by application codes.
    pub async fn sections(&self, apps: &[String]) -> Result<Vec<Section>, Error> {
        let mut query = vec![(String::from("take"), String::from(PAGE_SIZE))];
        for app in apps {
            query.push((String::from("app"), app.clone()));
        }
        self.get("sections", &query).await
    }

    /// `GET languages`
    pub async fn languages(&self) -> Result<Vec<Language>, Error> {
        self.get("languages", &[]).await
    }

    /// `GET entries` with the given filter. The result is sorted by code,
    /// then section — the ordering the reconciler expects.
    pub async fn entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>, Error> {
        let mut query = base_query(filter);
        if let Some(text) = &filter.default_text_contains {
            query.push((String::from("defaultText"), text.clone()));
        }

        let mut entries: Vec<Entry> = self.get("entries", &query).await?;
        entries.sort_by(|a, b| {
            compare_codes(&a.code, &b.code).then_with(|| compare_codes(&a.section, &b.section))
        });
        Ok(entries)
    }

    /// `GET translations/{culture}/` with the given filter. Rows with null
    /// text are discarded before they reach the reconciler.
    pub async fn translations(
        &self,
        culture: &str,
        filter: &EntryFilter,
    ) -> Result<Vec<Translation>, Error> {
        let mut query = base_query(filter);
        if let Some(text) = &filter.default_text_contains {
            query.push((String::from("defaultText"), text.clone()));
        }
        if let Some(text) = &filter.translated_text_contains {
            query.push((String::from("translatedText"), text.clone()));
        }

        let translations: Vec<Translation> =
            self.get(&format!("translations/{culture}/"), &query).await?;
        Ok(translations
            .into_iter()
            .filter(|translation| translation.text.is_some())
            .collect())
    }

    async fn get<T>(&self, path: &str, query: &[(String, String)]) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                url,
                body,
            });
        }

        Ok(response.json().await?)
    }
}

fn base_query(filter: &EntryFilter) -> Vec<(String, String)> {
    let mut query = vec![(String::from("take"), String::from(PAGE_SIZE))];
    for app in &filter.applications {
        query.push((String::from("app"), app.clone()));
    }
    for section in &filter.sections {
        query.push((String::from("section"), section.clone()));
    }
    for key in &filter.keys {
        query.push((String::from("key"), key.clone()));
    }
    if let Some(version) = &filter.version {
        query.push((String::from("version"), version.clone()));
    }
    query
}

// Case-insensitive comparison, tie-broken by the raw strings so the order is
// total. Locale-tailored collation is out of scope.
fn compare_codes(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_query_repeats_keys_per_value() {
        let filter = EntryFilter {
            applications: vec!["app1".to_string(), "app2".to_string()],
            sections: vec!["menu".to_string()],
            keys: vec!["Greeting".to_string()],
            version: Some("1.0".to_string()),
            default_text_contains: None,
            translated_text_contains: None,
        };

        let query = base_query(&filter);
        assert_eq!(
            query,
            vec![
                ("take".to_string(), "1000".to_string()),
                ("app".to_string(), "app1".to_string()),
                ("app".to_string(), "app2".to_string()),
                ("section".to_string(), "menu".to_string()),
                ("key".to_string(), "Greeting".to_string()),
                ("version".to_string(), "1.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_base_query_empty_filter() {
        let query = base_query(&EntryFilter::default());
        assert_eq!(query, vec![("take".to_string(), "1000".to_string())]);
    }

    #[test]
    fn test_compare_codes_is_case_insensitive() {
        assert_eq!(compare_codes("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_codes("Gamma", "beta"), Ordering::Greater);
        assert_ne!(compare_codes("Alpha", "alpha"), Ordering::Equal);
    }

    #[test]
    fn test_new_normalizes_base_url() {
        let api = LangApi::new("http://localhost:60632/api/v1", "token").expect("client");
        assert_eq!(api.base_url, "http://localhost:60632/api/v1/");

        let api = LangApi::new("http://localhost:60632/api/v1/", "token").expect("client");
        assert_eq!(api.base_url, "http://localhost:60632/api/v1/");
    }

    #[test]
    fn test_new_rejects_invalid_token() {
        assert!(LangApi::new(DEFAULT_BASE_URL, "bad\ntoken").is_err());
    }
}
