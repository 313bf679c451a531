#![forbid(unsafe_code)]
//! Client toolkit for the Vista Language API.
//!
//! Fetches entries and per-culture translations, joins them into a resolved
//! view under a merge policy, validates format placeholders, and renders the
//! result as plain text, JSON, Android `strings.xml`, or iOS `.strings`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langtool::{EntryFilter, LangApi, MergeMode, OutputFormat, RenderReport};
//!
//! # async fn example() -> Result<(), langtool::Error> {
//! let api = LangApi::new(langtool::DEFAULT_BASE_URL, "my-token")?;
//!
//! let filter = EntryFilter {
//!     applications: vec!["myapp".to_string()],
//!     ..Default::default()
//! };
//!
//! let (entries, translations) =
//!     tokio::try_join!(api.entries(&filter), api.translations("fr", &filter))?;
//!
//! let records = langtool::reconcile(&entries, translations, MergeMode::All);
//! langtool::placeholder::validate(&records)?;
//!
//! let hash = langtool::hash_records(&records);
//! let report = RenderReport {
//!     records: &records,
//!     culture: "fr",
//!     language_name: None,
//!     applications: &filter.applications,
//!     sections: &filter.sections,
//!     note: MergeMode::All.note("fr"),
//!     hash: &hash,
//!     generated: chrono::Utc::now(),
//! };
//! let rendered = OutputFormat::Text.render(&report)?;
//! # let _ = rendered;
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline
//!
//! Fetch (concurrently) → [`reconcile`] → [`placeholder::validate`] →
//! [`hash_records`] → [`OutputFormat::render`]. A previously written file's
//! hash can be recovered with [`OutputFormat::extract_hash`] to skip
//! unchanged output.

pub mod client;
pub mod error;
pub mod formats;
pub mod hash;
pub mod placeholder;
pub mod reconcile;
pub mod types;

// Re-export most used items for easy consumption
pub use crate::{
    client::{DEFAULT_BASE_URL, LangApi},
    error::Error,
    formats::OutputFormat,
    hash::hash_records,
    reconcile::reconcile,
    types::{
        Application, Entry, EntryFilter, Language, MergeMode, ReconciledRecord, RenderReport,
        Section, Translation,
    },
};
