use serde::{Deserialize, Serialize};

/// One catalog record describing a downloadable application.
///
/// Field names follow the published JSON format consumed by the store
/// frontend, hence the camelCase wire names. `id` and `date` are set once
/// at creation and never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    pub id: String,
    pub name: String,
    pub version: String,
    pub category: String,
    pub description: String,
    pub download_url: String,
    pub icon_url: String,
    pub date: String,
}
