//! Payload of the remote volumes search endpoint.
//!
//! The API omits any field it has no data for, so every field here is optional or
//! defaulted. Defaulting rules for the catalog are applied later, in one place, by
//! `NewBook::from_volume_info`.

use serde::Deserialize;

/// Top-level search response. `items` is absent when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeSearchDto {
    #[serde(default)]
    pub items: Vec<VolumeDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDto {
    #[serde(default)]
    pub volume_info: VolumeInfoDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfoDto {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
    pub image_links: Option<ImageLinksDto>,
    pub industry_identifiers: Option<Vec<IndustryIdentifierDto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinksDto {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndustryIdentifierDto {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub identifier: String,
}
