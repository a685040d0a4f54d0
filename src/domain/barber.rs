//! Barber domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::slugify;

/// Barber shown on the team page and selectable when booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    /// Slug identifier, e.g. "lele"
    #[schema(example = "lele")]
    pub id: String,
    #[schema(example = "Lele")]
    pub name: String,
    /// i18n key of the role label
    #[schema(example = "team.roles.barber")]
    pub role_key: String,
    /// Image URL or base64 data URI
    #[schema(example = "/assets/barber_placeholder.svg")]
    pub img: String,
    pub description_it: Option<String>,
    pub description_en: Option<String>,
}

/// Create-or-replace payload; `id` is derived from `name` when missing
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertBarber {
    #[serde(default)]
    #[schema(example = "gian-marco")]
    pub id: Option<String>,
    #[serde(default)]
    #[schema(example = "Gian Marco")]
    pub name: String,
    #[serde(default)]
    pub role_key: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub description_it: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
}

impl UpsertBarber {
    /// True when neither an id nor a name to derive one from was given
    pub fn lacks_identity(&self) -> bool {
        self.id.as_deref().map_or(true, |id| id.trim().is_empty()) && self.name.trim().is_empty()
    }

    /// Resolve the record to store: explicit id wins, otherwise the name slug.
    pub fn into_barber(self) -> Barber {
        let id = match self.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => slugify(&self.name),
        };

        Barber {
            id,
            name: self.name,
            role_key: self.role_key,
            img: self.img,
            description_it: self.description_it,
            description_en: self.description_en,
        }
    }
}
