//! Learning resource (tool/platform) entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A shared tool or learning platform the team has access to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub url: String,
    pub description: String,
    pub is_official: bool,
}

/// Resource creation payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub logo_url: String,
    #[validate(url(message = "a valid URL is required"))]
    pub url: String,
    pub description: String,
    pub is_official: bool,
}

impl NewResource {
    pub(crate) fn into_resource(self, id: String) -> Resource {
        Resource {
            id,
            name: self.name,
            logo_url: self.logo_url,
            url: self.url,
            description: self.description,
            is_official: self.is_official,
        }
    }
}
