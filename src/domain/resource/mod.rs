pub mod error;
pub mod model;
pub mod service;

pub use error::ResourceServiceError;
pub use model::Resource;
pub use service::ResourceService;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response for resource endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub id: i64,
    pub name: String,
    pub link: String,
    pub description: String,
    pub difficulty_level: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new resource
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateResourceRequest {
    pub name: String,
    pub link: String,
    pub description: String,
    pub difficulty_level: i32,
    pub owner: Option<String>,
    pub category_ids: Vec<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request to update an existing resource
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResourceRequest {
    pub name: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub difficulty_level: Option<i32>,
}

/// Request to rate a resource
#[derive(Debug, Serialize, Deserialize)]
pub struct RateResourceRequest {
    pub rater_id: String,
    pub rating: i32,
}

/// Request to attach a tag to a resource
#[derive(Debug, Serialize, Deserialize)]
pub struct AddTagRequest {
    pub tag: String,
}

impl From<Resource> for ResourceResponse {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id,
            name: resource.name,
            link: resource.link,
            description: resource.description,
            difficulty_level: resource.difficulty_level,
            owner: resource.owner,
            created_at: resource.created_at,
        }
    }
}
