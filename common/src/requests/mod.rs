//! Multipart field names shared by the form submitted from the browser and the
//! decoder on the server.

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const CATEGORY: &str = "category";
pub const DIFFICULTY: &str = "difficulty";
pub const SERVINGS: &str = "servings";
pub const COOKING_TIME: &str = "cookingTime";
pub const INGREDIENTS: &str = "ingredients";
pub const INSTRUCTIONS: &str = "instructions";
pub const TAGS: &str = "tags";
pub const IMAGE: &str = "image";

/// Body returned by the delete endpoint and by every 404.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

/// Body returned when a create or update fails.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct WriteErrorResponse {
    pub error: String,
    pub details: String,
}
