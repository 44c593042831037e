//! Frontend Models
//!
//! Task records owned by the local store and the remote shapes of the article API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task data structure (persisted to local storage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Post as returned by the articles endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// User as returned by the authors endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}
