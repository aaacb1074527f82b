//! Application types

use serde::{Deserialize, Serialize};

// =============================================================================
// Book Types
// =============================================================================

/// Book entity, stored as a `book` content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author_id: Option<u32>,
}

impl Book {
    pub fn new(id: u32, title: impl Into<String>, author_id: Option<u32>) -> Self {
        Self {
            id,
            title: title.into(),
            author_id,
        }
    }
}

// =============================================================================
// Author Types
// =============================================================================

/// Author entity, managed through admin screens only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: u32,
    pub name: String,
}

impl Author {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// =============================================================================
// View Types
// =============================================================================

/// An admin screen rendered by a controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminScreen {
    pub screen: String,
    pub fields: Vec<String>,
}

impl AdminScreen {
    pub fn new(screen: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            screen: screen.into(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Book page with its author resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookPage {
    pub book: Book,
    pub author: Option<Author>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
