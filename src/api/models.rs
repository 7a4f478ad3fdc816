//! Subject API models and data structures.
//!
//! Contains the subject record, sort order, query parameters and the
//! paginated response wrapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subject that users can ask questions of.
///
/// Only `name` and `created_at` drive list behaviour; the remaining fields
/// are carried for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Subject ID
    pub id: u64,
    /// Display name
    pub name: String,
    /// Profile image URL
    #[serde(default)]
    pub image_source: Option<String>,
    /// Number of questions received
    #[serde(default)]
    pub question_count: u64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Subject {
    /// Format question count for a card footer.
    ///
    /// # Returns
    /// * `String` - e.g. "받은 질문 12개"
    pub fn format_question_count(&self) -> String {
        format!("받은 질문 {}개", self.question_count)
    }

    /// Format creation date as a readable string.
    ///
    /// # Returns
    /// * `String` - Formatted date string (e.g., "2024.01.15")
    pub fn format_date(&self) -> String {
        self.created_at.format("%Y.%m.%d").to_string()
    }
}

/// Sort order for the subject list.
///
/// Closed two-variant enum; the wire values match the API's `order` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Newest first
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    /// Name ascending (Korean collation)
    #[serde(rename = "name")]
    Name,
}

impl SortOrder {
    /// Value sent as the `order` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::CreatedAt => "createdAt",
            SortOrder::Name => "name",
        }
    }

    /// Label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::CreatedAt => "최신순",
            SortOrder::Name => "이름순",
        }
    }

    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::CreatedAt => SortOrder::Name,
            SortOrder::Name => SortOrder::CreatedAt,
        }
    }
}

/// Query parameters for one page of subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectQuery {
    /// Zero-based item offset
    pub offset: u64,
    /// Sort order requested from the server
    pub order: SortOrder,
    /// Page size (always > 0)
    pub limit: u32,
}

impl SubjectQuery {
    /// Build the query for a one-based page number.
    ///
    /// # Arguments
    /// * `page` - Current page (values below 1 are treated as 1)
    /// * `limit` - Page size
    /// * `order` - Sort order
    pub fn for_page(page: u32, limit: u32, order: SortOrder) -> Self {
        Self {
            offset: u64::from(page.max(1) - 1) * u64::from(limit),
            order,
            limit,
        }
    }

    /// Key/value pairs for the request URL.
    pub fn to_params(&self) -> [(&'static str, String); 3] {
        [
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
            ("order", self.order.as_param().to_string()),
        ]
    }
}

/// Paginated subjects response.
///
/// `results` is optional: a response without it means "no data", not an error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SubjectPage {
    /// Total number of subjects on the server
    #[serde(default)]
    pub count: u64,
    /// Subjects on this page
    #[serde(default)]
    pub results: Option<Vec<Subject>>,
}
