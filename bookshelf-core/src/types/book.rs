//! The Book record - the unit of storage

use crate::error::ValidationError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Earliest publication year a book may carry
pub const MIN_PUBLISHED_YEAR: i32 = 1000;

/// The local calendar year, the latest year a book may carry
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Opaque unique identifier assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh time-ordered identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Circulation status of a book
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Issued => "Issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "issued" => Ok(Self::Issued),
            other => Err(format!(
                "unknown status '{}' (expected Available or Issued)",
                other
            )),
        }
    }
}

/// A book's fields before the store assigns it an id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    #[serde(default)]
    pub status: BookStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl BookDraft {
    /// Create a draft with the required fields, status Available
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        published_year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            published_year,
            status: BookStatus::Available,
            description: None,
            isbn: None,
            pages: None,
            language: None,
            publisher: None,
        }
    }

    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = Some(pages);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Check the draft the way the entry form does.
    ///
    /// Returns every problem found rather than stopping at the first one.
    /// The store itself never calls this; front ends run it before submitting.
    pub fn validate(&self, current_year: i32) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(ValidationError::MissingTitle);
        }
        if self.author.trim().is_empty() {
            errors.push(ValidationError::MissingAuthor);
        }
        if self.genre.trim().is_empty() {
            errors.push(ValidationError::MissingGenre);
        }
        if self.published_year < MIN_PUBLISHED_YEAR {
            errors.push(ValidationError::YearTooEarly {
                year: self.published_year,
                min: MIN_PUBLISHED_YEAR,
            });
        } else if self.published_year > current_year {
            errors.push(ValidationError::YearInFuture {
                year: self.published_year,
                max: current_year,
            });
        }
        if self.pages == Some(0) {
            errors.push(ValidationError::NoPages);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A catalog entry as stored and persisted.
///
/// The editable fields live in [`BookDraft`] and are flattened into the same
/// JSON object as the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    #[serde(flatten)]
    pub details: BookDraft,
}

impl Book {
    /// Attach an id to a draft
    pub fn from_draft(id: BookId, details: BookDraft) -> Self {
        Self { id, details }
    }

    /// The editable fields of this book
    pub fn to_draft(&self) -> BookDraft {
        self.details.clone()
    }

    pub fn is_available(&self) -> bool {
        self.details.status == BookStatus::Available
    }
}
