//! Book fields shared by the add and edit commands

use bookshelf_core::types::DEFAULT_LANGUAGE;
use bookshelf_core::{BookDraft, BookStatus};
use clap::Args;

/// Book fields given on the command line
#[derive(Args, Debug, Default, Clone)]
pub struct BookFields {
    /// Book title
    #[arg(long)]
    pub title: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Genre (see `genres` for the ones in use)
    #[arg(long)]
    pub genre: Option<String>,

    /// Year of publication
    #[arg(long)]
    pub year: Option<i32>,

    /// Availability (available, issued)
    #[arg(long)]
    pub status: Option<BookStatus>,

    /// Short description
    #[arg(long)]
    pub description: Option<String>,

    /// ISBN
    #[arg(long)]
    pub isbn: Option<String>,

    /// Number of pages
    #[arg(long)]
    pub pages: Option<u32>,

    /// Language
    #[arg(long)]
    pub language: Option<String>,

    /// Publisher
    #[arg(long)]
    pub publisher: Option<String>,
}

/// Blank optional text means "not set"
fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl BookFields {
    /// Whether no field was given
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.genre.is_none()
            && self.year.is_none()
            && self.status.is_none()
            && self.description.is_none()
            && self.isbn.is_none()
            && self.pages.is_none()
            && self.language.is_none()
            && self.publisher.is_none()
    }

    /// Draft for a new book. Missing fields take the entry form defaults:
    /// the current year, status Available, and the default language.
    pub fn into_new_draft(self, current_year: i32) -> BookDraft {
        let defaults = BookDraft::new(
            String::new(),
            String::new(),
            String::new(),
            current_year,
        )
        .with_language(DEFAULT_LANGUAGE);
        self.apply_to(defaults)
    }

    /// Overwrite the given draft with every field that was provided
    pub fn apply_to(self, mut draft: BookDraft) -> BookDraft {
        if let Some(title) = self.title {
            draft.title = title.trim().to_string();
        }
        if let Some(author) = self.author {
            draft.author = author.trim().to_string();
        }
        if let Some(genre) = self.genre {
            draft.genre = genre.trim().to_string();
        }
        if let Some(year) = self.year {
            draft.published_year = year;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(description) = self.description {
            draft.description = non_blank(description);
        }
        if let Some(isbn) = self.isbn {
            draft.isbn = non_blank(isbn);
        }
        if let Some(pages) = self.pages {
            draft.pages = Some(pages);
        }
        if let Some(language) = self.language {
            draft.language = non_blank(language);
        }
        if let Some(publisher) = self.publisher {
            draft.publisher = non_blank(publisher);
        }
        draft
    }
}
