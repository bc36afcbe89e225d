//! The book store: canonical collection, commands, views and persistence

use crate::backend::CatalogBackend;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::state::{reduce, Action, StoreState};
use crate::storage::{load_collection, save_collection, KeyValueStore};
use crate::types::{sample_books, Book, BookDraft, BookId, BookStatus, FilterCriteria};
use crate::view::{self, CatalogStats};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

/// Notifications sent to observers after each committed transition
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    BookAdded(Book),
    BookUpdated(Book),
    BookDeleted(BookId),
    FiltersChanged(FilterCriteria),
    PageChanged(usize),
    /// A command failed; the message is also recorded as the store error
    CommandFailed(String),
    ErrorCleared,
}

struct Inner {
    state: RwLock<StoreState>,
    storage: Arc<dyn KeyValueStore>,
    backend: Arc<dyn CatalogBackend>,
    config: StoreConfig,
    event_tx: broadcast::Sender<StoreEvent>,
    /// Serializes writes so the last one to finish holds the newest collection
    persist_lock: Mutex<()>,
}

/// Owner of the book collection.
///
/// Clones share the same state, so the application root can construct one
/// store and hand copies to every consumer. Commands are not queued: two
/// commands issued together both run, and each persists the collection it
/// sees when it completes. Writes never overlap.
#[derive(Clone)]
pub struct BookStore {
    inner: Arc<Inner>,
}

impl BookStore {
    /// Open the store, hydrating from storage.
    ///
    /// When `config.storage_key` holds nothing yet, the sample collection is
    /// seeded and persisted before returning.
    pub async fn open(
        storage: Arc<dyn KeyValueStore>,
        backend: Arc<dyn CatalogBackend>,
        config: StoreConfig,
    ) -> Result<Self> {
        let books = match load_collection(storage.as_ref(), &config.storage_key).await? {
            Some(books) => {
                debug!(count = books.len(), key = %config.storage_key, "Hydrated collection");
                books
            }
            None => {
                let books = sample_books();
                save_collection(storage.as_ref(), &config.storage_key, &books).await?;
                info!(count = books.len(), key = %config.storage_key, "Seeded sample collection");
                books
            }
        };

        let state = reduce(
            StoreState::new(config.books_per_page),
            Action::SetBooks(books),
        );
        let (event_tx, _) = broadcast::channel(100);

        Ok(Self {
            inner: Arc::new(Inner {
                state: RwLock::new(state),
                storage,
                backend,
                config,
                event_tx,
                persist_lock: Mutex::new(()),
            }),
        })
    }

    /// Subscribe to store events
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.event_tx.subscribe()
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Create a book and return it with its assigned id
    pub async fn add_book(&self, draft: BookDraft) -> Result<Book> {
        self.dispatch(Action::BeginCommand);
        let result = self.commit_add(draft).await;
        self.finish(result.as_ref().err());
        result
    }

    async fn commit_add(&self, draft: BookDraft) -> Result<Book> {
        self.inner.backend.create(&draft).await?;

        let book = {
            let mut state = self.write();
            let mut id = BookId::generate();
            while state.contains(&id) {
                id = BookId::generate();
            }
            let book = Book::from_draft(id, draft);
            Self::apply(&mut state, Action::AddBook(book.clone()));
            book
        };
        info!(id = %book.id, title = %book.details.title, "Book added");
        self.notify(StoreEvent::BookAdded(book.clone()));

        self.persist().await?;
        Ok(book)
    }

    /// Replace the book with `id`, forcing the replacement's id to `id`.
    ///
    /// Returns `Ok(None)` without touching the collection when no book has
    /// that id.
    pub async fn update_book(&self, id: &BookId, draft: BookDraft) -> Result<Option<Book>> {
        self.dispatch(Action::BeginCommand);
        let result = self.commit_update(id, draft).await;
        self.finish(result.as_ref().err());
        result
    }

    async fn commit_update(&self, id: &BookId, draft: BookDraft) -> Result<Option<Book>> {
        let book = Book::from_draft(id.clone(), draft);
        self.inner.backend.update(&book).await?;

        let replaced = {
            let mut state = self.write();
            if state.contains(id) {
                Self::apply(&mut state, Action::UpdateBook(book.clone()));
                true
            } else {
                false
            }
        };
        if !replaced {
            debug!(id = %id, "Update skipped, no such book");
            return Ok(None);
        }
        info!(id = %book.id, title = %book.details.title, "Book updated");
        self.notify(StoreEvent::BookUpdated(book.clone()));

        self.persist().await?;
        Ok(Some(book))
    }

    /// Remove the book with `id`. Returns whether a book was removed.
    ///
    /// The current page is left as is, even if it no longer has rows.
    pub async fn delete_book(&self, id: &BookId) -> Result<bool> {
        self.dispatch(Action::BeginCommand);
        let result = self.commit_delete(id).await;
        self.finish(result.as_ref().err());
        result
    }

    async fn commit_delete(&self, id: &BookId) -> Result<bool> {
        self.inner.backend.delete(id).await?;

        let removed = {
            let mut state = self.write();
            if state.contains(id) {
                Self::apply(&mut state, Action::DeleteBook(id.clone()));
                true
            } else {
                false
            }
        };
        if !removed {
            debug!(id = %id, "Delete skipped, no such book");
            return Ok(false);
        }
        info!(id = %id, "Book deleted");
        self.notify(StoreEvent::BookDeleted(id.clone()));

        self.persist().await?;
        Ok(true)
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.dispatch(Action::SetSearchTerm(term.into()));
        self.notify(StoreEvent::FiltersChanged(self.criteria()));
    }

    pub fn set_genre_filter(&self, genre: impl Into<String>) {
        self.dispatch(Action::SetGenreFilter(genre.into()));
        self.notify(StoreEvent::FiltersChanged(self.criteria()));
    }

    pub fn set_status_filter(&self, status: Option<BookStatus>) {
        self.dispatch(Action::SetStatusFilter(status));
        self.notify(StoreEvent::FiltersChanged(self.criteria()));
    }

    /// Jump to a page. The value is not checked against [`Self::total_pages`].
    pub fn set_current_page(&self, page: usize) {
        self.dispatch(Action::SetCurrentPage(page));
        self.notify(StoreEvent::PageChanged(page));
    }

    pub fn clear_error(&self) {
        self.dispatch(Action::ClearError);
        self.notify(StoreEvent::ErrorCleared);
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn book_by_id(&self, id: &BookId) -> Option<Book> {
        self.read().find(id).cloned()
    }

    pub fn books(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    pub fn filtered_books(&self) -> Vec<Book> {
        view::filtered_books(&self.read())
    }

    pub fn paginated_books(&self) -> Vec<Book> {
        view::paginated_books(&self.read())
    }

    pub fn total_pages(&self) -> usize {
        view::total_pages(&self.read())
    }

    pub fn genres(&self) -> Vec<String> {
        view::genres(&self.read())
    }

    /// Counters over the whole collection
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_books(&self.read().books)
    }

    pub fn loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn current_page(&self) -> usize {
        self.read().current_page
    }

    pub fn books_per_page(&self) -> usize {
        self.read().books_per_page
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.read().criteria.clone()
    }

    /// Copy of the full state
    pub fn snapshot(&self) -> StoreState {
        self.read().clone()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(state: &mut StoreState, action: Action) {
        let current = std::mem::take(state);
        *state = reduce(current, action);
    }

    fn dispatch(&self, action: Action) {
        Self::apply(&mut self.write(), action);
    }

    /// Close a command, recording its failure if any
    fn finish(&self, error: Option<&crate::StoreError>) {
        let message = error.map(ToString::to_string);
        {
            let mut state = self.write();
            if let Some(message) = &message {
                Self::apply(&mut state, Action::SetError(message.clone()));
            }
            Self::apply(&mut state, Action::EndCommand);
        }
        if let Some(message) = message {
            warn!(error = %message, "Command failed");
            self.notify(StoreEvent::CommandFailed(message));
        }
    }

    /// Write the collection as it is now to storage
    async fn persist(&self) -> Result<()> {
        let _guard = self.inner.persist_lock.lock().await;
        let books = self.books();
        save_collection(
            self.inner.storage.as_ref(),
            &self.inner.config.storage_key,
            &books,
        )
        .await?;
        debug!(count = books.len(), key = %self.inner.config.storage_key, "Persisted collection");
        Ok(())
    }

    fn notify(&self, event: StoreEvent) {
        // Ignore errors (no subscribers)
        let _ = self.inner.event_tx.send(event);
    }
}
