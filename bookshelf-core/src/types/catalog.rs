//! Known genres and languages, and the built-in sample collection

use super::{Book, BookDraft, BookId, BookStatus};

/// Genres offered when entering a book. The store accepts any genre string.
pub const GENRES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Thriller",
    "Romance",
    "Horror",
    "Biography",
    "History",
    "Science",
    "Technology",
    "Philosophy",
    "Self-Help",
    "Poetry",
    "Drama",
    "Children",
    "Young Adult",
];

/// Languages offered when entering a book
pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Russian",
    "Chinese",
    "Japanese",
    "Korean",
    "Arabic",
    "Hindi",
];

/// Language pre-filled for new drafts
pub const DEFAULT_LANGUAGE: &str = "English";

/// Whether a genre is one of [`GENRES`]
pub fn is_known_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}

/// Whether a language is one of [`LANGUAGES`]
pub fn is_known_language(language: &str) -> bool {
    LANGUAGES.contains(&language)
}

/// The collection used to seed an empty storage
pub fn sample_books() -> Vec<Book> {
    let entries = [
        (
            BookDraft::new("To Kill a Mockingbird", "Harper Lee", "Fiction", 1960)
                .with_description("A story of racial injustice and childhood innocence in the American South.")
                .with_isbn("978-0-06-112008-4")
                .with_pages(324)
                .with_publisher("J. B. Lippincott & Co."),
            BookStatus::Available,
        ),
        (
            BookDraft::new("1984", "George Orwell", "Science Fiction", 1949)
                .with_description("A dystopian novel about totalitarian surveillance.")
                .with_isbn("978-0-452-28423-4")
                .with_pages(328)
                .with_publisher("Secker & Warburg"),
            BookStatus::Issued,
        ),
        (
            BookDraft::new("Pride and Prejudice", "Jane Austen", "Romance", 1813)
                .with_description("A witty study of manners, marriage and money.")
                .with_isbn("978-0-14-143951-8")
                .with_pages(432)
                .with_publisher("T. Egerton"),
            BookStatus::Available,
        ),
        (
            BookDraft::new("The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937)
                .with_description("Bilbo Baggins is swept into a quest for dragon-guarded treasure.")
                .with_isbn("978-0-547-92822-7")
                .with_pages(310)
                .with_publisher("George Allen & Unwin"),
            BookStatus::Available,
        ),
        (
            BookDraft::new("The Da Vinci Code", "Dan Brown", "Thriller", 2003)
                .with_description("A symbologist follows a trail of clues through Paris and London.")
                .with_isbn("978-0-385-50420-5")
                .with_pages(489)
                .with_publisher("Doubleday"),
            BookStatus::Issued,
        ),
        (
            BookDraft::new("Sapiens", "Yuval Noah Harari", "History", 2011)
                .with_description("A brief history of humankind.")
                .with_isbn("978-0-06-231609-7")
                .with_pages(443)
                .with_publisher("Harvill Secker"),
            BookStatus::Available,
        ),
        (
            BookDraft::new("The Murder of Roger Ackroyd", "Agatha Christie", "Mystery", 1926)
                .with_description("Hercule Poirot investigates a death in a quiet English village.")
                .with_isbn("978-0-06-207348-8")
                .with_pages(312)
                .with_publisher("William Collins, Sons"),
            BookStatus::Available,
        ),
        (
            BookDraft::new("A Brief History of Time", "Stephen Hawking", "Science", 1988)
                .with_description("From the Big Bang to black holes.")
                .with_isbn("978-0-553-38016-3")
                .with_pages(212)
                .with_publisher("Bantam Dell"),
            BookStatus::Issued,
        ),
        (
            BookDraft::new("Steve Jobs", "Walter Isaacson", "Biography", 2011)
                .with_description("The authorized biography of Apple's co-founder.")
                .with_isbn("978-1-4516-4853-9")
                .with_pages(656)
                .with_publisher("Simon & Schuster"),
            BookStatus::Available,
        ),
        (
            BookDraft::new("Dune", "Frank Herbert", "Science Fiction", 1965)
                .with_description("Politics, religion and ecology on the desert planet Arrakis.")
                .with_isbn("978-0-441-17271-9")
                .with_pages(412)
                .with_publisher("Chilton Books"),
            BookStatus::Available,
        ),
        (
            BookDraft::new("The Pragmatic Programmer", "Andrew Hunt", "Technology", 1999)
                .with_description("Practical advice for working software developers.")
                .with_isbn("978-0-201-61622-4")
                .with_pages(352)
                .with_publisher("Addison-Wesley"),
            BookStatus::Issued,
        ),
        (
            BookDraft::new("Meditations", "Marcus Aurelius", "Philosophy", 1558)
                .with_description("Private notes on Stoic philosophy.")
                .with_pages(254)
                .with_publisher("Penguin Classics"),
            BookStatus::Available,
        ),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (draft, status))| {
            let draft = draft.with_status(status).with_language(DEFAULT_LANGUAGE);
            Book::from_draft(BookId::new((i + 1).to_string()), draft)
        })
        .collect()
}
