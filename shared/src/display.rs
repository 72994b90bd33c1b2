//! Lookups and formatting used by the tables.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{Book, BookId, Transaction, TransactionStatus, User, UserId};

/// Shown in place of a user or book that is no longer in the cache
pub const UNKNOWN: &str = "Unknown";

pub fn find_user(users: &[User], id: UserId) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

pub fn find_book(books: &[Book], id: BookId) -> Option<&Book> {
    books.iter().find(|b| b.id == id)
}

pub fn user_name(users: &[User], id: UserId) -> &str {
    find_user(users, id).map_or(UNKNOWN, |u| u.name.as_str())
}

pub fn book_title(books: &[Book], id: BookId) -> &str {
    find_book(books, id).map_or(UNKNOWN, |b| b.title.as_str())
}

pub fn authors_line(book: &Book) -> String {
    book.authors.join(", ")
}

/// Render a backend timestamp as e.g. `Mar 04, 2024`.
///
/// Accepts RFC 3339, naive ISO date-times (with or without fractional
/// seconds) and plain dates. Anything else is returned unchanged.
pub fn format_date(raw: &str) -> String {
    const DISPLAY: &str = "%b %d, %Y";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DISPLAY).to_string();
    }
    raw.to_string()
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibraryStats {
    pub titles: usize,
    pub copies_in_stock: i64,
    pub members: usize,
    pub books_out: usize,
}

impl LibraryStats {
    pub fn collect(books: &[Book], users: &[User], transactions: &[Transaction]) -> Self {
        Self {
            titles: books.len(),
            copies_in_stock: books.iter().map(|b| b.stock_quantity.max(0)).sum(),
            members: users.len(),
            books_out: transactions
                .iter()
                .filter(|t| t.status == TransactionStatus::Pending)
                .count(),
        }
    }
}
