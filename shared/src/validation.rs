//! Client-side form checks.
//!
//! Each form has an ordered list of named rules. Rules run in order and the
//! first one that fails is the only error reported.

use thiserror::Error;

use crate::{BookId, BookInput, TransactionInput, UserId, UserInput};

/// A single failed rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

/// A named predicate over a form draft
pub struct Rule<T> {
    pub field: &'static str,
    pub message: &'static str,
    pub check: fn(&T) -> bool,
}

/// Run `rules` in order, stopping at the first failure
pub fn validate<T>(value: &T, rules: &[Rule<T>]) -> Result<(), ValidationError> {
    match rules.iter().find(|rule| !(rule.check)(value)) {
        Some(rule) => Err(ValidationError {
            field: rule.field,
            message: rule.message,
        }),
        None => Ok(()),
    }
}

pub const BOOK_RULES: &[Rule<BookInput>] = &[
    Rule {
        field: "authors",
        message: "Please add at least one author",
        check: |book| !book.authors.is_empty(),
    },
    Rule {
        field: "stock_quantity",
        message: "Stock quantity must be greater than 0",
        check: |book| book.stock_quantity > 0,
    },
    Rule {
        field: "num_pages",
        message: "Page count must be greater than 0",
        check: |book| book.num_pages > 0,
    },
    Rule {
        field: "title",
        message: "Title cannot be empty",
        check: |book| !book.title.trim().is_empty(),
    },
    Rule {
        field: "publisher",
        message: "Publisher cannot be empty",
        check: |book| !book.publisher.trim().is_empty(),
    },
];

pub const USER_RULES: &[Rule<UserInput>] = &[
    Rule {
        field: "name",
        message: "Name cannot be empty",
        check: |user| !user.name.trim().is_empty(),
    },
    Rule {
        field: "email",
        message: "Email cannot be empty",
        check: |user| !user.email.trim().is_empty(),
    },
];

/// Draft of the checkout form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutDraft {
    pub user_id: Option<UserId>,
    pub book_id: Option<BookId>,
    pub quantity: i64,
}

impl CheckoutDraft {
    /// The transaction body, once both a user and a book are picked
    pub fn input(&self) -> Option<TransactionInput> {
        Some(TransactionInput {
            user_id: self.user_id?,
            book_id: self.book_id?,
        })
    }
}

pub const CHECKOUT_RULES: &[Rule<CheckoutDraft>] = &[
    Rule {
        field: "user_id",
        message: "Please select a user",
        check: |draft| draft.user_id.is_some(),
    },
    Rule {
        field: "book_id",
        message: "Please select a book",
        check: |draft| draft.book_id.is_some(),
    },
    Rule {
        field: "quantity",
        message: "Please select number of books issued",
        check: |draft| draft.quantity > 0,
    },
];

/// Parameters of an external catalog lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportQuery {
    pub keyword: String,
    pub limit: i64,
}

impl Default for ImportQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            limit: 10,
        }
    }
}

pub const IMPORT_RULES: &[Rule<ImportQuery>] = &[Rule {
    field: "limit",
    message: "Number of books must be greater than 0",
    check: |query| query.limit > 0,
}];
