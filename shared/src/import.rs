//! Bulk import of books from the external catalog.
//!
//! Imported rows are previewed in a table where the user picks which ones to
//! add. Duplicate detection belongs to the backend: every selected row is
//! sent and the response says how many were actually new.

use std::collections::BTreeSet;

use log::info;

use crate::validation::{validate, ImportQuery, IMPORT_RULES};
use crate::{Book, BookInput, LibraryApi, Notifier, Toast};

/// State of the "select all" checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Imported rows and which of them are selected
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSelection {
    books: Vec<Book>,
    selected: BTreeSet<usize>,
}

impl ImportSelection {
    /// Start a fresh preview; nothing is selected
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            selected: BTreeSet::new(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Check or uncheck one row. Out-of-range indices are ignored.
    pub fn set_selected(&mut self, index: usize, selected: bool) {
        if index >= self.books.len() {
            return;
        }
        if selected {
            self.selected.insert(index);
        } else {
            self.selected.remove(&index);
        }
    }

    pub fn toggle(&mut self, index: usize) {
        let selected = !self.is_selected(index);
        self.set_selected(index, selected);
    }

    /// What the header checkbox does: select every row or clear the selection
    pub fn set_all(&mut self, selected: bool) {
        if selected {
            self.selected = (0..self.books.len()).collect();
        } else {
            self.selected.clear();
        }
    }

    /// Checked iff every row is selected and there is at least one row
    pub fn select_all_state(&self) -> SelectAllState {
        if self.books.is_empty() || self.selected.is_empty() {
            SelectAllState::Unchecked
        } else if self.selected.len() == self.books.len() {
            SelectAllState::Checked
        } else {
            SelectAllState::Indeterminate
        }
    }

    /// Selected rows as creation bodies, with their stock zeroed
    pub fn selected_inputs(&self) -> Vec<BookInput> {
        self.selected
            .iter()
            .filter_map(|&index| self.books.get(index))
            .map(|book| BookInput {
                stock_quantity: 0,
                ..BookInput::from(book)
            })
            .collect()
    }
}

/// Query the catalog and build a new preview. `None` keeps the current preview.
pub async fn fetch_preview<A, N>(
    api: &A,
    notifier: &N,
    query: &ImportQuery,
) -> Option<ImportSelection>
where
    A: LibraryApi + ?Sized,
    N: Notifier + ?Sized,
{
    if let Err(e) = validate(query, IMPORT_RULES) {
        notifier.notify(Toast::error(e.message));
        return None;
    }
    let limit = u32::try_from(query.limit).unwrap_or(u32::MAX);

    notifier.set_loading(true);
    let imported = api.import_books(limit, &query.keyword).await;
    notifier.set_loading(false);

    match imported {
        Some(imported) => {
            notifier.notify(Toast::success(format!("Fetched {} books", imported.count)));
            Some(ImportSelection::new(imported.books))
        }
        None => {
            notifier.notify(Toast::generic_failure());
            None
        }
    }
}

/// Send the selected rows to the library. Returns `true` when the modal should close.
pub async fn add_to_library<A, N>(api: &A, notifier: &N, selection: &ImportSelection) -> bool
where
    A: LibraryApi + ?Sized,
    N: Notifier + ?Sized,
{
    let books = selection.selected_inputs();
    if books.is_empty() {
        notifier.notify(Toast::error("Please select at least one book to proceed"));
        return false;
    }

    notifier.set_loading(true);
    let created = api.create_book_batch(&books).await;
    notifier.set_loading(false);

    match created {
        Some(created) => {
            info!(
                "Imported {} books, {} new to the library",
                books.len(),
                created.count_unique
            );
            notifier.notify(Toast::success(format!(
                "Added {} new books to the library",
                created.count_unique
            )));
            true
        }
        None => {
            notifier.notify(Toast::generic_failure());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::GENERIC_FAILURE;
    use crate::test_utils::{sample_book, FakeLibrary, RecordingNotifier};

    fn preview(n: i64) -> ImportSelection {
        ImportSelection::new((1..=n).map(|i| sample_book(i, &format!("Book {}", i))).collect())
    }

    #[test]
    fn test_select_all_then_deselect_one() {
        let mut selection = preview(5);
        assert_eq!(selection.select_all_state(), SelectAllState::Unchecked);

        selection.set_all(true);
        assert_eq!(selection.selected_count(), 5);
        assert_eq!(selection.select_all_state(), SelectAllState::Checked);

        selection.toggle(2);
        assert_eq!(selection.selected_count(), 4);
        assert!(!selection.is_selected(2));
        assert_eq!(selection.select_all_state(), SelectAllState::Indeterminate);

        selection.set_selected(2, true);
        assert_eq!(selection.select_all_state(), SelectAllState::Checked);

        selection.set_all(false);
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn test_empty_preview_is_never_checked() {
        let mut selection = ImportSelection::default();
        selection.set_all(true);
        assert_eq!(selection.select_all_state(), SelectAllState::Unchecked);
        selection.set_selected(0, true);
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn test_selected_inputs_zero_stock() {
        let mut selection = preview(3);
        selection.set_selected(0, true);
        selection.set_selected(2, true);

        let inputs = selection.selected_inputs();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].title, "Book 1");
        assert_eq!(inputs[1].title, "Book 3");
        assert!(inputs.iter().all(|b| b.stock_quantity == 0));
    }

    #[tokio::test]
    async fn test_fetch_preview_replaces_selection() {
        let api = FakeLibrary::default();
        api.seed_catalog(vec![sample_book(100, "Dune"), sample_book(101, "Dune Messiah")]);
        let notifier = RecordingNotifier::default();
        let query = ImportQuery {
            keyword: "Dune".to_string(),
            limit: 10,
        };

        let selection = fetch_preview(&api, &notifier, &query).await.unwrap();

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.selected_count(), 0);
        assert_eq!(notifier.toasts(), vec![Toast::success("Fetched 2 books")]);
    }

    #[tokio::test]
    async fn test_fetch_preview_failure() {
        let api = FakeLibrary::default();
        api.fail("import_books");
        let notifier = RecordingNotifier::default();

        assert!(fetch_preview(&api, &notifier, &ImportQuery::default()).await.is_none());
        assert_eq!(notifier.toasts(), vec![Toast::error(GENERIC_FAILURE)]);
    }

    #[tokio::test]
    async fn test_add_to_library_requires_selection() {
        let api = FakeLibrary::default();
        let notifier = RecordingNotifier::default();

        assert!(!add_to_library(&api, &notifier, &preview(3)).await);
        assert_eq!(
            notifier.toasts(),
            vec![Toast::error("Please select at least one book to proceed")]
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_to_library_reports_unique_count() {
        let api = FakeLibrary::default();
        api.seed_books(vec![sample_book(1, "Book 1")]);
        let notifier = RecordingNotifier::default();
        let mut selection = preview(3);
        selection.set_all(true);

        assert!(add_to_library(&api, &notifier, &selection).await);

        // "Book 1" was already in the library
        assert_eq!(
            notifier.toasts(),
            vec![Toast::success("Added 2 new books to the library")]
        );
        let books = api.list_books().await.unwrap();
        assert_eq!(books.len(), 3);
        assert!(books.iter().skip(1).all(|b| b.stock_quantity == 0));
    }
}
