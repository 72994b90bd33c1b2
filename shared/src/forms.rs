//! Submit handlers behind the create/edit/delete modals.
//!
//! Each handler owns the toast policy of its modal and tells the caller
//! whether the modal should close. Closing is always followed by a refetch of
//! the affected resource; cached entries are never patched locally.

use log::info;

use crate::validation::{validate, BOOK_RULES, USER_RULES};
use crate::{Book, BookId, BookInput, LibraryApi, Notifier, Toast, User, UserId, UserInput};

/// Whether a form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

impl<Id> FormMode<Id> {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    fn verb(&self) -> &'static str {
        match self {
            FormMode::Create => "created",
            FormMode::Edit(_) => "updated",
        }
    }
}

/// Validate and send the book form. Returns `true` when the modal should close.
pub async fn submit_book<A, N>(
    api: &A,
    notifier: &N,
    mode: FormMode<BookId>,
    draft: &BookInput,
) -> bool
where
    A: LibraryApi + ?Sized,
    N: Notifier + ?Sized,
{
    if let Err(e) = validate(draft, BOOK_RULES) {
        notifier.notify(Toast::error(e.message));
        return false;
    }

    let saved = match mode {
        FormMode::Create => api.create_book(draft).await,
        FormMode::Edit(id) => api.update_book(id, draft).await,
    };

    match saved {
        Some(book) => {
            info!("Book {} {}", book.id, mode.verb());
            notifier.notify(Toast::success(format!("Book {} successfully", mode.verb())));
            true
        }
        None => {
            notifier.notify(Toast::generic_failure());
            false
        }
    }
}

/// Validate and send the user form. Returns `true` when the modal should close.
pub async fn submit_user<A, N>(
    api: &A,
    notifier: &N,
    mode: FormMode<UserId>,
    draft: &UserInput,
) -> bool
where
    A: LibraryApi + ?Sized,
    N: Notifier + ?Sized,
{
    if let Err(e) = validate(draft, USER_RULES) {
        notifier.notify(Toast::error(e.message));
        return false;
    }

    let saved = match mode {
        FormMode::Create => api.create_user(draft).await,
        FormMode::Edit(id) => api.update_user(id, draft).await,
    };

    match saved {
        Some(user) => {
            info!("User {} {}", user.id, mode.verb());
            notifier.notify(Toast::success(format!("User {} successfully", mode.verb())));
            true
        }
        None => {
            notifier.notify(Toast::generic_failure());
            false
        }
    }
}

/// Delete a book after confirmation. The modal always closes afterwards.
pub async fn confirm_delete_book<A, N>(api: &A, notifier: &N, book: &Book)
where
    A: LibraryApi + ?Sized,
    N: Notifier + ?Sized,
{
    match api.delete_book(book.id).await {
        Some(_) => {
            info!("Book {} deleted", book.id);
            notifier.notify(Toast::success("Book deleted successfully"));
        }
        None => notifier.notify(Toast::generic_failure()),
    }
}

/// Delete a user after confirmation. The modal always closes afterwards.
pub async fn confirm_delete_user<A, N>(api: &A, notifier: &N, user: &User)
where
    A: LibraryApi + ?Sized,
    N: Notifier + ?Sized,
{
    match api.delete_user(user.id).await {
        Some(_) => {
            info!("User {} deleted", user.id);
            notifier.notify(Toast::success("User deleted successfully"));
        }
        None => notifier.notify(Toast::generic_failure()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::GENERIC_FAILURE;
    use crate::test_utils::{sample_book, sample_user, FakeLibrary, RecordingNotifier};
    use serde_json::json;

    fn dune() -> BookInput {
        BookInput {
            title: "Dune".to_string(),
            authors: vec!["Frank Herbert".to_string()],
            publisher: "Chilton".to_string(),
            num_pages: 412,
            stock_quantity: 3,
            ..BookInput::default()
        }
    }

    #[tokio::test]
    async fn test_created_book_appears_once_in_list() {
        let api = FakeLibrary::default();
        api.seed_books(vec![sample_book(1, "Emma")]);
        let notifier = RecordingNotifier::default();

        assert!(submit_book(&api, &notifier, FormMode::Create, &dune()).await);

        let books = api.list_books().await.unwrap();
        let matching: Vec<_> = books.iter().filter(|b| BookInput::from(*b) == dune()).collect();
        assert_eq!(books.len(), 2);
        assert_eq!(matching.len(), 1);
        assert_eq!(notifier.toasts(), vec![Toast::success("Book created successfully")]);
    }

    #[tokio::test]
    async fn test_invalid_book_never_reaches_backend() {
        let api = FakeLibrary::default();
        let notifier = RecordingNotifier::default();
        let mut draft = dune();
        draft.authors.clear();
        draft.stock_quantity = 0;

        assert!(!submit_book(&api, &notifier, FormMode::Create, &draft).await);
        assert_eq!(notifier.toasts(), vec![Toast::error("Please add at least one author")]);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_update_keeps_form_open() {
        let api = FakeLibrary::default();
        api.seed_books(vec![sample_book(1, "Dune")]);
        api.fail("update_book");
        let notifier = RecordingNotifier::default();

        assert!(!submit_book(&api, &notifier, FormMode::Edit(1), &dune()).await);
        assert_eq!(notifier.toasts(), vec![Toast::error(GENERIC_FAILURE)]);
    }

    #[tokio::test]
    async fn test_edit_book_updates_record() {
        let api = FakeLibrary::default();
        api.seed_books(vec![sample_book(1, "Old Title")]);
        let notifier = RecordingNotifier::default();

        assert!(submit_book(&api, &notifier, FormMode::Edit(1), &dune()).await);
        assert_eq!(api.list_books().await.unwrap()[0].title, "Dune");
        assert_eq!(notifier.toasts(), vec![Toast::success("Book updated successfully")]);
    }

    #[tokio::test]
    async fn test_create_then_edit_user_sends_name_and_email_only() {
        let api = FakeLibrary::default();
        let notifier = RecordingNotifier::default();
        let ada = UserInput {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
        };

        assert!(submit_user(&api, &notifier, FormMode::Create, &ada).await);
        let users = api.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ada");

        let mut edited = UserInput::from(&users[0]);
        edited.email = "ada@lovelace.org".to_string();
        assert!(submit_user(&api, &notifier, FormMode::Edit(users[0].id), &edited).await);

        assert_eq!(
            api.last_user_update_body(),
            Some(json!({"email": "ada@lovelace.org", "name": "Ada"}))
        );
        assert_eq!(api.list_users().await.unwrap()[0].email, "ada@lovelace.org");
    }

    #[tokio::test]
    async fn test_blank_user_name_rejected() {
        let api = FakeLibrary::default();
        let notifier = RecordingNotifier::default();
        let draft = UserInput {
            name: " ".to_string(),
            email: "x@y.z".to_string(),
        };

        assert!(!submit_user(&api, &notifier, FormMode::Create, &draft).await);
        assert_eq!(notifier.toasts(), vec![Toast::error("Name cannot be empty")]);
    }

    #[tokio::test]
    async fn test_delete_unknown_book_reports_failure() {
        let api = FakeLibrary::default();
        api.seed_books(vec![sample_book(1, "Dune")]);
        let notifier = RecordingNotifier::default();

        confirm_delete_book(&api, &notifier, &sample_book(42, "Ghost")).await;

        assert_eq!(notifier.toasts(), vec![Toast::error(GENERIC_FAILURE)]);
        assert_eq!(api.list_books().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_user() {
        let api = FakeLibrary::default();
        api.seed_users(vec![sample_user(1, "Ada"), sample_user(2, "Grace")]);
        let notifier = RecordingNotifier::default();

        confirm_delete_user(&api, &notifier, &sample_user(1, "Ada")).await;

        assert_eq!(notifier.toasts(), vec![Toast::success("User deleted successfully")]);
        assert_eq!(api.list_users().await.unwrap(), vec![sample_user(2, "Grace")]);
    }
}
