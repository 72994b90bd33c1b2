//! Checkout and return of books.
//!
//! A checkout of `quantity` copies is sent as `quantity` separate transaction
//! creations, one after another. The backend has no batch endpoint for
//! transactions, so a failure part-way leaves the copies created so far in
//! place and the whole checkout is reported as failed.

use log::{info, warn};
use thiserror::Error;

use crate::fetch::fetch_transactions;
use crate::validation::{validate, CheckoutDraft, ValidationError, CHECKOUT_RULES};
use crate::{CacheStore, LibraryApi, Notifier, Toast, Transaction, TransactionInput};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The backend rejected one of the creations; `created` copies exist anyway
    #[error("checkout stopped after {created} of {requested} copies")]
    Interrupted { created: usize, requested: usize },
}

/// Issue the requested number of copies, stopping at the first failure
pub async fn checkout<A>(api: &A, draft: &CheckoutDraft) -> Result<Vec<Transaction>, CheckoutError>
where
    A: LibraryApi + ?Sized,
{
    validate(draft, CHECKOUT_RULES)?;

    let Some(input) = draft.input() else {
        return Err(CheckoutError::Invalid(ValidationError {
            field: "user_id",
            message: "Please select a user",
        }));
    };
    let TransactionInput { user_id, book_id } = input;
    let requested = usize::try_from(draft.quantity).unwrap_or_default();

    let mut created = Vec::with_capacity(requested);
    for _ in 0..requested {
        match api.create_transaction(&input).await {
            Some(transaction) => created.push(transaction),
            None => {
                warn!(
                    "Checkout of book {} for user {} interrupted after {} of {} copies",
                    book_id,
                    user_id,
                    created.len(),
                    requested
                );
                return Err(CheckoutError::Interrupted {
                    created: created.len(),
                    requested,
                });
            }
        }
    }

    info!("Issued {} copies of book {} to user {}", requested, book_id, user_id);
    Ok(created)
}

/// How a submitted checkout ended, as far as the modal is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Every copy was issued
    Issued,
    /// Nothing reached the backend, or nothing was created
    Rejected,
    /// Some copies were issued before a failure
    Interrupted { created: usize },
}

impl CheckoutOutcome {
    pub fn closes_modal(&self) -> bool {
        matches!(self, CheckoutOutcome::Issued)
    }

    /// Whether the server-side transactions changed and must be refetched
    pub fn needs_refresh(&self) -> bool {
        match self {
            CheckoutOutcome::Issued => true,
            CheckoutOutcome::Rejected => false,
            CheckoutOutcome::Interrupted { created } => *created > 0,
        }
    }
}

/// Run a checkout from the modal, toasting the result
pub async fn submit_checkout<A, N>(api: &A, notifier: &N, draft: &CheckoutDraft) -> CheckoutOutcome
where
    A: LibraryApi + ?Sized,
    N: Notifier + ?Sized,
{
    match checkout(api, draft).await {
        Ok(_) => {
            notifier.notify(Toast::success("Issued the book successfully"));
            CheckoutOutcome::Issued
        }
        Err(CheckoutError::Invalid(e)) => {
            notifier.notify(Toast::error(e.message));
            CheckoutOutcome::Rejected
        }
        Err(CheckoutError::Interrupted { created: 0, .. }) => {
            notifier.notify(Toast::generic_failure());
            CheckoutOutcome::Rejected
        }
        Err(CheckoutError::Interrupted { created, .. }) => {
            notifier.notify(Toast::generic_failure());
            CheckoutOutcome::Interrupted { created }
        }
    }
}

/// Flip a transaction between borrowed and returned, then refresh the list
pub async fn toggle_status<A, C, N>(api: &A, cache: &C, notifier: &N, transaction: &Transaction)
where
    A: LibraryApi + ?Sized,
    C: CacheStore + ?Sized,
    N: Notifier + ?Sized,
{
    let next = transaction.status.toggled();
    notifier.set_loading(true);
    if api
        .update_transaction_status(transaction.id, next)
        .await
        .is_none()
    {
        notifier.notify(Toast::generic_failure());
    }
    notifier.set_loading(false);
    fetch_transactions(api, cache, notifier).await;
}
