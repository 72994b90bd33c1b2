pub mod checkout_modal;
pub mod transaction_table;

pub use checkout_modal::CheckoutModal;
pub use transaction_table::TransactionTable;
