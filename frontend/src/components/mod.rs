pub mod books;
pub mod header;
pub mod loading_overlay;
pub mod modal;
pub mod pagination_footer;
pub mod toaster;
pub mod transactions;
pub mod users;
