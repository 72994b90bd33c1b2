pub mod book_detail;
pub mod books;
pub mod dashboard;
pub mod error_page;
pub mod transactions;
pub mod users;
