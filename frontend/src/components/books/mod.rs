pub mod book_form_modal;
pub mod delete_book_modal;
pub mod import_books_modal;
