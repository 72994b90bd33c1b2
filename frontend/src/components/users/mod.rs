pub mod delete_user_modal;
pub mod user_details_modal;
pub mod user_form_modal;
