pub mod chat_widget;
pub mod contact_form;
pub mod navbar;
