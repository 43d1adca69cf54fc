pub mod form;
pub mod notification;
