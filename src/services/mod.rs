pub mod document;
pub mod slug;
pub mod validation;
