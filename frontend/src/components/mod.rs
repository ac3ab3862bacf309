pub mod common;
pub mod error;
pub mod guard;
pub mod input;
pub mod layout;
pub mod modal;
pub mod toast;
