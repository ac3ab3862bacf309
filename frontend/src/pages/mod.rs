pub mod activate;
pub mod dashboard;
pub mod login;
