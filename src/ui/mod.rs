pub mod components;
pub mod dashboard;
