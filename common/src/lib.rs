pub mod form;
pub mod model;
pub mod requests;
pub mod search;
