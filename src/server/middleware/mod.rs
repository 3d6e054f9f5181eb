//! Request middleware for the REST facade.

pub mod api_key;
