//! quill - a blog post CRUD REST service over a pluggable document store

pub mod cli;
pub mod config;
pub mod fixtures;
pub mod http_api;
pub mod store;
