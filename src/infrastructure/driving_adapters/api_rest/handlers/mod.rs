//! HTTP Handlers

pub mod pages;
pub mod users;
