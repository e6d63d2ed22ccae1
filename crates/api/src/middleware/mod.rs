//! Request extractors that enforce access rules.

pub mod auth;
