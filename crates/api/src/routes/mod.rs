//! Request Handlers

pub mod analysis;
