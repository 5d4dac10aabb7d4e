//! Backend access and local persistence.

pub mod api;
pub mod storage;
