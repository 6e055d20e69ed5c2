//! Agreements: stored legal documents and their owners.

pub mod entities;
pub mod value_objects;
