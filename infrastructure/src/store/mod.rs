//! Agreement store adapters
//!
//! Both adapters implement [`AgreementRepository`](covenant_application::AgreementRepository)
//! over an immutable map loaded once; lookups take no locks.

mod json_file;
mod memory;

pub use json_file::{JsonAgreementStore, StoreError};
pub use memory::InMemoryAgreementStore;
