//! Wire records exchanged with the remote customers collection.

pub mod customer;
pub mod types;
