//! Decoded successful replies from the customers endpoint.

use crate::domain::customer::{Customer, CustomerSummary};

/// Body of a 2xx reply, shaped by the request that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiReply {
    /// A single customer (create, update, retrieve, unsubscribe).
    Customer(Customer),
    /// Delete succeeded; the body is not consulted.
    Deleted,
    /// Search results in server order.
    Listing(Vec<CustomerSummary>),
}
