//! Console client binding a customer form to a remote customers collection.
//!
//! An action reads the form, builds one request, sends it through a
//! [`transport::CustomerTransport`] and renders the outcome back into the
//! [`page::Page`].

pub mod console;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod page;
pub mod render;
pub mod services;
pub mod transport;

/// Collection path of the remote service.
pub const CUSTOMERS_PATH: &str = "/customers";
