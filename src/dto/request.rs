//! Requests built from the form, one per user action.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use reqwest::Method;

use crate::CUSTOMERS_PATH;
use crate::domain::customer::NewCustomer;
use crate::forms::FormError;

/// User-triggered controls of the customer page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Update,
    Retrieve,
    Delete,
    Search,
    Unsubscribe,
    /// Resets the form locally; sends nothing.
    Clear,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Retrieve => "retrieve",
            Action::Delete => "delete",
            Action::Search => "search",
            Action::Unsubscribe => "unsubscribe",
            Action::Clear => "clear",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Action::Create),
            "update" => Ok(Action::Update),
            "retrieve" => Ok(Action::Retrieve),
            "delete" => Ok(Action::Delete),
            "search" => Ok(Action::Search),
            "unsubscribe" => Ok(Action::Unsubscribe),
            "clear" => Ok(Action::Clear),
            other => Err(FormError::UnknownCommand(other.to_string())),
        }
    }
}

/// A single HTTP call against the customers collection.
///
/// Ids are carried as the text found in the form, so an empty id addresses
/// `/customers/` and leaves the rejection to the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustomerRequest {
    Create(NewCustomer),
    Update { id: String, body: NewCustomer },
    Retrieve { id: String },
    Delete { id: String },
    Unsubscribe { id: String },
    /// Query string without the leading `?`.
    Search { query: String },
}

impl CustomerRequest {
    pub const fn action(&self) -> Action {
        match self {
            CustomerRequest::Create(_) => Action::Create,
            CustomerRequest::Update { .. } => Action::Update,
            CustomerRequest::Retrieve { .. } => Action::Retrieve,
            CustomerRequest::Delete { .. } => Action::Delete,
            CustomerRequest::Unsubscribe { .. } => Action::Unsubscribe,
            CustomerRequest::Search { .. } => Action::Search,
        }
    }

    pub fn method(&self) -> Method {
        match self {
            CustomerRequest::Create(_) => Method::POST,
            CustomerRequest::Update { .. } | CustomerRequest::Unsubscribe { .. } => Method::PUT,
            CustomerRequest::Retrieve { .. } | CustomerRequest::Search { .. } => Method::GET,
            CustomerRequest::Delete { .. } => Method::DELETE,
        }
    }

    /// Path and query relative to the service root.
    pub fn path(&self) -> String {
        match self {
            CustomerRequest::Create(_) => CUSTOMERS_PATH.to_string(),
            CustomerRequest::Update { id, .. }
            | CustomerRequest::Retrieve { id }
            | CustomerRequest::Delete { id } => format!("{CUSTOMERS_PATH}/{id}"),
            CustomerRequest::Unsubscribe { id } => format!("{CUSTOMERS_PATH}/{id}/unsubscribe"),
            CustomerRequest::Search { query } => format!("{CUSTOMERS_PATH}?{query}"),
        }
    }

    /// JSON body, present for create and update only.
    pub fn body(&self) -> Option<&NewCustomer> {
        match self {
            CustomerRequest::Create(body) | CustomerRequest::Update { body, .. } => Some(body),
            _ => None,
        }
    }
}
