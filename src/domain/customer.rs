use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerId, lenient_bool, lenient_opt_bool};

/// Postal address nested inside every customer record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Address {
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub zip: String,
}

/// Customer as returned by the server after create, update or retrieve.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub subscribed: bool,
    #[serde(default)]
    pub address: Address,
}

/// Request body for create and update. The server owns the id.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct NewCustomer {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub subscribed: bool,
    pub address: Address,
}

/// Flat listing entry returned by the search endpoint.
///
/// Every field is optional on the wire; missing values render as empty cells.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CustomerSummary {
    pub id: Option<i64>,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(deserialize_with = "lenient_opt_bool")]
    pub subscribed: Option<bool>,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub zip: String,
}

impl CustomerSummary {
    /// Returns the cell values in results-table column order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.firstname.clone(),
            self.lastname.clone(),
            self.email.clone(),
            self.subscribed.map(|flag| flag.to_string()).unwrap_or_default(),
            self.address1.clone(),
            self.address2.clone(),
            self.city.clone(),
            self.province.clone(),
            self.country.clone(),
            self.zip.clone(),
        ]
    }
}
