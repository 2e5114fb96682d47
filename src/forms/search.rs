//! Partial-attribute search built from the customer form.

use serde::Deserialize;

use crate::forms::FormError;
use crate::forms::customer::{CustomerForm, FormField, collapse_subscribed};

/// Candidate filters in the order they appear in the query string.
pub const SEARCH_FIELDS: [FormField; 10] = [
    FormField::FirstName,
    FormField::LastName,
    FormField::Email,
    FormField::Subscribed,
    FormField::Address1,
    FormField::Address2,
    FormField::City,
    FormField::Province,
    FormField::Country,
    FormField::Zip,
];

/// How filter values are written into the query string.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QueryEncoding {
    /// Values are inserted as typed. `&` or `=` inside a value corrupts the query.
    #[default]
    Verbatim,
    /// Keys and values are `application/x-www-form-urlencoded`.
    Form,
}

/// Non-empty filters collected from the form, in [`SEARCH_FIELDS`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pairs: Vec<(&'static str, String)>,
}

impl SearchQuery {
    /// Picks the non-empty filters from the form.
    ///
    /// `subscribed` only participates when it collapses to `true`, so a search
    /// cannot ask for unsubscribed customers explicitly.
    pub fn from_form(form: &CustomerForm) -> Self {
        let pairs = SEARCH_FIELDS
            .into_iter()
            .filter_map(|field| {
                let value = form.get(field);
                let value = match field {
                    FormField::Subscribed if collapse_subscribed(value) => "true",
                    FormField::Subscribed => return None,
                    _ if value.is_empty() => return None,
                    _ => value,
                };
                Some((field.wire_key(), value.to_string()))
            })
            .collect();
        Self { pairs }
    }

    /// Renders the query string without the leading `?`.
    pub fn to_query_string(&self, encoding: QueryEncoding) -> Result<String, FormError> {
        match encoding {
            QueryEncoding::Verbatim => Ok(self
                .pairs
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("&")),
            QueryEncoding::Form => serde_html_form::to_string(&self.pairs)
                .map_err(|err| FormError::QueryEncoding(err.to_string())),
        }
    }
}
