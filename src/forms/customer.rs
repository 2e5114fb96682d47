//! The customer form: ten data fields plus the bound id.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::domain::customer::{Address, Customer, NewCustomer};
use crate::forms::FormError;

/// Stable identifiers of the customer form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Id,
    FirstName,
    LastName,
    Email,
    Subscribed,
    Address1,
    Address2,
    City,
    Province,
    Country,
    Zip,
}

impl FormField {
    /// Every field in page order, id first.
    pub const ALL: [FormField; 11] = [
        FormField::Id,
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

    /// Element identifier of the field in the surrounding page.
    pub const fn element_id(self) -> &'static str {
        match self {
            FormField::Id => "customer_id",
            FormField::FirstName => "customer_first_name",
            FormField::LastName => "customer_last_name",
            FormField::Email => "customer_email",
            FormField::Subscribed => "customer_subscribed",
            FormField::Address1 => "customer_address_1",
            FormField::Address2 => "customer_address_2",
            FormField::City => "customer_city",
            FormField::Province => "customer_province",
            FormField::Country => "customer_country",
            FormField::Zip => "customer_zip",
        }
    }

    /// Key used for the field on the wire and in search queries.
    pub const fn wire_key(self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::FirstName => "firstname",
            FormField::LastName => "lastname",
            FormField::Email => "email",
            FormField::Subscribed => "subscribed",
            FormField::Address1 => "address1",
            FormField::Address2 => "address2",
            FormField::City => "city",
            FormField::Province => "province",
            FormField::Country => "country",
            FormField::Zip => "zip",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.element_id())
    }
}

impl FromStr for FormField {
    type Err = FormError;

    /// Accepts either the element identifier or the wire key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.element_id() == s || field.wire_key() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Collapses the tri-state subscription control to a strict boolean.
///
/// Only the exact literal `"true"` is truthy.
pub fn collapse_subscribed(raw: &str) -> bool {
    raw == "true"
}

/// Current string values of the customer form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerForm {
    id: String,
    firstname: String,
    lastname: String,
    email: String,
    subscribed: String,
    address1: String,
    address2: String,
    city: String,
    province: String,
    country: String,
    zip: String,
}

impl CustomerForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::FirstName => &self.firstname,
            FormField::LastName => &self.lastname,
            FormField::Email => &self.email,
            FormField::Subscribed => &self.subscribed,
            FormField::Address1 => &self.address1,
            FormField::Address2 => &self.address2,
            FormField::City => &self.city,
            FormField::Province => &self.province,
            FormField::Country => &self.country,
            FormField::Zip => &self.zip,
        }
    }

    /// Overwrites the value of a field, as typing into it would.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Id => &mut self.id,
            FormField::FirstName => &mut self.firstname,
            FormField::LastName => &mut self.lastname,
            FormField::Email => &mut self.email,
            FormField::Subscribed => &mut self.subscribed,
            FormField::Address1 => &mut self.address1,
            FormField::Address2 => &mut self.address2,
            FormField::City => &mut self.city,
            FormField::Province => &mut self.province,
            FormField::Country => &mut self.country,
            FormField::Zip => &mut self.zip,
        };
        *slot = value.into();
    }

    /// The bound resource id; empty when nothing is bound.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Collects the data fields into a request body.
    ///
    /// Values pass through untrimmed; only `subscribed` is coerced.
    pub fn read_form(&self) -> NewCustomer {
        NewCustomer {
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            email: self.email.clone(),
            subscribed: collapse_subscribed(&self.subscribed),
            address: Address {
                address1: self.address1.clone(),
                address2: self.address2.clone(),
                city: self.city.clone(),
                province: self.province.clone(),
                country: self.country.clone(),
                zip: self.zip.clone(),
            },
        }
    }

    /// Same as [`Self::read_form`] together with the bound id text.
    pub fn read_form_with_id(&self) -> (String, NewCustomer) {
        (self.id.clone(), self.read_form())
    }

    /// Binds a server record into every field, id included.
    pub fn write_form(&mut self, customer: &Customer) {
        self.id = customer.id.to_string();
        self.firstname.clone_from(&customer.firstname);
        self.lastname.clone_from(&customer.lastname);
        self.email.clone_from(&customer.email);
        self.subscribed = customer.subscribed.to_string();
        self.address1.clone_from(&customer.address.address1);
        self.address2.clone_from(&customer.address.address2);
        self.city.clone_from(&customer.address.city);
        self.province.clone_from(&customer.address.province);
        self.country.clone_from(&customer.address.country);
        self.zip.clone_from(&customer.address.zip);
    }

    /// Empties the data fields. The id stays bound.
    pub fn clear_form(&mut self) {
        let id = std::mem::take(&mut self.id);
        *self = Self {
            id,
            ..Self::default()
        };
    }

    /// Empties every field including the id (the Clear trigger).
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}
