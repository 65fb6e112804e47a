use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::base::{Country, GeoPosition, Id, Image};
use super::time::DateTime;
use super::vocab::{ContactType, OrganisationType, Sex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub family: String,
    pub given: String,
}

impl PersonName {
    pub fn new(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
        }
    }
}

/// A competitor, or a contact person of an organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub ids: Vec<Id>,
    pub name: PersonName,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<Country>,
    pub addresses: Vec<Address>,
    pub contacts: Vec<Contact>,
    pub sex: Option<Sex>,
    pub modify_time: Option<DateTime>,
}

impl Person {
    pub fn new(name: PersonName) -> Self {
        Self {
            ids: Vec::new(),
            name,
            birth_date: None,
            nationality: None,
            addresses: Vec::new(),
            contacts: Vec::new(),
            sex: None,
            modify_time: None,
        }
    }
}

/// Postal address of a person or organisation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    pub care_of: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<Country>,
    /// E.g. visitor address or invoice address.
    pub address_type: Option<String>,
    pub modify_time: Option<DateTime>,
}

/// Contact information (phone number, email, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub value: String,
    pub contact_type: ContactType,
    pub modify_time: Option<DateTime>,
}

impl Contact {
    pub fn new(contact_type: ContactType, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            contact_type,
            modify_time: None,
        }
    }
}

/// Connection between a person and a task, e.g. course setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub person: Person,
    pub role_type: String,
}

/// Bank account of an organisation or event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account: String,
    pub account_type: Option<String>,
}

/// A federation, club or other organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organisation {
    pub id: Option<Id>,
    pub name: String,
    pub short_name: Option<String>,
    /// Name used in media, e.g. TV graphics.
    pub media_name: Option<String>,
    pub parent_organisation_id: Option<Id>,
    pub country: Option<Country>,
    pub addresses: Vec<Address>,
    pub contacts: Vec<Contact>,
    pub position: Option<GeoPosition>,
    pub accounts: Vec<Account>,
    pub roles: Vec<Role>,
    pub logotypes: Vec<Image>,
    pub organisation_type: Option<OrganisationType>,
    pub modify_time: Option<DateTime>,
}

impl Organisation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            short_name: None,
            media_name: None,
            parent_organisation_id: None,
            country: None,
            addresses: Vec::new(),
            contacts: Vec::new(),
            position: None,
            accounts: Vec::new(),
            roles: Vec::new(),
            logotypes: Vec::new(),
            organisation_type: None,
            modify_time: None,
        }
    }
}
