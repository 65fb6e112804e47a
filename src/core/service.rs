use serde::{Deserialize, Serialize};

use super::base::{Id, LanguageString};
use super::fee::AssignedFee;
use super::fee::Fee;
use super::party::{Organisation, Person};
use super::time::DateTime;

/// A service offered by the organiser, e.g. accommodation or a rental card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: Option<Id>,
    /// At least one; an empty list is rejected when written or read.
    pub names: Vec<LanguageString>,
    pub fees: Vec<Fee>,
    pub descriptions: Vec<LanguageString>,
    /// Total number of units available.
    pub max_number: Option<f64>,
    /// Units ordered so far.
    pub requested_number: Option<f64>,
    pub service_type: Option<String>,
    pub modify_time: Option<DateTime>,
}

impl Service {
    pub fn new(name: LanguageString) -> Self {
        Self {
            id: None,
            names: vec![name],
            fees: Vec::new(),
            descriptions: Vec::new(),
            max_number: None,
            requested_number: None,
            service_type: None,
            modify_time: None,
        }
    }
}

/// An order for a quantity of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: Option<Id>,
    pub service: Service,
    pub requested_quantity: f64,
    pub delivered_quantity: Option<f64>,
    pub comment: Option<String>,
    pub assigned_fees: Vec<AssignedFee>,
    pub modify_time: Option<DateTime>,
}

impl ServiceRequest {
    pub fn new(service: Service, requested_quantity: f64) -> Self {
        Self {
            id: None,
            service,
            requested_quantity,
            delivered_quantity: None,
            comment: None,
            assigned_fees: Vec::new(),
            modify_time: None,
        }
    }
}

/// Service requests made by a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonServiceRequest {
    pub person: Person,
    /// At least one; an empty list is rejected when written or read.
    pub service_requests: Vec<ServiceRequest>,
}

/// Service requests made by an organisation, for itself or its members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganisationServiceRequest {
    pub organisation: Organisation,
    pub service_requests: Vec<ServiceRequest>,
    pub person_service_requests: Vec<PersonServiceRequest>,
}

impl OrganisationServiceRequest {
    pub fn new(organisation: Organisation) -> Self {
        Self {
            organisation,
            service_requests: Vec::new(),
            person_service_requests: Vec::new(),
        }
    }
}
