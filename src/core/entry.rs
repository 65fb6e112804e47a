use serde::{Deserialize, Serialize};

use super::base::{Id, Score};
use super::class::Class;
use super::fee::AssignedFee;
use super::party::{Organisation, Person};
use super::service::ServiceRequest;
use super::time::DateTime;
use super::vocab::StartTimeAllocationRequestType;

/// Electronic punching card of a competitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlCard {
    pub number: String,
    /// Manufacturer of the punching system, e.g. "SI" or "Emit".
    pub punching_system: Option<String>,
    pub modify_time: Option<DateTime>,
}

impl ControlCard {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            punching_system: None,
            modify_time: None,
        }
    }

    pub fn with_system(number: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            punching_system: Some(system.into()),
            modify_time: None,
        }
    }
}

/// Default entry data for a person, as kept by an entry system between events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub person: Person,
    pub organisations: Vec<Organisation>,
    pub control_cards: Vec<ControlCard>,
    /// Classes the person normally enters.
    pub classes: Vec<Class>,
    pub scores: Vec<Score>,
    pub modify_time: Option<DateTime>,
}

impl Competitor {
    pub fn new(person: Person) -> Self {
        Self {
            person,
            organisations: Vec::new(),
            control_cards: Vec::new(),
            classes: Vec::new(),
            scores: Vec::new(),
            modify_time: None,
        }
    }
}

/// Request for a particular start time, e.g. to be separated from a club mate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StartTimeAllocationRequest {
    pub organisation: Option<Organisation>,
    /// Person to be grouped with or separated from.
    pub person: Option<Person>,
    pub request_type: StartTimeAllocationRequestType,
}

/// Entry of an individual competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonEntry {
    pub id: Option<Id>,
    pub person: Person,
    pub organisation: Option<Organisation>,
    pub control_cards: Vec<ControlCard>,
    /// Scores used e.g. for seeding.
    pub scores: Vec<Score>,
    /// Several classes when the competitor enters them in different races.
    pub classes: Vec<Class>,
    /// Races entered; empty means all races.
    pub race_numbers: Vec<u32>,
    pub assigned_fees: Vec<AssignedFee>,
    pub service_requests: Vec<ServiceRequest>,
    pub start_time_allocation_request: Option<StartTimeAllocationRequest>,
    pub modify_time: Option<DateTime>,
    /// When the entry was first submitted.
    pub entry_time: Option<DateTime>,
}

impl PersonEntry {
    pub fn new(person: Person) -> Self {
        Self {
            id: None,
            person,
            organisation: None,
            control_cards: Vec::new(),
            scores: Vec::new(),
            classes: Vec::new(),
            race_numbers: Vec::new(),
            assigned_fees: Vec::new(),
            service_requests: Vec::new(),
            start_time_allocation_request: None,
            modify_time: None,
            entry_time: None,
        }
    }
}

/// Entry of a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub id: Option<Id>,
    pub name: String,
    pub organisations: Vec<Organisation>,
    pub team_entry_persons: Vec<TeamEntryPerson>,
    pub classes: Vec<Class>,
    pub races: Vec<u32>,
    pub assigned_fees: Vec<AssignedFee>,
    pub service_requests: Vec<ServiceRequest>,
    pub start_time_allocation_request: Option<StartTimeAllocationRequest>,
    /// How to reach the team, e.g. a phone number.
    pub contact_information: Option<String>,
    pub modify_time: Option<DateTime>,
    pub entry_time: Option<DateTime>,
}

impl TeamEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            organisations: Vec::new(),
            team_entry_persons: Vec::new(),
            classes: Vec::new(),
            races: Vec::new(),
            assigned_fees: Vec::new(),
            service_requests: Vec::new(),
            start_time_allocation_request: None,
            contact_information: None,
            modify_time: None,
            entry_time: None,
        }
    }
}

/// A team member in a team entry. The person may be unknown at entry time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamEntryPerson {
    pub person: Option<Person>,
    pub organisation: Option<Organisation>,
    pub leg: Option<u32>,
    pub leg_order: Option<u32>,
    pub control_cards: Vec<ControlCard>,
    pub scores: Vec<Score>,
    pub assigned_fees: Vec<AssignedFee>,
}
