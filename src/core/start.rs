use serde::{Deserialize, Serialize};

use super::base::Id;
use super::class::Class;
use super::course::{SimpleCourse, SimpleRaceCourse};
use super::entry::ControlCard;
use super::fee::AssignedFee;
use super::party::{Organisation, Person};
use super::service::ServiceRequest;
use super::time::DateTime;

/// Start list of one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStart {
    pub class: Class,
    pub courses: Vec<SimpleRaceCourse>,
    /// Names of the starts used by the class, e.g. "Start 1".
    pub start_names: Vec<StartName>,
    pub person_starts: Vec<PersonStart>,
    pub team_starts: Vec<TeamStart>,
    /// Smallest unit of start times in seconds; 1 by default.
    pub time_resolution: f64,
    pub modify_time: Option<DateTime>,
}

impl ClassStart {
    pub fn new(class: Class) -> Self {
        Self {
            class,
            courses: Vec::new(),
            start_names: Vec::new(),
            person_starts: Vec::new(),
            team_starts: Vec::new(),
            time_resolution: 1.0,
            modify_time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartName {
    pub name: String,
    pub race_number: Option<u32>,
}

/// Start information of an individual competitor, one per race.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonStart {
    pub entry_id: Option<Id>,
    /// Absent for vacant positions.
    pub person: Option<Person>,
    pub organisation: Option<Organisation>,
    /// At least one; an empty list is rejected when written or read.
    pub starts: Vec<PersonRaceStart>,
    pub modify_time: Option<DateTime>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonRaceStart {
    pub bib_number: Option<String>,
    pub start_time: Option<DateTime>,
    pub course: Option<SimpleCourse>,
    pub control_cards: Vec<ControlCard>,
    pub assigned_fees: Vec<AssignedFee>,
    pub service_requests: Vec<ServiceRequest>,
    pub race_number: Option<u32>,
}

/// Start information of a team.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamStart {
    pub entry_id: Option<Id>,
    pub name: Option<String>,
    pub organisations: Vec<Organisation>,
    pub bib_number: Option<String>,
    pub team_member_starts: Vec<TeamMemberStart>,
    pub assigned_fees: Vec<AssignedFee>,
    pub service_requests: Vec<ServiceRequest>,
    pub modify_time: Option<DateTime>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamMemberStart {
    pub entry_id: Option<Id>,
    pub person: Option<Person>,
    pub organisation: Option<Organisation>,
    /// At least one; an empty list is rejected when written or read.
    pub starts: Vec<TeamMemberRaceStart>,
    pub modify_time: Option<DateTime>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamMemberRaceStart {
    pub leg: Option<u32>,
    pub leg_order: Option<u32>,
    pub bib_number: Option<String>,
    pub start_time: Option<DateTime>,
    pub course: Option<SimpleCourse>,
    pub control_cards: Vec<ControlCard>,
    pub assigned_fees: Vec<AssignedFee>,
    pub service_requests: Vec<ServiceRequest>,
    pub race_number: Option<u32>,
}
