//! Result records. Times are in seconds, matching the schema's `double`.

use serde::{Deserialize, Serialize};

use super::base::{Id, Score};
use super::class::Class;
use super::course::{SimpleCourse, SimpleRaceCourse};
use super::entry::ControlCard;
use super::fee::AssignedFee;
use super::party::{Organisation, Person};
use super::service::ServiceRequest;
use super::time::DateTime;
use super::vocab::{RankingScope, ResultStatus, SplitTimeStatus};

/// Results of one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassResult {
    pub class: Class,
    pub courses: Vec<SimpleRaceCourse>,
    pub person_results: Vec<PersonResult>,
    pub team_results: Vec<TeamResult>,
    /// Smallest unit of times in seconds; 1 by default.
    pub time_resolution: f64,
    pub modify_time: Option<DateTime>,
}

impl ClassResult {
    pub fn new(class: Class) -> Self {
        Self {
            class,
            courses: Vec::new(),
            person_results: Vec::new(),
            team_results: Vec::new(),
            time_resolution: 1.0,
            modify_time: None,
        }
    }
}

/// Result of an individual competitor, one per race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonResult {
    pub entry_id: Option<Id>,
    pub person: Person,
    pub organisation: Option<Organisation>,
    /// At least one; an empty list is rejected when written or read.
    pub results: Vec<PersonRaceResult>,
    pub modify_time: Option<DateTime>,
}

impl PersonResult {
    pub fn new(person: Person, result: PersonRaceResult) -> Self {
        Self {
            entry_id: None,
            person,
            organisation: None,
            results: vec![result],
            modify_time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRaceResult {
    pub bib_number: Option<String>,
    pub start_time: Option<DateTime>,
    pub finish_time: Option<DateTime>,
    pub time: Option<f64>,
    /// Time behind the winner.
    pub time_behind: Option<f64>,
    pub position: Option<u32>,
    pub status: ResultStatus,
    pub scores: Vec<Score>,
    /// Accumulated result over all races so far.
    pub overall_result: Option<OverallResult>,
    pub course: Option<SimpleCourse>,
    pub split_times: Vec<SplitTime>,
    /// Answers for trail orienteering.
    pub control_answers: Vec<ControlAnswer>,
    /// Base64-encoded route in the IOF route format.
    pub route: Option<String>,
    pub control_cards: Vec<ControlCard>,
    pub assigned_fees: Vec<AssignedFee>,
    pub service_requests: Vec<ServiceRequest>,
    pub race_number: Option<u32>,
}

impl PersonRaceResult {
    pub fn new(status: ResultStatus) -> Self {
        Self {
            bib_number: None,
            start_time: None,
            finish_time: None,
            time: None,
            time_behind: None,
            position: None,
            status,
            scores: Vec::new(),
            overall_result: None,
            course: None,
            split_times: Vec::new(),
            control_answers: Vec::new(),
            route: None,
            control_cards: Vec::new(),
            assigned_fees: Vec::new(),
            service_requests: Vec::new(),
            race_number: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    pub time: Option<f64>,
    pub time_behind: Option<f64>,
    pub position: Option<u32>,
    pub status: ResultStatus,
    pub scores: Vec<Score>,
}

impl OverallResult {
    pub fn new(status: ResultStatus) -> Self {
        Self {
            time: None,
            time_behind: None,
            position: None,
            status,
            scores: Vec::new(),
        }
    }
}

/// Time at a control, measured from the start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitTime {
    pub control_code: String,
    /// Absent for missing punches.
    pub time: Option<f64>,
    pub status: Option<SplitTimeStatus>,
}

impl SplitTime {
    pub fn new(control_code: impl Into<String>, time: f64) -> Self {
        Self {
            control_code: control_code.into(),
            time: Some(time),
            status: None,
        }
    }

    pub fn missing(control_code: impl Into<String>) -> Self {
        Self {
            control_code: control_code.into(),
            time: None,
            status: Some(SplitTimeStatus::Missing),
        }
    }
}

/// Trail orienteering answer at a control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlAnswer {
    pub answer: String,
    pub correct_answer: String,
    /// Time taken to answer, for timed controls.
    pub time: Option<f64>,
}

/// Result of a team.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamResult {
    pub entry_id: Option<Id>,
    pub name: Option<String>,
    pub organisations: Vec<Organisation>,
    pub bib_number: Option<String>,
    pub team_member_results: Vec<TeamMemberResult>,
    pub assigned_fees: Vec<AssignedFee>,
    pub service_requests: Vec<ServiceRequest>,
    pub modify_time: Option<DateTime>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamMemberResult {
    pub entry_id: Option<Id>,
    pub person: Option<Person>,
    pub organisation: Option<Organisation>,
    /// At least one; an empty list is rejected when written or read.
    pub results: Vec<TeamMemberRaceResult>,
    pub modify_time: Option<DateTime>,
}

/// Time behind, relative to either the leg or the whole course.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBehind {
    pub time: f64,
    pub scope: RankingScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub position: u32,
    pub scope: RankingScope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberRaceResult {
    pub leg: Option<u32>,
    pub leg_order: Option<u32>,
    pub bib_number: Option<String>,
    pub start_time: Option<DateTime>,
    pub finish_time: Option<DateTime>,
    pub time: Option<f64>,
    pub time_behind: Vec<TimeBehind>,
    pub position: Vec<Position>,
    pub status: ResultStatus,
    pub scores: Vec<Score>,
    pub overall_result: Option<OverallResult>,
    pub course: Option<SimpleCourse>,
    pub split_times: Vec<SplitTime>,
    pub control_answers: Vec<ControlAnswer>,
    pub route: Option<String>,
    pub control_cards: Vec<ControlCard>,
    pub assigned_fees: Vec<AssignedFee>,
    pub service_requests: Vec<ServiceRequest>,
    pub race_number: Option<u32>,
}

impl TeamMemberRaceResult {
    pub fn new(status: ResultStatus) -> Self {
        Self {
            leg: None,
            leg_order: None,
            bib_number: None,
            start_time: None,
            finish_time: None,
            time: None,
            time_behind: Vec::new(),
            position: Vec::new(),
            status,
            scores: Vec::new(),
            overall_result: None,
            course: None,
            split_times: Vec::new(),
            control_answers: Vec::new(),
            route: None,
            control_cards: Vec::new(),
            assigned_fees: Vec::new(),
            service_requests: Vec::new(),
            race_number: None,
        }
    }
}
