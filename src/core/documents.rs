//! The ten document roots of IOF XML 3.0.
//!
//! Each root is an ordered collection of one record kind plus a
//! [`DocumentHeader`]. Lists scoped to an event carry that event first.

use serde::{Deserialize, Serialize};

use super::class::Class;
use super::course::RaceCourseData;
use super::entry::{Competitor, ControlCard, PersonEntry, TeamEntry};
use super::event::Event;
use super::party::Organisation;
use super::result::ClassResult;
use super::service::{OrganisationServiceRequest, PersonServiceRequest};
use super::start::ClassStart;
use super::time::DateTime;
use super::vocab::ResultListStatus;

/// Version of the data standard this crate implements.
pub const IOF_VERSION: &str = "3.0";

/// Attributes shared by every document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHeader {
    pub iof_version: String,
    pub create_time: Option<DateTime>,
    /// Software that created the document.
    pub creator: Option<String>,
}

impl Default for DocumentHeader {
    fn default() -> Self {
        Self {
            iof_version: IOF_VERSION.to_string(),
            create_time: None,
            creator: None,
        }
    }
}

impl DocumentHeader {
    /// Header stamped with the current time and the given creator.
    pub fn stamped(creator: impl Into<String>) -> Self {
        Self {
            iof_version: IOF_VERSION.to_string(),
            create_time: Some(chrono::Utc::now().fixed_offset().into()),
            creator: Some(creator.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompetitorList {
    pub header: DocumentHeader,
    pub competitors: Vec<Competitor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrganisationList {
    pub header: DocumentHeader,
    pub organisations: Vec<Organisation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventList {
    pub header: DocumentHeader,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassList {
    pub header: DocumentHeader,
    pub classes: Vec<Class>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryList {
    pub header: DocumentHeader,
    pub event: Event,
    pub team_entries: Vec<TeamEntry>,
    pub person_entries: Vec<PersonEntry>,
}

impl EntryList {
    pub fn new(event: Event) -> Self {
        Self {
            header: DocumentHeader::default(),
            event,
            team_entries: Vec::new(),
            person_entries: Vec::new(),
        }
    }
}

/// Courses, controls and course assignments. One [`RaceCourseData`] per
/// race; writing or reading a document without one fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseData {
    pub header: DocumentHeader,
    pub event: Event,
    pub race_course_data: Vec<RaceCourseData>,
}

impl CourseData {
    pub fn new(event: Event, race_course_data: RaceCourseData) -> Self {
        Self {
            header: DocumentHeader::default(),
            event,
            race_course_data: vec![race_course_data],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartList {
    pub header: DocumentHeader,
    pub event: Event,
    pub class_starts: Vec<ClassStart>,
}

impl StartList {
    pub fn new(event: Event) -> Self {
        Self {
            header: DocumentHeader::default(),
            event,
            class_starts: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultList {
    pub header: DocumentHeader,
    pub event: Event,
    pub class_results: Vec<ClassResult>,
    /// Whether the list is complete, a delta or a snapshot.
    pub status: ResultListStatus,
}

impl ResultList {
    pub fn new(event: Event) -> Self {
        Self {
            header: DocumentHeader::default(),
            event,
            class_results: Vec::new(),
            status: ResultListStatus::Complete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequestList {
    pub header: DocumentHeader,
    pub event: Event,
    pub organisation_service_requests: Vec<OrganisationServiceRequest>,
    pub person_service_requests: Vec<PersonServiceRequest>,
}

impl ServiceRequestList {
    pub fn new(event: Event) -> Self {
        Self {
            header: DocumentHeader::default(),
            event,
            organisation_service_requests: Vec::new(),
            person_service_requests: Vec::new(),
        }
    }
}

/// Control cards owned by an organisation, e.g. rental cards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlCardList {
    pub header: DocumentHeader,
    pub owner: Option<String>,
    pub control_cards: Vec<ControlCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_defaults_to_current_version() {
        let header = DocumentHeader::default();
        assert_eq!(header.iof_version, "3.0");
        assert!(header.create_time.is_none());
    }

    #[test]
    fn stamped_header_carries_utc_time() {
        let header = DocumentHeader::stamped("iof-xml");
        let time = header.create_time.unwrap();
        assert_eq!(time.offset().map(|o| o.local_minus_utc()), Some(0));
        assert_eq!(header.creator.as_deref(), Some("iof-xml"));
    }
}
