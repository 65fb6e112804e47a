use serde::{Deserialize, Serialize};

use super::base::{GeoPosition, Id, Image, LanguageString, MapPosition};
use super::error::IofError;
use super::party::PersonName;
use super::time::DateTime;
use super::validation;
use super::vocab::{ControlType, SpecialInstruction};

/// A physical checkpoint, or a start, finish or crossing point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ControlBuilder")]
pub struct Control {
    pub(crate) id: Id,
    pub(crate) punching_unit_ids: Vec<Id>,
    pub(crate) names: Vec<LanguageString>,
    pub(crate) position: Option<GeoPosition>,
    pub(crate) map_position: Option<MapPosition>,
    pub(crate) control_type: ControlType,
    pub(crate) modify_time: Option<DateTime>,
}

impl Control {
    pub fn builder(id: Id) -> ControlBuilder {
        ControlBuilder::new(id)
    }

    /// Code of the control.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Units of the punching system present at the control, in order.
    pub fn punching_unit_ids(&self) -> &[Id] {
        &self.punching_unit_ids
    }

    /// Names, e.g. "Spectator control" or "Radio control 1".
    pub fn names(&self) -> &[LanguageString] {
        &self.names
    }

    pub fn position(&self) -> Option<GeoPosition> {
        self.position
    }

    pub fn map_position(&self) -> Option<MapPosition> {
        self.map_position
    }

    pub fn control_type(&self) -> ControlType {
        self.control_type
    }

    pub fn modify_time(&self) -> Option<DateTime> {
        self.modify_time
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ControlBuilder {
    id: Id,
    #[serde(default)]
    punching_unit_ids: Vec<Id>,
    #[serde(default)]
    names: Vec<LanguageString>,
    position: Option<GeoPosition>,
    map_position: Option<MapPosition>,
    #[serde(default)]
    control_type: ControlType,
    modify_time: Option<DateTime>,
}

impl ControlBuilder {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            punching_unit_ids: Vec::new(),
            names: Vec::new(),
            position: None,
            map_position: None,
            control_type: ControlType::Control,
            modify_time: None,
        }
    }

    pub fn punching_unit_id(mut self, id: Id) -> Self {
        self.punching_unit_ids.push(id);
        self
    }

    pub fn name(mut self, name: LanguageString) -> Self {
        self.names.push(name);
        self
    }

    pub fn position(mut self, position: GeoPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn map_position(mut self, position: MapPosition) -> Self {
        self.map_position = Some(position);
        self
    }

    pub fn control_type(mut self, control_type: ControlType) -> Self {
        self.control_type = control_type;
        self
    }

    pub fn modify_time(mut self, time: DateTime) -> Self {
        self.modify_time = Some(time);
        self
    }

    /// Build the control; duplicate punching units or names are rejected.
    pub fn build(self) -> Result<Control, IofError> {
        validation::checked(Control {
            id: self.id,
            punching_unit_ids: self.punching_unit_ids,
            names: self.names,
            position: self.position,
            map_position: self.map_position,
            control_type: self.control_type,
            modify_time: self.modify_time,
        })
    }
}

impl TryFrom<ControlBuilder> for Control {
    type Error = IofError;

    fn try_from(builder: ControlBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Course summary without the control sequence, as used in class and
/// start records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleCourse {
    pub id: Option<Id>,
    pub name: Option<String>,
    /// Family or group of forked courses the course is part of.
    pub course_family: Option<String>,
    /// Length in meters.
    pub length: Option<f64>,
    /// Climb in meters.
    pub climb: Option<f64>,
    /// Controls excluding start and finish.
    pub number_of_controls: Option<u32>,
}

/// A [`SimpleCourse`] tied to a race of a multi-race event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleRaceCourse {
    pub course: SimpleCourse,
    pub race_number: Option<u32>,
}

/// A course with its ordered control sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Option<Id>,
    pub name: String,
    pub course_family: Option<String>,
    pub length: Option<f64>,
    pub climb: Option<f64>,
    /// Start, controls and finish, in running order.
    pub course_controls: Vec<CourseControl>,
    /// Maps the course is printed on; several for map exchanges.
    pub map_ids: Vec<u32>,
    pub number_of_competitors: Option<u32>,
    pub modify_time: Option<DateTime>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            course_family: None,
            length: None,
            climb: None,
            course_controls: Vec::new(),
            map_ids: Vec::new(),
            number_of_competitors: None,
            modify_time: None,
        }
    }

    /// Number of ordinary controls, excluding start and finish.
    pub fn number_of_controls(&self) -> usize {
        self.course_controls
            .iter()
            .filter(|cc| {
                !matches!(
                    cc.control_type,
                    Some(ControlType::Start) | Some(ControlType::Finish)
                )
            })
            .count()
    }
}

/// One step on a course. Several codes mean the competitor may punch any
/// one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseControl {
    /// At least one; an empty list is rejected when written or read.
    pub control_codes: Vec<String>,
    /// Text printed next to the control circle.
    pub map_text: Option<String>,
    pub map_text_position: Option<MapPosition>,
    /// Distance from the previous control, in meters.
    pub leg_length: Option<f64>,
    /// Points for score orienteering.
    pub score: Option<f64>,
    pub control_type: Option<ControlType>,
    /// The control belongs to a set visited in any order.
    pub random_order: bool,
    pub special_instruction: SpecialInstruction,
    /// Length of a taped route leading out of the control, in meters.
    pub taped_route_length: Option<f64>,
    pub modify_time: Option<DateTime>,
}

impl CourseControl {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            control_codes: vec![code.into()],
            map_text: None,
            map_text_position: None,
            leg_length: None,
            score: None,
            control_type: None,
            random_order: false,
            special_instruction: SpecialInstruction::default(),
            taped_route_length: None,
            modify_time: None,
        }
    }

    pub fn of_type(code: impl Into<String>, control_type: ControlType) -> Self {
        Self {
            control_type: Some(control_type),
            ..Self::new(code)
        }
    }
}

/// A map sheet and its printable extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    pub id: Option<Id>,
    pub image: Option<Image>,
    /// Denominator of the scale, 15000 for 1:15000.
    pub scale: f64,
    pub map_position_top_left: MapPosition,
    pub map_position_bottom_right: MapPosition,
}

/// Controls, courses and their assignments for one race.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RaceCourseData {
    pub maps: Vec<Map>,
    pub controls: Vec<Control>,
    pub courses: Vec<Course>,
    pub class_course_assignments: Vec<ClassCourseAssignment>,
    pub person_course_assignments: Vec<PersonCourseAssignment>,
    pub team_course_assignments: Vec<TeamCourseAssignment>,
    pub race_number: Option<u32>,
}

/// Courses used by a class.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassCourseAssignment {
    pub class_id: Option<Id>,
    pub class_name: Option<String>,
    /// Legs the course applies to, for relay classes.
    pub allowed_on_legs: Vec<u32>,
    pub course_name: Option<String>,
    pub course_family: Option<String>,
    pub number_of_competitors: Option<u32>,
}

/// Course for an individual competitor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonCourseAssignment {
    pub entry_id: Option<Id>,
    pub bib_number: Option<String>,
    pub person_name: Option<PersonName>,
    pub class_name: Option<String>,
    pub course_name: Option<String>,
    pub course_family: Option<String>,
}

/// Courses for the members of a team.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamCourseAssignment {
    pub entry_id: Option<Id>,
    pub bib_number: Option<String>,
    pub team_name: Option<String>,
    pub class_name: Option<String>,
    pub team_member_course_assignments: Vec<TeamMemberCourseAssignment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamMemberCourseAssignment {
    pub entry_id: Option<Id>,
    pub bib_number: Option<String>,
    pub leg: Option<u32>,
    /// Order among parallel competitors on the same leg.
    pub leg_order: Option<u32>,
    pub team_member_name: Option<PersonName>,
    pub course_name: Option<String>,
    pub course_family: Option<String>,
}
