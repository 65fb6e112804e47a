use serde::{Deserialize, Serialize};

use super::base::Id;
use super::course::{Control, SimpleCourse};
use super::error::IofError;
use super::fee::Fee;
use super::time::DateTime;
use super::validation;
use super::vocab::{EventClassStatus, RaceClassStatus, ResultListMode, Sex};

/// Groups classes into categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassType {
    pub id: Option<Id>,
    pub name: String,
    pub modify_time: Option<DateTime>,
}

impl ClassType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            modify_time: None,
        }
    }
}

/// Extra information for a relay leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LegBuilder")]
pub struct Leg {
    pub(crate) name: Option<String>,
    pub(crate) min_number_of_competitors: u32,
    pub(crate) max_number_of_competitors: u32,
}

impl Leg {
    /// Name of the leg, if not sequentially named.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Minimum number of competitors on a parallel leg.
    pub fn min_number_of_competitors(&self) -> u32 {
        self.min_number_of_competitors
    }

    pub fn max_number_of_competitors(&self) -> u32 {
        self.max_number_of_competitors
    }
}

impl Default for Leg {
    fn default() -> Self {
        Self {
            name: None,
            min_number_of_competitors: 1,
            max_number_of_competitors: 1,
        }
    }
}

/// Missing fields take the schema defaults of [`LegBuilder::new`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LegBuilder {
    name: Option<String>,
    min_number_of_competitors: u32,
    max_number_of_competitors: u32,
}

impl Default for LegBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LegBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            min_number_of_competitors: 1,
            max_number_of_competitors: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of competitors running the leg in parallel.
    pub fn competitors(mut self, min: u32, max: u32) -> Self {
        self.min_number_of_competitors = min;
        self.max_number_of_competitors = max;
        self
    }

    pub fn build(self) -> Result<Leg, IofError> {
        validation::checked(Leg {
            name: self.name,
            min_number_of_competitors: self.min_number_of_competitors,
            max_number_of_competitors: self.max_number_of_competitors,
        })
    }
}

impl TryFrom<LegBuilder> for Leg {
    type Error = IofError;

    fn try_from(builder: LegBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Race-specific information for a class in a multi-race event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RaceClass {
    /// Punching systems used, e.g. one for punch checking and one for timing.
    pub punching_systems: Vec<String>,
    pub team_fees: Vec<Fee>,
    pub fees: Vec<Fee>,
    pub first_start: Option<DateTime>,
    pub status: Option<RaceClassStatus>,
    /// Several courses for mass-start or relay spreading.
    pub courses: Vec<SimpleCourse>,
    pub online_controls: Vec<Control>,
    /// Ordinal of the race, starting at 1.
    pub race_number: Option<u32>,
    /// Overrides the class-level maximum for this race.
    pub max_number_of_competitors: Option<u32>,
    pub modify_time: Option<DateTime>,
}

/// Reference to another class by id and name.
///
/// Substitute classes are held by reference, never as an owned nested
/// class, so a class tree is always finite. On the wire it is a `Class`
/// element carrying only `Id` and `Name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassRef {
    pub id: Option<Id>,
    pub name: String,
}

impl ClassRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: Id, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Reference pointing at `class`.
    pub fn to(class: &Class) -> Self {
        Self {
            id: class.id.clone(),
            name: class.name.clone(),
        }
    }

    /// Ids are compared when both sides have one, names otherwise.
    pub fn matches(&self, class: &Class) -> bool {
        match (&self.id, &class.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.name == class.name,
        }
    }
}

/// A class (competition category) in an event. Obtain one through
/// [`ClassBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClassBuilder")]
pub struct Class {
    pub(crate) id: Option<Id>,
    pub(crate) name: String,
    pub(crate) short_name: Option<String>,
    pub(crate) class_types: Vec<ClassType>,
    pub(crate) legs: Vec<Leg>,
    pub(crate) team_fees: Vec<Fee>,
    pub(crate) fees: Vec<Fee>,
    pub(crate) status: EventClassStatus,
    pub(crate) race_classes: Vec<RaceClass>,
    pub(crate) too_few_entries_substitute_class: Option<ClassRef>,
    pub(crate) too_many_entries_substitute_class: Option<ClassRef>,
    pub(crate) min_age: Option<u32>,
    pub(crate) max_age: Option<u32>,
    pub(crate) sex: Option<Sex>,
    pub(crate) min_number_of_team_members: Option<u32>,
    pub(crate) max_number_of_team_members: Option<u32>,
    pub(crate) min_team_age: Option<u32>,
    pub(crate) max_team_age: Option<u32>,
    pub(crate) number_of_competitors: Option<u32>,
    pub(crate) max_number_of_competitors: Option<u32>,
    pub(crate) result_list_mode: ResultListMode,
    pub(crate) modify_time: Option<DateTime>,
}

impl Class {
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    pub fn class_types(&self) -> &[ClassType] {
        &self.class_types
    }

    /// One entry per leg for relay classes.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn team_fees(&self) -> &[Fee] {
        &self.team_fees
    }

    pub fn fees(&self) -> &[Fee] {
        &self.fees
    }

    pub fn status(&self) -> EventClassStatus {
        self.status
    }

    pub fn race_classes(&self) -> &[RaceClass] {
        &self.race_classes
    }

    /// Where competitors go if there are too few entries.
    pub fn too_few_entries_substitute_class(&self) -> Option<&ClassRef> {
        self.too_few_entries_substitute_class.as_ref()
    }

    /// Where unqualified competitors go if there are too many entries.
    pub fn too_many_entries_substitute_class(&self) -> Option<&ClassRef> {
        self.too_many_entries_substitute_class.as_ref()
    }

    pub fn min_age(&self) -> Option<u32> {
        self.min_age
    }

    pub fn max_age(&self) -> Option<u32> {
        self.max_age
    }

    pub fn sex(&self) -> Option<Sex> {
        self.sex
    }

    pub fn min_number_of_team_members(&self) -> Option<u32> {
        self.min_number_of_team_members
    }

    pub fn max_number_of_team_members(&self) -> Option<u32> {
        self.max_number_of_team_members
    }

    pub fn min_team_age(&self) -> Option<u32> {
        self.min_team_age
    }

    pub fn max_team_age(&self) -> Option<u32> {
        self.max_team_age
    }

    pub fn number_of_competitors(&self) -> Option<u32> {
        self.number_of_competitors
    }

    pub fn max_number_of_competitors(&self) -> Option<u32> {
        self.max_number_of_competitors
    }

    pub fn result_list_mode(&self) -> ResultListMode {
        self.result_list_mode
    }

    pub fn modify_time(&self) -> Option<DateTime> {
        self.modify_time
    }
}

/// Which substitute relation to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    TooFewEntries,
    TooManyEntries,
}

/// Follow substitute-class references starting at `start`, resolving each
/// one within `classes`. Stops at an unresolved reference or the first
/// class already visited, so cyclic substitutions terminate.
pub fn substitution_chain<'a>(
    classes: &'a [Class],
    start: &'a Class,
    kind: Substitution,
) -> Vec<&'a Class> {
    let mut chain = vec![start];
    let mut current = start;
    loop {
        let target = match kind {
            Substitution::TooFewEntries => current.too_few_entries_substitute_class.as_ref(),
            Substitution::TooManyEntries => current.too_many_entries_substitute_class.as_ref(),
        };
        let Some(next) = target.and_then(|r| classes.iter().find(|c| r.matches(c))) else {
            break;
        };
        if chain.iter().any(|seen| std::ptr::eq(*seen, next)) {
            break;
        }
        chain.push(next);
        current = next;
    }
    chain
}

/// Builder for [`Class`]; `build()` enforces the class rules.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassBuilder {
    id: Option<Id>,
    name: String,
    short_name: Option<String>,
    #[serde(default)]
    class_types: Vec<ClassType>,
    #[serde(default)]
    legs: Vec<Leg>,
    #[serde(default)]
    team_fees: Vec<Fee>,
    #[serde(default)]
    fees: Vec<Fee>,
    #[serde(default)]
    status: EventClassStatus,
    #[serde(default)]
    race_classes: Vec<RaceClass>,
    too_few_entries_substitute_class: Option<ClassRef>,
    too_many_entries_substitute_class: Option<ClassRef>,
    min_age: Option<u32>,
    max_age: Option<u32>,
    sex: Option<Sex>,
    min_number_of_team_members: Option<u32>,
    max_number_of_team_members: Option<u32>,
    min_team_age: Option<u32>,
    max_team_age: Option<u32>,
    number_of_competitors: Option<u32>,
    max_number_of_competitors: Option<u32>,
    #[serde(default)]
    result_list_mode: ResultListMode,
    modify_time: Option<DateTime>,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            short_name: None,
            class_types: Vec::new(),
            legs: Vec::new(),
            team_fees: Vec::new(),
            fees: Vec::new(),
            status: EventClassStatus::Normal,
            race_classes: Vec::new(),
            too_few_entries_substitute_class: None,
            too_many_entries_substitute_class: None,
            min_age: None,
            max_age: None,
            sex: None,
            min_number_of_team_members: None,
            max_number_of_team_members: None,
            min_team_age: None,
            max_team_age: None,
            number_of_competitors: None,
            max_number_of_competitors: None,
            result_list_mode: ResultListMode::Default,
            modify_time: None,
        }
    }

    pub fn id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    pub fn short_name(mut self, name: impl Into<String>) -> Self {
        self.short_name = Some(name.into());
        self
    }

    pub fn class_type(mut self, class_type: ClassType) -> Self {
        self.class_types.push(class_type);
        self
    }

    pub fn leg(mut self, leg: Leg) -> Self {
        self.legs.push(leg);
        self
    }

    pub fn team_fee(mut self, fee: Fee) -> Self {
        self.team_fees.push(fee);
        self
    }

    pub fn fee(mut self, fee: Fee) -> Self {
        self.fees.push(fee);
        self
    }

    pub fn status(mut self, status: EventClassStatus) -> Self {
        self.status = status;
        self
    }

    pub fn race_class(mut self, race_class: RaceClass) -> Self {
        self.race_classes.push(race_class);
        self
    }

    pub fn too_few_entries_substitute_class(mut self, class: ClassRef) -> Self {
        self.too_few_entries_substitute_class = Some(class);
        self
    }

    pub fn too_many_entries_substitute_class(mut self, class: ClassRef) -> Self {
        self.too_many_entries_substitute_class = Some(class);
        self
    }

    pub fn age_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_age = min;
        self.max_age = max;
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn team_members(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_number_of_team_members = min;
        self.max_number_of_team_members = max;
        self
    }

    /// Bounds on the age sum of a team's members.
    pub fn team_age_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_team_age = min;
        self.max_team_age = max;
        self
    }

    pub fn number_of_competitors(mut self, n: u32) -> Self {
        self.number_of_competitors = Some(n);
        self
    }

    pub fn max_number_of_competitors(mut self, n: u32) -> Self {
        self.max_number_of_competitors = Some(n);
        self
    }

    pub fn result_list_mode(mut self, mode: ResultListMode) -> Self {
        self.result_list_mode = mode;
        self
    }

    pub fn modify_time(mut self, time: DateTime) -> Self {
        self.modify_time = Some(time);
        self
    }

    pub fn build(self) -> Result<Class, IofError> {
        validation::checked(Class {
            id: self.id,
            name: self.name,
            short_name: self.short_name,
            class_types: self.class_types,
            legs: self.legs,
            team_fees: self.team_fees,
            fees: self.fees,
            status: self.status,
            race_classes: self.race_classes,
            too_few_entries_substitute_class: self.too_few_entries_substitute_class,
            too_many_entries_substitute_class: self.too_many_entries_substitute_class,
            min_age: self.min_age,
            max_age: self.max_age,
            sex: self.sex,
            min_number_of_team_members: self.min_number_of_team_members,
            max_number_of_team_members: self.max_number_of_team_members,
            min_team_age: self.min_team_age,
            max_team_age: self.max_team_age,
            number_of_competitors: self.number_of_competitors,
            max_number_of_competitors: self.max_number_of_competitors,
            result_list_mode: self.result_list_mode,
            modify_time: self.modify_time,
        })
    }
}

impl TryFrom<ClassBuilder> for Class {
    type Error = IofError;

    fn try_from(builder: ClassBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
