use serde::{Deserialize, Serialize};

use super::base::{GeoPosition, Id};
use super::class::Class;
use super::party::{Account, Address, Contact, Organisation, Role};
use super::service::Service;
use super::time::{DateAndOptionalTime, DateTime};
use super::vocab::{EventClassification, EventForm, EventStatus, EventUrlType, RaceDiscipline};

/// An event, consisting of one or more races.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<Id>,
    pub name: String,
    pub start_time: Option<DateAndOptionalTime>,
    pub end_time: Option<DateAndOptionalTime>,
    pub status: Option<EventStatus>,
    pub classification: Option<EventClassification>,
    pub forms: Vec<EventForm>,
    pub organisers: Vec<Organisation>,
    pub officials: Vec<Role>,
    pub classes: Vec<Class>,
    /// Races of a multi-race event; empty for single-race events.
    pub races: Vec<Race>,
    pub entry_receiver: Option<EntryReceiver>,
    pub services: Vec<Service>,
    pub accounts: Vec<Account>,
    pub urls: Vec<EventUrl>,
    pub information: Vec<InformationItem>,
    pub schedules: Vec<Schedule>,
    pub news: Vec<InformationItem>,
    pub modify_time: Option<DateTime>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            start_time: None,
            end_time: None,
            status: None,
            classification: None,
            forms: Vec::new(),
            organisers: Vec::new(),
            officials: Vec::new(),
            classes: Vec::new(),
            races: Vec::new(),
            entry_receiver: None,
            services: Vec::new(),
            accounts: Vec::new(),
            urls: Vec::new(),
            information: Vec::new(),
            schedules: Vec::new(),
            news: Vec::new(),
            modify_time: None,
        }
    }
}

/// A single race of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    /// Ordinal within the event, starting at 1.
    pub race_number: u32,
    pub name: String,
    pub start_time: Option<DateAndOptionalTime>,
    pub end_time: Option<DateAndOptionalTime>,
    pub status: Option<EventStatus>,
    pub classification: Option<EventClassification>,
    /// Position of the arena.
    pub position: Option<GeoPosition>,
    pub disciplines: Vec<RaceDiscipline>,
    pub organisers: Vec<Organisation>,
    pub officials: Vec<Role>,
    pub services: Vec<Service>,
    pub urls: Vec<EventUrl>,
    pub information: Vec<InformationItem>,
    pub schedules: Vec<Schedule>,
    pub news: Vec<InformationItem>,
    pub modify_time: Option<DateTime>,
}

impl Race {
    pub fn new(race_number: u32, name: impl Into<String>) -> Self {
        Self {
            race_number,
            name: name.into(),
            start_time: None,
            end_time: None,
            status: None,
            classification: None,
            position: None,
            disciplines: Vec::new(),
            organisers: Vec::new(),
            officials: Vec::new(),
            services: Vec::new(),
            urls: Vec::new(),
            information: Vec::new(),
            schedules: Vec::new(),
            news: Vec::new(),
            modify_time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUrl {
    pub url: String,
    pub url_type: Option<EventUrlType>,
}

/// Titled free text, used for event information and news.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationItem {
    pub title: String,
    pub content: String,
    pub modify_time: Option<DateTime>,
}

impl InformationItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            modify_time: None,
        }
    }
}

/// A scheduled sub-event, e.g. a banquet or prize giving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub start_time: DateTime,
    pub end_time: Option<DateTime>,
    pub name: String,
    pub venue: Option<String>,
    pub position: Option<GeoPosition>,
    pub details: Option<String>,
    pub modify_time: Option<DateTime>,
}

/// Where entries are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntryReceiver {
    pub addresses: Vec<Address>,
    pub contacts: Vec<Contact>,
}
