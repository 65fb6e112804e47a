use super::reader::{Node, ReadXml};
use super::writer::{Attrs, WriteXml, XmlWriter};
use crate::core::{EntryReceiver, Event, EventUrl, InformationItem, IofError, Race, Schedule};

impl WriteXml for Event {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.opt_child("Id", &self.id)?;
        w.value("Name", &self.name)?;
        w.opt_child("StartTime", &self.start_time)?;
        w.opt_child("EndTime", &self.end_time)?;
        w.opt_value("Status", &self.status)?;
        w.opt_value("Classification", &self.classification)?;
        w.values("Form", &self.forms)?;
        w.children("Organiser", &self.organisers)?;
        w.children("Official", &self.officials)?;
        w.children("Class", &self.classes)?;
        w.children("Race", &self.races)?;
        w.opt_child("EntryReceiver", &self.entry_receiver)?;
        w.children("Service", &self.services)?;
        w.children("Account", &self.accounts)?;
        w.children("URL", &self.urls)?;
        w.children("Information", &self.information)?;
        w.children("Schedule", &self.schedules)?;
        w.children("News", &self.news)?;
        w.end(tag)
    }
}

impl ReadXml for Event {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.read_child("Id")?,
            name: node.required_child_value("Name")?,
            start_time: node.read_child("StartTime")?,
            end_time: node.read_child("EndTime")?,
            status: node.child_value("Status")?,
            classification: node.child_value("Classification")?,
            forms: node.child_values("Form")?,
            organisers: node.read_children("Organiser")?,
            officials: node.read_children("Official")?,
            classes: node.read_children("Class")?,
            races: node.read_children("Race")?,
            entry_receiver: node.read_child("EntryReceiver")?,
            services: node.read_children("Service")?,
            accounts: node.read_children("Account")?,
            urls: node.read_children("URL")?,
            information: node.read_children("Information")?,
            schedules: node.read_children("Schedule")?,
            news: node.read_children("News")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for Race {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.value("RaceNumber", &self.race_number)?;
        w.value("Name", &self.name)?;
        w.opt_child("StartTime", &self.start_time)?;
        w.opt_child("EndTime", &self.end_time)?;
        w.opt_value("Status", &self.status)?;
        w.opt_value("Classification", &self.classification)?;
        w.opt_child("Position", &self.position)?;
        w.values("Discipline", &self.disciplines)?;
        w.children("Organiser", &self.organisers)?;
        w.children("Official", &self.officials)?;
        w.children("Service", &self.services)?;
        w.children("URL", &self.urls)?;
        w.children("Information", &self.information)?;
        w.children("Schedule", &self.schedules)?;
        w.children("News", &self.news)?;
        w.end(tag)
    }
}

impl ReadXml for Race {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            race_number: node.required_child_value("RaceNumber")?,
            name: node.required_child_value("Name")?,
            start_time: node.read_child("StartTime")?,
            end_time: node.read_child("EndTime")?,
            status: node.child_value("Status")?,
            classification: node.child_value("Classification")?,
            position: node.read_child("Position")?,
            disciplines: node.child_values("Discipline")?,
            organisers: node.read_children("Organiser")?,
            officials: node.read_children("Official")?,
            services: node.read_children("Service")?,
            urls: node.read_children("URL")?,
            information: node.read_children("Information")?,
            schedules: node.read_children("Schedule")?,
            news: node.read_children("News")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for EventUrl {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.text_element(tag, &self.url, Attrs::new().opt("type", &self.url_type))
    }
}

impl ReadXml for EventUrl {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            url: node.value()?,
            url_type: node.attr_value("type")?,
        })
    }
}

impl WriteXml for InformationItem {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.value("Title", &self.title)?;
        w.value("Content", &self.content)?;
        w.end(tag)
    }
}

impl ReadXml for InformationItem {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            title: node.required_child_value("Title")?,
            content: node.required_child_value("Content")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for Schedule {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.value("StartTime", &self.start_time)?;
        w.opt_value("EndTime", &self.end_time)?;
        w.value("Name", &self.name)?;
        w.opt_value("Venue", &self.venue)?;
        w.opt_child("Position", &self.position)?;
        w.opt_value("Details", &self.details)?;
        w.end(tag)
    }
}

impl ReadXml for Schedule {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            start_time: node.required_child_value("StartTime")?,
            end_time: node.child_value("EndTime")?,
            name: node.required_child_value("Name")?,
            venue: node.child_value("Venue")?,
            position: node.read_child("Position")?,
            details: node.child_value("Details")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for EntryReceiver {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.children("Address", &self.addresses)?;
        w.children("Contact", &self.contacts)?;
        w.end(tag)
    }
}

impl ReadXml for EntryReceiver {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            addresses: node.read_children("Address")?,
            contacts: node.read_children("Contact")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DateAndOptionalTime, EventForm, EventUrlType, RaceDiscipline};
    use crate::xml::testing::{read, write};
    use chrono::NaiveDate;

    #[test]
    fn event_round_trip() {
        let mut event = Event::new("Spring Cup");
        event.start_time = Some(DateAndOptionalTime::with_time(
            NaiveDate::from_ymd_opt(2024, 4, 13).unwrap(),
            "10:00:00+02:00".parse().unwrap(),
        ));
        event.forms = vec![EventForm::Individual, EventForm::Relay];
        let mut race = Race::new(1, "Middle");
        race.disciplines.push(RaceDiscipline::Middle);
        event.races.push(race);
        event.urls.push(EventUrl {
            url: "https://example.org/cup".into(),
            url_type: Some(EventUrlType::Website),
        });
        event.news.push(InformationItem::new("Parking", "Follow the signs"));

        let xml = write(&event, "Event");
        assert!(xml.contains("<Form>Individual</Form><Form>Relay</Form>"));
        assert!(xml.contains(r#"<URL type="Website">https://example.org/cup</URL>"#));
        assert_eq!(read::<Event>(&xml).unwrap(), event);
    }

    #[test]
    fn race_number_is_required() {
        let err = read::<Race>("<Race><Name>Sprint</Name></Race>").unwrap_err();
        assert!(matches!(err, IofError::MissingElement { ref name, .. } if name == "RaceNumber"));
    }
}
