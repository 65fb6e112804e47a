use super::reader::{Node, ReadXml};
use super::writer::{Attrs, WriteXml, XmlWriter};
use crate::core::{
    ClassStart, IofError, PersonRaceStart, PersonStart, StartName, TeamMemberRaceStart,
    TeamMemberStart, TeamStart,
};

impl WriteXml for ClassStart {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .unless("timeResolution", &self.time_resolution, &1.0)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.child("Class", &self.class)?;
        w.children("Course", &self.courses)?;
        w.children("StartName", &self.start_names)?;
        w.children("PersonStart", &self.person_starts)?;
        w.children("TeamStart", &self.team_starts)?;
        w.end(tag)
    }
}

impl ReadXml for ClassStart {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            class: node.read_required_child("Class")?,
            courses: node.read_children("Course")?,
            start_names: node.read_children("StartName")?,
            person_starts: node.read_children("PersonStart")?,
            team_starts: node.read_children("TeamStart")?,
            time_resolution: node.attr_value("timeResolution")?.unwrap_or(1.0),
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for StartName {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.text_element(tag, &self.name, Attrs::new().opt("raceNumber", &self.race_number))
    }
}

impl ReadXml for StartName {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            name: node.value()?,
            race_number: node.attr_value("raceNumber")?,
        })
    }
}

impl WriteXml for PersonStart {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.opt_child("EntryId", &self.entry_id)?;
        w.opt_child("Person", &self.person)?;
        w.opt_child("Organisation", &self.organisation)?;
        w.children_min1("Start", &self.starts)?;
        w.end(tag)
    }
}

impl ReadXml for PersonStart {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            entry_id: node.read_child("EntryId")?,
            person: node.read_child("Person")?,
            organisation: node.read_child("Organisation")?,
            starts: node.read_children_min1("Start")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for PersonRaceStart {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("raceNumber", &self.race_number))?;
        w.opt_value("BibNumber", &self.bib_number)?;
        w.opt_value("StartTime", &self.start_time)?;
        w.opt_child("Course", &self.course)?;
        w.children("ControlCard", &self.control_cards)?;
        w.children("AssignedFee", &self.assigned_fees)?;
        w.children("ServiceRequest", &self.service_requests)?;
        w.end(tag)
    }
}

impl ReadXml for PersonRaceStart {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            bib_number: node.child_value("BibNumber")?,
            start_time: node.child_value("StartTime")?,
            course: node.read_child("Course")?,
            control_cards: node.read_children("ControlCard")?,
            assigned_fees: node.read_children("AssignedFee")?,
            service_requests: node.read_children("ServiceRequest")?,
            race_number: node.attr_value("raceNumber")?,
        })
    }
}

impl WriteXml for TeamStart {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.opt_child("EntryId", &self.entry_id)?;
        w.opt_value("Name", &self.name)?;
        w.children("Organisation", &self.organisations)?;
        w.opt_value("BibNumber", &self.bib_number)?;
        w.children("TeamMemberStart", &self.team_member_starts)?;
        w.children("AssignedFee", &self.assigned_fees)?;
        w.children("ServiceRequest", &self.service_requests)?;
        w.end(tag)
    }
}

impl ReadXml for TeamStart {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            entry_id: node.read_child("EntryId")?,
            name: node.child_value("Name")?,
            organisations: node.read_children("Organisation")?,
            bib_number: node.child_value("BibNumber")?,
            team_member_starts: node.read_children("TeamMemberStart")?,
            assigned_fees: node.read_children("AssignedFee")?,
            service_requests: node.read_children("ServiceRequest")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for TeamMemberStart {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.opt_child("EntryId", &self.entry_id)?;
        w.opt_child("Person", &self.person)?;
        w.opt_child("Organisation", &self.organisation)?;
        w.children_min1("Start", &self.starts)?;
        w.end(tag)
    }
}

impl ReadXml for TeamMemberStart {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            entry_id: node.read_child("EntryId")?,
            person: node.read_child("Person")?,
            organisation: node.read_child("Organisation")?,
            starts: node.read_children_min1("Start")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for TeamMemberRaceStart {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("raceNumber", &self.race_number))?;
        w.opt_value("Leg", &self.leg)?;
        w.opt_value("LegOrder", &self.leg_order)?;
        w.opt_value("BibNumber", &self.bib_number)?;
        w.opt_value("StartTime", &self.start_time)?;
        w.opt_child("Course", &self.course)?;
        w.children("ControlCard", &self.control_cards)?;
        w.children("AssignedFee", &self.assigned_fees)?;
        w.children("ServiceRequest", &self.service_requests)?;
        w.end(tag)
    }
}

impl ReadXml for TeamMemberRaceStart {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            leg: node.child_value("Leg")?,
            leg_order: node.child_value("LegOrder")?,
            bib_number: node.child_value("BibNumber")?,
            start_time: node.child_value("StartTime")?,
            course: node.read_child("Course")?,
            control_cards: node.read_children("ControlCard")?,
            assigned_fees: node.read_children("AssignedFee")?,
            service_requests: node.read_children("ServiceRequest")?,
            race_number: node.attr_value("raceNumber")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassBuilder, Person, PersonName};
    use crate::xml::testing::{read, write};

    #[test]
    fn person_start_needs_a_start() {
        let err = read::<PersonStart>("<PersonStart/>").unwrap_err();
        assert!(matches!(err, IofError::MissingElement { ref name, .. } if name == "Start"));
    }

    #[test]
    fn class_start_round_trip() {
        let mut start = ClassStart::new(ClassBuilder::new("H21").build().unwrap());
        start.time_resolution = 0.1;
        start.start_names.push(StartName {
            name: "Start 1".into(),
            race_number: None,
        });
        start.person_starts.push(PersonStart {
            person: Some(Person::new(PersonName::new("Berg", "Anna"))),
            starts: vec![PersonRaceStart {
                bib_number: Some("101".into()),
                start_time: Some("2024-04-13T10:02:00+02:00".parse().unwrap()),
                ..PersonRaceStart::default()
            }],
            ..PersonStart::default()
        });
        let xml = write(&start, "ClassStart");
        assert!(xml.starts_with(r#"<ClassStart timeResolution="0.1">"#));
        assert!(xml.contains("<StartTime>2024-04-13T10:02:00+02:00</StartTime>"));
        assert_eq!(read::<ClassStart>(&xml).unwrap(), start);
    }
}
