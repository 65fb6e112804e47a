use super::reader::{Node, ReadXml};
use super::writer::{Attrs, WriteXml, XmlWriter};
use crate::core::{
    Competitor, ControlCard, IofError, PersonEntry, StartTimeAllocationRequest, TeamEntry,
    TeamEntryPerson,
};

impl WriteXml for ControlCard {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .opt("punchingSystem", &self.punching_system)
            .opt("modifyTime", &self.modify_time);
        w.text_element(tag, &self.number, attrs)
    }
}

impl ReadXml for ControlCard {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            number: node.value()?,
            punching_system: node.attr_value("punchingSystem")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for Competitor {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.child("Person", &self.person)?;
        w.children("Organisation", &self.organisations)?;
        w.children("ControlCard", &self.control_cards)?;
        w.children("Class", &self.classes)?;
        w.children("Score", &self.scores)?;
        w.end(tag)
    }
}

impl ReadXml for Competitor {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            person: node.read_required_child("Person")?,
            organisations: node.read_children("Organisation")?,
            control_cards: node.read_children("ControlCard")?,
            classes: node.read_children("Class")?,
            scores: node.read_children("Score")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for StartTimeAllocationRequest {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().non_default("type", &self.request_type))?;
        w.opt_child("Organisation", &self.organisation)?;
        w.opt_child("Person", &self.person)?;
        w.end(tag)
    }
}

impl ReadXml for StartTimeAllocationRequest {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            organisation: node.read_child("Organisation")?,
            person: node.read_child("Person")?,
            request_type: node.attr_or_default("type")?,
        })
    }
}

impl WriteXml for PersonEntry {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .opt("modifyTime", &self.modify_time)
            .opt("entryTime", &self.entry_time);
        w.start(tag, attrs)?;
        w.opt_child("Id", &self.id)?;
        w.child("Person", &self.person)?;
        w.opt_child("Organisation", &self.organisation)?;
        w.children("ControlCard", &self.control_cards)?;
        w.children("Score", &self.scores)?;
        w.children("Class", &self.classes)?;
        w.values("RaceNumber", &self.race_numbers)?;
        w.children("AssignedFee", &self.assigned_fees)?;
        w.children("ServiceRequest", &self.service_requests)?;
        w.opt_child(
            "StartTimeAllocationRequest",
            &self.start_time_allocation_request,
        )?;
        w.end(tag)
    }
}

impl ReadXml for PersonEntry {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.read_child("Id")?,
            person: node.read_required_child("Person")?,
            organisation: node.read_child("Organisation")?,
            control_cards: node.read_children("ControlCard")?,
            scores: node.read_children("Score")?,
            classes: node.read_children("Class")?,
            race_numbers: node.child_values("RaceNumber")?,
            assigned_fees: node.read_children("AssignedFee")?,
            service_requests: node.read_children("ServiceRequest")?,
            start_time_allocation_request: node.read_child("StartTimeAllocationRequest")?,
            modify_time: node.attr_value("modifyTime")?,
            entry_time: node.attr_value("entryTime")?,
        })
    }
}

impl WriteXml for TeamEntry {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .opt("modifyTime", &self.modify_time)
            .opt("entryTime", &self.entry_time);
        w.start(tag, attrs)?;
        w.opt_child("Id", &self.id)?;
        w.value("Name", &self.name)?;
        w.children("Organisation", &self.organisations)?;
        w.children("TeamEntryPerson", &self.team_entry_persons)?;
        w.children("Class", &self.classes)?;
        w.values("Race", &self.races)?;
        w.children("AssignedFee", &self.assigned_fees)?;
        w.children("ServiceRequest", &self.service_requests)?;
        w.opt_child(
            "StartTimeAllocationRequest",
            &self.start_time_allocation_request,
        )?;
        w.opt_value("ContactInformation", &self.contact_information)?;
        w.end(tag)
    }
}

impl ReadXml for TeamEntry {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.read_child("Id")?,
            name: node.required_child_value("Name")?,
            organisations: node.read_children("Organisation")?,
            team_entry_persons: node.read_children("TeamEntryPerson")?,
            classes: node.read_children("Class")?,
            races: node.child_values("Race")?,
            assigned_fees: node.read_children("AssignedFee")?,
            service_requests: node.read_children("ServiceRequest")?,
            start_time_allocation_request: node.read_child("StartTimeAllocationRequest")?,
            contact_information: node.child_value("ContactInformation")?,
            modify_time: node.attr_value("modifyTime")?,
            entry_time: node.attr_value("entryTime")?,
        })
    }
}

impl WriteXml for TeamEntryPerson {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.opt_child("Person", &self.person)?;
        w.opt_child("Organisation", &self.organisation)?;
        w.opt_value("Leg", &self.leg)?;
        w.opt_value("LegOrder", &self.leg_order)?;
        w.children("ControlCard", &self.control_cards)?;
        w.children("Score", &self.scores)?;
        w.children("AssignedFee", &self.assigned_fees)?;
        w.end(tag)
    }
}

impl ReadXml for TeamEntryPerson {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            person: node.read_child("Person")?,
            organisation: node.read_child("Organisation")?,
            leg: node.child_value("Leg")?,
            leg_order: node.child_value("LegOrder")?,
            control_cards: node.read_children("ControlCard")?,
            scores: node.read_children("Score")?,
            assigned_fees: node.read_children("AssignedFee")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Person, PersonName, StartTimeAllocationRequestType};
    use crate::xml::testing::{read, write};

    #[test]
    fn normal_allocation_request_has_no_type() {
        let request = StartTimeAllocationRequest::default();
        assert_eq!(
            write(&request, "StartTimeAllocationRequest"),
            "<StartTimeAllocationRequest/>"
        );
        let late = StartTimeAllocationRequest {
            request_type: StartTimeAllocationRequestType::LateStart,
            ..StartTimeAllocationRequest::default()
        };
        let xml = write(&late, "StartTimeAllocationRequest");
        assert_eq!(xml, r#"<StartTimeAllocationRequest type="LateStart"/>"#);
        assert_eq!(read::<StartTimeAllocationRequest>(&xml).unwrap(), late);
    }

    #[test]
    fn person_entry_round_trip() {
        let mut entry = PersonEntry::new(Person::new(PersonName::new("Berg", "Anna")));
        entry.control_cards.push(ControlCard::with_system("8001234", "SI"));
        entry.race_numbers = vec![1, 3];
        let xml = write(&entry, "PersonEntry");
        assert!(xml.contains(r#"<ControlCard punchingSystem="SI">8001234</ControlCard>"#));
        assert!(xml.contains("<RaceNumber>1</RaceNumber><RaceNumber>3</RaceNumber>"));
        assert_eq!(read::<PersonEntry>(&xml).unwrap(), entry);
    }
}
