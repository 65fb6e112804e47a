//! Root elements. Every root declares the IOF namespace and carries the
//! header attributes ahead of its own.

use super::reader::{Node, ReadXml};
use super::writer::{Attrs, WriteXml, XmlWriter};
use super::{IOF_NS, IofDocument, XSI_NS};
use crate::core::{
    ClassList, CompetitorList, ControlCardList, CourseData, DocumentHeader, EntryList, EventList,
    IofError, OrganisationList, ResultList, ServiceRequestList, StartList,
};

fn root_attrs(header: &DocumentHeader) -> Attrs {
    Attrs::new()
        .set("xmlns", &IOF_NS.to_string())
        .set("xmlns:xsi", &XSI_NS.to_string())
        .set("iofVersion", &header.iof_version)
        .opt("createTime", &header.create_time)
        .opt("creator", &header.creator)
}

fn read_header(node: &Node) -> Result<DocumentHeader, IofError> {
    Ok(DocumentHeader {
        iof_version: node.required_attr_value("iofVersion")?,
        create_time: node.attr_value("createTime")?,
        creator: node.attr_value("creator")?,
    })
}

impl WriteXml for CompetitorList {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, root_attrs(&self.header))?;
        w.children("Competitor", &self.competitors)?;
        w.end(tag)
    }
}

impl ReadXml for CompetitorList {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            header: read_header(node)?,
            competitors: node.read_children("Competitor")?,
        })
    }
}

impl WriteXml for OrganisationList {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, root_attrs(&self.header))?;
        w.children("Organisation", &self.organisations)?;
        w.end(tag)
    }
}

impl ReadXml for OrganisationList {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            header: read_header(node)?,
            organisations: node.read_children("Organisation")?,
        })
    }
}

impl WriteXml for EventList {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, root_attrs(&self.header))?;
        w.children("Event", &self.events)?;
        w.end(tag)
    }
}

impl ReadXml for EventList {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            header: read_header(node)?,
            events: node.read_children("Event")?,
        })
    }
}

impl WriteXml for ClassList {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, root_attrs(&self.header))?;
        w.children("Class", &self.classes)?;
        w.end(tag)
    }
}

impl ReadXml for ClassList {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            header: read_header(node)?,
            classes: node.read_children("Class")?,
        })
    }
}

impl WriteXml for EntryList {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, root_attrs(&self.header))?;
        w.child("Event", &self.event)?;
        w.children("TeamEntry", &self.team_entries)?;
        w.children("PersonEntry", &self.person_entries)?;
        w.end(tag)
    }
}

impl ReadXml for EntryList {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            header: read_header(node)?,
            event: node.read_required_child("Event")?,
            team_entries: node.read_children("TeamEntry")?,
            person_entries: node.read_children("PersonEntry")?,
        })
    }
}

impl WriteXml for CourseData {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, root_attrs(&self.header))?;
        w.child("Event", &self.event)?;
        w.children_min1("RaceCourseData", &self.race_course_data)?;
        w.end(tag)
    }
}

impl ReadXml for CourseData {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            header: read_header(node)?,
            event: node.read_required_child("Event")?,
            race_course_data: node.read_children_min1("RaceCourseData")?,
        })
    }
}

impl WriteXml for StartList {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, root_attrs(&self.header))?;
        w.child("Event", &self.event)?;
        w.children("ClassStart", &self.class_starts)?;
        w.end(tag)
    }
}

impl ReadXml for StartList {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            header: read_header(node)?,
            event: node.read_required_child("Event")?,
            class_starts: node.read_children("ClassStart")?,
        })
    }
}

impl WriteXml for ResultList {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, root_attrs(&self.header).non_default("status", &self.status))?;
        w.child("Event", &self.event)?;
        w.children("ClassResult", &self.class_results)?;
        w.end(tag)
    }
}

impl ReadXml for ResultList {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            header: read_header(node)?,
            event: node.read_required_child("Event")?,
            class_results: node.read_children("ClassResult")?,
            status: node.attr_or_default("status")?,
        })
    }
}

impl WriteXml for ServiceRequestList {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, root_attrs(&self.header))?;
        w.child("Event", &self.event)?;
        w.children(
            "OrganisationServiceRequest",
            &self.organisation_service_requests,
        )?;
        w.children("PersonServiceRequest", &self.person_service_requests)?;
        w.end(tag)
    }
}

impl ReadXml for ServiceRequestList {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            header: read_header(node)?,
            event: node.read_required_child("Event")?,
            organisation_service_requests: node.read_children("OrganisationServiceRequest")?,
            person_service_requests: node.read_children("PersonServiceRequest")?,
        })
    }
}

impl WriteXml for ControlCardList {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, root_attrs(&self.header))?;
        w.opt_value("Owner", &self.owner)?;
        w.children("ControlCard", &self.control_cards)?;
        w.end(tag)
    }
}

impl ReadXml for ControlCardList {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            header: read_header(node)?,
            owner: node.child_value("Owner")?,
            control_cards: node.read_children("ControlCard")?,
        })
    }
}

macro_rules! iof_document {
    ($($ty:ident),* $(,)?) => {
        $(
            impl IofDocument for $ty {
                const ROOT: &'static str = stringify!($ty);

                fn header(&self) -> &DocumentHeader {
                    &self.header
                }
            }
        )*
    };
}

iof_document!(
    CompetitorList,
    OrganisationList,
    EventList,
    ClassList,
    EntryList,
    CourseData,
    StartList,
    ResultList,
    ServiceRequestList,
    ControlCardList,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Event, ResultListStatus};
    use crate::xml::{WriteOptions, from_xml_str, to_xml_string_with};

    fn compact() -> WriteOptions {
        WriteOptions { indent: None }
    }

    #[test]
    fn root_declares_namespaces_and_version() {
        let xml = to_xml_string_with(&EventList::default(), &compact()).unwrap();
        assert!(xml.ends_with(
            r#"<EventList xmlns="http://www.orienteering.org/datastandard/3.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" iofVersion="3.0"/>"#
        ));
    }

    #[test]
    fn result_list_status_defaults_to_complete() {
        let mut list = ResultList::new(Event::new("Cup"));
        let xml = to_xml_string_with(&list, &compact()).unwrap();
        assert!(!xml.contains("status="));

        list.status = ResultListStatus::Snapshot;
        let xml = to_xml_string_with(&list, &compact()).unwrap();
        assert!(xml.contains(r#"iofVersion="3.0" status="Snapshot""#));
        assert_eq!(from_xml_str::<ResultList>(&xml).unwrap(), list);
    }

    #[test]
    fn version_attribute_is_required() {
        let err = from_xml_str::<ClassList>(
            r#"<ClassList xmlns="http://www.orienteering.org/datastandard/3.0"/>"#,
        )
        .unwrap_err();
        assert!(matches!(err, IofError::MissingAttribute { ref name, .. } if name == "iofVersion"));
    }

    #[test]
    fn course_data_needs_race_course_data() {
        let err = from_xml_str::<CourseData>(
            r#"<CourseData xmlns="http://www.orienteering.org/datastandard/3.0" iofVersion="3.0"><Event><Name>Cup</Name></Event></CourseData>"#,
        )
        .unwrap_err();
        assert!(matches!(err, IofError::MissingElement { ref name, .. } if name == "RaceCourseData"));
    }
}
