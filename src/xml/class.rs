use super::reader::{Node, ReadXml};
use super::writer::{Attrs, WriteXml, XmlWriter};
use crate::core::{
    Class, ClassBuilder, ClassRef, ClassType, EventClassStatus, IofError, Leg, LegBuilder,
    RaceClass,
};

impl WriteXml for ClassType {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.opt_child("Id", &self.id)?;
        w.value("Name", &self.name)?;
        w.end(tag)
    }
}

impl ReadXml for ClassType {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.read_child("Id")?,
            name: node.required_child_value("Name")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for Leg {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .unless("minNumberOfCompetitors", &self.min_number_of_competitors, &1)
            .unless("maxNumberOfCompetitors", &self.max_number_of_competitors, &1);
        w.start(tag, attrs)?;
        w.opt_value("Name", &self.name)?;
        w.end(tag)
    }
}

impl ReadXml for Leg {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        let mut builder = LegBuilder::new().competitors(
            node.attr_value("minNumberOfCompetitors")?.unwrap_or(1),
            node.attr_value("maxNumberOfCompetitors")?.unwrap_or(1),
        );
        if let Some(name) = node.child_value::<String>("Name")? {
            builder = builder.name(name);
        }
        builder.build().map_err(|e| e.at_path(node.path()))
    }
}

impl WriteXml for RaceClass {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .opt("raceNumber", &self.race_number)
            .opt("maxNumberOfCompetitors", &self.max_number_of_competitors)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.values("PunchingSystem", &self.punching_systems)?;
        w.children("TeamFee", &self.team_fees)?;
        w.children("Fee", &self.fees)?;
        w.opt_value("FirstStart", &self.first_start)?;
        w.opt_value("Status", &self.status)?;
        w.children("Course", &self.courses)?;
        w.children("OnlineControl", &self.online_controls)?;
        w.end(tag)
    }
}

impl ReadXml for RaceClass {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            punching_systems: node.child_values("PunchingSystem")?,
            team_fees: node.read_children("TeamFee")?,
            fees: node.read_children("Fee")?,
            first_start: node.child_value("FirstStart")?,
            status: node.child_value("Status")?,
            courses: node.read_children("Course")?,
            online_controls: node.read_children("OnlineControl")?,
            race_number: node.attr_value("raceNumber")?,
            max_number_of_competitors: node.attr_value("maxNumberOfCompetitors")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

/// Written as a `Class` element reduced to its `Id` and `Name`.
impl WriteXml for ClassRef {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.opt_child("Id", &self.id)?;
        w.value("Name", &self.name)?;
        w.end(tag)
    }
}

/// Anything beyond `Id` and `Name` is ignored, so a fully embedded
/// substitute class reads as a reference too.
impl ReadXml for ClassRef {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.read_child("Id")?,
            name: node.required_child_value("Name")?,
        })
    }
}

impl WriteXml for Class {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .opt("minAge", &self.min_age)
            .opt("maxAge", &self.max_age)
            .opt("sex", &self.sex)
            .opt("minNumberOfTeamMembers", &self.min_number_of_team_members)
            .opt("maxNumberOfTeamMembers", &self.max_number_of_team_members)
            .opt("minTeamAge", &self.min_team_age)
            .opt("maxTeamAge", &self.max_team_age)
            .opt("numberOfCompetitors", &self.number_of_competitors)
            .opt("maxNumberOfCompetitors", &self.max_number_of_competitors)
            .non_default("resultListMode", &self.result_list_mode)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.opt_child("Id", &self.id)?;
        w.value("Name", &self.name)?;
        w.opt_value("ShortName", &self.short_name)?;
        w.children("ClassType", &self.class_types)?;
        w.children("Leg", &self.legs)?;
        w.children("TeamFee", &self.team_fees)?;
        w.children("Fee", &self.fees)?;
        if self.status != EventClassStatus::Normal {
            w.value("Status", &self.status)?;
        }
        w.children("RaceClass", &self.race_classes)?;
        w.opt_child(
            "TooFewEntriesSubstituteClass",
            &self.too_few_entries_substitute_class,
        )?;
        w.opt_child(
            "TooManyEntriesSubstituteClass",
            &self.too_many_entries_substitute_class,
        )?;
        w.end(tag)
    }
}

impl ReadXml for Class {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        let mut builder = ClassBuilder::new(node.required_child_value::<String>("Name")?)
            .status(node.child_value("Status")?.unwrap_or_default())
            .result_list_mode(node.attr_or_default("resultListMode")?)
            .age_range(node.attr_value("minAge")?, node.attr_value("maxAge")?)
            .team_members(
                node.attr_value("minNumberOfTeamMembers")?,
                node.attr_value("maxNumberOfTeamMembers")?,
            )
            .team_age_range(node.attr_value("minTeamAge")?, node.attr_value("maxTeamAge")?);
        if let Some(id) = node.read_child("Id")? {
            builder = builder.id(id);
        }
        if let Some(name) = node.child_value::<String>("ShortName")? {
            builder = builder.short_name(name);
        }
        for class_type in node.read_children("ClassType")? {
            builder = builder.class_type(class_type);
        }
        for leg in node.read_children("Leg")? {
            builder = builder.leg(leg);
        }
        for fee in node.read_children("TeamFee")? {
            builder = builder.team_fee(fee);
        }
        for fee in node.read_children("Fee")? {
            builder = builder.fee(fee);
        }
        for race_class in node.read_children("RaceClass")? {
            builder = builder.race_class(race_class);
        }
        if let Some(class) = node.read_child("TooFewEntriesSubstituteClass")? {
            builder = builder.too_few_entries_substitute_class(class);
        }
        if let Some(class) = node.read_child("TooManyEntriesSubstituteClass")? {
            builder = builder.too_many_entries_substitute_class(class);
        }
        if let Some(sex) = node.attr_value("sex")? {
            builder = builder.sex(sex);
        }
        if let Some(n) = node.attr_value("numberOfCompetitors")? {
            builder = builder.number_of_competitors(n);
        }
        if let Some(n) = node.attr_value("maxNumberOfCompetitors")? {
            builder = builder.max_number_of_competitors(n);
        }
        if let Some(t) = node.attr_value("modifyTime")? {
            builder = builder.modify_time(t);
        }
        builder.build().map_err(|e| e.at_path(node.path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Id, ResultListMode};
    use crate::xml::testing::{read, write};

    #[test]
    fn defaults_leave_no_markup() {
        let class = ClassBuilder::new("Men Elite").build().unwrap();
        assert_eq!(write(&class, "Class"), "<Class><Name>Men Elite</Name></Class>");
    }

    #[test]
    fn non_default_status_and_mode_are_written() {
        let class = ClassBuilder::new("W21")
            .status(EventClassStatus::Joined)
            .result_list_mode(ResultListMode::UnorderedNoTimes)
            .build()
            .unwrap();
        assert_eq!(
            write(&class, "Class"),
            r#"<Class resultListMode="UnorderedNoTimes"><Name>W21</Name><Status>Joined</Status></Class>"#
        );
    }

    #[test]
    fn substitute_class_is_a_reference() {
        let class = ClassBuilder::new("H21E")
            .too_few_entries_substitute_class(ClassRef::with_id(Id::new("2"), "H21A"))
            .build()
            .unwrap();
        let xml = write(&class, "Class");
        assert!(xml.contains(
            "<TooFewEntriesSubstituteClass><Id>2</Id><Name>H21A</Name></TooFewEntriesSubstituteClass>"
        ));
        let back: Class = read(&xml).unwrap();
        assert_eq!(back, class);
    }

    #[test]
    fn self_substitution_is_rejected_on_read() {
        let err = read::<Class>(
            "<Class><Name>A</Name><TooManyEntriesSubstituteClass><Name>A</Name></TooManyEntriesSubstituteClass></Class>",
        )
        .unwrap_err();
        assert_eq!(err.rule_ids(), vec!["CLASS-5"]);
    }

    #[test]
    fn leg_bounds_default_to_one() {
        let leg: Leg = read("<Leg/>").unwrap();
        assert_eq!(leg, Leg::default());
        assert_eq!(write(&leg, "Leg"), "<Leg/>");
        let err = read::<Leg>(r#"<Leg minNumberOfCompetitors="3"/>"#).unwrap_err();
        assert_eq!(err.rule_ids(), vec!["LEG-1"]);
    }
}
