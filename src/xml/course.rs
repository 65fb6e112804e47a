use super::reader::{Node, ReadXml};
use super::writer::{Attrs, WriteXml, XmlWriter};
use crate::core::{
    ClassCourseAssignment, Control, ControlBuilder, Course, CourseControl, IofError, Map,
    PersonCourseAssignment, RaceCourseData, SimpleCourse, SimpleRaceCourse,
    TeamCourseAssignment, TeamMemberCourseAssignment,
};

impl WriteXml for Control {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .non_default("type", &self.control_type)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.child("Id", &self.id)?;
        w.children("PunchingUnitId", &self.punching_unit_ids)?;
        w.children("Name", &self.names)?;
        w.opt_child("Position", &self.position)?;
        w.opt_child("MapPosition", &self.map_position)?;
        w.end(tag)
    }
}

impl ReadXml for Control {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        let mut builder = ControlBuilder::new(node.read_required_child("Id")?)
            .control_type(node.attr_or_default("type")?);
        for id in node.read_children("PunchingUnitId")? {
            builder = builder.punching_unit_id(id);
        }
        for name in node.read_children("Name")? {
            builder = builder.name(name);
        }
        if let Some(position) = node.read_child("Position")? {
            builder = builder.position(position);
        }
        if let Some(position) = node.read_child("MapPosition")? {
            builder = builder.map_position(position);
        }
        if let Some(t) = node.attr_value("modifyTime")? {
            builder = builder.modify_time(t);
        }
        builder.build().map_err(|e| e.at_path(node.path()))
    }
}

fn write_simple_course_body(w: &mut XmlWriter, course: &SimpleCourse) -> Result<(), IofError> {
    w.opt_child("Id", &course.id)?;
    w.opt_value("Name", &course.name)?;
    w.opt_value("CourseFamily", &course.course_family)?;
    w.opt_value("Length", &course.length)?;
    w.opt_value("Climb", &course.climb)?;
    w.opt_value("NumberOfControls", &course.number_of_controls)
}

impl WriteXml for SimpleCourse {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        write_simple_course_body(w, self)?;
        w.end(tag)
    }
}

impl ReadXml for SimpleCourse {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.read_child("Id")?,
            name: node.child_value("Name")?,
            course_family: node.child_value("CourseFamily")?,
            length: node.child_value("Length")?,
            climb: node.child_value("Climb")?,
            number_of_controls: node.child_value("NumberOfControls")?,
        })
    }
}

impl WriteXml for SimpleRaceCourse {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("raceNumber", &self.race_number))?;
        write_simple_course_body(w, &self.course)?;
        w.end(tag)
    }
}

impl ReadXml for SimpleRaceCourse {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            course: SimpleCourse::read_xml(node)?,
            race_number: node.attr_value("raceNumber")?,
        })
    }
}

impl WriteXml for Course {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .opt("numberOfCompetitors", &self.number_of_competitors)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.opt_child("Id", &self.id)?;
        w.value("Name", &self.name)?;
        w.opt_value("CourseFamily", &self.course_family)?;
        w.opt_value("Length", &self.length)?;
        w.opt_value("Climb", &self.climb)?;
        w.children("CourseControl", &self.course_controls)?;
        w.values("MapId", &self.map_ids)?;
        w.end(tag)
    }
}

impl ReadXml for Course {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.read_child("Id")?,
            name: node.required_child_value("Name")?,
            course_family: node.child_value("CourseFamily")?,
            length: node.child_value("Length")?,
            climb: node.child_value("Climb")?,
            course_controls: node.read_children("CourseControl")?,
            map_ids: node.child_values("MapId")?,
            number_of_competitors: node.attr_value("numberOfCompetitors")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for CourseControl {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .opt("type", &self.control_type)
            .non_default("randomOrder", &self.random_order)
            .non_default("specialInstruction", &self.special_instruction)
            .opt("tapedRouteLength", &self.taped_route_length)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.values_min1("Control", &self.control_codes)?;
        w.opt_value("MapText", &self.map_text)?;
        w.opt_child("MapTextPosition", &self.map_text_position)?;
        w.opt_value("LegLength", &self.leg_length)?;
        w.opt_value("Score", &self.score)?;
        w.end(tag)
    }
}

impl ReadXml for CourseControl {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        let control_codes: Vec<String> = node.child_values("Control")?;
        if control_codes.is_empty() {
            return Err(IofError::MissingElement {
                path: node.path().to_string(),
                name: "Control".to_string(),
            });
        }
        Ok(Self {
            control_codes,
            map_text: node.child_value("MapText")?,
            map_text_position: node.read_child("MapTextPosition")?,
            leg_length: node.child_value("LegLength")?,
            score: node.child_value("Score")?,
            control_type: node.attr_value("type")?,
            random_order: node.attr_or_default("randomOrder")?,
            special_instruction: node.attr_or_default("specialInstruction")?,
            taped_route_length: node.attr_value("tapedRouteLength")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for Map {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.opt_child("Id", &self.id)?;
        w.opt_child("Image", &self.image)?;
        w.value("Scale", &self.scale)?;
        w.child("MapPositionTopLeft", &self.map_position_top_left)?;
        w.child("MapPositionBottomRight", &self.map_position_bottom_right)?;
        w.end(tag)
    }
}

impl ReadXml for Map {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.read_child("Id")?,
            image: node.read_child("Image")?,
            scale: node.required_child_value("Scale")?,
            map_position_top_left: node.read_required_child("MapPositionTopLeft")?,
            map_position_bottom_right: node.read_required_child("MapPositionBottomRight")?,
        })
    }
}

impl WriteXml for RaceCourseData {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("raceNumber", &self.race_number))?;
        w.children("Map", &self.maps)?;
        w.children("Control", &self.controls)?;
        w.children("Course", &self.courses)?;
        w.children("ClassCourseAssignment", &self.class_course_assignments)?;
        w.children("PersonCourseAssignment", &self.person_course_assignments)?;
        w.children("TeamCourseAssignment", &self.team_course_assignments)?;
        w.end(tag)
    }
}

impl ReadXml for RaceCourseData {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            maps: node.read_children("Map")?,
            controls: node.read_children("Control")?,
            courses: node.read_children("Course")?,
            class_course_assignments: node.read_children("ClassCourseAssignment")?,
            person_course_assignments: node.read_children("PersonCourseAssignment")?,
            team_course_assignments: node.read_children("TeamCourseAssignment")?,
            race_number: node.attr_value("raceNumber")?,
        })
    }
}

impl WriteXml for ClassCourseAssignment {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new().opt("numberOfCompetitors", &self.number_of_competitors);
        w.start(tag, attrs)?;
        w.opt_child("ClassId", &self.class_id)?;
        w.opt_value("ClassName", &self.class_name)?;
        w.values("AllowedOnLeg", &self.allowed_on_legs)?;
        w.opt_value("CourseName", &self.course_name)?;
        w.opt_value("CourseFamily", &self.course_family)?;
        w.end(tag)
    }
}

impl ReadXml for ClassCourseAssignment {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            class_id: node.read_child("ClassId")?,
            class_name: node.child_value("ClassName")?,
            allowed_on_legs: node.child_values("AllowedOnLeg")?,
            course_name: node.child_value("CourseName")?,
            course_family: node.child_value("CourseFamily")?,
            number_of_competitors: node.attr_value("numberOfCompetitors")?,
        })
    }
}

impl WriteXml for PersonCourseAssignment {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.opt_child("EntryId", &self.entry_id)?;
        w.opt_value("BibNumber", &self.bib_number)?;
        w.opt_child("PersonName", &self.person_name)?;
        w.opt_value("ClassName", &self.class_name)?;
        w.opt_value("CourseName", &self.course_name)?;
        w.opt_value("CourseFamily", &self.course_family)?;
        w.end(tag)
    }
}

impl ReadXml for PersonCourseAssignment {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            entry_id: node.read_child("EntryId")?,
            bib_number: node.child_value("BibNumber")?,
            person_name: node.read_child("PersonName")?,
            class_name: node.child_value("ClassName")?,
            course_name: node.child_value("CourseName")?,
            course_family: node.child_value("CourseFamily")?,
        })
    }
}

impl WriteXml for TeamCourseAssignment {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.opt_child("EntryId", &self.entry_id)?;
        w.opt_value("BibNumber", &self.bib_number)?;
        w.opt_value("TeamName", &self.team_name)?;
        w.opt_value("ClassName", &self.class_name)?;
        w.children(
            "TeamMemberCourseAssignment",
            &self.team_member_course_assignments,
        )?;
        w.end(tag)
    }
}

impl ReadXml for TeamCourseAssignment {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            entry_id: node.read_child("EntryId")?,
            bib_number: node.child_value("BibNumber")?,
            team_name: node.child_value("TeamName")?,
            class_name: node.child_value("ClassName")?,
            team_member_course_assignments: node.read_children("TeamMemberCourseAssignment")?,
        })
    }
}

impl WriteXml for TeamMemberCourseAssignment {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.opt_child("EntryId", &self.entry_id)?;
        w.opt_value("BibNumber", &self.bib_number)?;
        w.opt_value("Leg", &self.leg)?;
        w.opt_value("LegOrder", &self.leg_order)?;
        w.opt_child("TeamMemberName", &self.team_member_name)?;
        w.opt_value("CourseName", &self.course_name)?;
        w.opt_value("CourseFamily", &self.course_family)?;
        w.end(tag)
    }
}

impl ReadXml for TeamMemberCourseAssignment {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            entry_id: node.read_child("EntryId")?,
            bib_number: node.child_value("BibNumber")?,
            leg: node.child_value("Leg")?,
            leg_order: node.child_value("LegOrder")?,
            team_member_name: node.read_child("TeamMemberName")?,
            course_name: node.child_value("CourseName")?,
            course_family: node.child_value("CourseFamily")?,
        })
    }
}
