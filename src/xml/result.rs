use super::reader::{Node, ReadXml};
use super::writer::{Attrs, WriteXml, XmlWriter};
use crate::core::{
    ClassResult, ControlAnswer, IofError, OverallResult, PersonRaceResult, PersonResult, Position,
    SplitTime, TeamMemberRaceResult, TeamMemberResult, TeamResult, TimeBehind,
};

impl WriteXml for ClassResult {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .unless("timeResolution", &self.time_resolution, &1.0)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.child("Class", &self.class)?;
        w.children("Course", &self.courses)?;
        w.children("PersonResult", &self.person_results)?;
        w.children("TeamResult", &self.team_results)?;
        w.end(tag)
    }
}

impl ReadXml for ClassResult {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            class: node.read_required_child("Class")?,
            courses: node.read_children("Course")?,
            person_results: node.read_children("PersonResult")?,
            team_results: node.read_children("TeamResult")?,
            time_resolution: node.attr_value("timeResolution")?.unwrap_or(1.0),
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for PersonResult {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.opt_child("EntryId", &self.entry_id)?;
        w.child("Person", &self.person)?;
        w.opt_child("Organisation", &self.organisation)?;
        w.children_min1("Result", &self.results)?;
        w.end(tag)
    }
}

impl ReadXml for PersonResult {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            entry_id: node.read_child("EntryId")?,
            person: node.read_required_child("Person")?,
            organisation: node.read_child("Organisation")?,
            results: node.read_children_min1("Result")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for PersonRaceResult {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("raceNumber", &self.race_number))?;
        w.opt_value("BibNumber", &self.bib_number)?;
        w.opt_value("StartTime", &self.start_time)?;
        w.opt_value("FinishTime", &self.finish_time)?;
        w.opt_value("Time", &self.time)?;
        w.opt_value("TimeBehind", &self.time_behind)?;
        w.opt_value("Position", &self.position)?;
        w.value("Status", &self.status)?;
        w.children("Score", &self.scores)?;
        w.opt_child("OverallResult", &self.overall_result)?;
        w.opt_child("Course", &self.course)?;
        w.children("SplitTime", &self.split_times)?;
        w.children("ControlAnswer", &self.control_answers)?;
        w.opt_value("Route", &self.route)?;
        w.children("ControlCard", &self.control_cards)?;
        w.children("AssignedFee", &self.assigned_fees)?;
        w.children("ServiceRequest", &self.service_requests)?;
        w.end(tag)
    }
}

impl ReadXml for PersonRaceResult {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            bib_number: node.child_value("BibNumber")?,
            start_time: node.child_value("StartTime")?,
            finish_time: node.child_value("FinishTime")?,
            time: node.child_value("Time")?,
            time_behind: node.child_value("TimeBehind")?,
            position: node.child_value("Position")?,
            status: node.required_child_value("Status")?,
            scores: node.read_children("Score")?,
            overall_result: node.read_child("OverallResult")?,
            course: node.read_child("Course")?,
            split_times: node.read_children("SplitTime")?,
            control_answers: node.read_children("ControlAnswer")?,
            route: node.child_value("Route")?,
            control_cards: node.read_children("ControlCard")?,
            assigned_fees: node.read_children("AssignedFee")?,
            service_requests: node.read_children("ServiceRequest")?,
            race_number: node.attr_value("raceNumber")?,
        })
    }
}

impl WriteXml for OverallResult {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.opt_value("Time", &self.time)?;
        w.opt_value("TimeBehind", &self.time_behind)?;
        w.opt_value("Position", &self.position)?;
        w.value("Status", &self.status)?;
        w.children("Score", &self.scores)?;
        w.end(tag)
    }
}

impl ReadXml for OverallResult {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            time: node.child_value("Time")?,
            time_behind: node.child_value("TimeBehind")?,
            position: node.child_value("Position")?,
            status: node.required_child_value("Status")?,
            scores: node.read_children("Score")?,
        })
    }
}

impl WriteXml for SplitTime {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("status", &self.status))?;
        w.value("ControlCode", &self.control_code)?;
        w.opt_value("Time", &self.time)?;
        w.end(tag)
    }
}

impl ReadXml for SplitTime {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            control_code: node.required_child_value("ControlCode")?,
            time: node.child_value("Time")?,
            status: node.attr_value("status")?,
        })
    }
}

impl WriteXml for ControlAnswer {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.value("Answer", &self.answer)?;
        w.value("CorrectAnswer", &self.correct_answer)?;
        w.opt_value("Time", &self.time)?;
        w.end(tag)
    }
}

impl ReadXml for ControlAnswer {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            answer: node.required_child_value("Answer")?,
            correct_answer: node.required_child_value("CorrectAnswer")?,
            time: node.child_value("Time")?,
        })
    }
}

impl WriteXml for TeamResult {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.opt_child("EntryId", &self.entry_id)?;
        w.opt_value("Name", &self.name)?;
        w.children("Organisation", &self.organisations)?;
        w.opt_value("BibNumber", &self.bib_number)?;
        w.children("TeamMemberResult", &self.team_member_results)?;
        w.children("AssignedFee", &self.assigned_fees)?;
        w.children("ServiceRequest", &self.service_requests)?;
        w.end(tag)
    }
}

impl ReadXml for TeamResult {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            entry_id: node.read_child("EntryId")?,
            name: node.child_value("Name")?,
            organisations: node.read_children("Organisation")?,
            bib_number: node.child_value("BibNumber")?,
            team_member_results: node.read_children("TeamMemberResult")?,
            assigned_fees: node.read_children("AssignedFee")?,
            service_requests: node.read_children("ServiceRequest")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for TeamMemberResult {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.opt_child("EntryId", &self.entry_id)?;
        w.opt_child("Person", &self.person)?;
        w.opt_child("Organisation", &self.organisation)?;
        w.children_min1("Result", &self.results)?;
        w.end(tag)
    }
}

impl ReadXml for TeamMemberResult {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            entry_id: node.read_child("EntryId")?,
            person: node.read_child("Person")?,
            organisation: node.read_child("Organisation")?,
            results: node.read_children_min1("Result")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for TimeBehind {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.value_with(tag, &self.time, Attrs::new().set("type", &self.scope))
    }
}

impl ReadXml for TimeBehind {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            time: node.value()?,
            scope: node.required_attr_value("type")?,
        })
    }
}

impl WriteXml for Position {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.value_with(tag, &self.position, Attrs::new().set("type", &self.scope))
    }
}

impl ReadXml for Position {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            position: node.value()?,
            scope: node.required_attr_value("type")?,
        })
    }
}

impl WriteXml for TeamMemberRaceResult {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("raceNumber", &self.race_number))?;
        w.opt_value("Leg", &self.leg)?;
        w.opt_value("LegOrder", &self.leg_order)?;
        w.opt_value("BibNumber", &self.bib_number)?;
        w.opt_value("StartTime", &self.start_time)?;
        w.opt_value("FinishTime", &self.finish_time)?;
        w.opt_value("Time", &self.time)?;
        w.children("TimeBehind", &self.time_behind)?;
        w.children("Position", &self.position)?;
        w.value("Status", &self.status)?;
        w.children("Score", &self.scores)?;
        w.opt_child("OverallResult", &self.overall_result)?;
        w.opt_child("Course", &self.course)?;
        w.children("SplitTime", &self.split_times)?;
        w.children("ControlAnswer", &self.control_answers)?;
        w.opt_value("Route", &self.route)?;
        w.children("ControlCard", &self.control_cards)?;
        w.children("AssignedFee", &self.assigned_fees)?;
        w.children("ServiceRequest", &self.service_requests)?;
        w.end(tag)
    }
}

impl ReadXml for TeamMemberRaceResult {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            leg: node.child_value("Leg")?,
            leg_order: node.child_value("LegOrder")?,
            bib_number: node.child_value("BibNumber")?,
            start_time: node.child_value("StartTime")?,
            finish_time: node.child_value("FinishTime")?,
            time: node.child_value("Time")?,
            time_behind: node.read_children("TimeBehind")?,
            position: node.read_children("Position")?,
            status: node.required_child_value("Status")?,
            scores: node.read_children("Score")?,
            overall_result: node.read_child("OverallResult")?,
            course: node.read_child("Course")?,
            split_times: node.read_children("SplitTime")?,
            control_answers: node.read_children("ControlAnswer")?,
            route: node.child_value("Route")?,
            control_cards: node.read_children("ControlCard")?,
            assigned_fees: node.read_children("AssignedFee")?,
            service_requests: node.read_children("ServiceRequest")?,
            race_number: node.attr_value("raceNumber")?,
        })
    }
}
