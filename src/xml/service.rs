use super::reader::{Node, ReadXml};
use super::writer::{Attrs, WriteXml, XmlWriter};
use crate::core::{
    IofError, OrganisationServiceRequest, PersonServiceRequest, Service, ServiceRequest,
};

impl WriteXml for Service {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .opt("type", &self.service_type)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.opt_child("Id", &self.id)?;
        w.children_min1("Name", &self.names)?;
        w.children("Fee", &self.fees)?;
        w.children("Description", &self.descriptions)?;
        w.opt_value("MaxNumber", &self.max_number)?;
        w.opt_value("RequestedNumber", &self.requested_number)?;
        w.end(tag)
    }
}

impl ReadXml for Service {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.read_child("Id")?,
            names: node.read_children_min1("Name")?,
            fees: node.read_children("Fee")?,
            descriptions: node.read_children("Description")?,
            max_number: node.child_value("MaxNumber")?,
            requested_number: node.child_value("RequestedNumber")?,
            service_type: node.attr_value("type")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for ServiceRequest {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.opt_child("Id", &self.id)?;
        w.child("Service", &self.service)?;
        w.value("RequestedQuantity", &self.requested_quantity)?;
        w.opt_value("DeliveredQuantity", &self.delivered_quantity)?;
        w.opt_value("Comment", &self.comment)?;
        w.children("AssignedFee", &self.assigned_fees)?;
        w.end(tag)
    }
}

impl ReadXml for ServiceRequest {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.read_child("Id")?,
            service: node.read_required_child("Service")?,
            requested_quantity: node.required_child_value("RequestedQuantity")?,
            delivered_quantity: node.child_value("DeliveredQuantity")?,
            comment: node.child_value("Comment")?,
            assigned_fees: node.read_children("AssignedFee")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for PersonServiceRequest {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.child("Person", &self.person)?;
        w.children_min1("ServiceRequest", &self.service_requests)?;
        w.end(tag)
    }
}

impl ReadXml for PersonServiceRequest {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            person: node.read_required_child("Person")?,
            service_requests: node.read_children_min1("ServiceRequest")?,
        })
    }
}

impl WriteXml for OrganisationServiceRequest {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.child("Organisation", &self.organisation)?;
        w.children("ServiceRequest", &self.service_requests)?;
        w.children("PersonServiceRequest", &self.person_service_requests)?;
        w.end(tag)
    }
}

impl ReadXml for OrganisationServiceRequest {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            organisation: node.read_required_child("Organisation")?,
            service_requests: node.read_children("ServiceRequest")?,
            person_service_requests: node.read_children("PersonServiceRequest")?,
        })
    }
}
