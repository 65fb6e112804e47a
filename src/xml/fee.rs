use super::reader::{Node, ReadXml};
use super::value::XmlValue;
use super::writer::{Attrs, WriteXml, XmlWriter};
use crate::core::{Amount, AssignedFee, Fee, FeeBuilder, IofError, LanguageString};

impl WriteXml for Amount {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.text_element(
            tag,
            &self.amount.to_xml_value(),
            Attrs::new().opt("currency", &self.currency),
        )
    }
}

impl ReadXml for Amount {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            amount: node.value()?,
            currency: node.attr_value("currency")?,
        })
    }
}

impl WriteXml for Fee {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .non_default("type", &self.fee_type)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.opt_child("Id", &self.id)?;
        w.children("Name", &self.names)?;
        w.opt_child("Amount", &self.amount)?;
        w.opt_child("TaxableAmount", &self.taxable_amount)?;
        w.opt_value("Percentage", &self.percentage)?;
        w.opt_value("TaxablePercentage", &self.taxable_percentage)?;
        w.opt_value("ValidFromTime", &self.valid_from_time)?;
        w.opt_value("ValidToTime", &self.valid_to_time)?;
        w.opt_value("FromDateOfBirth", &self.from_date_of_birth)?;
        w.opt_value("ToDateOfBirth", &self.to_date_of_birth)?;
        w.end(tag)
    }
}

/// Goes through [`FeeBuilder`], so a document violating the fee rules is
/// rejected with the element path in front of each violation.
impl ReadXml for Fee {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        let mut names = node.read_children::<LanguageString>("Name")?.into_iter();
        let first = names.next().ok_or_else(|| IofError::MissingElement {
            path: node.path().to_string(),
            name: "Name".to_string(),
        })?;
        let mut builder = names
            .fold(FeeBuilder::new(first), FeeBuilder::name)
            .fee_type(node.attr_or_default("type")?)
            .birth_date_range(
                node.child_value("FromDateOfBirth")?,
                node.child_value("ToDateOfBirth")?,
            );
        if let Some(id) = node.read_child("Id")? {
            builder = builder.id(id);
        }
        if let Some(amount) = node.read_child("Amount")? {
            builder = builder.amount(amount);
        }
        if let Some(amount) = node.read_child("TaxableAmount")? {
            builder = builder.taxable_amount(amount);
        }
        if let Some(p) = node.child_value("Percentage")? {
            builder = builder.percentage(p);
        }
        if let Some(p) = node.child_value("TaxablePercentage")? {
            builder = builder.taxable_percentage(p);
        }
        if let Some(t) = node.child_value("ValidFromTime")? {
            builder = builder.valid_from_time(t);
        }
        if let Some(t) = node.child_value("ValidToTime")? {
            builder = builder.valid_to_time(t);
        }
        if let Some(t) = node.attr_value("modifyTime")? {
            builder = builder.modify_time(t);
        }
        builder.build().map_err(|e| e.at_path(node.path()))
    }
}

impl WriteXml for AssignedFee {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().opt("modifyTime", &self.modify_time))?;
        w.child("Fee", &self.fee)?;
        w.opt_child("PaidAmount", &self.paid_amount)?;
        w.end(tag)
    }
}

impl ReadXml for AssignedFee {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            fee: node.read_required_child("Fee")?,
            paid_amount: node.read_child("PaidAmount")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}
