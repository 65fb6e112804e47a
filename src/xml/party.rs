use super::reader::{Node, ReadXml};
use super::writer::{Attrs, WriteXml, XmlWriter};
use crate::core::{Account, Address, Contact, IofError, Organisation, Person, PersonName, Role};

impl WriteXml for PersonName {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.value("Family", &self.family)?;
        w.value("Given", &self.given)?;
        w.end(tag)
    }
}

impl ReadXml for PersonName {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            family: node.required_child_value("Family")?,
            given: node.required_child_value("Given")?,
        })
    }
}

impl WriteXml for Person {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .opt("sex", &self.sex)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.children("Id", &self.ids)?;
        w.child("Name", &self.name)?;
        w.opt_value("BirthDate", &self.birth_date)?;
        w.opt_child("Nationality", &self.nationality)?;
        w.children("Address", &self.addresses)?;
        w.children("Contact", &self.contacts)?;
        w.end(tag)
    }
}

impl ReadXml for Person {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            ids: node.read_children("Id")?,
            name: node.read_required_child("Name")?,
            birth_date: node.child_value("BirthDate")?,
            nationality: node.read_child("Nationality")?,
            addresses: node.read_children("Address")?,
            contacts: node.read_children("Contact")?,
            sex: node.attr_value("sex")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for Address {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .opt("type", &self.address_type)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.opt_value("CareOf", &self.care_of)?;
        w.opt_value("Street", &self.street)?;
        w.opt_value("ZipCode", &self.zip_code)?;
        w.opt_value("City", &self.city)?;
        w.opt_value("State", &self.state)?;
        w.opt_child("Country", &self.country)?;
        w.end(tag)
    }
}

impl ReadXml for Address {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            care_of: node.child_value("CareOf")?,
            street: node.child_value("Street")?,
            zip_code: node.child_value("ZipCode")?,
            city: node.child_value("City")?,
            state: node.child_value("State")?,
            country: node.read_child("Country")?,
            address_type: node.attr_value("type")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for Contact {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .set("type", &self.contact_type)
            .opt("modifyTime", &self.modify_time);
        w.text_element(tag, &self.value, attrs)
    }
}

impl ReadXml for Contact {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            value: node.value()?,
            contact_type: node.required_attr_value("type")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

impl WriteXml for Role {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new().set("type", &self.role_type))?;
        w.child("Person", &self.person)?;
        w.end(tag)
    }
}

impl ReadXml for Role {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            person: node.read_required_child("Person")?,
            role_type: node.required_attr_value("type")?,
        })
    }
}

impl WriteXml for Account {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.text_element(tag, &self.account, Attrs::new().opt("type", &self.account_type))
    }
}

impl ReadXml for Account {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            account: node.value()?,
            account_type: node.attr_value("type")?,
        })
    }
}

impl WriteXml for Organisation {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .opt("type", &self.organisation_type)
            .opt("modifyTime", &self.modify_time);
        w.start(tag, attrs)?;
        w.opt_child("Id", &self.id)?;
        w.value("Name", &self.name)?;
        w.opt_value("ShortName", &self.short_name)?;
        w.opt_value("MediaName", &self.media_name)?;
        w.opt_child("ParentOrganisationId", &self.parent_organisation_id)?;
        w.opt_child("Country", &self.country)?;
        w.children("Address", &self.addresses)?;
        w.children("Contact", &self.contacts)?;
        w.opt_child("Position", &self.position)?;
        w.children("Account", &self.accounts)?;
        w.children("Role", &self.roles)?;
        w.children("Logotype", &self.logotypes)?;
        w.end(tag)
    }
}

impl ReadXml for Organisation {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.read_child("Id")?,
            name: node.required_child_value("Name")?,
            short_name: node.child_value("ShortName")?,
            media_name: node.child_value("MediaName")?,
            parent_organisation_id: node.read_child("ParentOrganisationId")?,
            country: node.read_child("Country")?,
            addresses: node.read_children("Address")?,
            contacts: node.read_children("Contact")?,
            position: node.read_child("Position")?,
            accounts: node.read_children("Account")?,
            roles: node.read_children("Role")?,
            logotypes: node.read_children("Logotype")?,
            organisation_type: node.attr_value("type")?,
            modify_time: node.attr_value("modifyTime")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContactType, Sex};
    use crate::xml::testing::{read, write};

    #[test]
    fn person_without_birth_date() {
        let mut person = Person::new(PersonName::new("Doe", "Jane"));
        person.sex = Some(Sex::Female);
        let xml = write(&person, "Person");
        assert_eq!(
            xml,
            r#"<Person sex="F"><Name><Family>Doe</Family><Given>Jane</Given></Name></Person>"#
        );
        assert!(!xml.contains("BirthDate"));
    }

    #[test]
    fn contact_type_token() {
        let contact = Contact::new(ContactType::MobilePhoneNumber, "+46 70 123");
        let xml = write(&contact, "Contact");
        assert_eq!(xml, r#"<Contact type="MobilePhoneNumber">+46 70 123</Contact>"#);

        let err = read::<Contact>(r#"<Contact type="mobilePhoneNumber">1</Contact>"#).unwrap_err();
        assert!(matches!(
            err,
            IofError::InvalidValue { expected: "contact type", .. }
        ));
    }

    #[test]
    fn organisation_name_is_required() {
        let err = read::<Organisation>("<Organisation><ShortName>OK</ShortName></Organisation>")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "/Organisation: missing required element <Name>"
        );
    }
}
