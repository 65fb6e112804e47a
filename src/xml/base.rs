use super::reader::{Node, ReadXml};
use super::value::XmlValue;
use super::writer::{Attrs, WriteXml, XmlWriter};
use crate::core::{
    Country, DateAndOptionalTime, GeoPosition, Id, Image, IofError, LanguageString, MapPosition,
    Score,
};

impl WriteXml for Id {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.text_element(tag, &self.id, Attrs::new().opt("type", &self.id_type))
    }
}

impl ReadXml for Id {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            id: node.value()?,
            id_type: node.attr_value("type")?,
        })
    }
}

impl WriteXml for LanguageString {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.text_element(tag, &self.text, Attrs::new().opt("language", &self.language))
    }
}

impl ReadXml for LanguageString {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            text: node.value()?,
            language: node.attr_value("language")?,
        })
    }
}

impl WriteXml for GeoPosition {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .set("lng", &self.lng)
            .set("lat", &self.lat)
            .opt("alt", &self.alt);
        w.start(tag, attrs)?;
        w.end(tag)
    }
}

impl ReadXml for GeoPosition {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            lng: node.required_attr_value("lng")?,
            lat: node.required_attr_value("lat")?,
            alt: node.attr_value("alt")?,
        })
    }
}

impl WriteXml for MapPosition {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .set("x", &self.x)
            .set("y", &self.y)
            .non_default("unit", &self.unit);
        w.start(tag, attrs)?;
        w.end(tag)
    }
}

impl ReadXml for MapPosition {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            x: node.required_attr_value("x")?,
            y: node.required_attr_value("y")?,
            unit: node.attr_or_default("unit")?,
        })
    }
}

impl WriteXml for Image {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        let attrs = Attrs::new()
            .set("mediaType", &self.media_type)
            .opt("url", &self.url)
            .opt("width", &self.width)
            .opt("height", &self.height)
            .opt("resolution", &self.resolution);
        w.text_element(tag, &self.data, attrs)
    }
}

impl ReadXml for Image {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            data: node.value()?,
            media_type: node.required_attr_value("mediaType")?,
            url: node.attr_value("url")?,
            width: node.attr_value("width")?,
            height: node.attr_value("height")?,
            resolution: node.attr_value("resolution")?,
        })
    }
}

impl WriteXml for Score {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.text_element(
            tag,
            &self.score.to_xml_value(),
            Attrs::new().opt("type", &self.score_type),
        )
    }
}

impl ReadXml for Score {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            score: node.value()?,
            score_type: node.attr_value("type")?,
        })
    }
}

impl WriteXml for Country {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.text_element(tag, &self.name, Attrs::new().set("code", &self.code))
    }
}

impl ReadXml for Country {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            name: node.value()?,
            code: node.required_attr_value("code")?,
        })
    }
}

impl WriteXml for DateAndOptionalTime {
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError> {
        w.start(tag, Attrs::new())?;
        w.value("Date", &self.date)?;
        w.opt_value("Time", &self.time)?;
        w.end(tag)
    }
}

impl ReadXml for DateAndOptionalTime {
    fn read_xml(node: &Node) -> Result<Self, IofError> {
        Ok(Self {
            date: node.required_child_value("Date")?,
            time: node.child_value("Time")?,
        })
    }
}
