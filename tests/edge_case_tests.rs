#![cfg(feature = "xml")]

use iof_xml::core::*;
use iof_xml::xml::{self, IofDocument, ReadOptions};

const NS: &str = "http://www.orienteering.org/datastandard/3.0";

fn class_list(body: &str) -> String {
    format!(r#"<?xml version="1.0" encoding="UTF-8"?><ClassList xmlns="{NS}" iofVersion="3.0">{body}</ClassList>"#)
}

// --- Lenient reading ---

#[test]
fn unknown_elements_and_attributes_are_ignored() {
    let text = class_list(
        r#"<Extensions><Vendor>x</Vendor></Extensions>
           <Class futureAttribute="1"><Name>H21</Name><Colour>red</Colour></Class>"#,
    );
    let list: ClassList = xml::from_xml_str(&text).unwrap();
    assert_eq!(list.classes.len(), 1);
    assert_eq!(list.classes[0].name(), "H21");
}

#[test]
fn comments_and_processing_instructions_are_skipped() {
    let text = class_list("<!-- generated --><?render fast?><Class><Name>H21</Name></Class>");
    let list: ClassList = xml::from_xml_str(&text).unwrap();
    assert_eq!(list.classes[0].name(), "H21");
}

#[test]
fn cdata_and_entities_in_text() {
    let text = class_list("<Class><Name><![CDATA[H & D]]> 21</Name></Class><Class><Name>A&amp;B</Name></Class>");
    let list: ClassList = xml::from_xml_str(&text).unwrap();
    assert_eq!(list.classes[0].name(), "H & D 21");
    assert_eq!(list.classes[1].name(), "A&B");
}

#[test]
fn numbers_tolerate_surrounding_whitespace() {
    let text = class_list(r#"<Class minAge=" 21 "><Name>H21</Name></Class>"#);
    let list: ClassList = xml::from_xml_str(&text).unwrap();
    assert_eq!(list.classes[0].min_age(), Some(21));
}

#[test]
fn byte_order_mark_is_accepted() {
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(class_list("").as_bytes());
    let list: ClassList = xml::from_xml_bytes(&bytes).unwrap();
    assert!(list.classes.is_empty());
}

#[test]
fn prefixed_documents_are_read() {
    let text = format!(
        r#"<iof:ClassList xmlns:iof="{NS}" iofVersion="3.0"><iof:Class><iof:Name>H21</iof:Name></iof:Class></iof:ClassList>"#
    );
    let list: ClassList = xml::from_xml_str(&text).unwrap();
    assert_eq!(list.classes[0].name(), "H21");
}

// --- Errors ---

#[test]
fn wrong_root_is_rejected() {
    let text = class_list("");
    let err = xml::from_xml_str::<ResultList>(&text).unwrap_err();
    match err {
        IofError::UnexpectedRoot { expected, found } => {
            assert_eq!(expected, "ResultList");
            assert_eq!(found, "ClassList");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn foreign_namespace_is_rejected() {
    let err = xml::from_xml_str::<ClassList>(
        r#"<ClassList xmlns="http://www.orienteering.org/datastandard/2.0.3" iofVersion="3.0"/>"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        IofError::Namespace { found: Some(ref ns) } if ns.ends_with("2.0.3")
    ));

    let err = xml::from_xml_str::<ClassList>(r#"<ClassList iofVersion="3.0"/>"#).unwrap_err();
    assert!(matches!(err, IofError::Namespace { found: None }));
}

#[test]
fn malformed_xml() {
    let err = xml::from_xml_str::<ClassList>(&class_list("<Class><Name>H21</Class>")).unwrap_err();
    assert!(matches!(err, IofError::Xml(_)));

    let err = xml::from_xml_str::<ClassList>("").unwrap_err();
    assert!(matches!(err, IofError::Xml(_)));
}

#[test]
fn invalid_utf8() {
    let err = xml::from_xml_bytes::<ClassList>(b"<ClassList>\xFF</ClassList>").unwrap_err();
    assert!(matches!(err, IofError::Xml(_)));
}

#[test]
fn bad_token_reports_attribute_path() {
    let err = xml::from_xml_str::<ClassList>(&class_list(
        r#"<Class sex="X"><Name>H21</Name></Class>"#,
    ))
    .unwrap_err();
    match err {
        IofError::InvalidValue {
            path,
            value,
            expected,
        } => {
            assert_eq!(path, "/ClassList/Class[1]/@sex");
            assert_eq!(value, "X");
            assert_eq!(expected, "sex");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_number_reports_element_path() {
    let err = xml::from_xml_str::<ClassList>(&class_list(
        "<Class><Name>H21</Name></Class><Class><Name>D21</Name><Leg><Name>1</Name></Leg><Fee><Name>F</Name><Amount>ten</Amount></Fee></Class>",
    ))
    .unwrap_err();
    match err {
        IofError::InvalidValue { path, value, .. } => {
            assert_eq!(path, "/ClassList/Class[2]/Fee[1]/Amount[1]");
            assert_eq!(value, "ten");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn date_with_time_is_not_a_date() {
    let text = format!(
        r#"<CompetitorList xmlns="{NS}" iofVersion="3.0"><Competitor><Person><Name><Family>A</Family><Given>B</Given></Name><BirthDate>1990-01-01T00:00:00</BirthDate></Person></Competitor></CompetitorList>"#
    );
    let err = xml::from_xml_str::<CompetitorList>(&text).unwrap_err();
    assert!(matches!(err, IofError::InvalidValue { .. }));
}

#[test]
fn nesting_depth_is_limited() {
    let deep = "<X>".repeat(40) + &"</X>".repeat(40);
    let text = class_list(&deep);
    let options = ReadOptions { max_depth: 16 };
    let err = xml::from_xml_str_with::<ClassList>(&text, &options).unwrap_err();
    assert!(matches!(err, IofError::Limit(_)));

    // The default limit leaves room for real documents.
    assert!(xml::from_xml_str::<ClassList>(&text).is_ok());
}

#[test]
fn no_partial_documents() {
    let text = class_list(
        "<Class><Name>Good</Name></Class><Class minAge=\"30\" maxAge=\"20\"><Name>Bad</Name></Class>",
    );
    let err = xml::from_xml_str::<ClassList>(&text).unwrap_err();
    assert_eq!(err.rule_ids(), vec!["CLASS-1"]);
}

// --- I/O entry points ---

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.xml");
    let doc = ControlCardList {
        owner: Some("Club".into()),
        control_cards: vec![ControlCard::with_system("8001234", "SI")],
        ..ControlCardList::default()
    };
    xml::write_file(&doc, &path).unwrap();
    let back: ControlCardList = xml::read_file(&path).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = xml::read_file::<ClassList>(dir.path().join("absent.xml")).unwrap_err();
    assert!(matches!(err, IofError::Io(_)));
}

#[test]
fn writer_and_reader_streams() {
    let doc = EventList {
        events: vec![Event::new("Night Cup")],
        ..EventList::default()
    };
    let mut sink = Vec::new();
    xml::write_to(&doc, &mut sink).unwrap();
    assert!(sink.starts_with(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert_eq!(sink, xml::to_xml_bytes(&doc).unwrap());

    let back: EventList = xml::from_reader(sink.as_slice()).unwrap();
    assert_eq!(back, doc);
    assert_eq!(back.header().iof_version, "3.0");
}
