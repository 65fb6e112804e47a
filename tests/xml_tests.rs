#![cfg(feature = "xml")]

use chrono::NaiveDate;
use iof_xml::core::*;
use iof_xml::xml::{self, IofDocument, WriteOptions};
use rust_decimal_macros::dec;

fn compact() -> WriteOptions {
    WriteOptions { indent: None }
}

fn spring_cup() -> Event {
    let mut event = Event::new("Spring Cup");
    event.id = Some(Id::new("2024-17"));
    event.start_time = Some(DateAndOptionalTime::date(
        NaiveDate::from_ymd_opt(2024, 4, 13).unwrap(),
    ));
    event
}

// --- Minimal scenarios ---

#[test]
fn minimal_class_list() {
    let mut list = ClassList::default();
    list.classes.push(Class::builder("Men Elite").build().unwrap());

    let text = list.to_xml_string().unwrap();
    insta::assert_snapshot!(text, @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <ClassList xmlns="http://www.orienteering.org/datastandard/3.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" iofVersion="3.0">
      <Class>
        <Name>Men Elite</Name>
      </Class>
    </ClassList>
    "#);

    let back = ClassList::from_xml_str(&text).unwrap();
    assert_eq!(back, list);
}

#[test]
fn minimal_result_list_from_text() {
    let text = r#"<?xml version="1.0" encoding="UTF-8"?>
<ResultList xmlns="http://www.orienteering.org/datastandard/3.0" iofVersion="3.0">
  <Event><Name>Club Night</Name></Event>
  <ClassResult>
    <Class><Name>Open</Name></Class>
    <PersonResult>
      <Person><Name><Family>Berg</Family><Given>Anna</Given></Name></Person>
      <Result>
        <Time>1834</Time>
        <Status>OK</Status>
      </Result>
    </PersonResult>
  </ClassResult>
</ResultList>"#;

    let list: ResultList = xml::from_xml_str(text).unwrap();
    assert_eq!(list.status, ResultListStatus::Complete);
    assert_eq!(list.event.name, "Club Night");
    let result = &list.class_results[0].person_results[0].results[0];
    assert_eq!(result.status, ResultStatus::Ok);
    assert_eq!(result.time, Some(1834.0));
    assert!(result.scores.is_empty());
    assert!(result.split_times.is_empty());

    let again: ResultList = xml::from_xml_str(&list.to_xml_string().unwrap()).unwrap();
    assert_eq!(again, list);
}

// --- Value formats ---

#[test]
fn mobile_phone_contact() {
    let mut person = Person::new(PersonName::new("Berg", "Anna"));
    person
        .contacts
        .push(Contact::new(ContactType::MobilePhoneNumber, "+46 70 123 45 67"));
    let mut list = CompetitorList::default();
    list.competitors.push(Competitor::new(person));

    let text = xml::to_xml_string_with(&list, &compact()).unwrap();
    assert!(text.contains(r#"<Contact type="MobilePhoneNumber">+46 70 123 45 67</Contact>"#));
    assert_eq!(xml::from_xml_str::<CompetitorList>(&text).unwrap(), list);

    let lowercase = text.replace("MobilePhoneNumber", "mobilephonenumber");
    let err = xml::from_xml_str::<CompetitorList>(&lowercase).unwrap_err();
    assert!(matches!(err, IofError::InvalidValue { ref value, .. } if value == "mobilephonenumber"));
}

#[test]
fn amount_keeps_its_scale() {
    let fee = FeeBuilder::new(LanguageString::new("Senior"))
        .amount(Amount::with_currency(dec!(12.50), "EUR"))
        .build()
        .unwrap();
    let mut list = ClassList::default();
    list.classes
        .push(Class::builder("H21").fee(fee).build().unwrap());

    let text = xml::to_xml_string_with(&list, &compact()).unwrap();
    assert!(text.contains(r#"<Amount currency="EUR">12.50</Amount>"#));

    let back: ClassList = xml::from_xml_str(&text).unwrap();
    let amount = back.classes[0].fees()[0].amount().unwrap();
    assert_eq!(amount.amount.to_string(), "12.50");
    assert_eq!(amount.currency.as_deref(), Some("EUR"));
}

#[test]
fn person_without_birth_date() {
    let mut list = CompetitorList::default();
    list.competitors
        .push(Competitor::new(Person::new(PersonName::new("Lind", "Erik"))));
    let text = xml::to_xml_string_with(&list, &compact()).unwrap();
    assert!(!text.contains("BirthDate"));

    let mut born = Person::new(PersonName::new("Lind", "Erik"));
    born.birth_date = NaiveDate::from_ymd_opt(1990, 2, 28);
    list.competitors[0] = Competitor::new(born);
    let text = xml::to_xml_string_with(&list, &compact()).unwrap();
    assert!(text.contains("<BirthDate>1990-02-28</BirthDate>"));
}

#[test]
fn offsets_are_preserved() {
    let mut list = StartList::new(spring_cup());
    let mut class_start = ClassStart::new(Class::builder("D21").build().unwrap());
    class_start.person_starts.push(PersonStart {
        person: Some(Person::new(PersonName::new("Berg", "Anna"))),
        starts: vec![PersonRaceStart {
            start_time: Some("2024-04-13T10:00:00+02:00".parse().unwrap()),
            ..PersonRaceStart::default()
        }],
        ..PersonStart::default()
    });
    class_start.person_starts.push(PersonStart {
        starts: vec![PersonRaceStart {
            start_time: Some("2024-04-13T08:01:00Z".parse().unwrap()),
            ..PersonRaceStart::default()
        }],
        ..PersonStart::default()
    });
    list.class_starts.push(class_start);

    let text = xml::to_xml_string_with(&list, &compact()).unwrap();
    assert!(text.contains("<StartTime>2024-04-13T10:00:00+02:00</StartTime>"));
    assert!(text.contains("<StartTime>2024-04-13T08:01:00Z</StartTime>"));
    assert!(text.contains("<StartTime><Date>2024-04-13</Date></StartTime>"));
    assert_eq!(xml::from_xml_str::<StartList>(&text).unwrap(), list);
}

// --- Defaults are omitted ---

#[test]
fn schema_defaults_are_not_written() {
    let mut course = Course::new("A");
    course.course_controls = vec![
        CourseControl::of_type("S1", ControlType::Start),
        CourseControl::new("31"),
        CourseControl::of_type("F1", ControlType::Finish),
    ];
    let mut data = RaceCourseData::default();
    data.controls
        .push(ControlBuilder::new(Id::new("31")).build().unwrap());
    data.courses.push(course);
    let doc = CourseData::new(spring_cup(), data);

    let text = xml::to_xml_string_with(&doc, &compact()).unwrap();
    assert!(text.contains("<Control><Id>31</Id></Control>"));
    assert!(text.contains(r#"<CourseControl><Control>31</Control></CourseControl>"#));
    assert!(text.contains(r#"<CourseControl type="Start"><Control>S1</Control></CourseControl>"#));
    assert!(!text.contains("randomOrder"));
    assert!(!text.contains("specialInstruction"));
    assert_eq!(xml::from_xml_str::<CourseData>(&text).unwrap(), doc);
}

#[test]
fn indentation_is_configurable() {
    let list = OrganisationList {
        organisations: vec![Organisation::new("OK Linné")],
        ..OrganisationList::default()
    };
    let pretty = xml::to_xml_string(&list).unwrap();
    assert!(pretty.contains("\n  <Organisation>\n    <Name>OK Linné</Name>"));

    let four = xml::to_xml_string_with(&list, &WriteOptions { indent: Some(4) }).unwrap();
    assert!(four.contains("\n    <Organisation>"));

    let flat = xml::to_xml_string_with(&list, &compact()).unwrap();
    assert!(flat.contains("<Organisation><Name>OK Linné</Name></Organisation>"));
}

// --- Error reporting ---

#[test]
fn missing_status_names_its_path() {
    let text = r#"<ResultList xmlns="http://www.orienteering.org/datastandard/3.0" iofVersion="3.0">
  <Event><Name>Cup</Name></Event>
  <ClassResult>
    <Class><Name>Open</Name></Class>
    <PersonResult>
      <Person><Name><Family>A</Family><Given>B</Given></Name></Person>
      <Result><Status>OK</Status></Result>
    </PersonResult>
    <PersonResult>
      <Person><Name><Family>C</Family><Given>D</Given></Name></Person>
      <Result><Time>100</Time></Result>
    </PersonResult>
  </ClassResult>
</ResultList>"#;
    let err = xml::from_xml_str::<ResultList>(text).unwrap_err();
    match err {
        IofError::MissingElement { path, name } => {
            assert_eq!(path, "/ResultList/ClassResult[1]/PersonResult[2]/Result[1]");
            assert_eq!(name, "Status");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_fee_inside_document_reports_rule_and_path() {
    let text = r#"<ClassList xmlns="http://www.orienteering.org/datastandard/3.0" iofVersion="3.0">
  <Class>
    <Name>H21</Name>
    <Fee><Name>Broken</Name><Amount>10</Amount><Percentage>5</Percentage></Fee>
  </Class>
</ClassList>"#;
    let err = xml::from_xml_str::<ClassList>(text).unwrap_err();
    assert_eq!(err.rule_ids(), vec!["FEE-1"]);
    assert!(err.to_string().contains("/ClassList/Class[1]/Fee[1].percentage"));
}

// --- Required sequences ---

#[test]
fn person_start_without_start_is_not_written() {
    let mut list = StartList::new(spring_cup());
    let mut class_start = ClassStart::new(Class::builder("D21").build().unwrap());
    class_start.person_starts.push(PersonStart::default());
    list.class_starts.push(class_start);

    let err = xml::to_xml_string(&list).unwrap_err();
    match err {
        IofError::MissingElement { path, name } => {
            assert_eq!(path, "/StartList/ClassStart[1]/PersonStart[1]");
            assert_eq!(name, "Start");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn person_result_without_result_is_not_written() {
    let mut list = ResultList::new(spring_cup());
    let mut class_result = ClassResult::new(Class::builder("H21").build().unwrap());
    let mut person_result = PersonResult::new(
        Person::new(PersonName::new("Berg", "Anna")),
        PersonRaceResult::new(ResultStatus::Ok),
    );
    person_result.results.clear();
    class_result.person_results.push(person_result);
    list.class_results.push(class_result);

    let err = xml::to_xml_bytes_with(&list, &compact()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "/ResultList/ClassResult[1]/PersonResult[1]: missing required element <Result>"
    );
}

#[test]
fn course_data_without_race_data_is_not_written() {
    let mut doc = CourseData::new(spring_cup(), RaceCourseData::default());
    doc.race_course_data.clear();
    let err = xml::to_xml_string(&doc).unwrap_err();
    assert!(matches!(
        err,
        IofError::MissingElement { ref path, ref name } if path == "/CourseData" && name == "RaceCourseData"
    ));
}

#[test]
fn empty_service_name_list_is_not_written() {
    let mut event = spring_cup();
    let mut service = Service::new(LanguageString::new("Rental card"));
    service.names.clear();
    event.services.push(service);
    let list = EventList {
        events: vec![event],
        ..EventList::default()
    };
    let err = xml::to_xml_string(&list).unwrap_err();
    assert!(matches!(err, IofError::MissingElement { ref name, .. } if name == "Name"));
}

#[test]
fn empty_optional_text_reads_back_as_absent() {
    let mut club = Organisation::new("OK Linné");
    club.short_name = Some(String::new());
    let list = OrganisationList {
        organisations: vec![club],
        ..OrganisationList::default()
    };
    let text = xml::to_xml_string(&list).unwrap();
    assert!(!text.contains("ShortName"), "{text}");
    let back: OrganisationList = xml::from_xml_str(&text).unwrap();
    assert_eq!(back.organisations[0].short_name, None);
}
