//! Every document root survives a write/read cycle unchanged, both
//! indented and compact.

#![cfg(feature = "xml")]

use std::fmt::Debug;

use chrono::NaiveDate;
use iof_xml::core::*;
use iof_xml::xml::{self, IofDocument, WriteOptions};
use rust_decimal_macros::dec;

fn assert_round_trip<T: IofDocument + PartialEq + Debug>(doc: &T) {
    let pretty = xml::to_xml_string(doc).unwrap();
    assert_eq!(&xml::from_xml_str::<T>(&pretty).unwrap(), doc, "indented {}", T::ROOT);

    let compact = xml::to_xml_string_with(doc, &WriteOptions { indent: None }).unwrap();
    assert_eq!(&xml::from_xml_str::<T>(&compact).unwrap(), doc, "compact {}", T::ROOT);
}

fn time(s: &str) -> DateTime {
    s.parse().unwrap()
}

fn header() -> DocumentHeader {
    DocumentHeader {
        create_time: Some(time("2024-04-13T18:30:00+02:00")),
        creator: Some("Timing 2.1".into()),
        ..DocumentHeader::default()
    }
}

fn person(family: &str, given: &str) -> Person {
    let mut person = Person::new(PersonName::new(family, given));
    person.ids.push(Id::with_type("1234", "IOF"));
    person.birth_date = NaiveDate::from_ymd_opt(1992, 7, 1);
    person.nationality = Some(Country::new("Sweden", "SWE"));
    person.sex = Some(Sex::Female);
    person
}

fn club() -> Organisation {
    let mut org = Organisation::new("OK Linné");
    org.id = Some(Id::new("611"));
    org.short_name = Some("Linné".into());
    org.organisation_type = Some(OrganisationType::Club);
    org.country = Some(Country::new("Sweden", "SWE"));
    org.contacts
        .push(Contact::new(ContactType::EmailAddress, "info@oklinne.example"));
    org.addresses.push(Address {
        street: Some("Box 42".into()),
        zip_code: Some("751 03".into()),
        city: Some("Uppsala".into()),
        ..Address::default()
    });
    org.position = Some(GeoPosition::new(17.64, 59.86));
    org
}

fn senior_fee() -> Fee {
    FeeBuilder::new(LanguageString::new("Senior"))
        .amount(Amount::with_currency(dec!(150.00), "SEK"))
        .valid_to_time(time("2024-04-01T23:59:59"))
        .build()
        .unwrap()
}

fn elite() -> Class {
    Class::builder("H21E")
        .id(Id::new("1"))
        .short_name("H21E")
        .fee(senior_fee())
        .age_range(Some(21), None)
        .sex(Sex::Male)
        .too_few_entries_substitute_class(ClassRef::with_id(Id::new("2"), "H21A"))
        .build()
        .unwrap()
}

fn relay() -> Class {
    Class::builder("D Relay")
        .leg(LegBuilder::new().name("1").build().unwrap())
        .leg(LegBuilder::new().name("2").competitors(1, 2).build().unwrap())
        .team_members(Some(2), Some(3))
        .result_list_mode(ResultListMode::Unordered)
        .build()
        .unwrap()
}

fn event() -> Event {
    let mut event = Event::new("Spring Cup");
    event.id = Some(Id::new("2024-17"));
    event.start_time = Some(DateAndOptionalTime::with_time(
        NaiveDate::from_ymd_opt(2024, 4, 13).unwrap(),
        "10:00:00+02:00".parse().unwrap(),
    ));
    event.status = Some(EventStatus::Sanctioned);
    event.classification = Some(EventClassification::Regional);
    event.forms = vec![EventForm::Individual];
    event.organisers.push(club());
    event.races.push(Race::new(1, "Middle"));
    event.urls.push(EventUrl {
        url: "https://example.org/spring-cup?lang=en&y=2024".into(),
        url_type: Some(EventUrlType::Website),
    });
    event
}

fn course() -> SimpleCourse {
    SimpleCourse {
        name: Some("A".into()),
        length: Some(5400.0),
        climb: Some(180.0),
        number_of_controls: Some(18),
        ..SimpleCourse::default()
    }
}

#[test]
fn competitor_list() {
    let mut competitor = Competitor::new(person("Berg", "Anna"));
    competitor.organisations.push(club());
    competitor
        .control_cards
        .push(ControlCard::with_system("8001234", "SI"));
    competitor.classes.push(elite());
    competitor.scores.push(Score {
        score: 1425.5,
        score_type: Some("WRE".into()),
    });
    let doc = CompetitorList {
        header: header(),
        competitors: vec![competitor],
    };
    assert_round_trip(&doc);
}

#[test]
fn organisation_list() {
    let mut federation = Organisation::new("Svenska Orienteringsförbundet");
    federation.organisation_type = Some(OrganisationType::NationalFederation);
    let mut member = club();
    member.parent_organisation_id = Some(Id::new("1"));
    member.roles.push(Role {
        person: person("Lind", "Erik"),
        role_type: "Chairman".into(),
    });
    member.accounts.push(Account {
        account: "5051-1234".into(),
        account_type: Some("Bankgiro".into()),
    });
    let doc = OrganisationList {
        header: header(),
        organisations: vec![federation, member],
    };
    assert_round_trip(&doc);
}

#[test]
fn event_list() {
    let mut event = event();
    let mut service = Service::new(LanguageString::new("Rental card"));
    service.fees.push(senior_fee());
    service.max_number = Some(50.0);
    event.services.push(service);
    event.schedules.push(Schedule {
        start_time: time("2024-04-13T09:00:00+02:00"),
        end_time: None,
        name: "Competition centre opens".into(),
        venue: Some("School".into()),
        position: None,
        details: None,
        modify_time: Some(time("2024-03-01T12:00:00Z")),
    });
    event
        .information
        .push(InformationItem::new("Terrain", "Fast <pine> forest & bogs"));
    event.entry_receiver = Some(EntryReceiver {
        addresses: Vec::new(),
        contacts: vec![Contact::new(ContactType::EmailAddress, "entries@example.org")],
    });
    let doc = EventList {
        header: header(),
        events: vec![event],
    };
    assert_round_trip(&doc);
}

#[test]
fn class_list() {
    let doc = ClassList {
        header: header(),
        classes: vec![elite(), relay()],
    };
    assert_round_trip(&doc);
}

#[test]
fn entry_list() {
    let mut doc = EntryList::new(event());
    doc.header = header();

    let mut entry = PersonEntry::new(person("Berg", "Anna"));
    entry.id = Some(Id::new("E1"));
    entry.organisation = Some(club());
    entry.classes.push(elite());
    entry.race_numbers.push(1);
    entry.assigned_fees.push(AssignedFee::new(senior_fee()));
    entry.entry_time = Some(time("2024-03-20T21:14:03Z"));
    entry.start_time_allocation_request = Some(StartTimeAllocationRequest {
        organisation: None,
        person: Some(person("Berg", "Lars")),
        request_type: StartTimeAllocationRequestType::SeparatedFrom,
    });
    doc.person_entries.push(entry);

    let mut team = TeamEntry::new("OK Linné 1");
    team.organisations.push(club());
    team.classes.push(relay());
    team.team_entry_persons.push(TeamEntryPerson {
        person: Some(person("Berg", "Anna")),
        leg: Some(1),
        control_cards: vec![ControlCard::new("8001234")],
        ..TeamEntryPerson::default()
    });
    team.team_entry_persons.push(TeamEntryPerson {
        leg: Some(2),
        leg_order: Some(1),
        ..TeamEntryPerson::default()
    });
    team.contact_information = Some("+46 70 000 00 00".into());
    doc.team_entries.push(team);

    assert_round_trip(&doc);
}

#[test]
fn course_data() {
    let control = ControlBuilder::new(Id::new("31"))
        .punching_unit_id(Id::new("31"))
        .name(LanguageString::new("Boulder"))
        .position(GeoPosition {
            lng: 17.61,
            lat: 59.84,
            alt: Some(41.0),
        })
        .map_position(MapPosition::new(-31.5, 12.25))
        .build()
        .unwrap();
    let start = ControlBuilder::new(Id::new("S1"))
        .control_type(ControlType::Start)
        .build()
        .unwrap();

    let mut course = Course::new("A");
    course.length = Some(5400.0);
    course.map_ids = vec![1];
    course.course_controls = vec![
        CourseControl::of_type("S1", ControlType::Start),
        CourseControl {
            leg_length: Some(320.0),
            map_text: Some("31".into()),
            ..CourseControl::new("31")
        },
        CourseControl {
            control_codes: vec!["32".into(), "33".into()],
            random_order: true,
            special_instruction: SpecialInstruction::TapedRoute,
            taped_route_length: Some(150.0),
            ..CourseControl::new("32")
        },
        CourseControl::of_type("F1", ControlType::Finish),
    ];

    let data = RaceCourseData {
        maps: vec![Map {
            id: Some(Id::new("1")),
            image: None,
            scale: 15000.0,
            map_position_top_left: MapPosition::new(-200.0, -150.0),
            map_position_bottom_right: MapPosition::new(200.0, 150.0),
        }],
        controls: vec![start, control],
        courses: vec![course],
        class_course_assignments: vec![ClassCourseAssignment {
            class_name: Some("H21E".into()),
            course_name: Some("A".into()),
            allowed_on_legs: vec![1, 3],
            ..ClassCourseAssignment::default()
        }],
        person_course_assignments: vec![PersonCourseAssignment {
            bib_number: Some("101".into()),
            person_name: Some(PersonName::new("Berg", "Anna")),
            course_name: Some("A".into()),
            ..PersonCourseAssignment::default()
        }],
        team_course_assignments: vec![TeamCourseAssignment {
            team_name: Some("OK Linné 1".into()),
            team_member_course_assignments: vec![TeamMemberCourseAssignment {
                leg: Some(1),
                course_family: Some("AB".into()),
                ..TeamMemberCourseAssignment::default()
            }],
            ..TeamCourseAssignment::default()
        }],
        race_number: Some(1),
    };
    let mut doc = CourseData::new(event(), data);
    doc.header = header();
    assert_round_trip(&doc);
}

#[test]
fn start_list() {
    let mut doc = StartList::new(event());
    doc.header = header();

    let mut individual = ClassStart::new(elite());
    individual.courses.push(SimpleRaceCourse {
        course: course(),
        race_number: Some(1),
    });
    individual.start_names.push(StartName {
        name: "Start 1".into(),
        race_number: Some(1),
    });
    individual.person_starts.push(PersonStart {
        entry_id: Some(Id::new("E1")),
        person: Some(person("Berg", "Anna")),
        organisation: Some(club()),
        starts: vec![PersonRaceStart {
            bib_number: Some("101".into()),
            start_time: Some(time("2024-04-13T10:02:00+02:00")),
            course: Some(course()),
            control_cards: vec![ControlCard::with_system("8001234", "SI")],
            race_number: Some(1),
            ..PersonRaceStart::default()
        }],
        modify_time: None,
    });
    doc.class_starts.push(individual);

    let mut relay_start = ClassStart::new(relay());
    relay_start.team_starts.push(TeamStart {
        name: Some("OK Linné 1".into()),
        organisations: vec![club()],
        bib_number: Some("7".into()),
        team_member_starts: vec![TeamMemberStart {
            person: Some(person("Berg", "Anna")),
            starts: vec![TeamMemberRaceStart {
                leg: Some(1),
                bib_number: Some("7-1".into()),
                start_time: Some(time("2024-04-14T09:00:00+02:00")),
                ..TeamMemberRaceStart::default()
            }],
            ..TeamMemberStart::default()
        }],
        ..TeamStart::default()
    });
    doc.class_starts.push(relay_start);

    assert_round_trip(&doc);
}

#[test]
fn result_list() {
    let mut doc = ResultList::new(event());
    doc.header = header();
    doc.status = ResultListStatus::Snapshot;

    let mut race = PersonRaceResult::new(ResultStatus::Ok);
    race.bib_number = Some("101".into());
    race.start_time = Some(time("2024-04-13T10:02:00+02:00"));
    race.finish_time = Some(time("2024-04-13T10:38:14+02:00"));
    race.time = Some(2174.0);
    race.time_behind = Some(0.0);
    race.position = Some(1);
    race.split_times = vec![
        SplitTime::new("31", 121.0),
        SplitTime::missing("32"),
        SplitTime {
            control_code: "99".into(),
            time: Some(2001.0),
            status: Some(SplitTimeStatus::Additional),
        },
    ];
    race.overall_result = Some(OverallResult {
        time: Some(5012.0),
        time_behind: Some(12.0),
        position: Some(2),
        status: ResultStatus::Ok,
        scores: Vec::new(),
    });
    race.course = Some(course());
    race.route = Some("UkVESFJPVVRF".into());
    race.race_number = Some(1);

    let mut class_result = ClassResult::new(elite());
    class_result.time_resolution = 0.1;
    class_result.person_results.push(PersonResult {
        entry_id: Some(Id::new("E1")),
        organisation: Some(club()),
        ..PersonResult::new(person("Berg", "Anna"), race)
    });
    class_result.person_results.push(PersonResult::new(
        person("Lind", "Erik"),
        PersonRaceResult::new(ResultStatus::DidNotStart),
    ));
    doc.class_results.push(class_result);

    let mut leg = TeamMemberRaceResult::new(ResultStatus::Ok);
    leg.leg = Some(1);
    leg.time = Some(2400.0);
    leg.time_behind = vec![
        TimeBehind {
            time: 0.0,
            scope: RankingScope::Leg,
        },
        TimeBehind {
            time: 35.0,
            scope: RankingScope::Course,
        },
    ];
    leg.position = vec![Position {
        position: 1,
        scope: RankingScope::Leg,
    }];
    leg.control_answers.push(ControlAnswer {
        answer: "C".into(),
        correct_answer: "C".into(),
        time: Some(14.0),
    });
    let mut relay_result = ClassResult::new(relay());
    relay_result.team_results.push(TeamResult {
        name: Some("OK Linné 1".into()),
        team_member_results: vec![TeamMemberResult {
            person: Some(person("Berg", "Anna")),
            results: vec![leg],
            modify_time: Some(time("2024-04-14T11:30:00+02:00")),
            ..TeamMemberResult::default()
        }],
        modify_time: Some(time("2024-04-14T11:31:00+02:00")),
        ..TeamResult::default()
    });
    doc.class_results.push(relay_result);

    assert_round_trip(&doc);
}

#[test]
fn service_request_list() {
    let service = Service::new(LanguageString::with_language("Hyrbricka", "sv"));
    let mut request = ServiceRequest::new(service.clone(), 2.0);
    request.delivered_quantity = Some(1.0);
    request.comment = Some("Pick up at the start".into());

    let mut org_request = OrganisationServiceRequest::new(club());
    org_request.service_requests.push(request.clone());
    org_request.person_service_requests.push(PersonServiceRequest {
        person: person("Berg", "Anna"),
        service_requests: vec![ServiceRequest::new(service, 1.0)],
    });

    let mut doc = ServiceRequestList::new(event());
    doc.header = header();
    doc.organisation_service_requests.push(org_request);
    doc.person_service_requests.push(PersonServiceRequest {
        person: person("Lind", "Erik"),
        service_requests: vec![request],
    });
    assert_round_trip(&doc);
}

#[test]
fn control_card_list() {
    let doc = ControlCardList {
        header: header(),
        owner: Some("OK Linné".into()),
        control_cards: vec![
            ControlCard::with_system("8001234", "SI"),
            ControlCard::with_system("504321", "Emit"),
            ControlCard::new("7"),
        ],
    };
    assert_round_trip(&doc);
}

#[test]
fn empty_documents() {
    assert_round_trip(&CompetitorList::default());
    assert_round_trip(&OrganisationList::default());
    assert_round_trip(&EventList::default());
    assert_round_trip(&ClassList::default());
    assert_round_trip(&ControlCardList::default());
    assert_round_trip(&EntryList::new(Event::new("E")));
    assert_round_trip(&StartList::new(Event::new("E")));
    assert_round_trip(&ResultList::new(Event::new("E")));
    assert_round_trip(&ServiceRequestList::new(Event::new("E")));
    assert_round_trip(&CourseData::new(Event::new("E"), RaceCourseData::default()));
}
