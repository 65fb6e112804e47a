#![no_main]

use iof_xml::CourseData;
use iof_xml::xml;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(course_data) = xml::from_xml_str::<CourseData>(s) {
            let text = xml::to_xml_string(&course_data).expect("read CourseData must write");
            let again = xml::from_xml_str::<CourseData>(&text).expect("written CourseData must read");
            assert_eq!(xml::to_xml_string(&again).ok().as_deref(), Some(text.as_str()));
        }
    }
});
