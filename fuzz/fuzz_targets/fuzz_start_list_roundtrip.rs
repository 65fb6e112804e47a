#![no_main]

use iof_xml::StartList;
use iof_xml::xml;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that reads must write, read back, and write identically.
    // Text is compared since NaN never equals itself.
    if let Ok(list) = xml::from_xml_bytes::<StartList>(data) {
        let text = xml::to_xml_string(&list).expect("read StartList must write");
        let again = xml::from_xml_str::<StartList>(&text).expect("written StartList must read");
        let text_again = xml::to_xml_string(&again).expect("re-read StartList must write");
        assert_eq!(text, text_again);
    }
});
