#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = iof_xml::xml::from_xml_bytes::<iof_xml::ResultList>(data);
});
