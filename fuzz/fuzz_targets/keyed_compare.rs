#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    seqdiff_fuzz::fuzz_keyed_compare(data);
});
