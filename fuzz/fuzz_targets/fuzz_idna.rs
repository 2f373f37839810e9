#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    let Ok(utf8) = str::from_utf8(data) else {
        return;
    };

    // Hyphen checking rejects every `xn--` label, which would hide the
    // interesting paths from the fuzzer.
    let config = idna_ace::Config::default()
        .transitional_processing(false)
        .check_hyphens(false);

    // ToUnicode does not re-map, so ACE passed through unchanged may decode
    // to text that mapping would still alter. One full cycle reaches the
    // fixed point: from then on ASCII and Unicode forms must reproduce each
    // other exactly.
    if let Ok(first) = config.to_ascii(utf8) {
        if let Ok(unicode) = config.to_unicode(&first) {
            if let Ok(ascii) = config.to_ascii(&unicode) {
                if let Ok(unicode_again) = config.to_unicode(&ascii) {
                    if let Ok(ascii_again) = config.to_ascii(&unicode_again) {
                        assert_eq!(
                            ascii, ascii_again,
                            "IDNA roundtrip mismatch: input={:?}, unicode={:?}",
                            utf8, unicode_again
                        );
                    }
                }
            }
        }
    }

    // Punycode encode/decode roundtrip.
    if let Some(encoded) = idna_ace::punycode::encode_str(utf8) {
        if let Some(decoded) = idna_ace::punycode::decode_to_string(&encoded) {
            assert_eq!(
                utf8, decoded,
                "Punycode roundtrip mismatch: encoded={:?}",
                encoded
            );
        }
    }
});
