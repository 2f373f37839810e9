use idna_ace::punycode::{decode, encode_str};
use serde_json::Value;

fn one_test(description: &str, decoded: &str, encoded: &str) {
    match decode(encoded) {
        None => panic!("Decoding {} failed.", encoded),
        Some(result) => {
            let result = result.into_iter().collect::<String>();
            assert_eq!(
                result, decoded,
                "Incorrect decoding of {}: {}",
                encoded, description
            )
        }
    }

    match encode_str(decoded) {
        None => panic!("Encoding {} failed.", decoded),
        Some(result) => {
            assert_eq!(
                result, encoded,
                "Incorrect encoding of {}: {}",
                decoded, description
            )
        }
    }
}

#[test]
fn test_punycode() {
    let tests: Value = serde_json::from_str(include_str!("punycode_tests.json")).unwrap();
    for test in tests.as_array().unwrap() {
        one_test(
            test["description"].as_str().unwrap_or(""),
            test["decoded"].as_str().unwrap(),
            test["encoded"].as_str().unwrap(),
        )
    }
}
