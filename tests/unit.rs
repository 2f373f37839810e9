use assert_matches::assert_matches;
use idna_ace::{domain_to_ascii, domain_to_unicode, ByteCodec, Config, Utf8Codec};

fn to_ascii_nontransitional(domain: &str) -> Result<String, idna_ace::Errors> {
    Config::default()
        .transitional_processing(false)
        .to_ascii(domain)
}

#[test]
fn ascii_domains_pass_through() {
    assert_eq!(
        domain_to_ascii("rewanthcool.com").unwrap(),
        "rewanthcool.com"
    );
    assert_eq!(domain_to_ascii("example.com").unwrap(), "example.com");
    assert_eq!(domain_to_ascii("123.test").unwrap(), "123.test");
}

#[test]
fn ascii_domains_are_case_folded() {
    assert_eq!(domain_to_ascii("ExAmPlE.COM").unwrap(), "example.com");
}

#[test]
fn simple_idn_labels() {
    assert_eq!(
        domain_to_ascii("mañana.com").unwrap(),
        "xn--maana-pta.com"
    );
    assert_eq!(domain_to_ascii("öbb.at").unwrap(), "xn--bb-eka.at");
}

#[test]
fn decomposed_input_is_composed_first() {
    // U+006E U+0303 composes to U+00F1 before encoding.
    assert_eq!(
        domain_to_ascii("man\u{0303}ana.com").unwrap(),
        "xn--maana-pta.com"
    );
}

#[test]
fn sharp_s_deviation() {
    assert_eq!(domain_to_ascii("fuß.de").unwrap(), "fuss.de");
    assert_eq!(to_ascii_nontransitional("fuß.de").unwrap(), "xn--fu-hia.de");
}

#[test]
fn joiner_deviations() {
    // U+094D DEVANAGARI SIGN VIRAMA followed by ZERO WIDTH NON-JOINER: the
    // joiner disappears under transitional processing and is encoded under
    // non-transitional processing.
    let domain = "a\u{094D}\u{200C}b";
    let transitional = domain_to_ascii(domain).unwrap();
    let nontransitional = to_ascii_nontransitional(domain).unwrap();
    assert_eq!(transitional, "xn--ab-fsf");
    assert_eq!(nontransitional, "xn--ab-fsf604u");
    assert_ne!(transitional, nontransitional);
}

#[test]
fn separator_variants() {
    assert_eq!(
        domain_to_ascii("mycharity\u{3002}org").unwrap(),
        "mycharity.org"
    );
    let expected = domain_to_ascii("mañana.com").unwrap();
    for separator in &['\u{3002}', '\u{FF0E}', '\u{FF61}'] {
        let domain = format!("mañana{}com", separator);
        assert_eq!(domain_to_ascii(&domain).unwrap(), expected);
    }
}

#[test]
fn ace_prefixed_input_is_rejected() {
    assert_matches!(domain_to_ascii("xn--mañana.com"), Err(_));
    // Even well-formed ACE trips the historical hyphen rule.
    assert_matches!(domain_to_ascii("xn--maana-pta.com"), Err(_));
    // Without hyphen checking, ASCII ACE input passes through.
    assert_eq!(
        Config::default()
            .check_hyphens(false)
            .to_ascii("xn--maana-pta.com")
            .unwrap(),
        "xn--maana-pta.com"
    );
}

#[test]
fn hyphen_rules() {
    assert_matches!(domain_to_ascii("-leading.com"), Err(_));
    assert_matches!(domain_to_ascii("trailing-.com"), Err(_));
    // The historical rule rejects a hyphen in the third or fourth position.
    assert_matches!(domain_to_ascii("ab-cd.com"), Err(_));
    assert_matches!(domain_to_ascii("abc-def.com"), Err(_));
    assert_eq!(domain_to_ascii("abcd-ef.com").unwrap(), "abcd-ef.com");
    assert_eq!(
        Config::default()
            .check_hyphens(false)
            .to_ascii("ab-cd.com")
            .unwrap(),
        "ab-cd.com"
    );
}

#[test]
fn empty_labels() {
    assert_matches!(domain_to_ascii(""), Err(_));
    assert_matches!(domain_to_ascii("a..b"), Err(_));
    assert_matches!(domain_to_ascii("example.com."), Err(_));
}

#[test]
fn combining_mark_at_label_start() {
    assert_matches!(domain_to_ascii("\u{0301}abc.com"), Err(_));
}

#[test]
fn to_unicode_decodes_ace() {
    assert_eq!(
        domain_to_unicode("xn--maana-pta.com").unwrap(),
        "mañana.com"
    );
    assert_eq!(domain_to_unicode("xn--bb-eka.at").unwrap(), "öbb.at");
}

#[test]
fn to_unicode_prefix_is_case_insensitive() {
    assert_eq!(
        domain_to_unicode("XN--MAANA-PTA.com").unwrap(),
        "mañana.com"
    );
}

#[test]
fn to_unicode_leaves_other_labels_alone() {
    // ToUnicode neither maps nor validates.
    assert_eq!(
        domain_to_unicode("MyChArIty.ORG").unwrap(),
        "MyChArIty.ORG"
    );
    assert_eq!(domain_to_unicode("ab-cd.com").unwrap(), "ab-cd.com");
}

#[test]
fn to_unicode_rejects_malformed_ace() {
    assert_matches!(domain_to_unicode("xn--9999999999"), Err(_));
    assert_matches!(domain_to_unicode("a.xn--é.b"), Err(_));
}

#[test]
fn unicode_round_trip() {
    for domain in &["mañana.com", "öbb.at", "日本語.jp", "παράδειγμα.gr"] {
        let ascii = to_ascii_nontransitional(domain).unwrap();
        assert_eq!(
            Config::default()
                .transitional_processing(false)
                .to_unicode(&ascii)
                .unwrap(),
            *domain
        );
    }
}

#[test]
fn disallowed_is_reported_not_fatal() {
    // U+2603 SNOWMAN is disallowed; the conversion still goes through and
    // the report carries the offender.
    assert!(domain_to_ascii("a\u{2603}b.com").is_ok());
    let (mapped, report) = idna_ace::uts46::map("a\u{2603}b", Config::default());
    assert_eq!(mapped, "a\u{2603}b");
    assert_eq!(report, vec!['\u{2603}']);
}

#[test]
fn std3_is_report_only() {
    let strict = domain_to_ascii("under_score.example").unwrap();
    let relaxed = Config::default()
        .use_std3_ascii_rules(false)
        .to_ascii("under_score.example")
        .unwrap();
    assert_eq!(strict, "under_score.example");
    assert_eq!(strict, relaxed);
}

#[test]
fn bidi_checking_is_opt_in() {
    let bidi = Config::default().check_bidi(true);
    assert!(bidi.to_ascii("\u{05D0}\u{05D1}\u{05D2}").is_ok());
    // A bidi domain name with a label starting in a European digit.
    assert_matches!(bidi.to_ascii("0a.\u{05D0}"), Err(_));
    // The check is off by default.
    assert!(domain_to_ascii("0a.\u{05D0}").is_ok());
}

#[test]
fn custom_delimiter() {
    let config = Config::default().delimiter('_');
    assert_eq!(
        config.to_ascii("mañana_com").unwrap(),
        "xn--maana-pta_com"
    );
    assert_eq!(
        config.to_unicode("xn--maana-pta_com").unwrap(),
        "mañana_com"
    );
}

#[test]
fn dns_length_verification() {
    let config = Config::default().verify_dns_length(true);
    let label_63 = "a".repeat(63);
    let label_64 = "a".repeat(64);
    assert!(config.to_ascii(&label_63).is_ok());
    assert_matches!(config.to_ascii(&label_64), Err(_));
    // Four 63-byte labels exceed the 253-byte total.
    let domain = [&label_63[..], &label_63[..], &label_63[..], &label_63[..]].join(".");
    assert_matches!(config.to_ascii(&domain), Err(_));
}

#[test]
fn byte_codec_round_trip() {
    let config = Config::default();
    assert_eq!(
        config
            .to_ascii_bytes("öbb.at".as_bytes(), &Utf8Codec)
            .unwrap(),
        b"xn--bb-eka.at".to_vec()
    );
    assert_eq!(
        config
            .to_unicode_bytes(b"xn--bb-eka.at", &Utf8Codec)
            .unwrap(),
        "öbb.at".as_bytes().to_vec()
    );
    assert_matches!(config.to_ascii_bytes(b"\xff\xfe", &Utf8Codec), Err(_));
}

#[test]
fn byte_codec_is_injectable() {
    // A codec does not have to be UTF-8: Latin-1 covers the scenario inputs
    // that stay within U+00FF.
    struct Latin1;
    impl ByteCodec for Latin1 {
        fn encode(&self, code_points: &[char]) -> Vec<u8> {
            code_points.iter().map(|&c| c as u8).collect()
        }
        fn decode(&self, bytes: &[u8]) -> Option<Vec<char>> {
            Some(bytes.iter().map(|&b| char::from(b)).collect())
        }
    }
    assert_eq!(
        Config::default()
            .to_ascii_bytes(b"\xf6bb.at", &Latin1)
            .unwrap(),
        b"xn--bb-eka.at".to_vec()
    );
    assert_eq!(
        Config::default()
            .to_unicode_bytes(b"xn--bb-eka.at", &Latin1)
            .unwrap(),
        b"\xf6bb.at".to_vec()
    );
}
