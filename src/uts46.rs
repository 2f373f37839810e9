// Copyright 2013-2014 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [*Unicode IDNA Compatibility Processing*
//! (Unicode Technical Standard #46)](http://www.unicode.org/reports/tr46/)

use self::Mapping::*;
use crate::punycode;
use log::debug;
use std::borrow::Cow;
use std::cmp::Ordering::{Equal, Greater, Less};
use std::{error::Error as StdError, fmt};
use unicode_bidi::{bidi_class, BidiClass};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

include!("uts46_mapping_table.rs");

const PUNYCODE_PREFIX: &str = "xn--";

#[derive(Debug)]
enum Mapping {
    Valid,
    Ignored,
    Mapped(&'static str),
    Deviation(&'static str),
    Disallowed,
    DisallowedStd3Valid,
    DisallowedStd3Mapped(&'static str),
}

struct Range {
    from: char,
    to: char,
    mapping: Mapping,
}

fn find_char(codepoint: char) -> &'static Mapping {
    let result = TABLE.binary_search_by(|range| {
        if codepoint > range.to {
            Less
        } else if codepoint < range.from {
            Greater
        } else {
            Equal
        }
    });
    // Codepoints outside every table range are disallowed, which keeps the
    // lookup total.
    match result {
        Ok(index) => &TABLE[index].mapping,
        Err(_) => &Mapping::Disallowed,
    }
}

fn map_char(codepoint: char, config: Config, output: &mut String, disallowed: &mut Vec<char>) {
    // U+3002, U+FF0E and U+FF61 are label separators no matter what the
    // table says about them.
    if let '\u{3002}' | '\u{FF0E}' | '\u{FF61}' = codepoint {
        output.push('.');
        return;
    }
    match *find_char(codepoint) {
        Mapping::Valid => output.push(codepoint),
        Mapping::Ignored => {}
        Mapping::Mapped(mapping) => output.push_str(mapping),
        Mapping::Deviation(mapping) => {
            if config.transitional_processing {
                output.push_str(mapping)
            } else {
                output.push(codepoint)
            }
        }
        Mapping::Disallowed => {
            // Reported, not fatal: the caller decides what to do with the
            // report, and the code point stays in the stream.
            disallowed.push(codepoint);
            output.push(codepoint);
        }
        Mapping::DisallowedStd3Valid => {
            if config.use_std3_ascii_rules {
                disallowed.push(codepoint);
            }
            output.push(codepoint)
        }
        Mapping::DisallowedStd3Mapped(mapping) => {
            if config.use_std3_ascii_rules {
                disallowed.push(codepoint);
                output.push(codepoint)
            } else {
                output.push_str(mapping)
            }
        }
    }
}

/// Apply the IDNA mapping table to a whole domain.
///
/// Returns the mapped string together with the code points that the table
/// reports as disallowed under the given flags. Mapping never fails; acting
/// on the report is up to the caller.
pub fn map(domain: &str, config: Config) -> (String, Vec<char>) {
    let mut mapped = String::with_capacity(domain.len());
    let mut disallowed = Vec::new();
    for codepoint in domain.chars() {
        map_char(codepoint, config, &mut mapped, &mut disallowed);
    }
    (mapped, disallowed)
}

// Lowercase LDH domains are fixed points of mapping and normalization.
fn is_simple(domain: &str) -> bool {
    domain
        .bytes()
        .all(|byte| matches!(byte, b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.'))
}

/// Check one label against the hyphen, empty-label and embedded-separator
/// rules.
fn is_valid_label(label: &str, config: Config) -> bool {
    let first = match label.chars().next() {
        Some(c) => c,
        None => return false,
    };
    if config.check_hyphens {
        if first == '-' || label.ends_with('-') {
            return false;
        }
        // The historical rule: a hyphen in either the third or the fourth
        // position rejects the label. This also catches ACE prefixes fed
        // back in as input.
        let mut chars = label.chars().skip(2);
        if chars.next() == Some('-') || chars.next() == Some('-') {
            return false;
        }
    }
    // Labels are separator-free by construction when splitting on the
    // default delimiter; the check still matters for custom delimiters.
    if label.contains('.') {
        return false;
    }
    !is_combining_mark(first)
}

fn is_bidi_domain(labels: &[&str]) -> bool {
    labels.iter().flat_map(|label| label.chars()).any(|c| {
        matches!(
            bidi_class(c),
            BidiClass::R | BidiClass::AL | BidiClass::AN
        )
    })
}

// http://tools.ietf.org/html/rfc5893#section-2
//
// Only called for bidi domain names: a name with at least one RTL label.
fn passes_bidi(label: &str) -> bool {
    let mut chars = label.chars();
    let rtl = match chars.next().map(bidi_class) {
        None => return true, // empty label
        Some(BidiClass::L) => false,
        Some(BidiClass::R) | Some(BidiClass::AL) => true,
        // Rule 1: the first character must be L, R or AL.
        Some(_) => return false,
    };

    let (mut found_en, mut found_an) = (false, false);
    for c in chars {
        let class = bidi_class(c);
        found_en |= class == BidiClass::EN;
        found_an |= class == BidiClass::AN;
        // Rules 2 and 5.
        let allowed = match class {
            BidiClass::EN
            | BidiClass::ES
            | BidiClass::CS
            | BidiClass::ET
            | BidiClass::ON
            | BidiClass::BN
            | BidiClass::NSM => true,
            BidiClass::L => !rtl,
            BidiClass::R | BidiClass::AL | BidiClass::AN => rtl,
            _ => false,
        };
        if !allowed {
            return false;
        }
    }

    // Rule 4: an RTL label may carry Arabic or European digits, not both.
    if rtl && found_en && found_an {
        return false;
    }

    // Rules 3 and 6: skip trailing NSMs, then the label must end in a
    // strong or numeric character of its own direction.
    let last = label
        .chars()
        .rev()
        .map(bidi_class)
        .find(|&class| class != BidiClass::NSM);
    match last {
        None => true,
        Some(BidiClass::EN) => true,
        Some(BidiClass::L) => !rtl,
        Some(BidiClass::R) | Some(BidiClass::AL) | Some(BidiClass::AN) => rtl,
        Some(_) => false,
    }
}

/// Apply the label validity rules to every label of the domain.
fn validate(labels: &[&str], config: Config) -> bool {
    if !labels.iter().all(|label| is_valid_label(label, config)) {
        return false;
    }
    // Bidi rules apply to bidi domain names only.
    if config.check_bidi && is_bidi_domain(labels) {
        return labels.iter().all(|label| passes_bidi(label));
    }
    true
}

fn has_punycode_prefix(label: &str) -> bool {
    label
        .get(..PUNYCODE_PREFIX.len())
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case(PUNYCODE_PREFIX))
}

fn encode_label(label: &str, output: &mut String) -> Result<(), Errors> {
    if label.is_ascii() {
        output.push_str(label);
        return Ok(());
    }
    match punycode::encode_str(label) {
        Some(encoded) => {
            output.push_str(PUNYCODE_PREFIX);
            output.push_str(&encoded);
            Ok(())
        }
        None => Err(Errors(vec![Error::Punycode])),
    }
}

fn decode_label(label: &str, output: &mut String) -> Result<(), Errors> {
    if !has_punycode_prefix(label) {
        output.push_str(label);
        return Ok(());
    }
    // ACE digits are case-insensitive; lowercase the payload before
    // decoding it.
    let payload = label[PUNYCODE_PREFIX.len()..].to_ascii_lowercase();
    match punycode::decode(&payload) {
        Some(decoded) => {
            output.extend(decoded);
            Ok(())
        }
        None => Err(Errors(vec![Error::Punycode])),
    }
}

/// Converts between code point sequences and byte strings at the ACE
/// boundary.
///
/// UTF-8 is the default convention; other byte conventions can be injected
/// through this trait.
pub trait ByteCodec {
    /// Render a code point sequence as a byte string.
    fn encode(&self, code_points: &[char]) -> Vec<u8>;
    /// Decode a byte string into code points. `None` for malformed input.
    fn decode(&self, bytes: &[u8]) -> Option<Vec<char>>;
}

/// The default [`ByteCodec`].
pub struct Utf8Codec;

impl ByteCodec for Utf8Codec {
    fn encode(&self, code_points: &[char]) -> Vec<u8> {
        code_points.iter().collect::<String>().into_bytes()
    }

    fn decode(&self, bytes: &[u8]) -> Option<Vec<char>> {
        std::str::from_utf8(bytes).ok().map(|s| s.chars().collect())
    }
}

/// Flags for UTS #46 processing.
///
/// The defaults correspond to transitional lookup with hyphen checking and
/// STD3 reporting on, and everything else off.
#[derive(Clone, Copy)]
#[must_use]
pub struct Config {
    use_std3_ascii_rules: bool,
    transitional_processing: bool,
    check_hyphens: bool,
    check_bidi: bool,
    check_joiners: bool,
    verify_dns_length: bool,
    delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_std3_ascii_rules: true,
            transitional_processing: true,
            check_hyphens: true,
            check_bidi: false,
            check_joiners: false,
            // Only used by to_ascii, not to_unicode
            verify_dns_length: false,
            delimiter: '.',
        }
    }
}

impl Config {
    #[inline]
    pub fn use_std3_ascii_rules(mut self, value: bool) -> Self {
        self.use_std3_ascii_rules = value;
        self
    }

    #[inline]
    pub fn transitional_processing(mut self, value: bool) -> Self {
        self.transitional_processing = value;
        self
    }

    #[inline]
    pub fn check_hyphens(mut self, value: bool) -> Self {
        self.check_hyphens = value;
        self
    }

    #[inline]
    pub fn check_bidi(mut self, value: bool) -> Self {
        self.check_bidi = value;
        self
    }

    #[inline]
    pub fn check_joiners(mut self, value: bool) -> Self {
        self.check_joiners = value;
        self
    }

    #[inline]
    pub fn verify_dns_length(mut self, value: bool) -> Self {
        self.verify_dns_length = value;
        self
    }

    /// The label separator, U+002E FULL STOP unless overridden.
    #[inline]
    pub fn delimiter(mut self, value: char) -> Self {
        self.delimiter = value;
        self
    }

    fn map_and_normalize<'a>(self, domain: &'a str) -> Cow<'a, str> {
        if is_simple(domain) {
            return Cow::Borrowed(domain);
        }
        let (mapped, disallowed) = map(domain, self);
        for codepoint in &disallowed {
            debug!(
                "disallowed code point U+{:04X} in {:?}",
                *codepoint as u32, domain
            );
        }
        Cow::Owned(mapped.nfc().collect())
    }

    fn check_length(self, domain: &str) -> Result<(), Errors> {
        let domain = domain
            .strip_suffix(self.delimiter)
            .unwrap_or(domain);
        let mut errors = Vec::new();
        if domain.is_empty() || domain.split(self.delimiter).any(|label| label.is_empty()) {
            errors.push(Error::TooShortForDns)
        }
        if domain.len() > 253 || domain.split(self.delimiter).any(|label| label.len() > 63) {
            errors.push(Error::TooLongForDns)
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Errors(errors))
        }
    }

    /// http://www.unicode.org/reports/tr46/#ToASCII
    pub fn to_ascii(self, domain: &str) -> Result<String, Errors> {
        if self.check_joiners {
            // TODO: enforce the RFC 5892 appendix A joiner rules here.
            debug!("check_joiners is set, but ContextJ rules are not enforced");
        }
        let mapped = self.map_and_normalize(domain);
        let labels: Vec<&str> = mapped.split(self.delimiter).collect();
        if !validate(&labels, self) {
            return Err(Errors(vec![Error::ValidityCriteria]));
        }
        let mut result = String::with_capacity(mapped.len());
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                result.push(self.delimiter);
            }
            encode_label(label, &mut result)?;
        }
        if self.verify_dns_length {
            self.check_length(&result)?;
        }
        Ok(result)
    }

    /// http://www.unicode.org/reports/tr46/#ToUnicode
    ///
    /// Decoding neither maps nor validates, so valid ACE input round-trips
    /// losslessly and everything else is passed through unchanged.
    pub fn to_unicode(self, domain: &str) -> Result<String, Errors> {
        let mut result = String::with_capacity(domain.len());
        let mut first = true;
        for label in domain.split(self.delimiter) {
            if !first {
                result.push(self.delimiter);
            }
            first = false;
            decode_label(label, &mut result)?;
        }
        Ok(result)
    }

    /// [`to_ascii`](Self::to_ascii) over an arbitrary byte convention.
    ///
    /// The DNS length check applies to the `&str` entry point only.
    pub fn to_ascii_bytes<C: ByteCodec>(
        self,
        domain: &[u8],
        codec: &C,
    ) -> Result<Vec<u8>, Errors> {
        let code_points = codec
            .decode(domain)
            .ok_or_else(|| Errors(vec![Error::Codec]))?;
        let unicode: String = code_points.iter().collect();
        let mapped = self.map_and_normalize(&unicode);
        let labels: Vec<&str> = mapped.split(self.delimiter).collect();
        if !validate(&labels, self) {
            return Err(Errors(vec![Error::ValidityCriteria]));
        }
        let mut result = Vec::with_capacity(mapped.len());
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                result.extend_from_slice(&codec.encode(&[self.delimiter]));
            }
            let rendered = codec.encode(&label.chars().collect::<Vec<char>>());
            if rendered.is_ascii() {
                result.extend_from_slice(&rendered);
            } else {
                let mut encoded = String::from(PUNYCODE_PREFIX);
                let code_points: Vec<char> = label.chars().collect();
                punycode::encode_into(&code_points, &mut encoded)
                    .map_err(|_| Errors(vec![Error::Punycode]))?;
                result.extend_from_slice(encoded.as_bytes());
            }
        }
        Ok(result)
    }

    /// [`to_unicode`](Self::to_unicode) over an arbitrary byte convention.
    pub fn to_unicode_bytes<C: ByteCodec>(
        self,
        domain: &[u8],
        codec: &C,
    ) -> Result<Vec<u8>, Errors> {
        let code_points = codec
            .decode(domain)
            .ok_or_else(|| Errors(vec![Error::Codec]))?;
        let mut result = Vec::with_capacity(domain.len());
        let mut first = true;
        for label in code_points.split(|&c| c == self.delimiter) {
            if !first {
                result.extend_from_slice(&codec.encode(&[self.delimiter]));
            }
            first = false;
            let rendered = codec.encode(label);
            if rendered.len() >= PUNYCODE_PREFIX.len()
                && rendered[..PUNYCODE_PREFIX.len()].eq_ignore_ascii_case(b"xn--")
            {
                let payload = rendered[PUNYCODE_PREFIX.len()..].to_ascii_lowercase();
                match punycode::decode_bytes(&payload) {
                    Ok(decoded) => result.extend_from_slice(&codec.encode(&decoded)),
                    Err(_) => return Err(Errors(vec![Error::Punycode])),
                }
            } else {
                result.extend_from_slice(&rendered);
            }
        }
        Ok(result)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Error {
    Punycode,
    ValidityCriteria,
    Codec,
    TooShortForDns,
    TooLongForDns,
}

impl Error {
    fn as_str(&self) -> &str {
        match self {
            Error::Punycode => "punycode error",
            Error::ValidityCriteria => "failed label validity criteria",
            Error::Codec => "byte decoding error",
            Error::TooShortForDns => "too short for DNS",
            Error::TooLongForDns => "too long for DNS",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors recorded during UTS #46 processing.
///
/// This is opaque for now, only indicating the presence of at least one
/// error. More details may be exposed in the future.
#[derive(Debug)]
pub struct Errors(Vec<Error>);

impl StdError for Errors {}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(err.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookup() {
        assert!(matches!(find_char('a'), Mapping::Valid));
        assert!(matches!(find_char('A'), Mapping::Mapped("a")));
        assert!(matches!(find_char('ß'), Mapping::Deviation("ss")));
        assert!(matches!(find_char('_'), Mapping::DisallowedStd3Valid));
        // Not covered by any range.
        assert!(matches!(find_char('\u{10FFFF}'), Mapping::Disallowed));
    }

    #[test]
    fn mapping_order() {
        let config = Config::default();
        // Deviation resolution and separator normalisation compose.
        let (mapped, report) = map("fu\u{00DF}\u{3002}de", config);
        assert_eq!(mapped, "fuss.de");
        assert!(report.is_empty());

        let (mapped, _) = map(
            "fu\u{00DF}\u{3002}de",
            config.transitional_processing(false),
        );
        assert_eq!(mapped, "fu\u{00DF}.de");
    }

    #[test]
    fn ignored_removal() {
        let (mapped, report) = map("a\u{00AD}b", Config::default());
        assert_eq!(mapped, "ab");
        assert!(report.is_empty());
    }

    #[test]
    fn std3_report() {
        let (mapped, report) = map("a_b", Config::default());
        assert_eq!(mapped, "a_b");
        assert_eq!(report, vec!['_']);

        let (mapped, report) = map("a_b", Config::default().use_std3_ascii_rules(false));
        assert_eq!(mapped, "a_b");
        assert!(report.is_empty());
    }

    #[test]
    fn hyphen_positions() {
        let config = Config::default();
        assert!(is_valid_label("example", config));
        assert!(!is_valid_label("-example", config));
        assert!(!is_valid_label("example-", config));
        // Third or fourth position.
        assert!(!is_valid_label("ab-cd", config));
        assert!(!is_valid_label("abc-d", config));
        assert!(!is_valid_label("xn--a", config));
        assert!(is_valid_label("abcd-e", config));
        assert!(is_valid_label("xn--a", config.check_hyphens(false)));
    }

    #[test]
    fn empty_and_dotted_labels() {
        let config = Config::default();
        assert!(!is_valid_label("", config));
        assert!(!is_valid_label("", config.check_hyphens(false)));
        assert!(!is_valid_label("a.b", config.delimiter('_')));
    }

    #[test]
    fn bidi_labels() {
        assert!(passes_bidi("abc"));
        assert!(passes_bidi("\u{05D0}\u{05D1}\u{05D2}"));
        // Rule 1: cannot start with a digit.
        assert!(!passes_bidi("0a"));
        // Rule 4: mixed Arabic and European digits in an RTL label.
        assert!(!passes_bidi("\u{0627}1\u{0661}"));
    }
}
