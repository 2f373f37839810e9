// Copyright 2013-2014 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! IDNA processing and its ASCII Compatible Encoding.
//!
//! This crate converts internationalized domain names between their Unicode
//! form and the all-ASCII form in which every non-ASCII label is carried as a
//! Punycode-encoded label behind the `xn--` prefix, following
//! [*Unicode IDNA Compatibility Processing* (Unicode Technical Standard
//! #46)](http://www.unicode.org/reports/tr46/) and
//! [Punycode (RFC 3492)](https://tools.ietf.org/html/rfc3492).
//!
//! [`domain_to_ascii`] and [`domain_to_unicode`] run with the default flags;
//! [`Config`] gives access to the individual knobs (transitional processing,
//! hyphen checking, STD3 ASCII rules, the Bidi check, the label separator
//! and the byte codec used at the ACE boundary). The [`punycode`] module
//! exposes the label codec on its own.
//!
//! Conversion to ASCII fails as a whole when any one label fails; disallowed
//! code points are reported on the `log` debug channel (and by
//! [`uts46::map`]) without aborting the conversion by themselves.

pub mod punycode;
pub mod uts46;

pub use crate::uts46::{ByteCodec, Config, Errors, Utf8Codec};

/// The ToASCII operation with this crate's default flags.
///
/// Maps and normalizes the domain, validates its labels, and returns the
/// ASCII Compatible Encoding, encoding non-ASCII labels with Punycode as
/// necessary.
pub fn domain_to_ascii(domain: &str) -> Result<String, Errors> {
    Config::default().to_ascii(domain)
}

/// The ToUnicode operation with this crate's default flags.
///
/// Decodes `xn--` labels and passes everything else through unchanged.
pub fn domain_to_unicode(domain: &str) -> Result<String, Errors> {
    Config::default().to_unicode(domain)
}
