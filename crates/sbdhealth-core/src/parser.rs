//! Extraction of the SBD device list from raw configuration content.
//!
//! The parser is lexical: it looks for the first `SBD_DEVICE=` assignment
//! anywhere in the input and does not understand comments or line
//! boundaries. A commented-out assignment that matches is picked up unless
//! [`ParseOptions::skip_commented_lines`] is set.
//!
//! The value may be bare (`SBD_DEVICE=/dev/sda`) or a double-quoted,
//! semicolon-separated list (`SBD_DEVICE="/dev/sda;/dev/sdb"`). Only letters,
//! `-`, `/` and `;` are accepted inside the value; the match stops at the
//! first other character.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::domain::DeviceList;
use crate::ports::SbdError;

const SBD_DEVICE_KEY: &str = "SBD_DEVICE=";

static SBD_DEVICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"SBD_DEVICE="?[a-zA-Z/;-]+"?"#).expect("SBD_DEVICE pattern is valid")
});

/// Tuning for [`parse_sbd_devices_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop lines whose first non-blank character is `#` before matching.
    pub skip_commented_lines: bool,
}

/// Parse the device list with default options.
///
/// Fails with [`SbdError::NoDeviceConfigured`] when no assignment matches.
pub fn parse_sbd_devices(raw: &[u8]) -> Result<DeviceList, SbdError> {
    parse_sbd_devices_with(raw, ParseOptions::default())
}

/// Parse the device list from raw configuration bytes.
pub fn parse_sbd_devices_with(raw: &[u8], options: ParseOptions) -> Result<DeviceList, SbdError> {
    let content: Cow<'_, [u8]> = if options.skip_commented_lines {
        Cow::Owned(strip_commented_lines(raw))
    } else {
        Cow::Borrowed(raw)
    };

    let matched = SBD_DEVICE_PATTERN
        .find(&content)
        .ok_or(SbdError::NoDeviceConfigured)?;

    // The class is ASCII-only, so the match is always valid UTF-8.
    let value = String::from_utf8_lossy(&matched.as_bytes()[SBD_DEVICE_KEY.len()..]);

    Ok(value
        .trim_matches('"')
        .split(';')
        .map(str::to_string)
        .collect())
}

fn strip_commented_lines(raw: &[u8]) -> Vec<u8> {
    raw.split(|b| *b == b'\n')
        .filter(|line| line.iter().find(|b| !b.is_ascii_whitespace()) != Some(&b'#'))
        .collect::<Vec<_>>()
        .join(&b'\n')
}
