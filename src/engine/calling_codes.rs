// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Calling-code ownership and international dialing prefixes, read from the
//! `phonenumber` crate's metadata database.

use phonenumber::metadata::{Metadata, DATABASE};

pub(crate) const NANPA_COUNTRY_CODE: u16 = 1;

/// The main region of a calling code: the one flagged as main country, or the
/// only region when the code is not shared. Non-geographical entities give
/// "001".
pub(crate) fn main_region_for_calling_code(calling_code: u16) -> Option<String> {
    let entries = DATABASE.by_code(&calling_code)?;
    let main = match entries.as_slice() {
        [only] => Some(*only),
        shared => shared.iter().copied().find(|meta| meta.is_main_country_for_code()),
    };
    main.map(|meta| meta.id().to_owned())
}

pub(crate) fn calling_code_for_region(region: &str) -> Option<u16> {
    DATABASE.by_id(region).map(Metadata::country_code)
}

pub(crate) fn is_nanpa_region(region: &str) -> bool {
    calling_code_for_region(region) == Some(NANPA_COUNTRY_CODE)
}

/// A prefix such as "00", or "8~10" with its dial-tone wait.
fn is_unique_international_prefix(prefix: &str) -> bool {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match prefix.split_once(['~', '\u{2053}', '\u{223C}', '\u{FF5E}']) {
        Some((head, tail)) => all_digits(head) && all_digits(tail),
        None => all_digits(prefix),
    }
}

/// The prefix dialed before a calling code from `region`, `None` when the
/// region has no single such prefix.
pub(crate) fn international_prefix(region: &str) -> Option<&'static str> {
    let meta = DATABASE.by_id(region)?;
    if let Some(preferred) = meta.preferred_international_prefix() {
        return Some(preferred);
    }
    meta.international_prefix()
        .map(|prefix| prefix.as_str())
        .filter(|prefix| is_unique_international_prefix(prefix))
}
