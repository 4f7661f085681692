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

//! Locale identifiers and the process default locale.
//!
//! Both BCP 47 (`en-GB`, `zh-Hant-TW`) and POSIX (`en_GB.UTF-8@euro`)
//! spellings are understood. Only the region subtag is ever extracted, the
//! rest of the identifier is validated just enough to find it.

use std::sync::{LazyLock, RwLock};

use log::trace;

/// Locale reported when the environment does not name one.
pub const FALLBACK_LOCALE: &str = "en_US_POSIX";

static DEFAULT_LOCALE: LazyLock<RwLock<String>> =
    LazyLock::new(|| RwLock::new(locale_from_env()));

fn locale_from_env() -> String {
    for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if value == "C" || value == "POSIX" || value.starts_with("C.") {
                return FALLBACK_LOCALE.to_owned();
            }
            trace!("Default locale taken from {}: {}", var, value);
            return value.to_owned();
        }
    }
    FALLBACK_LOCALE.to_owned()
}

/// Returns the process default locale.
pub fn default_locale() -> String {
    DEFAULT_LOCALE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Replaces the process default locale. Subsequent calls to
/// [`default_locale`] and every detection that falls back to it observe the
/// new value.
pub fn set_default_locale(locale: impl Into<String>) {
    let locale = locale.into();
    trace!("Default locale set to {}", locale);
    *DEFAULT_LOCALE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = locale;
}

fn is_language_subtag(subtag: &str) -> bool {
    (2..=8).contains(&subtag.len()) && subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_script_subtag(subtag: &str) -> bool {
    subtag.len() == 4 && subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_region_subtag(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
        || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()))
}

/// Extracts the region subtag of a locale identifier, uppercased.
///
/// Returns `None` when the identifier carries no region: `"en"`, `"GB"`
/// (read as the language `gb`), `"C"`. Numeric UN M.49 regions such as
/// `"es-419"` are returned as they are.
pub fn region_subtag(locale: &str) -> Option<String> {
    // drop POSIX codeset and modifier
    let locale = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    let mut subtags = locale.split(['-', '_']);
    let language = subtags.next()?;
    // "_GB" has an empty language, anything else must look like one
    if !language.is_empty() && !is_language_subtag(language) {
        return None;
    }

    let mut next = subtags.next()?;
    if is_script_subtag(next) {
        next = subtags.next()?;
    }
    if is_region_subtag(next) {
        Some(next.to_ascii_uppercase())
    } else {
        None
    }
}
