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

use std::{fmt, str::FromStr};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    i18n,
    phonenumbervalue::{InvalidArgumentError, PhoneNumberError},
};

/// An ISO 3166-1 alpha-2 code naming a known territory.
///
/// Only obtainable through the validated constructors, so holding one means
/// the code is both well formed and real: `"ZZ"` matches the pattern but is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

/// Input accepted by [`CountryCode::detect`].
#[derive(Debug, Clone, Copy)]
pub enum CountryInput<'a> {
    Resolved(CountryCode),
    Text(&'a str),
    Default,
}

impl CountryCode {
    /// Builds a country code from a 2-letter code, in any case.
    pub fn from_code(code: &str) -> Result<Self, PhoneNumberError> {
        let upper = code.to_ascii_uppercase();
        let bytes = upper.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidArgumentError::MalformedCountryCode(code.to_owned()).into());
        }
        if !i18n::is_known_territory(&upper) {
            return Err(PhoneNumberError::UnknownCountry(upper));
        }
        Ok(Self([bytes[0], bytes[1]]))
    }

    /// Builds a country code from the region subtag of a locale identifier.
    pub fn from_locale(locale: &str) -> Result<Self, PhoneNumberError> {
        let region = i18n::region_subtag(locale)
            .ok_or_else(|| InvalidArgumentError::UnrecognizableLocale(locale.to_owned()))?;
        Self::from_code(&region)
    }

    /// Reads `value` as a locale first and as a bare code second.
    ///
    /// The order is a deliberate tie-break. `"en_GB"` only makes sense as a
    /// locale, while `"GB"` reads as the language `gb` with no region and so
    /// falls through to the code interpretation.
    pub fn try_from_string(value: &str) -> Option<Self> {
        if let Ok(code) = Self::from_locale(value) {
            return Some(code);
        }
        Self::from_code(value).ok()
    }

    /// Resolves a country from whatever the caller has: an existing code is
    /// returned unchanged, text is read with [`CountryCode::try_from_string`],
    /// and empty text or [`CountryInput::Default`] use the process default
    /// locale.
    pub fn detect(value: CountryInput<'_>) -> Result<Self, PhoneNumberError> {
        let text = match value {
            CountryInput::Resolved(code) => return Ok(code),
            CountryInput::Text(text) if !text.is_empty() => text.to_owned(),
            CountryInput::Text(_) | CountryInput::Default => {
                let locale = i18n::default_locale();
                trace!("Detecting country from default locale {}", locale);
                locale
            }
        };
        Self::try_from_string(&text).ok_or(PhoneNumberError::Undetectable(text))
    }

    /// Shorthand for [`CountryCode::detect`] with optional text.
    pub fn detect_str(value: Option<&str>) -> Result<Self, PhoneNumberError> {
        Self::detect(value.map_or(CountryInput::Default, CountryInput::Text))
    }

    pub fn as_str(&self) -> &str {
        // constructors only store ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// English name of the territory.
    pub fn display_name(&self) -> &'static str {
        i18n::display_region(self.as_str()).unwrap_or_default()
    }

    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<&str> for CountryCode {
    type Error = PhoneNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = PhoneNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_owned()
    }
}

impl<'a> From<CountryCode> for CountryInput<'a> {
    fn from(code: CountryCode) -> Self {
        CountryInput::Resolved(code)
    }
}

impl<'a> From<&'a str> for CountryInput<'a> {
    fn from(text: &'a str) -> Self {
        CountryInput::Text(text)
    }
}
