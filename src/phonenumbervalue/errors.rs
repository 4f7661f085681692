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

use thiserror::Error;

/// Why the numbering-plan engine could not parse an input at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("Empty input")]
    Empty,
    #[error("Input rejected by the numbering-plan engine: {0}")]
    Rejected(String),
    #[error("The numbering-plan engine panicked while parsing")]
    EnginePanicked,
}

/// Malformed arguments and configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgumentError {
    #[error("Country codes should be 2 letter ISO 3166 strings, received \"{0}\"")]
    MalformedCountryCode(String),
    #[error("The string \"{0}\" could not be parsed as a valid locale")]
    UnrecognizableLocale(String),
    #[error("{0}")]
    InvalidOption(String),
}

/// Every way turning input into a country or a phone number can fail.
///
/// None of these are fatal: each one describes rejected input, and callers
/// are expected to match on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    #[error("The country code \"{0}\" does not correspond to a known country")]
    UnknownCountry(String),

    #[error("The string \"{0}\" could not be understood as either a locale or an ISO 3166 country code")]
    Undetectable(String),

    #[error("The phone number \"{number}\" cannot be recognized as a valid phone number")]
    UnrecognizableNumber {
        number: String,
        #[source]
        source: ParseFailure,
    },

    #[error("A region cannot be detected for the phone number \"{0}\"")]
    UndetectableRegion(String),

    #[error("{}", invalid_number_message(.number, .region.as_deref()))]
    InvalidPhoneNumber {
        number: String,
        region: Option<String>,
    },
}

fn invalid_number_message(number: &str, region: Option<&str>) -> String {
    match region.filter(|region| !region.is_empty()) {
        Some(region) => format!(
            "The phone number \"{}\" is not a valid number for the region \"{}\"",
            number, region
        ),
        None => format!("The phone number \"{}\" is not a valid phone number", number),
    }
}

impl PhoneNumberError {
    pub(crate) fn invalid_option(message: impl Into<String>) -> Self {
        InvalidArgumentError::InvalidOption(message.into()).into()
    }

    /// Whether the error was raised because a number could not be
    /// recognized at all, as opposed to recognized and found invalid.
    pub fn is_unrecognizable(&self) -> bool {
        matches!(self, PhoneNumberError::UnrecognizableNumber { .. })
    }
}
