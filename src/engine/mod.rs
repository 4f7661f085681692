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

//! Default numbering-plan engine.
//!
//! Full numbers, calling-code ownership and international dialing prefixes
//! come from the `phonenumber` crate and its metadata. Short numbers come
//! from the table in [`short_numbers`].

pub(crate) mod calling_codes;
pub(crate) mod short_numbers;

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{Arc, LazyLock},
};

use log::{trace, warn};
use phonenumber::{country, Mode, PhoneNumber};

use crate::{
    interfaces::{MatcherApi, NumberingPlan},
    phonenumbervalue::{NumberCategory, ParseFailure, PhoneNumberFormat},
    regex_based_matcher::RegexBasedMatcher,
    string_util,
};

static PHONE_NUMBER_PLAN: LazyLock<Arc<LibPhoneNumberPlan>> =
    LazyLock::new(|| Arc::new(LibPhoneNumberPlan::new()));

pub struct LibPhoneNumberPlan {
    /// An API for matching short-number patterns.
    matcher_api: Box<dyn MatcherApi>,
}

impl LibPhoneNumberPlan {
    pub fn new() -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
        }
    }

    /// The process-wide instance.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&PHONE_NUMBER_PLAN)
    }

    fn region_of(number: &PhoneNumber) -> Option<String> {
        // `Id` debug-prints as its two letter code
        number.country().id().map(|id| format!("{:?}", id))
    }

    fn national_significant_number(number: &PhoneNumber) -> String {
        let e164 = number.format().mode(Mode::E164).to_string();
        string_util::strip_calling_code(&e164, number.code().value()).to_owned()
    }

    fn matches_short_code(
        &self,
        number: &PhoneNumber,
        desc: &short_numbers::ShortNumberDesc,
    ) -> bool {
        if desc.calling_code != number.code().value() {
            return false;
        }
        let national_number = Self::national_significant_number(number);
        self.matcher_api
            .match_national_number(&national_number, desc.short_code, false)
    }

    fn format_out_of_country(&self, number: &PhoneNumber, calling_from: &str) -> String {
        let country_code = number.code().value();
        let Some(calling_from_code) = calling_codes::calling_code_for_region(calling_from) else {
            trace!("Unknown calling region {}, using international format", calling_from);
            return number.format().mode(Mode::International).to_string();
        };

        if country_code == calling_codes::NANPA_COUNTRY_CODE
            && calling_codes::is_nanpa_region(calling_from)
        {
            // NANPA regions dial each other with the trunk code "1".
            let national = number.format().mode(Mode::National).to_string();
            let mut buffer = itoa::Buffer::new();
            return [buffer.format(country_code), " ", national.as_str()].concat();
        }
        if country_code == calling_from_code {
            return number.format().mode(Mode::National).to_string();
        }

        let international = number.format().mode(Mode::International).to_string();
        match calling_codes::international_prefix(calling_from) {
            Some(prefix) => [prefix, " ", international.trim_start_matches('+')].concat(),
            None => international,
        }
    }
}

impl Default for LibPhoneNumberPlan {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps the `phonenumber` crate's type names onto [`NumberCategory`]; names
/// without a counterpart are unknown.
fn category_from_type_name(name: &str) -> NumberCategory {
    match name {
        "FixedLine" => NumberCategory::FixedLine,
        "Mobile" => NumberCategory::Mobile,
        "FixedLineOrMobile" => NumberCategory::FixedLineOrMobile,
        "TollFree" => NumberCategory::TollFree,
        "PremiumRate" => NumberCategory::PremiumRate,
        "SharedCost" => NumberCategory::SharedCost,
        "Voip" | "VoIP" => NumberCategory::VoIP,
        "PersonalNumber" => NumberCategory::PersonalNumber,
        "Pager" => NumberCategory::Pager,
        "Uan" | "UAN" => NumberCategory::UAN,
        "Emergency" => NumberCategory::Emergency,
        "Voicemail" | "VoiceMail" => NumberCategory::VoiceMail,
        "ShortCode" => NumberCategory::ShortCode,
        "StandardRate" => NumberCategory::StandardRate,
        _ => NumberCategory::Unknown,
    }
}

impl NumberingPlan for LibPhoneNumberPlan {
    type Number = PhoneNumber;

    fn parse(&self, raw: &str, region_hint: Option<&str>) -> Result<PhoneNumber, ParseFailure> {
        if raw.trim().is_empty() {
            return Err(ParseFailure::Empty);
        }
        // The engine strips the hint region's national prefix even after a
        // "+", so international input is parsed without one. Hints the engine
        // holds no metadata for are dropped.
        let hint = region_hint
            .filter(|_| !string_util::starts_with_plus(raw))
            .and_then(|region| region.to_ascii_uppercase().parse::<country::Id>().ok());

        // The parser is known to panic on some malformed input.
        let input = raw.to_owned();
        match panic::catch_unwind(AssertUnwindSafe(move || phonenumber::parse(hint, input))) {
            Ok(Ok(number)) => Ok(number),
            Ok(Err(err)) => {
                trace!("phonenumber rejected {:?}: {:?}", raw, err);
                Err(ParseFailure::Rejected(format!("{:?}", err)))
            }
            Err(_) => {
                warn!("phonenumber crate panicked while parsing {:?}", raw);
                Err(ParseFailure::EnginePanicked)
            }
        }
    }

    fn calling_code(&self, number: &PhoneNumber) -> Option<u16> {
        Some(number.code().value()).filter(|code| *code != 0)
    }

    fn region_for_calling_code(&self, calling_code: u16) -> Option<String> {
        calling_codes::main_region_for_calling_code(calling_code)
    }

    fn is_valid_short_number_for_region(&self, number: &PhoneNumber, region: &str) -> bool {
        short_numbers::for_region(region)
            .is_some_and(|desc| self.matches_short_code(number, desc))
    }

    fn is_valid_short_number(&self, number: &PhoneNumber) -> bool {
        short_numbers::for_calling_code(number.code().value())
            .any(|desc| self.matches_short_code(number, desc))
    }

    fn is_valid_number_for_region(&self, number: &PhoneNumber, region: &str) -> bool {
        phonenumber::is_valid(number) && Self::region_of(number).as_deref() == Some(region)
    }

    fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn classify(&self, number: &PhoneNumber) -> NumberCategory {
        let number_type = number.number_type(&phonenumber::metadata::DATABASE);
        category_from_type_name(&format!("{:?}", number_type))
    }

    fn is_emergency_number(&self, number: &str, region: &str) -> bool {
        // Numbers written internationally are never emergency numbers.
        if string_util::starts_with_plus(number) {
            return false;
        }
        let Some(desc) = short_numbers::for_region(region) else {
            return false;
        };
        let digits = string_util::ascii_digits(number);
        self.matcher_api
            .match_national_number(&digits, desc.emergency, false)
    }

    fn format(&self, number: &PhoneNumber, format: PhoneNumberFormat<'_>) -> String {
        match format {
            PhoneNumberFormat::E164 => number.format().mode(Mode::E164).to_string(),
            PhoneNumberFormat::National => number.format().mode(Mode::National).to_string(),
            PhoneNumberFormat::International => {
                number.format().mode(Mode::International).to_string()
            }
            PhoneNumberFormat::RFC3966 => number.format().mode(Mode::Rfc3966).to_string(),
            PhoneNumberFormat::OutOfCountry(region) => {
                self.format_out_of_country(number, &region.to_ascii_uppercase())
            }
        }
    }
}
