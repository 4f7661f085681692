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

use std::{fmt, sync::Arc};

use log::{debug, trace};

use crate::{
    engine::LibPhoneNumberPlan,
    i18n::RegionCode,
    interfaces::NumberingPlan,
    phonenumbervalue::{errors::PhoneNumberError, NumberTypes, PhoneNumberFormat},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, PhoneNumberError>;

/// A phone number that has been parsed and found to be either a valid short
/// number or a valid full number.
///
/// Instances only come out of [`PhoneNumberValue::from_string`] (or
/// [`PhoneNumberValue::from_string_with`]) and never change afterwards.
pub struct PhoneNumberValue<P: NumberingPlan = LibPhoneNumberPlan> {
    plan: Arc<P>,
    number: P::Number,
    region_code: String,
    is_short_number: bool,
}

impl PhoneNumberValue<LibPhoneNumberPlan> {
    /// Resolves a raw phone number with the shared default engine.
    ///
    /// `country_code` is the region used for numbers written in national
    /// form. It may be omitted when the input carries a leading dialing code,
    /// and it is ignored in favour of that code when both are present.
    pub fn from_string(phone_number: &str, country_code: Option<&str>) -> Result<Self> {
        Self::from_string_with(LibPhoneNumberPlan::shared(), phone_number, country_code)
    }
}

impl<P: NumberingPlan> PhoneNumberValue<P> {
    pub fn from_string_with(
        plan: Arc<P>,
        phone_number: &str,
        country_code: Option<&str>,
    ) -> Result<Self> {
        let country_code = country_code.filter(|code| !code.is_empty());
        trace!("Resolving {:?} with region hint {:?}", phone_number, country_code);

        let prototype = plan.parse(phone_number, country_code).map_err(|source| {
            debug!("Unable to parse {:?}: {}", phone_number, source);
            PhoneNumberError::UnrecognizableNumber {
                number: phone_number.to_owned(),
                source,
            }
        })?;

        let region_code = region_code_for_number(&*plan, &prototype, country_code)
            .ok_or_else(|| PhoneNumberError::UndetectableRegion(phone_number.to_owned()))?;

        let is_short_number = plan.is_valid_short_number_for_region(&prototype, &region_code)
            || plan.is_valid_short_number(&prototype);
        // A number valid in general but not for `region_code` is accepted and
        // keeps `region_code`.
        let is_valid_number = plan.is_valid_number_for_region(&prototype, &region_code)
            || plan.is_valid_number(&prototype);

        if !is_short_number && !is_valid_number {
            debug!("{:?} is neither a short nor a full number for {}", phone_number, region_code);
            return Err(PhoneNumberError::InvalidPhoneNumber {
                number: phone_number.to_owned(),
                region: Some(region_code),
            });
        }

        trace!(
            "Resolved {:?} for region {} (short number: {})",
            phone_number, region_code, is_short_number
        );
        Ok(Self {
            plan,
            number: prototype,
            region_code,
            is_short_number,
        })
    }

    /// The region the number was validated against. It may differ from the
    /// hint given at construction when the number carries a dialing code.
    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    pub fn is_short_number(&self) -> bool {
        self.is_short_number
    }

    /// The structured number produced by the engine.
    pub fn number(&self) -> &P::Number {
        &self.number
    }

    /// `+441234567890`
    pub fn to_e164(&self) -> String {
        self.plan.format(&self.number, PhoneNumberFormat::E164)
    }

    pub fn to_national(&self) -> String {
        self.plan.format(&self.number, PhoneNumberFormat::National)
    }

    pub fn to_international(&self) -> String {
        self.plan.format(&self.number, PhoneNumberFormat::International)
    }

    pub fn to_rfc3966(&self) -> String {
        self.plan.format(&self.number, PhoneNumberFormat::RFC3966)
    }

    /// The number as dialed from `country`.
    pub fn to_number_dialed_from(&self, country: &str) -> String {
        self.plan.format(&self.number, PhoneNumberFormat::OutOfCountry(country))
    }

    /// Classifies the number.
    ///
    /// Short numbers are either [`NumberTypes::EMERGENCY`] or
    /// [`NumberTypes::SHORT_CODE`]; full numbers get the bits of the engine's
    /// category, which may be more than one.
    pub fn number_type(&self) -> NumberTypes {
        if self.is_short_number {
            if self.plan.is_emergency_number(&self.to_national(), &self.region_code) {
                return NumberTypes::EMERGENCY;
            }
            return NumberTypes::SHORT_CODE;
        }
        self.plan.classify(&self.number).types()
    }
}

/// Effective region of a parsed number: the main region of its dialing code
/// when the engine knows one, the caller's hint otherwise.
fn region_code_for_number<P: NumberingPlan + ?Sized>(
    plan: &P,
    number: &P::Number,
    given_code: Option<&str>,
) -> Option<String> {
    let given_code = given_code.map(str::to_owned);
    let region_code = match plan.calling_code(number) {
        None | Some(0) => given_code,
        Some(dialing_code) => plan
            .region_for_calling_code(dialing_code)
            .filter(|region| RegionCode::is_determined(region))
            .or(given_code),
    };
    region_code.filter(|region| !region.is_empty())
}

/// Short numbers are not globally dialable, so they render in national form;
/// everything else renders as E.164.
impl<P: NumberingPlan> fmt::Display for PhoneNumberValue<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_short_number {
            f.write_str(&self.to_national())
        } else {
            f.write_str(&self.to_e164())
        }
    }
}

impl<P: NumberingPlan> fmt::Debug for PhoneNumberValue<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneNumberValue")
            .field("number", &self.number)
            .field("region_code", &self.region_code)
            .field("is_short_number", &self.is_short_number)
            .finish()
    }
}

impl<P: NumberingPlan> Clone for PhoneNumberValue<P> {
    fn clone(&self) -> Self {
        Self {
            plan: Arc::clone(&self.plan),
            number: self.number.clone(),
            region_code: self.region_code.clone(),
            is_short_number: self.is_short_number,
        }
    }
}
