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

//! Best-effort rendering of raw phone number strings.
//!
//! Nothing here fails: input that cannot be resolved is handed back as it
//! was given.

pub mod filters;

use std::sync::Arc;

use log::{debug, warn};

use crate::{
    config::Configuration,
    country_code::CountryCode,
    engine::LibPhoneNumberPlan,
    interfaces::NumberingPlan,
    phonenumbervalue::{PhoneNumberValue, Result},
};

pub struct PhoneNumberFormatter<P: NumberingPlan = LibPhoneNumberPlan> {
    plan: Arc<P>,
    default_country: CountryCode,
}

impl PhoneNumberFormatter<LibPhoneNumberPlan> {
    pub fn new(default_country: CountryCode) -> Self {
        Self::with_plan(LibPhoneNumberPlan::shared(), default_country)
    }

    /// Uses the configured default country, or the one of the default
    /// locale when none is configured.
    pub fn from_configuration(config: &Configuration) -> Result<Self> {
        Ok(Self::new(config.default_country_code()?))
    }
}

impl<P: NumberingPlan> PhoneNumberFormatter<P> {
    pub fn with_plan(plan: Arc<P>, default_country: CountryCode) -> Self {
        Self {
            plan,
            default_country,
        }
    }

    pub fn default_country(&self) -> CountryCode {
        self.default_country
    }

    pub fn to_e164(&self, number: &str, country: Option<&str>) -> String {
        self.render(number, country, PhoneNumberValue::to_e164)
    }

    pub fn to_national(&self, number: &str, country: Option<&str>) -> String {
        self.render(number, country, PhoneNumberValue::to_national)
    }

    pub fn to_international(&self, number: &str, country: Option<&str>) -> String {
        self.render(number, country, PhoneNumberValue::to_international)
    }

    pub fn to_rfc3966(&self, number: &str, country: Option<&str>) -> String {
        self.render(number, country, PhoneNumberValue::to_rfc3966)
    }

    /// `number` as dialed from `dialed_from`, a code or a locale.
    pub fn to_number_dialed_from(
        &self,
        number: &str,
        dialed_from: &str,
        country: Option<&str>,
    ) -> String {
        let dialed_from = CountryCode::try_from_string(dialed_from)
            .map_or_else(|| dialed_from.to_owned(), String::from);
        self.render(number, country, |value| value.to_number_dialed_from(&dialed_from))
    }

    /// The per-call country when it resolves, the default one otherwise.
    fn coalesce_country(&self, country: Option<&str>) -> CountryCode {
        match country.filter(|country| !country.is_empty()) {
            Some(country) => CountryCode::try_from_string(country).unwrap_or_else(|| {
                warn!(
                    "Unable to resolve country {:?}, using {}",
                    country, self.default_country
                );
                self.default_country
            }),
            None => self.default_country,
        }
    }

    fn render(
        &self,
        number: &str,
        country: Option<&str>,
        render: impl FnOnce(&PhoneNumberValue<P>) -> String,
    ) -> String {
        let country = self.coalesce_country(country);
        match PhoneNumberValue::from_string_with(
            Arc::clone(&self.plan),
            number,
            Some(country.as_str()),
        ) {
            Ok(value) => render(&value),
            Err(err) => {
                debug!("Leaving {:?} unformatted: {}", number, err);
                number.to_owned()
            }
        }
    }
}
