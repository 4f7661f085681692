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

//! Acceptance policy for user-supplied phone numbers.

use std::sync::Arc;

use arc_swap::ArcSwap;
use log::{debug, trace};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    config::Configuration,
    country_code::CountryCode,
    engine::LibPhoneNumberPlan,
    interfaces::NumberingPlan,
    phonenumbervalue::{NumberTypes, PhoneNumberError, PhoneNumberValue, Result},
    string_util,
};

/// Why a candidate value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationFailure {
    #[error("Invalid type given. Non-empty string expected")]
    InvalidType,
    #[error("The input does not match any known phone number format")]
    NoMatch,
    #[error("The given phone number is not valid")]
    Invalid,
    #[error("The given phone number is not an acceptable type of number")]
    NotAllowed,
}

impl ValidationFailure {
    /// Stable identifier, suitable as a translation key.
    pub const fn key(self) -> &'static str {
        match self {
            ValidationFailure::InvalidType => "invalidInputType",
            ValidationFailure::NoMatch => "phoneNumberNoMatch",
            ValidationFailure::Invalid => "invalidPhoneNumber",
            ValidationFailure::NotAllowed => "typeNotAllowed",
        }
    }

    /// Default English message.
    pub const fn message(self) -> &'static str {
        match self {
            ValidationFailure::InvalidType => "Invalid type given. Non-empty string expected",
            ValidationFailure::NoMatch => "The input does not match any known phone number format",
            ValidationFailure::Invalid => "The given phone number is not valid",
            ValidationFailure::NotAllowed => {
                "The given phone number is not an acceptable type of number"
            }
        }
    }
}

/// A partial set of validator options. Unset and empty fields leave the
/// current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Default country, as a 2-letter code or a locale.
    pub country: Option<String>,
    /// Key of the validation context that may carry a per-call country.
    pub country_context: Option<String>,
    /// Raw [`NumberTypes`] bits.
    pub allowed_types: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ValidatorSettings {
    country: Option<CountryCode>,
    country_context: Option<String>,
    allowed_types: NumberTypes,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            country: None,
            country_context: None,
            allowed_types: NumberTypes::ANY,
        }
    }
}

fn checked_country(country_code_or_locale: &str) -> Result<CountryCode> {
    CountryCode::try_from_string(country_code_or_locale).ok_or_else(|| {
        PhoneNumberError::invalid_option(format!(
            "Country codes must be ISO 3166 2-letter codes or Locale strings. Received \"{}\"",
            country_code_or_locale
        ))
    })
}

fn checked_allowed_types(types: NumberTypes) -> Result<NumberTypes> {
    if types.is_empty() || !NumberTypes::KNOWN.contains(types) {
        return Err(PhoneNumberError::invalid_option(
            "The allowed types provided do not match known valid types",
        ));
    }
    Ok(types)
}

/// Decides whether a candidate value is an acceptable phone number.
///
/// Settings may be changed through `&self` at any time. Every evaluation
/// works on one snapshot of them, so it sees either the old or the new
/// settings as a whole.
pub struct PhoneNumberValidator<P: NumberingPlan = LibPhoneNumberPlan> {
    plan: Arc<P>,
    settings: ArcSwap<ValidatorSettings>,
}

impl PhoneNumberValidator<LibPhoneNumberPlan> {
    /// A validator with no default country that accepts every type.
    pub fn new() -> Self {
        Self::with_plan(LibPhoneNumberPlan::shared())
    }

    pub fn with_options(options: ValidatorOptions) -> Result<Self> {
        let validator = Self::new();
        validator.set_options(options)?;
        Ok(validator)
    }

    /// A validator seeded with the configured country and types.
    pub fn from_configuration(config: &Configuration) -> Result<Self> {
        Self::with_options(config.validator_options())
    }
}

impl Default for PhoneNumberValidator<LibPhoneNumberPlan> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: NumberingPlan> PhoneNumberValidator<P> {
    pub fn with_plan(plan: Arc<P>) -> Self {
        Self {
            plan,
            settings: ArcSwap::from_pointee(ValidatorSettings::default()),
        }
    }

    /// Applies `options` as a single change. Nothing is applied when any
    /// of the given values is invalid.
    pub fn set_options(&self, options: ValidatorOptions) -> Result<()> {
        let country = match options.country.as_deref().filter(|c| !c.is_empty()) {
            Some(country) => Some(checked_country(country)?),
            None => None,
        };
        let allowed_types = match options.allowed_types {
            // undefined bits fail the same way an empty mask does
            Some(bits) => Some(checked_allowed_types(
                NumberTypes::from_bits(bits).unwrap_or(NumberTypes::NONE),
            )?),
            None => None,
        };
        let country_context = options.country_context.filter(|key| !key.is_empty());

        self.settings.rcu(|current| {
            let mut next = ValidatorSettings::clone(current);
            if let Some(country) = country {
                next.country = Some(country);
            }
            if let Some(allowed_types) = allowed_types {
                next.allowed_types = allowed_types;
            }
            if let Some(key) = &country_context {
                next.country_context = Some(key.clone());
            }
            next
        });
        Ok(())
    }

    /// Sets the default country from a 2-letter code or a locale.
    pub fn set_country(&self, country_code_or_locale: &str) -> Result<()> {
        let country = checked_country(country_code_or_locale)?;
        trace!("Validator country set to {}", country);
        self.settings.rcu(|current| ValidatorSettings {
            country: Some(country),
            ..ValidatorSettings::clone(current)
        });
        Ok(())
    }

    /// Sets the acceptable types. `types` must be a non-empty subset of
    /// [`NumberTypes::KNOWN`].
    pub fn set_allowed_types(&self, types: NumberTypes) -> Result<()> {
        let allowed_types = checked_allowed_types(types)?;
        trace!("Validator allowed types set to {}", allowed_types);
        self.settings.rcu(|current| ValidatorSettings {
            allowed_types,
            ..ValidatorSettings::clone(current)
        });
        Ok(())
    }

    /// Names the context entry that may override the default country. An
    /// empty key changes nothing, as in [`Self::set_options`].
    pub fn set_country_context(&self, key: &str) {
        if key.is_empty() {
            return;
        }
        self.settings.rcu(|current| ValidatorSettings {
            country_context: Some(key.to_owned()),
            ..ValidatorSettings::clone(current)
        });
    }

    pub fn country(&self) -> Option<CountryCode> {
        self.settings.load().country
    }

    pub fn allowed_types(&self) -> NumberTypes {
        self.settings.load().allowed_types
    }

    pub fn country_context(&self) -> Option<String> {
        self.settings.load().country_context.clone()
    }

    /// Message shown for `failure`.
    pub fn message_for(&self, failure: ValidationFailure) -> &'static str {
        failure.message()
    }

    /// Evaluates `value`, returning the resolved number when it is accepted.
    ///
    /// `context` holds the other submitted values. When a country context
    /// key is set and the entry under it resolves to a country, that country
    /// takes precedence over the default one.
    pub fn validate(
        &self,
        value: &Value,
        context: Option<&Map<String, Value>>,
    ) -> std::result::Result<PhoneNumberValue<P>, ValidationFailure> {
        let settings = self.settings.load();

        let input = string_util::scalar_to_string(value)
            .filter(|input| !input.is_empty())
            .ok_or(ValidationFailure::InvalidType)?;

        let country = Self::effective_country(&settings, context);
        let number = PhoneNumberValue::from_string_with(
            Arc::clone(&self.plan),
            &input,
            country.as_ref().map(CountryCode::as_str),
        )
        .map_err(|err| {
            debug!("Rejected {:?}: {}", input, err);
            if err.is_unrecognizable() {
                ValidationFailure::NoMatch
            } else {
                ValidationFailure::Invalid
            }
        })?;

        let number_type = number.number_type();
        if !number_type.intersects(settings.allowed_types) {
            debug!(
                "Rejected {:?}: type {} is not one of {}",
                input, number_type, settings.allowed_types
            );
            return Err(ValidationFailure::NotAllowed);
        }
        Ok(number)
    }

    /// Shorthand for [`PhoneNumberValidator::validate`] on a string.
    pub fn validate_str(
        &self,
        value: &str,
        context: Option<&Map<String, Value>>,
    ) -> std::result::Result<PhoneNumberValue<P>, ValidationFailure> {
        self.validate(&Value::String(value.to_owned()), context)
    }

    pub fn is_valid(&self, value: &Value, context: Option<&Map<String, Value>>) -> bool {
        self.validate(value, context).is_ok()
    }

    fn effective_country(
        settings: &ValidatorSettings,
        context: Option<&Map<String, Value>>,
    ) -> Option<CountryCode> {
        let from_context = settings
            .country_context
            .as_deref()
            .zip(context)
            .and_then(|(key, context)| context.get(key))
            .and_then(Value::as_str)
            .filter(|country| !country.is_empty())
            .and_then(CountryCode::try_from_string);
        from_context.or(settings.country)
    }
}
