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

//! Recognition, validation and normalization of user supplied phone numbers.
//!
//! ```no_run
//! use rphonenumber_i18n::PhoneNumberValue;
//!
//! let number = PhoneNumberValue::from_string("01234 567 890", Some("GB")).unwrap();
//! assert_eq!(number.to_e164(), "+441234567890");
//! ```

mod interfaces;
mod engine;
mod phonenumbervalue;
mod country_code;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub mod config;
pub mod validator;
pub mod formatter;
pub(crate) mod string_util;

/// I decided to create this module because there are many
/// boilerplate places in the code that can be replaced with macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use country_code::{CountryCode, CountryInput};
pub use engine::LibPhoneNumberPlan;
pub use interfaces::NumberingPlan;
pub use phonenumbervalue::{
    InvalidArgumentError, NumberCategory, NumberTypes, ParseFailure, PhoneNumberError,
    PhoneNumberFormat, PhoneNumberValue, Result,
};
pub use config::Configuration;
pub use validator::{PhoneNumberValidator, ValidationFailure, ValidatorOptions};
pub use formatter::{
    filters::{PhoneNumberFilter, ToE164, ToInternationalPhoneNumber, ToNationalPhoneNumber},
    PhoneNumberFormatter,
};
