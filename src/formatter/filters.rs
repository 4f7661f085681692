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

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::{
    country_code::CountryCode,
    interfaces::NumberingPlan,
    macros::rendering_filter,
    phonenumbervalue::PhoneNumberValue,
    string_util,
};

/// Normalizes submitted values.
pub trait PhoneNumberFilter {
    /// Returns the rendered number, or `value` itself when it does not
    /// resolve to a phone number.
    fn filter(&self, value: Value) -> Value;
}

/// State shared by every filter.
pub(crate) struct FilterBase<P: NumberingPlan> {
    plan: Arc<P>,
    country_code: CountryCode,
}

impl<P: NumberingPlan> FilterBase<P> {
    pub(crate) fn new(plan: Arc<P>, country_code: CountryCode) -> Self {
        Self { plan, country_code }
    }

    pub(crate) fn country_code(&self) -> CountryCode {
        self.country_code
    }

    pub(crate) fn resolve(&self, value: &Value) -> Option<PhoneNumberValue<P>> {
        let input = string_util::scalar_to_string(value).filter(|input| !input.is_empty())?;
        PhoneNumberValue::from_string_with(
            Arc::clone(&self.plan),
            &input,
            Some(self.country_code.as_str()),
        )
        .map_err(|err| debug!("Leaving {:?} unfiltered: {}", input, err))
        .ok()
    }
}

rendering_filter! {
    /// Renders numbers in E.164 form, `+441234567890`.
    ToE164 => to_e164
}

rendering_filter! {
    /// Renders numbers in the national form of their region.
    ToNationalPhoneNumber => to_national
}

rendering_filter! {
    /// Renders numbers in human readable international form.
    ToInternationalPhoneNumber => to_international
}
