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

use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    country_code::CountryCode,
    phonenumbervalue::Result,
    validator::ValidatorOptions,
};

/// Key of the phone number section in an application configuration document.
pub const CONFIG_KEY: &str = "phone-number";

/// Component configuration shared by validators, filters and formatters.
///
/// ```json
/// { "phone-number": { "default-country-code": "GB", "acceptable-number-types": 35 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// 2-letter code or locale.
    pub default_country_code: Option<String>,
    /// Raw `NumberTypes` bits.
    #[serde(alias = "allowed-types")]
    pub acceptable_number_types: Option<u32>,
}

impl Configuration {
    /// Reads the component section on its own.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reads the section stored under [`CONFIG_KEY`] of an application
    /// document. A missing or null section is an empty configuration.
    pub fn from_application(document: &Value) -> serde_json::Result<Self> {
        match document.get(CONFIG_KEY) {
            None | Some(Value::Null) => {
                trace!("No {} section, using defaults", CONFIG_KEY);
                Ok(Self::default())
            }
            Some(section) => Self::deserialize(section),
        }
    }

    /// Detects the configured country, falling back to the default locale
    /// when none is configured.
    pub fn default_country_code(&self) -> Result<CountryCode> {
        CountryCode::detect_str(self.default_country_code.as_deref())
    }

    /// Validator options carrying the configured country and types as is.
    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            country: self.default_country_code.clone(),
            country_context: None,
            allowed_types: self.acceptable_number_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Configuration;

    #[test]
    fn reads_section_from_application_document() {
        let document = json!({
            "phone-number": {
                "default-country-code": "GB",
                "acceptable-number-types": 3
            },
            "unrelated": true
        });
        let config = Configuration::from_application(&document).unwrap();
        assert_eq!(config.default_country_code.as_deref(), Some("GB"));
        assert_eq!(config.acceptable_number_types, Some(3));
        assert_eq!(config.default_country_code().unwrap().as_str(), "GB");
    }

    #[test]
    fn missing_section_is_empty() {
        assert_eq!(
            Configuration::from_application(&json!({})).unwrap(),
            Configuration::default()
        );
        assert_eq!(
            Configuration::from_application(&json!({"phone-number": null})).unwrap(),
            Configuration::default()
        );
    }

    #[test]
    fn malformed_section_is_an_error() {
        assert!(Configuration::from_json_str(r#"{"default-country-code": 44}"#).is_err());
        assert!(Configuration::from_json_str(r#"{"allowed-types": 2}"#).is_ok());
    }

    #[test]
    fn validator_options_pass_values_through() {
        let config = Configuration::from_json_str(
            r#"{"default-country-code": "en_GB", "acceptable-number-types": 2}"#,
        )
        .unwrap();
        let options = config.validator_options();
        assert_eq!(options.country.as_deref(), Some("en_GB"));
        assert_eq!(options.allowed_types, Some(2));
    }
}
