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

//! ISO 3166-1 alpha-2 territories with their English display names.

use isocountry::CountryCode as IsoCountry;

/// User-assigned codes in common use that ISO 3166-1 does not list.
static EXTRA_TERRITORIES: &[(&str, &str)] = &[("XK", "Kosovo")];

/// Returns the English display name of a territory, or `None` when the code
/// does not denote a known territory. The lookup is case sensitive and
/// expects an uppercase code.
pub fn display_region(code: &str) -> Option<&'static str> {
    match IsoCountry::for_alpha2(code) {
        Ok(country) => Some(country.name()),
        Err(_) => EXTRA_TERRITORIES
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, name)| *name),
    }
}

pub fn is_known_territory(code: &str) -> bool {
    display_region(code).is_some()
}
