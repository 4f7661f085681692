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

use std::fmt::Debug;

use crate::phonenumbervalue::{NumberCategory, ParseFailure, PhoneNumberFormat};

/// Numbering-plan engine: the parse, validity, classification and
/// formatting primitives every policy in this crate is built on.
///
/// The engine owns the jurisdictional rules; this crate only decides how to
/// combine its answers. Implementations must be safe to share between
/// threads and must not change their answers over the life of the process.
pub trait NumberingPlan: Send + Sync {
    /// Structured number produced by [`NumberingPlan::parse`].
    type Number: Clone + Debug + Send + Sync;

    /// Parses raw user input. `region_hint` is used as the default region
    /// when the input carries no international dialing code.
    fn parse(&self, raw: &str, region_hint: Option<&str>) -> Result<Self::Number, ParseFailure>;

    /// The country calling code of a parsed number, `None` when it has none.
    fn calling_code(&self, number: &Self::Number) -> Option<u16>;

    /// The main region for a country calling code, `None` when unknown.
    fn region_for_calling_code(&self, calling_code: u16) -> Option<String>;

    fn is_valid_short_number_for_region(&self, number: &Self::Number, region: &str) -> bool;

    fn is_valid_short_number(&self, number: &Self::Number) -> bool;

    fn is_valid_number_for_region(&self, number: &Self::Number, region: &str) -> bool;

    fn is_valid_number(&self, number: &Self::Number) -> bool;

    /// Numbering-plan category of a full (non-short) number.
    fn classify(&self, number: &Self::Number) -> NumberCategory;

    /// Whether `number`, a dialable string such as a national rendering,
    /// exactly matches an emergency number of `region`.
    fn is_emergency_number(&self, number: &str, region: &str) -> bool;

    fn format(&self, number: &Self::Number, format: PhoneNumberFormat<'_>) -> String;
}

/// Internal pattern matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only
    /// decimal digits) matches `pattern`. An empty pattern never matches.
    fn match_national_number(&self, number: &str, pattern: &str, allow_prefix_match: bool) -> bool;
}
