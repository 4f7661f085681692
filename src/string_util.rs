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

use serde_json::Value;

/// Plus signs accepted in front of an international number.
const PLUS_CHARS: [char; 2] = ['+', '\u{FF0B}'];

/// Strips the leading `+` and calling code from an E.164 string, leaving the
/// national significant number. Input without that prefix is returned as is.
pub fn strip_calling_code(e164: &str, calling_code: u16) -> &str {
    let mut buffer = itoa::Buffer::new();
    let prefix = buffer.format(calling_code);
    e164.strip_prefix('+')
        .and_then(|rest| rest.strip_prefix(prefix))
        .unwrap_or(e164)
}

pub fn starts_with_plus(s: &str) -> bool {
    s.trim_start().starts_with(PLUS_CHARS)
}

/// Keeps only the decimal digits of `s`, converted to ASCII.
pub fn ascii_digits(s: &str) -> String {
    s.chars()
        .filter_map(|c| c.to_digit(10).or_else(|| unicode_decimal(c)))
        .filter_map(|digit| char::from_digit(digit, 10))
        .collect()
}

/// Fullwidth and Arabic-Indic digits, which users paste more often than
/// any other non-ASCII digits.
fn unicode_decimal(c: char) -> Option<u32> {
    let code = c as u32;
    [0xFF10, 0x0660, 0x06F0]
        .into_iter()
        .find(|zero| (*zero..*zero + 10).contains(&code))
        .map(|zero| code - zero)
}

/// Reads a scalar the way a submitted form field would hold it. `None` for
/// null, arrays and objects.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match n.as_f64() {
            // integral floats print without a fraction, 2015550123.0 as 2015550123
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{:.0}", f),
            _ => n.to_string(),
        }),
        Value::Bool(true) => Some("1".to_owned()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
