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

use std::{fmt, ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign}};

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Defines the textual renderings a phone number can be formatted into.
///
/// For example, the Google Switzerland office number would be:
/// - **E164**: `+41446681800`
/// - **International**: `+41 44 668 1800`
/// - **National**: `044 668 1800`
/// - **RFC3966**: `tel:+41-44-668-1800`
/// - **OutOfCountry("US")**: `011 41 44 668 1800`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat<'a> {
    /// **E.164 format.**
    /// Always starts with `+` followed by the country code, no separators.
    E164,
    /// **International format.**
    /// Country code plus the national grouping, as recommended for display.
    International,
    /// **National format.**
    /// The form used when dialing within the number's own country, including
    /// any national prefix (like '0').
    National,
    /// **RFC3966 format.**
    /// `tel:` URI with hyphen separators.
    RFC3966,
    /// **Out-of-country format.**
    /// How the number is dialed from the given region: the national form when
    /// both share a calling code, otherwise that region's international
    /// dialing prefix followed by the international form.
    OutOfCountry(&'a str),
}

/// Numbering-plan category reported by the engine for a full number.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberCategory {
    FixedLine,
    Mobile,
    /// Used in regions (e.g. the USA) where fixed-line and mobile numbers
    /// cannot be told apart by looking at the number itself.
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    VoIP,
    PersonalNumber,
    Pager,
    UAN,
    Emergency,
    VoiceMail,
    ShortCode,
    StandardRate,
    Unknown,
}

impl NumberCategory {
    /// Maps the category onto the type bitmask. Ambiguous categories set
    /// every bit they may stand for.
    pub fn types(self) -> NumberTypes {
        match self {
            NumberCategory::FixedLine => NumberTypes::FIXED,
            NumberCategory::Mobile => NumberTypes::MOBILE,
            NumberCategory::FixedLineOrMobile => NumberTypes::FIXED | NumberTypes::MOBILE,
            NumberCategory::TollFree => NumberTypes::TOLL_FREE,
            NumberCategory::PremiumRate => NumberTypes::PREMIUM_RATE,
            NumberCategory::SharedCost => NumberTypes::SHARED_COST,
            NumberCategory::VoIP => NumberTypes::VOIP,
            NumberCategory::PersonalNumber => NumberTypes::PERSONAL,
            NumberCategory::Pager => NumberTypes::PAGER,
            NumberCategory::UAN => NumberTypes::UAN,
            NumberCategory::Emergency => NumberTypes::EMERGENCY,
            NumberCategory::VoiceMail => NumberTypes::VOICEMAIL,
            NumberCategory::ShortCode => NumberTypes::SHORT_CODE,
            NumberCategory::StandardRate => NumberTypes::STANDARD_RATE,
            NumberCategory::Unknown => NumberTypes::UNKNOWN,
        }
    }
}

/// Bitmask over phone number categories.
///
/// Acceptance checks must intersect masks (`types.intersects(allowed)`),
/// never compare them, since a single number may carry several bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberTypes(u32);

impl NumberTypes {
    pub const NONE: Self = Self(0);
    pub const FIXED: Self = Self(1);
    pub const MOBILE: Self = Self(1 << 1);
    pub const TOLL_FREE: Self = Self(1 << 2);
    pub const PREMIUM_RATE: Self = Self(1 << 3);
    pub const SHARED_COST: Self = Self(1 << 4);
    pub const VOIP: Self = Self(1 << 5);
    pub const PERSONAL: Self = Self(1 << 6);
    pub const PAGER: Self = Self(1 << 7);
    pub const UAN: Self = Self(1 << 8);
    pub const EMERGENCY: Self = Self(1 << 9);
    pub const VOICEMAIL: Self = Self(1 << 10);
    pub const SHORT_CODE: Self = Self(1 << 11);
    pub const STANDARD_RATE: Self = Self(1 << 12);
    pub const UNKNOWN: Self = Self(1 << 13);

    /// Every named category.
    pub const KNOWN: Self = Self((1 << 13) - 1);
    pub const ANY: Self = Self(Self::KNOWN.0 | Self::UNKNOWN.0);
    /// Default acceptable set when collecting contact numbers.
    pub const RECOMMENDED: Self = Self(Self::FIXED.0 | Self::MOBILE.0 | Self::VOIP.0);

    const NAMES: [(Self, &'static str); 14] = [
        (Self::FIXED, "FIXED"),
        (Self::MOBILE, "MOBILE"),
        (Self::TOLL_FREE, "TOLL_FREE"),
        (Self::PREMIUM_RATE, "PREMIUM_RATE"),
        (Self::SHARED_COST, "SHARED_COST"),
        (Self::VOIP, "VOIP"),
        (Self::PERSONAL, "PERSONAL"),
        (Self::PAGER, "PAGER"),
        (Self::UAN, "UAN"),
        (Self::EMERGENCY, "EMERGENCY"),
        (Self::VOICEMAIL, "VOICEMAIL"),
        (Self::SHORT_CODE, "SHORT_CODE"),
        (Self::STANDARD_RATE, "STANDARD_RATE"),
        (Self::UNKNOWN, "UNKNOWN"),
    ];

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `None` when `bits` sets anything outside [`NumberTypes::ANY`].
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !Self::ANY.0 != 0 {
            None
        } else {
            Some(Self(bits))
        }
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether `self` and `other` share at least one bit.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for NumberTypes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for NumberTypes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for NumberTypes {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for NumberTypes {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl fmt::Display for NumberTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for NumberTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumberTypes({})", self)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{NumberCategory, NumberTypes};

    #[test]
    fn composite_masks() {
        assert_eq!(NumberTypes::KNOWN.bits(), 8191);
        assert_eq!(NumberTypes::ANY.bits(), 16383);
        assert_eq!(NumberTypes::RECOMMENDED.bits(), 1 | 2 | 32);
        assert!(!NumberTypes::KNOWN.intersects(NumberTypes::UNKNOWN));
        assert!(NumberTypes::ANY.contains(NumberTypes::UNKNOWN));
    }

    #[test]
    fn from_bits_rejects_undefined_bits() {
        assert_eq!(NumberTypes::from_bits(512), Some(NumberTypes::EMERGENCY));
        assert_eq!(NumberTypes::from_bits(1 << 14), None);
    }

    #[test]
    fn every_category_maps_inside_any() {
        for category in NumberCategory::iter() {
            let types = category.types();
            assert!(!types.is_empty(), "{:?} has no bits", category);
            assert!(NumberTypes::ANY.contains(types));
        }
        assert_eq!(
            NumberCategory::FixedLineOrMobile.types(),
            NumberTypes::FIXED | NumberTypes::MOBILE
        );
        assert!(NumberCategory::FixedLineOrMobile.types().intersects(NumberTypes::RECOMMENDED));
    }

    #[test]
    fn display_lists_flag_names() {
        assert_eq!(NumberTypes::RECOMMENDED.to_string(), "FIXED | MOBILE | VOIP");
        assert_eq!(NumberTypes::NONE.to_string(), "NONE");
    }
}
