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

/// Short-number description of one region. Patterns are matched against
/// the national significant number and must consume all of it.
#[derive(Debug)]
pub(crate) struct ShortNumberDesc {
    pub region: &'static str,
    pub calling_code: u16,
    /// Every number dialable as a short number, emergency numbers included.
    pub short_code: &'static str,
    pub emergency: &'static str,
}

/// A region whose short codes are its emergency numbers plus `also`.
macro_rules! emergency_services {
    ($region:literal, $calling_code:literal, $emergency:literal, also: $other:literal) => {
        ShortNumberDesc {
            region: $region,
            calling_code: $calling_code,
            short_code: concat!($emergency, "|", $other),
            emergency: $emergency,
        }
    };
}

static SHORT_NUMBER_METADATA: &[ShortNumberDesc] = &[
    emergency_services!("AD", 376, r"11[0268]", also: r"1(?:16\d{3}|8\d{2})"),
    emergency_services!("AE", 971, r"112|99[789]", also: r"1\d{2,3}"),
    emergency_services!("AL", 355, r"112|12[789]", also: r"116\d{3}"),
    emergency_services!("AR", 54, r"10[017]|911", also: r"1(?:0[0-9]|1[0-9]|2[0-9])"),
    emergency_services!("AT", 43, r"1(?:[12]2|33|44)", also: r"1(?:16\d{3}|18\d{3}|4[0-2])"),
    ShortNumberDesc {
        region: "AU",
        calling_code: 61,
        short_code: r"000|1(?:06|12|2(?:2[0-9]|58885)|3\d{4}|9\d{3,4})",
        emergency: r"000|1(?:06|12)",
    },
    emergency_services!("BA", 387, r"112|12[2-4]", also: r"1(?:16\d{3}|8\d{2})"),
    emergency_services!("BE", 32, r"1(?:0[01]|12)", also: r"1(?:16\d{3}|[2-9]\d{2})"),
    emergency_services!("BG", 359, r"1(?:12|50|6[06])", also: r"116\d{3}"),
    ShortNumberDesc {
        region: "BR",
        calling_code: 55,
        short_code: r"1(?:0[0-9]|12|28|3[2-6]|5[0-9]|6[1-9]|8[0-9]|9[0-9])",
        emergency: r"1(?:12|28|9[023])",
    },
    emergency_services!("BY", 375, r"1(?:0[1-3]|12)", also: r"1(?:0[4-9]|[5-9]\d)"),
    ShortNumberDesc {
        region: "CA",
        calling_code: 1,
        short_code: r"112|[2-9]11|[2-9]\d{4,5}",
        emergency: r"112|911",
    },
    ShortNumberDesc {
        region: "CH",
        calling_code: 41,
        short_code: r"1(?:1[2-8]|4[0-57]|4(?:14|15)|5[0-4]|6(?:1|0\d\d))",
        emergency: r"1(?:1[278]|44)",
    },
    emergency_services!("CL", 56, r"13[123]|911", also: r"1(?:3[4-9]|4\d)\d?"),
    emergency_services!("CN", 86, r"11[09]|12[02]", also: r"1(?:[0-2]\d{2}|[0-2]\d{3})"),
    emergency_services!("CO", 57, r"1(?:1[29]|23|32|56)", also: r"1(?:[0-9]\d)"),
    emergency_services!("CY", 357, r"112|199", also: r"116\d{3}|1(?:4\d{2}|8\d{2})"),
    emergency_services!("CZ", 420, r"1(?:12|5[0568])", also: r"116\d{3}|1180\d{2}"),
    ShortNumberDesc {
        region: "DE",
        calling_code: 49,
        short_code: r"11(?:[025]|6\d{3}|8\d{1,3})",
        emergency: r"11[02]",
    },
    emergency_services!("DK", 45, r"112", also: r"1(?:1[46]\d{3}|8\d{2})"),
    emergency_services!("EE", 372, r"11[02]", also: r"116\d{3}|1(?:2\d{2}|3\d{2})"),
    emergency_services!("EG", 20, r"1(?:2[23]|80)", also: r"1(?:[0-9]\d{2,3})"),
    ShortNumberDesc {
        region: "ES",
        calling_code: 34,
        short_code: r"0(?:6[12]|8[0-2]|9[12])|1(?:1[0-26]|16\d{3}|[2-9]\d{2})",
        emergency: r"0(?:6[12]|8[0-2]|9[12])|112",
    },
    emergency_services!("FI", 358, r"112", also: r"116\d{3}|1[2-9]\d{2}"),
    ShortNumberDesc {
        region: "FR",
        calling_code: 33,
        short_code: r"1(?:0\d{2}|1(?:[02459]|6\d{3}|8\d{2})|[578])|3\d{3}",
        emergency: r"1(?:1[259]|[578])",
    },
    ShortNumberDesc {
        region: "GB",
        calling_code: 44,
        short_code: r"1(?:0[01]|1(?:[1-58]|6\d{3})|23|4[17]|55|800\d|95)|999",
        emergency: r"112|999",
    },
    emergency_services!("GG", 44, r"112|999", also: r"1(?:0[01]|1[18]\d{3}|23)"),
    emergency_services!("GI", 350, r"112|999", also: r"1(?:0\d|16\d{3}|23)"),
    emergency_services!("GR", 30, r"1(?:00|12|66|99)", also: r"1(?:0[0-9]|16\d{3}|8\d{2})"),
    emergency_services!("HK", 852, r"112|99[29]", also: r"1(?:0[0-9]|8\d{1,4})"),
    emergency_services!("HR", 385, r"1(?:12|9[2-4])", also: r"116\d{3}|1(?:0\d{2}|8\d{2})"),
    emergency_services!("HU", 36, r"1(?:0[457]|12)", also: r"116\d{3}|1(?:[2-9]\d{2})"),
    emergency_services!("ID", 62, r"11[02589]", also: r"1(?:[0-9]\d{2,3})"),
    ShortNumberDesc {
        region: "IE",
        calling_code: 353,
        short_code: r"112|999|116\d{3}|5\d{4}",
        emergency: r"112|999",
    },
    emergency_services!("IL", 972, r"1(?:0[0-2]|12)", also: r"1(?:0[3-9]|[2-9]\d{2,3})"),
    emergency_services!("IM", 44, r"112|999", also: r"1(?:1[18]\d{3}|23)"),
    ShortNumberDesc {
        region: "IN",
        calling_code: 91,
        short_code: r"1(?:0[0-28]|12|\d{3,4})",
        emergency: r"1(?:0[0-28]|12)",
    },
    emergency_services!("IS", 354, r"112", also: r"1(?:1[1-9]|[2-9]\d{2,3})"),
    ShortNumberDesc {
        region: "IT",
        calling_code: 39,
        short_code: r"1(?:1(?:[2358]|6\d{3})|4\d{2,3}|9\d)",
        emergency: r"11[2358]",
    },
    emergency_services!("JE", 44, r"112|999", also: r"1(?:1[18]\d{3}|23)"),
    ShortNumberDesc {
        region: "JP",
        calling_code: 81,
        short_code: r"1(?:1[09]|7[1-9]|8[4-9])",
        emergency: r"11[09]",
    },
    emergency_services!("KE", 254, r"112|999", also: r"1(?:0[0-9]|[1-9]\d{2})"),
    emergency_services!("KR", 82, r"11[29]", also: r"1(?:[013-9]\d|2[0-8])"),
    emergency_services!("KZ", 7, r"1(?:0[1-4]|12)", also: r"1(?:0[5-9]|[1-9]\d{2})"),
    emergency_services!("LI", 423, r"1(?:1[278]|44)", also: r"1(?:16\d{3}|4[0-3])"),
    emergency_services!(
        "LT",
        370,
        r"0(?:11?|22?|33?)|1(?:0[1-3]|12)",
        also: r"116\d{3}|1(?:[5-9]\d{2})"
    ),
    emergency_services!("LU", 352, r"11[23]", also: r"116\d{3}|12\d{3}"),
    emergency_services!("LV", 371, r"0[1-3]|11[023]", also: r"116\d{3}|1(?:[2-9]\d{2})"),
    emergency_services!("MC", 377, r"1(?:12|[578])", also: r"1(?:16\d{3}|41)"),
    emergency_services!("MD", 373, r"112|90[123]", also: r"116\d{3}|1(?:[0-9]\d{2})"),
    emergency_services!("ME", 382, r"112|12[234]", also: r"1(?:16\d{3}|8\d{2})"),
    emergency_services!("MK", 389, r"112|19[234]", also: r"1(?:16\d{3}|8\d{2})"),
    emergency_services!("MT", 356, r"112", also: r"116\d{3}|1(?:[2-9]\d{2})"),
    ShortNumberDesc {
        region: "MX",
        calling_code: 52,
        short_code: r"0(?:6[0-6])|911|[2-9]\d{3,4}",
        emergency: r"06[0-6]|911",
    },
    emergency_services!("MY", 60, r"112|999", also: r"1(?:0[0-9]\d|3\d{3})"),
    emergency_services!("NG", 234, r"112|199", also: r"1(?:[0-9]\d{2})"),
    ShortNumberDesc {
        region: "NL",
        calling_code: 31,
        short_code: r"112|911|1(?:4\d{3}|8\d{2,4})",
        emergency: r"112|911",
    },
    emergency_services!("NO", 47, r"11[023]", also: r"116\d{3}|1(?:[2-9]\d{2,3})"),
    ShortNumberDesc {
        region: "NZ",
        calling_code: 64,
        short_code: r"111|1\d{2,3}",
        emergency: r"111",
    },
    emergency_services!("PH", 63, r"112|911", also: r"1(?:[0-9]\d{2,3})"),
    emergency_services!("PK", 92, r"1(?:1[25]|22|5)", also: r"1(?:[0-9]\d{2,3})"),
    emergency_services!("PL", 48, r"112|99[789]", also: r"116\d{3}|1(?:9\d{2})"),
    emergency_services!("PT", 351, r"112", also: r"116\d{3}|1(?:[0-9]\d{2})"),
    emergency_services!("RO", 40, r"112", also: r"116\d{3}|1(?:[2-9]\d{2})"),
    emergency_services!("RS", 381, r"112|19[234]", also: r"1(?:16\d{3}|8\d{2})"),
    ShortNumberDesc {
        region: "RU",
        calling_code: 7,
        short_code: r"0[1-4]|1(?:0[1-4]|12|\d{2,3})",
        emergency: r"0[1-4]|1(?:0[1-4]|12)",
    },
    emergency_services!("SA", 966, r"112|9(?:11|9[79])", also: r"9(?:0[0-9]|3[0-9])"),
    emergency_services!("SE", 46, r"112|90000", also: r"116\d{3}|1(?:1[3-7]\d{2,3}|77)"),
    emergency_services!("SG", 65, r"99[359]", also: r"1(?:[0-9]\d{2,3})"),
    emergency_services!("SI", 386, r"11[23]", also: r"116\d{3}|1(?:[0-9]\d{2})"),
    emergency_services!("SK", 421, r"1(?:12|5[058])", also: r"116\d{3}|1(?:8\d{2})"),
    emergency_services!("SM", 378, r"11[2358]", also: r"116\d{3}"),
    emergency_services!("TH", 66, r"1(?:1(?:55|9[1-3])|669)", also: r"1(?:[0-9]\d{2,3})"),
    emergency_services!("TR", 90, r"1(?:1[02]|55)", also: r"1(?:[0-9]\d{2})"),
    emergency_services!("UA", 380, r"1(?:0[123]|12)", also: r"1(?:[0-9]\d{2})"),
    ShortNumberDesc {
        region: "US",
        calling_code: 1,
        short_code: r"112|[2-9]11|9(?:33|88)|[2-9]\d{4,5}",
        emergency: r"112|911",
    },
    emergency_services!("ZA", 27, r"10(?:111|177)|112", also: r"1(?:[0-9]\d{2,3})"),
];

pub(crate) fn for_region(region: &str) -> Option<&'static ShortNumberDesc> {
    SHORT_NUMBER_METADATA.iter().find(|desc| desc.region == region)
}

pub(crate) fn for_calling_code(
    calling_code: u16,
) -> impl Iterator<Item = &'static ShortNumberDesc> {
    SHORT_NUMBER_METADATA
        .iter()
        .filter(move |desc| desc.calling_code == calling_code)
}
