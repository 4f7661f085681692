use serde_json::json;
use serial_test::serial;

use super::{fake_plan::FakePlan, init_logger, region_code::RegionCode};
use crate::{
    i18n::{default_locale, set_default_locale},
    Configuration, CountryCode, PhoneNumberFilter, PhoneNumberFormatter, PhoneNumberValue,
    ToE164, ToInternationalPhoneNumber, ToNationalPhoneNumber,
};

fn country(code: &str) -> CountryCode {
    CountryCode::from_code(code).unwrap()
}

fn formatter(default_country: &str) -> PhoneNumberFormatter<FakePlan> {
    init_logger();
    PhoneNumberFormatter::with_plan(FakePlan::shared(), country(default_country))
}

#[test]
fn unresolvable_input_is_returned_unchanged() {
    let formatter = formatter(RegionCode::gb());
    assert_eq!(formatter.to_e164("Foo", None), "Foo");
    assert_eq!(formatter.to_national("Foo", Some(RegionCode::us())), "Foo");
    assert_eq!(formatter.to_international("Foo", None), "Foo");
    assert_eq!(formatter.to_rfc3966("Foo", None), "Foo");
    assert_eq!(formatter.to_number_dialed_from("Foo", RegionCode::fr(), None), "Foo");
    // parses, but is not valid for the default country
    assert_eq!(formatter.to_e164("01392 234 567", None), "01392 234 567");
    assert_eq!(formatter.to_e164("", None), "");
}

#[test]
fn default_country_is_the_region_hint() {
    let formatter = formatter(RegionCode::gb());
    assert_eq!(formatter.default_country().as_str(), RegionCode::gb());
    assert_eq!(formatter.to_e164("01234 567 890", None), "+441234567890");
    assert_eq!(formatter.to_international("01234 567 890", None), "+44 1234567890");
    assert_eq!(formatter.to_rfc3966("01234 567 890", None), "tel:+44-1234567890");
}

#[test]
fn per_call_country_overrides_default() {
    let formatter = formatter(RegionCode::us());
    assert_eq!(formatter.to_e164("01234 567 890", Some(RegionCode::gb())), "+441234567890");
    assert_eq!(formatter.to_e164("01234 567 890", Some("en_GB")), "+441234567890");
    assert_eq!(formatter.to_national("+44 1234 567 890", Some(RegionCode::us())), "01234567890");
}

#[test]
fn unresolvable_per_call_country_uses_default() {
    let formatter = formatter(RegionCode::us());
    assert_eq!(formatter.to_e164("2015550123", Some("Narnia")), "+12015550123");
    assert_eq!(formatter.to_e164("2015550123", Some("")), "+12015550123");
}

#[test]
fn dialed_from_another_country() {
    let formatter = formatter(RegionCode::gb());
    assert_eq!(
        formatter.to_number_dialed_from("+44 1234 567 890", RegionCode::gb(), None),
        "01234567890"
    );
    assert_eq!(
        formatter.to_number_dialed_from("+44 1234 567 890", "fr_FR", None),
        "00 44 1234567890"
    );
}

#[test]
fn formatting_twice_changes_nothing() {
    let formatter = formatter(RegionCode::gb());
    let once = formatter.to_e164("01234 567 890", None);
    assert_eq!(formatter.to_e164(&once, None), once);
    let national = formatter.to_national("+441234567890", None);
    assert_eq!(formatter.to_national(&national, None), national);
}

#[test]
fn filters_render_resolvable_scalars() {
    init_logger();
    let gb = country(RegionCode::gb());
    let to_e164 = ToE164::with_plan(FakePlan::shared(), gb);
    let to_national = ToNationalPhoneNumber::with_plan(FakePlan::shared(), gb);
    let to_international = ToInternationalPhoneNumber::with_plan(FakePlan::shared(), gb);

    assert_eq!(to_e164.country_code(), gb);
    assert_eq!(to_e164.filter(json!("01234 567 890")), json!("+441234567890"));
    assert_eq!(to_national.filter(json!("+441234567890")), json!("01234567890"));
    assert_eq!(to_international.filter(json!("01234 567 890")), json!("+44 1234567890"));
    assert_eq!(to_e164.filter(json!(1234567890)), json!("+441234567890"));
}

#[test]
fn filters_leave_everything_else_alone() {
    init_logger();
    let to_e164 = ToE164::with_plan(FakePlan::shared(), country(RegionCode::gb()));
    for value in [
        json!("Foo"),
        json!(""),
        json!(false),
        json!(null),
        json!(["01234 567 890"]),
        json!({"number": "01234 567 890"}),
        json!("01392 234 567 890"),
    ] {
        assert_eq!(to_e164.filter(value.clone()), value);
    }
}

#[test]
fn filters_render_resolved_values() {
    init_logger();
    let number =
        PhoneNumberValue::from_string_with(FakePlan::shared(), "+33 1 23 45 67 89", None).unwrap();
    let to_national =
        ToNationalPhoneNumber::with_plan(FakePlan::shared(), country(RegionCode::gb()));
    assert_eq!(to_national.filter_number(&number), "0123456789");
}

#[test]
fn default_engine_formatter_from_configuration() {
    let config = Configuration::from_json_str(r#"{"default-country-code": "de_DE"}"#).unwrap();
    let formatter = PhoneNumberFormatter::from_configuration(&config).unwrap();
    assert_eq!(formatter.default_country().as_str(), RegionCode::de());
    assert_eq!(formatter.to_e164("Foo", None), "Foo");

    let to_e164 = ToE164::from_configuration(&config).unwrap();
    assert_eq!(to_e164.country_code().as_str(), RegionCode::de());
}

#[test]
#[serial]
fn empty_configuration_uses_default_locale() {
    let previous = default_locale();
    set_default_locale("en_CA");
    let formatter = PhoneNumberFormatter::from_configuration(&Configuration::default());
    set_default_locale(previous);
    assert_eq!(formatter.unwrap().default_country().as_str(), RegionCode::ca());
}
