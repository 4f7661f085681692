//! The policy layer on top of the default engine.

use super::{init_logger, region_code::RegionCode};
use crate::{
    CountryCode, NumberTypes, PhoneNumberError, PhoneNumberFormatter, PhoneNumberValidator,
    PhoneNumberValue, ValidationFailure,
};

fn resolve(number: &str, country: Option<&str>) -> crate::Result<PhoneNumberValue> {
    init_logger();
    PhoneNumberValue::from_string(number, country)
}

#[test]
fn gb_national_number() {
    let number = resolve("01234 567 890", Some(RegionCode::gb())).unwrap();
    assert_eq!(number.to_e164(), "+441234567890");
    assert_eq!(number.region_code(), RegionCode::gb());
    assert!(!number.is_short_number());
}

#[test]
fn dialing_code_overrides_hint() {
    let number = resolve("+44 1234 567 890", Some(RegionCode::us())).unwrap();
    assert_eq!(number.region_code(), RegionCode::gb());
    assert_eq!(number.to_e164(), "+441234567890");
}

#[test]
fn hint_national_prefix_is_not_stripped_from_international_input() {
    // "8" is the Russian trunk prefix
    let number = resolve("+44 800 123 4567", Some("RU")).unwrap();
    assert_eq!(number.region_code(), RegionCode::gb());
    assert_eq!(number.to_e164(), "+448001234567");
    assert_eq!(number.number_type(), NumberTypes::TOLL_FREE);

    let number = resolve("+44 1234 567 890", Some(RegionCode::ca())).unwrap();
    assert_eq!(number.to_e164(), "+441234567890");
}

#[test]
fn national_number_without_hint() {
    assert!(resolve("01392 234 567", None).unwrap_err().is_unrecognizable());
}

#[test]
fn national_number_for_wrong_region() {
    assert!(matches!(
        resolve("01392 234 567", Some(RegionCode::us())),
        Err(PhoneNumberError::InvalidPhoneNumber { region: Some(region), .. }) if region == "US"
    ));
}

#[test]
fn garbage() {
    assert!(resolve("muppets", Some(RegionCode::gb())).unwrap_err().is_unrecognizable());
    assert!(resolve("", Some(RegionCode::gb())).unwrap_err().is_unrecognizable());
}

#[test]
fn us_renderings() {
    let number = resolve("2015550123", Some(RegionCode::us())).unwrap();
    assert_eq!(number.to_e164(), "+12015550123");
    assert_eq!(number.to_national(), "(201) 555-0123");
    assert_eq!(number.to_international(), "+1 201-555-0123");
    assert_eq!(number.to_string(), "+12015550123");

    // NANPA regions dial one another with the trunk code, the home region too
    assert_eq!(number.to_number_dialed_from(RegionCode::us()), "1 (201) 555-0123");
    assert_eq!(number.to_number_dialed_from(RegionCode::ca()), "1 (201) 555-0123");
    assert_eq!(number.to_number_dialed_from(RegionCode::gb()), "00 1 201-555-0123");
}

#[test]
fn gb_mobile() {
    let number = resolve("+447843567890", None).unwrap();
    assert_eq!(number.region_code(), RegionCode::gb());
    assert_eq!(number.to_national(), "07843 567890");
    assert_eq!(number.to_international(), "+44 7843 567890");
    assert_eq!(number.to_rfc3966(), "tel:+44-7843-567890");
    assert_eq!(number.number_type(), NumberTypes::MOBILE);
}

#[test]
fn us_emergency_number() {
    let number = resolve("911", Some(RegionCode::us())).unwrap();
    assert!(number.is_short_number());
    assert_eq!(number.number_type(), NumberTypes::EMERGENCY);
    assert!(!number.to_string().starts_with('+'));
}

#[test]
fn international_dialing_prefixes_follow_the_calling_region() {
    let number = resolve("+44 1234 567 890", None).unwrap();
    let international = number.to_international();
    let digits = international.trim_start_matches('+');
    for (region, prefix) in [
        ("KE", "000"),
        ("AU", "0011"),
        ("CC", "0011"),
        (RegionCode::us(), "011"),
    ] {
        assert_eq!(number.to_number_dialed_from(region), format!("{} {}", prefix, digits));
    }
}

#[test]
fn european_emergency_number() {
    for region in ["PL", "SE", "AT", "PT", "GR"] {
        let number = resolve("112", Some(region)).unwrap();
        assert_eq!(number.region_code(), region);
        assert!(number.is_short_number(), "{}", region);
        assert_eq!(number.number_type(), NumberTypes::EMERGENCY, "{}", region);
    }
}

#[test]
fn validator_restricts_types() {
    init_logger();
    let validator = PhoneNumberValidator::new();
    validator.set_country(RegionCode::us()).unwrap();

    validator.set_allowed_types(NumberTypes::EMERGENCY).unwrap();
    assert!(validator.validate_str("911", None).is_ok());

    validator.set_allowed_types(NumberTypes::FIXED).unwrap();
    assert_eq!(validator.validate_str("911", None).unwrap_err(), ValidationFailure::NotAllowed);
    assert_eq!(validator.validate_str("muppets", None).unwrap_err(), ValidationFailure::NoMatch);

    validator.set_country("PL").unwrap();
    validator.set_allowed_types(NumberTypes::EMERGENCY).unwrap();
    assert!(validator.validate_str("112", None).is_ok());
}

#[test]
fn formatter_never_fails() {
    init_logger();
    let formatter = PhoneNumberFormatter::new(CountryCode::from_code(RegionCode::gb()).unwrap());
    assert_eq!(formatter.to_e164("Foo", None), "Foo");
    assert_eq!(formatter.to_e164("01234 567 890", None), "+441234567890");
    assert_eq!(formatter.to_e164("2015550123", Some(RegionCode::us())), "+12015550123");
}
