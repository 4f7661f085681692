use super::{
    fake_plan::{FakeNumber, FakePlan},
    init_logger,
    region_code::RegionCode,
};
use crate::{NumberTypes, ParseFailure, PhoneNumberError, PhoneNumberValue, Result};

fn resolve(number: &str, country: Option<&str>) -> Result<PhoneNumberValue<FakePlan>> {
    init_logger();
    PhoneNumberValue::from_string_with(FakePlan::shared(), number, country)
}

#[test]
fn national_number_resolves_with_region_hint() {
    let number = resolve("01234 567 890", Some(RegionCode::gb())).unwrap();
    assert_eq!(number.to_e164(), "+441234567890");
    assert_eq!(number.region_code(), RegionCode::gb());
    assert!(!number.is_short_number());
    assert_eq!(
        number.number(),
        &FakeNumber {
            calling_code: Some(44),
            national: "1234567890".to_owned()
        }
    );
}

#[test]
fn national_number_without_hint_is_unrecognizable() {
    let err = resolve("01392 234 567", None).unwrap_err();
    assert!(err.is_unrecognizable());
    assert!(matches!(
        err,
        PhoneNumberError::UnrecognizableNumber {
            source: ParseFailure::Rejected(_),
            ..
        }
    ));
}

#[test]
fn empty_hint_counts_as_no_hint() {
    assert!(resolve("01234 567 890", Some("")).unwrap_err().is_unrecognizable());
}

#[test]
fn garbage_is_unrecognizable() {
    let err = resolve("muppets", Some(RegionCode::gb())).unwrap_err();
    assert_eq!(
        err,
        PhoneNumberError::UnrecognizableNumber {
            number: "muppets".to_owned(),
            source: ParseFailure::Rejected("NotANumber".to_owned()),
        }
    );
}

#[test]
fn number_invalid_for_hinted_region_reports_the_region() {
    let err = resolve("01392 234 567", Some(RegionCode::us())).unwrap_err();
    assert_eq!(
        err,
        PhoneNumberError::InvalidPhoneNumber {
            number: "01392 234 567".to_owned(),
            region: Some("US".to_owned()),
        }
    );
    assert!(err.to_string().contains("\"US\""));
}

#[test]
fn dialing_code_overrides_hint() {
    let number = resolve("+44 1234 567 890", Some(RegionCode::us())).unwrap();
    assert_eq!(number.region_code(), RegionCode::gb());
    assert_eq!(number.to_e164(), "+441234567890");
}

#[test]
fn unmapped_dialing_code_falls_back_to_hint() {
    let number = resolve("+888 1234 5678", Some(RegionCode::gb())).unwrap();
    assert_eq!(number.region_code(), RegionCode::gb());
    assert_eq!(number.number_type(), NumberTypes::VOIP);
}

#[test]
fn unmapped_dialing_code_without_hint_has_no_region() {
    assert_eq!(
        resolve("+888 1234 5678", None).unwrap_err(),
        PhoneNumberError::UndetectableRegion("+888 1234 5678".to_owned())
    );
}

#[test]
fn number_valid_elsewhere_keeps_effective_region() {
    // +1 416 belongs to CA, while calling code 1 maps to US
    let number = resolve("+1 416 555 0123", Some(RegionCode::ca())).unwrap();
    assert_eq!(number.region_code(), RegionCode::us());
    assert_eq!(number.to_e164(), "+14165550123");
}

#[test]
fn renderings() {
    let number = resolve("+447843567890", None).unwrap();
    assert_eq!(number.to_e164(), "+447843567890");
    assert_eq!(number.to_national(), "07843567890");
    assert_eq!(number.to_international(), "+44 7843567890");
    assert_eq!(number.to_rfc3966(), "tel:+44-7843567890");
    assert_eq!(number.to_number_dialed_from(RegionCode::gb()), "07843567890");
    assert_eq!(number.to_number_dialed_from(RegionCode::fr()), "00 44 7843567890");
}

#[test]
fn short_numbers_render_without_country_prefix() {
    let short = resolve("911", Some(RegionCode::us())).unwrap();
    assert!(short.is_short_number());
    assert_eq!(short.to_string(), "911");
    assert!(!short.to_string().starts_with('+'));

    let full = resolve("2015550123", Some(RegionCode::us())).unwrap();
    assert!(!full.is_short_number());
    assert_eq!(full.to_string(), "+12015550123");
}

#[test]
fn short_number_types() {
    let emergency = resolve("911", Some(RegionCode::us())).unwrap();
    assert_eq!(emergency.number_type(), NumberTypes::EMERGENCY);

    let service = resolve("611", Some(RegionCode::us())).unwrap();
    assert!(service.is_short_number());
    assert_eq!(service.number_type(), NumberTypes::SHORT_CODE);

    // 112 is a short number in GB and FR alike, the region decides
    let european = resolve("112", Some(RegionCode::fr())).unwrap();
    assert_eq!(european.region_code(), RegionCode::fr());
    assert_eq!(european.number_type(), NumberTypes::EMERGENCY);
}

#[test]
fn full_number_types() {
    let fixed = resolve("01234 567 890", Some(RegionCode::gb())).unwrap();
    assert_eq!(fixed.number_type(), NumberTypes::FIXED);
    assert!(fixed.number_type().intersects(NumberTypes::RECOMMENDED));

    let mobile = resolve("07843 567 890", Some(RegionCode::gb())).unwrap();
    assert_eq!(mobile.number_type(), NumberTypes::MOBILE);

    let toll_free = resolve("0800 123 4567", Some(RegionCode::gb())).unwrap();
    assert_eq!(toll_free.number_type(), NumberTypes::TOLL_FREE);
    assert!(!toll_free.number_type().intersects(NumberTypes::RECOMMENDED));

    let ambiguous = resolve("2015550123", Some(RegionCode::us())).unwrap();
    assert_eq!(ambiguous.number_type(), NumberTypes::FIXED | NumberTypes::MOBILE);
    assert!(ambiguous.number_type().intersects(NumberTypes::MOBILE));
}

#[test]
fn national_rendering_resolves_back_to_same_number() {
    for (input, region) in [
        ("01234 567 890", RegionCode::gb()),
        ("+447843567890", RegionCode::gb()),
        ("2015550123", RegionCode::us()),
        ("0123456789", RegionCode::fr()),
    ] {
        let number = resolve(input, Some(region)).unwrap();
        let again = resolve(&number.to_national(), Some(number.region_code())).unwrap();
        assert_eq!(again.to_e164(), number.to_e164(), "round trip of {}", input);
    }
}

#[test]
fn formatting_is_idempotent() {
    let e164 = resolve("01234 567 890", Some(RegionCode::gb())).unwrap().to_e164();
    assert_eq!(resolve(&e164, None).unwrap().to_e164(), e164);
}
