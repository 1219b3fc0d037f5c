use asteria::layout::absolute_longitude;
use asteria::zodiac::{degree_in_sign, format_position, Sign};

#[test]
fn test_sign_codes_round_trip() {
    for sign in Sign::ALL {
        let parsed = Sign::from_code(sign.code());
        assert_eq!(parsed, Ok(sign));
    }
}

#[test]
fn test_start_longitudes() {
    assert_eq!(Sign::Aries.start_longitude(), 0.0);
    assert_eq!(Sign::Cancer.start_longitude(), 90.0);
    assert_eq!(Sign::Libra.start_longitude(), 180.0);
    assert_eq!(Sign::Capricorn.start_longitude(), 270.0);
    assert_eq!(Sign::Pisces.start_longitude(), 330.0);
}

#[test]
fn test_absolute_longitude_round_trip() {
    // normalize(sign, d) == start + d for every sign and in-range degree
    for sign in Sign::ALL {
        for degree in [0.0, 0.5, 10.0, 15.25, 29.999] {
            assert_eq!(
                absolute_longitude(sign, degree),
                sign.start_longitude() + degree
            );
        }
    }
}

#[test]
fn test_unknown_code_is_error() {
    let err = Sign::from_code("Xyz").unwrap_err();
    assert!(err.to_string().contains("Xyz"));

    assert!(Sign::from_code("").is_err());
    assert!(Sign::from_code("ari").is_err());
    assert!(Sign::from_code("Aries").is_err());
}

#[test]
fn test_from_str_matches_from_code() {
    let sign: Sign = "Sco".parse().unwrap();
    assert_eq!(sign, Sign::Scorpio);
}

#[test]
fn test_sign_and_degree_from_longitude() {
    assert_eq!(Sign::from_longitude(125.0), Sign::Leo);
    assert_eq!(degree_in_sign(125.0), 5.0);

    // Seam and wrap
    assert_eq!(Sign::from_longitude(359.5), Sign::Pisces);
    assert_eq!(Sign::from_longitude(720.5), Sign::Aries);
}

#[test]
fn test_format_position() {
    assert_eq!(format_position(Sign::Cancer, 10.0), "10.00\u{b0} Can");
    assert_eq!(format_position(Sign::Leo, 5.4), "5.40\u{b0} Leo");
}

#[test]
fn test_display_uses_full_name() {
    assert_eq!(Sign::Sagittarius.to_string(), "Sagittarius");
}
