use cronos::config::TimeFormat;
use cronos::errors::AppError;
use cronos::utils::time::{format_compact, format_millis, parse_hms, render};

#[test]
fn test_format_millis() {
    assert_eq!(format_millis(0), "00:00:00");
    assert_eq!(format_millis(5000), "00:00:05");
    assert_eq!(format_millis(3_723_000), "01:02:03");
    // hours are not capped at a day
    assert_eq!(format_millis(90_000_000), "25:00:00");
    // sub-second remainder is dropped
    assert_eq!(format_millis(1999), "00:00:01");
}

#[test]
fn test_format_compact() {
    assert_eq!(format_compact(0), "0s");
    assert_eq!(format_compact(125_000), "2m 05s");
    assert_eq!(format_compact(3_723_000), "1h 02m 03s");
    assert_eq!(render(3_723_000, TimeFormat::Compact), "1h 02m 03s");
    assert_eq!(render(3_723_000, TimeFormat::Hms), "01:02:03");
}

#[test]
fn test_parse_hms() {
    assert_eq!(parse_hms("01:02:03").unwrap(), 3_723_000);
    assert_eq!(parse_hms("02:05").unwrap(), 125_000);
    assert_eq!(parse_hms("42").unwrap(), 42_000);
    assert_eq!(parse_hms("100:00:00").unwrap(), 360_000_000);

    let bad_inputs = [
        "",
        "aa:bb",
        "1:60",
        "00:61:00",
        "1:2:3:4",
        "-5",
        "1::2",
        // overflow while folding units or converting to millis
        "200000000000000000:00",
        "99999999999999999:00:00",
        "9223372036854775807",
    ];
    for bad in bad_inputs {
        assert!(
            matches!(parse_hms(bad), Err(AppError::InvalidDuration(_))),
            "'{bad}' should be rejected"
        );
    }
}
