use rstest::rstest;
use sales_forecast::utils::{compare_names, format_number, parse_period};
use sales_forecast::ForecastError;
use std::cmp::Ordering;

#[rstest]
#[case("3", 2, 3)]
#[case(" 2 ", 2, 2)]
#[case("12", 2, 12)]
#[case("1", 1, 1)]
#[case("1", 0, 1)]
fn test_parse_period_accepts(#[case] input: &str, #[case] min: usize, #[case] expected: usize) {
    assert_eq!(parse_period(input, min).unwrap(), expected);
}

#[test]
fn test_parse_period_rejects() {
    assert!(matches!(
        parse_period("1", 2),
        Err(ForecastError::InvalidParameter(_))
    ));
    assert!(matches!(
        parse_period("0", 0),
        Err(ForecastError::InvalidParameter(_))
    ));
    assert!(matches!(
        parse_period("abc", 2),
        Err(ForecastError::ParseError(_))
    ));
    assert!(matches!(
        parse_period("-3", 2),
        Err(ForecastError::ParseError(_))
    ));
}

#[test]
fn test_sort_names() {
    let mut names = vec!["cat tembok", "Bata Merah", "semen", "Atap", "bata merah"];
    names.sort_by(|a, b| compare_names(a, b));

    assert_eq!(
        names,
        vec!["Atap", "bata merah", "Bata Merah", "cat tembok", "semen"]
    );
}

#[test]
fn test_compare_names_prefix() {
    assert_eq!(compare_names("Pipe", "Pipe PVC"), Ordering::Less);
}

#[test]
fn test_format_number_rounds() {
    assert_eq!(format_number(87.0), "87.00");
    assert_eq!(format_number(-14.666666), "-14.67");
}
