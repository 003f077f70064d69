use weekly_hours::{HoursValue, TimeOfDay, TimeRange};

#[test]
fn parses_start_and_end() {
    let range = TimeRange::parse("09:00-17:30").unwrap();
    assert_eq!(range.start(), TimeOfDay::new(9, 0).unwrap());
    assert_eq!(range.end(), TimeOfDay::new(17, 30).unwrap());
    assert_eq!(range.duration_minutes(), 510);
    assert_eq!(range.render(), "09:00-17:30");
}

#[test]
fn full_day_is_valid() {
    let range = TimeRange::parse("00:00-24:00").unwrap();
    assert_eq!(range, TimeRange::full_day());
    assert_eq!(range.duration_minutes(), 1440);
}

#[test]
fn start_must_precede_end() {
    assert!(TimeRange::parse("12:00-09:00").is_err());
    assert!(TimeRange::parse("09:00-09:00").is_err());
    let nine = TimeOfDay::new(9, 0).unwrap();
    assert!(TimeRange::new(nine, nine).is_err());
}

#[test]
fn malformed_text_reports_the_whole_range() {
    let err = TimeRange::parse("17-18").unwrap_err();
    assert_eq!(
        err.to_string(),
        "The argument 'hourRange' does not represent a valid hour range like '00:00-24:00' or '06:00-21:00': '17-18'"
    );

    for bad in ["09:00", "09:00-", "-17:00", "09:00-12:00-13:00", "09:00_17:00", "24:01-24:30"] {
        assert!(TimeRange::parse(bad).is_err(), "expected '{bad}' to be rejected");
    }
}

#[test]
fn touching_ranges_do_not_overlap() {
    let morning = TimeRange::parse("09:00-12:00").unwrap();
    let noon = TimeRange::parse("12:00-13:00").unwrap();
    let lunch = TimeRange::parse("11:30-13:00").unwrap();
    assert!(!morning.overlaps(&noon));
    assert!(morning.overlaps(&lunch));
    assert!(lunch.overlaps(&morning));
}
