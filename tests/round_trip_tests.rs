use std::fmt::Debug;
use weekly_hours::{
    DaySchedule, HoursValue, TimeOfDay, TimeRange, TimeRangeSet, WeekSchedule, Weekday,
    WeekdaySet,
};

fn assert_canonical<T: HoursValue + PartialEq + Debug>(inputs: &[&str]) {
    for input in inputs {
        let value = T::parse(input).unwrap_or_else(|e| panic!("'{input}' should parse: {e}"));
        let rendered = value.render();
        let reparsed = T::parse(&rendered).unwrap();
        assert_eq!(reparsed, value, "round trip changed '{input}'");
        assert_eq!(reparsed.render(), rendered, "render of '{input}' is not stable");
    }
}

#[test]
fn every_type_round_trips_through_its_canonical_form() {
    assert_canonical::<TimeOfDay>(&["00:00", " 08:15 ", "24:00"]);
    assert_canonical::<TimeRange>(&["00:00-24:00", "06:00-21:00"]);
    assert_canonical::<TimeRangeSet>(&["13:00-17:00+09:00-12:00", "00:00-01:00+01:00-02:00"]);
    assert_canonical::<Weekday>(&["mon", "SUN"]);
    assert_canonical::<WeekdaySet>(&["Mon/Tue", "Wed/Mon-Tue", "sun/sat/Mon-Sun"]);
    assert_canonical::<DaySchedule>(&["fri/mon 18:00-20:00+08:00-10:00"]);
    assert_canonical::<WeekSchedule>(&[
        "Mon-Fri 09:00-12:00+13:00-17:00,Sat/Sun 09:00-12:00",
        "Sun 10:00-12:00,Mon 10:00-12:00",
    ]);
}

#[test]
fn argument_names_are_stable() {
    assert_eq!(TimeOfDay::ARGUMENT, "hour");
    assert_eq!(TimeRange::ARGUMENT, "hourRange");
    assert_eq!(TimeRangeSet::ARGUMENT, "hourRanges");
    assert_eq!(Weekday::ARGUMENT, "dayOfTheWeek");
    assert_eq!(WeekdaySet::ARGUMENT, "multipleDayOfTheWeek");
    assert_eq!(DaySchedule::ARGUMENT, "dayOpeningHours");
    assert_eq!(WeekSchedule::ARGUMENT, "weeklyOpeningHours");
}
