use weekly_hours::{HoursValue, Weekday, WeekdaySet};

fn render(text: &str) -> String {
    WeekdaySet::parse(text).unwrap().render()
}

#[test]
fn renders_days_and_ranges_as_written() {
    assert_eq!(render("Mon/Tue"), "MON/TUE");
    assert_eq!(render("Mon"), "MON");
    assert_eq!(render("Mon-Fri"), "MON-FRI");
    assert_eq!(render("Mon/Wed-Fri"), "MON/WED-FRI");
    assert_eq!(render("Mon/Wed/Fri"), "MON/WED/FRI");
    assert_eq!(render("Sat/Sun"), "SAT/SUN");
}

#[test]
fn groups_are_emitted_in_week_order() {
    assert_eq!(render("Wed/Mon-Tue"), "MON-TUE/WED");
    assert_eq!(render("Fri/Mon"), "MON/FRI");
    assert_eq!(render("Sun/Thu-Fri/Mon"), "MON/THU-FRI/SUN");
}

#[test]
fn duplicates_collapse() {
    let set = WeekdaySet::parse("Mon-Wed/Tue/Tue-Thu").unwrap();
    assert_eq!(set.len(), 4);
    assert_eq!(set.render(), "MON-THU");
    assert_eq!(render("Mon/Mon"), "MON");
    assert_eq!(render("Tue/Mon-Fri"), "MON-FRI");
}

#[test]
fn groups_sharing_a_day_merge() {
    let merged = WeekdaySet::parse("Mon-Wed/Tue-Fri").unwrap();
    assert_eq!(merged.render(), "MON-FRI");
    assert_eq!(merged.groups(), &[(Weekday::Mon, Weekday::Fri)]);
    assert_eq!(merged, WeekdaySet::parse("Mon-Fri").unwrap());
    assert_eq!(render("Thu-Sat/Mon-Tue/Tue-Wed"), "MON-WED/THU-SAT");
    // Touching groups are not shared days.
    assert_eq!(render("Mon-Tue/Wed-Thu"), "MON-TUE/WED-THU");
}

#[test]
fn equality_only_looks_at_days() {
    let listed = WeekdaySet::parse("Mon/Tue").unwrap();
    let ranged = WeekdaySet::parse("Mon-Tue").unwrap();
    assert_eq!(listed, ranged);
    assert_ne!(listed.render(), ranged.render());
}

#[test]
fn input_case_does_not_matter() {
    let lower = WeekdaySet::parse("mon/tue").unwrap();
    let upper = WeekdaySet::parse("MON/TUE").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.render(), "MON/TUE");
    assert_eq!(upper.render(), "MON/TUE");
}

#[test]
fn wrapping_and_malformed_ranges_are_rejected() {
    let err = WeekdaySet::parse("Sat-Mon").unwrap_err();
    assert_eq!(
        err.to_string(),
        "The argument 'multipleDayOfTheWeek' does not represent a valid multiple days of the week like 'Mon/Tue/Wed-Fri': 'Sat-Mon'"
    );
    for bad in ["", "Mon/", "/Mon", "Mon//Tue", "Mon-", "Mon-Tue-Wed", "Xyz", "Mon,Tue", "Mon Tue"] {
        assert!(WeekdaySet::parse(bad).is_err(), "expected '{bad}' to be rejected");
    }
}

#[test]
fn single_day_range_is_allowed() {
    assert_eq!(render("Tue-Tue"), "TUE");
}

#[test]
fn runs_and_membership() {
    let set = WeekdaySet::parse("Mon/Wed-Thu/Fri/Sun").unwrap();
    assert_eq!(
        set.runs(),
        vec![
            (Weekday::Mon, Weekday::Mon),
            (Weekday::Wed, Weekday::Fri),
            (Weekday::Sun, Weekday::Sun),
        ]
    );
    assert_eq!(set.groups().len(), 4);
    assert!(set.contains(Weekday::Thu));
    assert!(!set.contains(Weekday::Tue));
    assert_eq!(WeekdaySet::all().render(), "MON-SUN");
}

#[test]
fn direct_construction_uses_maximal_runs() {
    assert!(WeekdaySet::new(Vec::new()).is_err());
    let set = WeekdaySet::new([Weekday::Sun, Weekday::Sat, Weekday::Sat, Weekday::Mon]).unwrap();
    assert_eq!(set.render(), "MON/SAT-SUN");
    assert_eq!(WeekdaySet::parse(&set.render()).unwrap(), set);
}
