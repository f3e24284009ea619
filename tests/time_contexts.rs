use chrono::{Duration, NaiveDate, NaiveDateTime};
use pex_context::{
    CalculatedSubject, ContextDefinition, FixedClock, TimeContextDefinition, TimeOrdering,
};
use std::sync::Arc;

fn t(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn new_year() -> NaiveDateTime {
    t(2024, 1, 1, 0, 0, 0)
}

#[test]
fn before_time_is_strictly_before() {
    let def = TimeContextDefinition::before();
    let own = new_year();
    assert!(def.matches(&own, &t(2023, 12, 31, 23, 59, 59)));
    assert!(!def.matches(&own, &t(2024, 1, 1, 0, 0, 1)));
    assert!(!def.matches(&own, &own));
}

#[test]
fn after_time_mirrors_before() {
    let def = TimeContextDefinition::after();
    let own = new_year();
    assert!(def.matches(&own, &(own + Duration::seconds(1))));
    assert!(!def.matches(&own, &own));
    assert!(!def.matches(&own, &(own - Duration::seconds(1))));
}

#[test]
fn exact_time_truncates_to_seconds() {
    let def = TimeContextDefinition::exact();
    let noon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let a = noon.and_hms_milli_opt(12, 0, 0, 100).unwrap();
    let b = noon.and_hms_milli_opt(12, 0, 0, 900).unwrap();
    assert!(def.matches(&a, &b));
}

#[test]
fn malformed_text_fails_for_every_time_kind() {
    for def in [
        TimeContextDefinition::exact(),
        TimeContextDefinition::before(),
        TimeContextDefinition::after(),
    ] {
        let err = def.deserialize("not-a-date").unwrap_err();
        assert!(err.is_parse(), "{} accepted garbage", def.name());
        assert!(err.to_string().contains(def.name()));
    }
}

#[test]
fn epoch_seconds_parse_in_clock_zone() {
    let clock = Arc::new(FixedClock::utc(new_year()));
    let def = TimeContextDefinition::with_clock("before-time", TimeOrdering::Before, clock);
    assert_eq!(def.deserialize("1704067200").unwrap(), new_year());
}

#[test]
fn satisfied_against_the_clock() {
    let clock = Arc::new(FixedClock::utc(t(2023, 12, 31, 23, 59, 59)));
    let subject = CalculatedSubject::new("user", "zml");

    let before = TimeContextDefinition::with_clock("before-time", TimeOrdering::Before, clock.clone());
    let after = TimeContextDefinition::with_clock("after-time", TimeOrdering::After, clock);

    assert!(before.is_satisfied(&new_year(), &subject));
    assert!(!after.is_satisfied(&new_year(), &subject));
}

#[test]
fn accumulation_emits_exactly_one_value() {
    let subject = CalculatedSubject::new("group", "admins");
    assert_eq!(TimeContextDefinition::exact().current_values(&subject).len(), 1);
}
