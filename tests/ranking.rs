use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use practicio::domain::{CategoryId, PracticeItem};
use practicio::ranking::{
    classify_tier, compute_age, compute_score, compute_tier_thresholds, display_frequency, frequency_from_slider,
    frequency_label, slider_from_frequency, sort_items, SortPolicy, Tier, TierThresholds, DEFAULT_ITEM_AGE,
};

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    offset.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn item(name: &str, frequency: f64, last_practice: Option<DateTime<Utc>>) -> PracticeItem {
    let mut item = PracticeItem::new(CategoryId::new(), name);
    item.relative_frequency = frequency;
    item.last_practice = last_practice;
    item
}

fn names(items: &[PracticeItem]) -> Vec<&str> {
    items.iter().map(PracticeItem::display_name).collect()
}

#[test]
fn age_of_now_is_zero() {
    let now = local(2024, 3, 10, 15, 45);
    assert_eq!(compute_age(Some(now.with_timezone(&Utc)), &now), 0);
}

#[test]
fn age_of_never_practiced_is_default() {
    let now = local(2024, 3, 10, 15, 45);
    assert_eq!(compute_age(None, &now), DEFAULT_ITEM_AGE);
    assert_eq!(DEFAULT_ITEM_AGE, 7);
}

#[test]
fn age_counts_calendar_days_not_hours() {
    let just_after_midnight = local(2024, 3, 10, 0, 30);
    let yesterday = just_after_midnight - Duration::minutes(23 * 60 + 50);
    assert_eq!(compute_age(Some(yesterday.with_timezone(&Utc)), &just_after_midnight), 1);

    let an_hour_ago = just_after_midnight - Duration::hours(1);
    assert_eq!(compute_age(Some(an_hour_ago.with_timezone(&Utc)), &just_after_midnight), 1);

    let morning = local(2024, 3, 10, 8, 0);
    let earlier_today = morning - Duration::hours(2);
    assert_eq!(compute_age(Some(earlier_today.with_timezone(&Utc)), &morning), 0);
}

#[test]
fn age_uses_the_calendar_of_now() {
    // 23:00 UTC on the 9th is already the 10th at +02:00.
    let practiced = Utc.with_ymd_and_hms(2024, 3, 9, 23, 0, 0).unwrap();
    let now_local = local(2024, 3, 10, 9, 0);
    let now_utc = now_local.with_timezone(&Utc);

    assert_eq!(compute_age(Some(practiced), &now_local), 0);
    assert_eq!(compute_age(Some(practiced), &now_utc), 1);
}

#[test]
fn future_practice_has_negative_age() {
    let now = local(2024, 3, 10, 12, 0);
    let future = now + Duration::days(2);
    assert_eq!(compute_age(Some(future.with_timezone(&Utc)), &now), -2);
}

#[test]
fn score_is_monotonic_in_age_and_frequency() {
    let now = Utc::now();
    let ages = [0, 1, 2, 5, 30];
    let frequencies = [0.1, 0.5, 1.0, 2.0, 10.0];

    for frequency in frequencies {
        let scores: Vec<f64> = ages
            .iter()
            .map(|days| compute_score(&item("x", frequency, Some(now - Duration::days(*days))), &now))
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]), "{scores:?}");
    }

    for days in ages {
        let scores: Vec<f64> = frequencies
            .iter()
            .map(|frequency| compute_score(&item("x", *frequency, Some(now - Duration::days(days))), &now))
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]), "{scores:?}");
    }
}

#[test]
fn score_clamps_out_of_range_frequency() {
    let now = Utc::now();
    let eight_days = Some(now - Duration::days(8));

    let too_low = compute_score(&item("low", 0.0, eight_days), &now);
    let too_high = compute_score(&item("high", 50.0, eight_days), &now);

    assert!((too_low - 80.0).abs() < 1e-9);
    assert!((too_high - 0.8).abs() < 1e-9);
}

#[test]
fn tier_thresholds_for_small_populations() {
    let now = Utc::now();
    assert_eq!(compute_tier_thresholds(&[], &now), TierThresholds { medium: 0.0, high: 0.0 });

    let only = item("only", 0.5, Some(now - Duration::days(3)));
    let score = compute_score(&only, &now);
    assert_eq!(compute_tier_thresholds(&[only], &now), TierThresholds { medium: score, high: score });
}

#[test]
fn two_item_population_ranks_and_classifies() {
    let now = Utc::now();
    let a = item("a", 1.0, Some(now - Duration::days(8)));
    let b = item("b", 1.0, Some(now - Duration::days(1)));

    assert!((compute_score(&a, &now) - 8.0).abs() < 1e-9);
    assert!((compute_score(&b, &now) - 1.0).abs() < 1e-9);

    let items = vec![b, a];
    let thresholds = compute_tier_thresholds(&items, &now);
    assert!((thresholds.medium - 5.375).abs() < 1e-9);
    assert!((thresholds.high - 6.833_333_333).abs() < 1e-6);

    let sorted = sort_items(&items, SortPolicy::Score, &now);
    assert_eq!(names(&sorted), ["a", "b"]);
    assert_eq!(classify_tier(&sorted[0], &thresholds, &now), Tier::High);
    assert_eq!(classify_tier(&sorted[1], &thresholds, &now), Tier::Neutral);
}

#[test]
fn practiced_today_is_always_neutral() {
    let now = Utc::now();
    let fresh = item("fresh", 0.1, Some(now));
    let thresholds = TierThresholds {
        medium: -10.0,
        high: -5.0,
    };

    assert_eq!(classify_tier(&fresh, &thresholds, &now), Tier::Neutral);
}

#[test]
fn sort_alphabetical() {
    let now = Utc::now();
    let items = vec![item("Banana", 1.0, None), item("Apple", 1.0, None)];

    assert_eq!(names(&sort_items(&items, SortPolicy::Alphabetical, &now)), ["Apple", "Banana"]);
}

#[test]
fn sort_frequency_uses_raw_values() {
    let now = Utc::now();
    let items = vec![item("twice", 2.0, None), item("half", 0.5, None), item("wild", 40.0, None)];

    let sorted = sort_items(&items, SortPolicy::Frequency, &now);
    assert_eq!(names(&sorted), ["half", "twice", "wild"]);
}

#[test]
fn sort_last_practiced_puts_never_first() {
    let now = Utc::now();
    let items = vec![
        item("yesterday", 1.0, Some(now - Duration::days(1))),
        item("never", 1.0, None),
        item("last week", 1.0, Some(now - Duration::days(7))),
    ];

    let sorted = sort_items(&items, SortPolicy::LastPracticed, &now);
    assert_eq!(names(&sorted), ["never", "last week", "yesterday"]);
}

#[test]
fn sort_is_stable_for_ties() {
    let now = Utc::now();
    let items = vec![item("first", 1.0, None), item("second", 1.0, None), item("third", 1.0, None)];

    for policy in SortPolicy::ALL {
        assert_eq!(names(&sort_items(&items, policy, &now)), ["first", "second", "third"]);
    }
}

#[test]
fn slider_centre_is_exact() {
    assert_eq!(slider_from_frequency(1.0), 0.5);
    assert_eq!(frequency_from_slider(0.5), 1.0);
}

#[test]
fn slider_round_trip_within_tolerance() {
    for step in 0..=20 {
        let slider = f64::from(step) / 20.0;
        let back = slider_from_frequency(frequency_from_slider(slider));
        assert!((back - slider).abs() < 1e-6, "{slider} -> {back}");
    }
}

#[test]
fn displayed_frequency_labels() {
    assert_eq!(display_frequency(1.0), 1.0);
    assert_eq!(frequency_label(1.0), "1.0x");
    assert_eq!(frequency_label(0.5), "2.0x (more often)");
    assert_eq!(frequency_label(2.0), "0.5x (less often)");
}
