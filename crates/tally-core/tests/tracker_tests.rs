use tally_core::{
    display::{IntakeEntries, Progress},
    TallyError, TrackerBuilder,
};

#[test]
fn test_day_of_drinking() {
    let mut log = TrackerBuilder::new()
        .with_daily_goal(Some(2000.0))
        .build()
        .expect("Failed to build log");

    for amount in [250.0, 500.0, 250.0] {
        log.record(amount).expect("Failed to record");
    }
    assert_eq!(log.current_intake(), 1000.0);
    assert_eq!(log.percentage(), 50.0);

    let removed = log.remove(1).expect("Failed to remove");
    assert_eq!(removed.amount, 500.0);
    assert_eq!(log.current_intake(), 500.0);

    let recorded = log.record(1500.0).expect("Failed to record");
    assert!(recorded.goal_reached);

    let progress = Progress(&log).to_string();
    assert!(progress.contains("2000 / 2000 ml"));
    assert!(progress.contains("100%"));

    let listing = IntakeEntries(log.entries()).to_string();
    assert_eq!(listing.lines().count(), 3);
}

#[test]
fn test_negative_amount_rejected() {
    let mut log = TrackerBuilder::new().build().expect("Failed to build log");
    assert!(matches!(
        log.record(-5.0),
        Err(TallyError::InvalidAmount { .. })
    ));
}

#[test]
fn test_zero_goal_never_divides() {
    let mut log = TrackerBuilder::new().build().expect("Failed to build log");
    log.record(250.0).expect("Failed to record");

    assert!(matches!(
        log.set_goal(0.0),
        Err(TallyError::InvalidGoal { .. })
    ));
    let percentage = log.percentage();
    assert!(percentage.is_finite());
    assert_eq!(percentage, 12.5);
}

#[test]
fn test_remove_nonexistent_entry() {
    let mut log = TrackerBuilder::new().build().expect("Failed to build log");
    assert!(matches!(
        log.remove(0),
        Err(TallyError::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn test_reset_starts_new_day() {
    let mut log = TrackerBuilder::new()
        .with_daily_goal(Some(1500.0))
        .build()
        .expect("Failed to build log");
    log.record(750.0).expect("Failed to record");
    log.reset_daily();

    assert_eq!(log.current_intake(), 0.0);
    assert_eq!(log.daily_goal(), 1500.0);
    assert_eq!(IntakeEntries(log.entries()).to_string(), "No water logged yet.\n");
}
