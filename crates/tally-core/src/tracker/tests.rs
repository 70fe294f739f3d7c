use super::*;

fn sum_of_entries(log: &IntakeLog) -> f64 {
    log.entries().iter().map(|e| e.amount).sum()
}

#[test]
fn test_default_log() {
    let log = IntakeLog::default();
    assert!(log.entries().is_empty());
    assert_eq!(log.current_intake(), 0.0);
    assert_eq!(log.daily_goal(), DEFAULT_DAILY_GOAL);
    assert_eq!(log.percentage(), 0.0);
}

#[test]
fn test_record_appends_and_totals() {
    let mut log = IntakeLog::default();
    let recorded = log.record(250.0).unwrap();
    assert_eq!(recorded.entry.amount, 250.0);
    assert!(!recorded.goal_reached);
    log.record(500.0).unwrap();

    assert_eq!(log.entries().len(), 2);
    assert_eq!(log.current_intake(), 750.0);
    assert_eq!(log.current_intake(), sum_of_entries(&log));
}

#[test]
fn test_record_rejects_invalid_amounts() {
    let mut log = IntakeLog::default();
    for amount in [-5.0, 0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = log.record(amount).unwrap_err();
        assert!(matches!(err, TallyError::InvalidAmount { .. }));
    }
    assert!(log.entries().is_empty());
    assert_eq!(log.current_intake(), 0.0);
}

#[test]
fn test_record_reports_goal_reached() {
    let mut log = TrackerBuilder::new()
        .with_daily_goal(Some(500.0))
        .build()
        .unwrap();
    assert!(!log.record(250.0).unwrap().goal_reached);
    assert!(log.record(250.0).unwrap().goal_reached);
    assert!(log.goal_reached());
}

#[test]
fn test_record_at_keeps_timestamp() {
    let mut log = IntakeLog::default();
    let at: Timestamp = "2024-05-01T08:30:00Z".parse().unwrap();
    log.record_at(300.0, at).unwrap();
    assert_eq!(log.entries()[0].timestamp, at);
}

#[test]
fn test_remove_subtracts_amount() {
    let mut log = IntakeLog::default();
    log.record(250.0).unwrap();
    log.record(500.0).unwrap();
    log.record(100.0).unwrap();

    let removed = log.remove(1).unwrap();
    assert_eq!(removed.amount, 500.0);
    assert_eq!(log.current_intake(), 350.0);
    assert_eq!(log.current_intake(), sum_of_entries(&log));
    assert_eq!(log.entries()[1].amount, 100.0);
}

#[test]
fn test_remove_out_of_range() {
    let mut log = IntakeLog::default();
    log.record(250.0).unwrap();
    let err = log.remove(1).unwrap_err();
    assert!(matches!(err, TallyError::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(log.current_intake(), 250.0);
}

#[test]
fn test_remove_last_entry_zeroes_total() {
    let mut log = IntakeLog::default();
    log.record(0.1).unwrap();
    log.record(0.2).unwrap();
    log.remove(0).unwrap();
    log.remove(0).unwrap();
    assert_eq!(log.current_intake(), 0.0);
}

#[test]
fn test_percentage() {
    let mut log = TrackerBuilder::new()
        .with_daily_goal(Some(2000.0))
        .build()
        .unwrap();
    log.record(500.0).unwrap();
    assert_eq!(log.percentage(), 25.0);
    assert_eq!(log.bar_width(), 25.0);
}

#[test]
fn test_percentage_above_goal_is_unclamped() {
    let mut log = TrackerBuilder::new()
        .with_daily_goal(Some(1000.0))
        .build()
        .unwrap();
    log.record(1500.0).unwrap();
    assert_eq!(log.percentage(), 150.0);
    assert_eq!(log.bar_width(), 100.0);
}

#[test]
fn test_set_goal_validates() {
    let mut log = IntakeLog::default();
    log.set_goal(2500.0).unwrap();
    assert_eq!(log.daily_goal(), 2500.0);

    for goal in [0.0, -100.0, f64::NAN, f64::INFINITY] {
        let err = log.set_goal(goal).unwrap_err();
        assert!(matches!(err, TallyError::InvalidGoal { .. }));
    }
    assert_eq!(log.daily_goal(), 2500.0);
}

#[test]
fn test_rejected_zero_goal_keeps_percentage_finite() {
    let mut log = IntakeLog::default();
    log.record(250.0).unwrap();
    assert!(log.set_goal(0.0).is_err());
    assert!(log.percentage().is_finite());
}

#[test]
fn test_non_positive_goal_yields_zero_percentage() {
    let mut log = IntakeLog::with_goal(0.0);
    log.record(250.0).unwrap();
    assert_eq!(log.percentage(), 0.0);
    assert_eq!(log.bar_width(), 0.0);
}

#[test]
fn test_reset_daily_keeps_goal() {
    let mut log = IntakeLog::default();
    log.set_goal(3000.0).unwrap();
    log.record(250.0).unwrap();
    log.reset_daily();
    assert!(log.entries().is_empty());
    assert_eq!(log.current_intake(), 0.0);
    assert_eq!(log.daily_goal(), 3000.0);
}

#[test]
fn test_builder_rejects_invalid_goal() {
    assert!(matches!(
        TrackerBuilder::new().with_daily_goal(Some(-1.0)).build(),
        Err(TallyError::InvalidGoal { .. })
    ));
    let log = TrackerBuilder::new().with_daily_goal(None).build().unwrap();
    assert_eq!(log.daily_goal(), DEFAULT_DAILY_GOAL);
}

#[test]
fn test_to_json() {
    let mut log = IntakeLog::default();
    let at: Timestamp = "2024-05-01T08:30:00Z".parse().unwrap();
    log.record_at(250.0, at).unwrap();

    let json = log.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["current_intake"], 250.0);
    assert_eq!(value["daily_goal"], 2000.0);
    assert_eq!(value["entries"][0]["amount"], 250.0);
    assert_eq!(value["entries"][0]["timestamp"], "2024-05-01T08:30:00Z");
}
