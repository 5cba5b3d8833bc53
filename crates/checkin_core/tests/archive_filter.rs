use checkin_core::{CheckinService, DayRecord, FixedClock, MemoryStore};

fn blank_record(date: &str) -> DayRecord {
    DayRecord::empty(date)
}

#[test]
fn blank_day_produces_no_entry() {
    let record = blank_record("2024-01-10");
    assert!(record.archive().is_none());
}

#[test]
fn whitespace_only_fields_still_count_as_blank() {
    let mut record = blank_record("2024-01-10");
    record.minimal_action.action = "   ".to_string();
    record.relationships.external_expectation = "\t".to_string();
    record.family.they_expect = "\n".to_string();
    assert!(record.archive().is_none());
}

#[test]
fn any_probed_field_alone_makes_the_day_archivable() {
    let mut with_control = blank_record("2024-01-10");
    with_control.control.items.push("A".to_string());
    assert!(with_control.archive().is_some());

    let mut with_action = blank_record("2024-01-10");
    with_action.minimal_action.action = "stretch".to_string();
    assert!(with_action.archive().is_some());

    let mut with_expectation = blank_record("2024-01-10");
    with_expectation.relationships.external_expectation = "be available".to_string();
    assert!(with_expectation.archive().is_some());

    let mut with_family = blank_record("2024-01-10");
    with_family.family.they_expect = "a visit".to_string();
    assert!(with_family.archive().is_some());
}

#[test]
fn unprobed_fields_do_not_make_the_day_archivable() {
    // need_to_protect and i_decide only exist as current-day notes; a day
    // where only they were filled is treated as empty.
    let mut record = blank_record("2024-01-10");
    record.relationships.need_to_protect = "my evenings".to_string();
    record.family.i_decide = "short call".to_string();
    assert!(record.archive().is_none());
}

#[test]
fn entry_snapshots_only_control_and_minimal_action() {
    let mut record = blank_record("2024-01-10");
    record.control.items = vec!["A".to_string(), "B".to_string()];
    record.minimal_action.action = "call mom".to_string();
    record.minimal_action.completed = true;
    record.relationships.external_expectation = "signal only".to_string();
    record.family.they_expect = "signal only".to_string();

    let entry = record.archive().unwrap();
    assert_eq!(entry.date, "2024-01-10");
    assert_eq!(entry.control, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(entry.minimal_action, record.minimal_action);
}

#[test]
fn archived_entries_are_independent_of_later_edits() {
    let store = MemoryStore::new();
    let clock = FixedClock::new("2024-01-10");
    let service = CheckinService::new(&store, &clock);

    service.save_control(vec!["original".to_string()]);

    clock.set("2024-01-11");
    service.save_control(vec!["mutated later".to_string()]);

    let state = service.get_current();
    assert_eq!(state.current.control.items, vec!["mutated later".to_string()]);
    assert_eq!(state.history[0].control, vec!["original".to_string()]);
}
