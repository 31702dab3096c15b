use super::*;

#[test]
fn begin_issues_increasing_tickets_and_sets_loading() {
    let mut slot = Remote::<Vec<u32>>::default();
    let first = slot.begin();
    let second = slot.begin();
    assert!(second > first);
    assert!(slot.loading);
}

#[test]
fn current_ticket_replaces_the_value_wholesale() {
    let mut slot = Remote::<Vec<u32>>::default();
    slot.value = vec![1, 2, 3];
    let ticket = slot.begin();
    assert!(slot.apply(ticket, vec![9]));
    assert_eq!(slot.value, vec![9]);
    assert!(!slot.loading);
}

#[test]
fn stale_success_is_dropped() {
    let mut slot = Remote::<Vec<u32>>::default();
    let old = slot.begin();
    let new = slot.begin();
    assert!(!slot.apply(old, vec![1]));
    assert!(slot.value.is_empty());
    assert!(slot.loading);
    assert!(slot.apply(new, vec![2]));
    assert_eq!(slot.value, vec![2]);
}

#[test]
fn stale_failure_is_dropped() {
    let mut slot = Remote::<Vec<u32>>::default();
    let old = slot.begin();
    let _new = slot.begin();
    assert!(!slot.fail(old));
    assert!(slot.loading);
}

#[test]
fn failure_keeps_previous_rows() {
    let mut slot = Remote::<Vec<u32>>::default();
    let ticket = slot.begin();
    slot.apply(ticket, vec![4, 5]);
    let ticket = slot.begin();
    assert!(slot.fail(ticket));
    assert_eq!(slot.value, vec![4, 5]);
    assert!(!slot.loading);
}
