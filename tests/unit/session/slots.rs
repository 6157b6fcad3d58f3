use super::*;

#[test]
fn assign_replaces_and_returns_previous() {
    let mut slots = SlotAssignments::new(2);
    assert_eq!(slots.assign(0, "a").unwrap(), None);
    assert_eq!(slots.assign(0, "b").unwrap(), Some("a"));
    assert_eq!(slots.get(0), Some(&"b"));
    assert_eq!(slots.filled_count(), 1);
}

#[test]
fn out_of_range_slot_is_rejected() {
    let mut slots = SlotAssignments::new(2);
    let err = slots.assign(2, "a").unwrap_err();
    assert!(matches!(err, FramepressError::Layout(_)));
}

#[test]
fn ordered_follows_slot_order_not_assignment_order() {
    let mut slots = SlotAssignments::new(3);
    slots.assign(2, "late").unwrap();
    slots.assign(0, "first").unwrap();
    slots.assign(1, "mid").unwrap();
    assert!(slots.is_complete());
    assert_eq!(slots.into_ordered().unwrap(), vec!["first", "mid", "late"]);
}

#[test]
fn incomplete_assignment_cannot_finalize() {
    let mut slots = SlotAssignments::new(2);
    slots.assign(0, "a").unwrap();
    assert!(!slots.is_complete());
    let err = slots.into_ordered().unwrap_err();
    assert!(err.to_string().contains("need 2 photos, have 1"));
}

#[test]
fn clear_reopens_a_slot() {
    let mut slots = SlotAssignments::new(1);
    slots.assign(0, "a").unwrap();
    assert_eq!(slots.clear(0), Some("a"));
    assert_eq!(slots.get(0), None);
    assert!(!slots.is_complete());

    // An empty frame is trivially complete.
    let empty: SlotAssignments<&str> = SlotAssignments::new(0);
    assert!(empty.is_complete());
    assert_eq!(empty.into_ordered().unwrap(), Vec::<&str>::new());
}
