use super::*;

fn target(raw: &str) -> HashTarget {
    HashTarget::from_fragment(raw).expect("target")
}

#[test]
fn class_toggling_is_idempotent() {
    let mut dom = MemoryDom::new();
    let element = dom.create_element();

    dom.set_class(element, "active", true);
    dom.set_class(element, "active", true);
    assert!(dom.has_class(element, "active"));

    dom.set_class(element, "active", false);
    dom.set_class(element, "active", false);
    assert!(!dom.has_class(element, "active"));
}

#[test]
fn initial_document_has_single_history_entry() {
    let dom = MemoryDom::with_initial_hash(Some(target("#about")));
    assert_eq!(dom.history_len(), 1);
    assert_eq!(dom.current_hash(), Some(target("#about")));
    assert!(!dom.can_go_back());
    assert!(!dom.can_go_forward());
}

#[test]
fn back_stops_at_the_oldest_entry() {
    let mut dom = MemoryDom::new();
    assert!(!dom.back());

    dom.push_hash(&target("#about"));
    assert!(dom.back());
    assert_eq!(dom.current_hash(), None);
    assert!(!dom.back());
}

#[test]
fn forward_stops_at_the_newest_entry() {
    let mut dom = MemoryDom::new();
    dom.push_hash(&target("#about"));
    assert!(!dom.forward());

    assert!(dom.back());
    assert!(dom.forward());
    assert_eq!(dom.current_hash(), Some(target("#about")));
}

#[test]
fn push_after_back_discards_forward_entries() {
    let mut dom = MemoryDom::new();
    dom.push_hash(&target("#a"));
    dom.push_hash(&target("#b"));
    assert_eq!(dom.history_len(), 3);

    assert!(dom.back());
    dom.push_hash(&target("#c"));

    assert_eq!(dom.history_len(), 3);
    assert_eq!(dom.current_hash(), Some(target("#c")));
    assert!(!dom.can_go_forward());
}

#[test]
fn scroll_lock_and_reset_are_tracked() {
    let mut dom = MemoryDom::new();
    dom.set_scroll_position(12.0, 300.0);
    dom.set_scroll_locked(true);
    assert!(dom.is_scroll_locked());

    dom.scroll_to_top();
    dom.set_scroll_locked(false);
    assert_eq!(dom.scroll_position(), (0.0, 0.0));
    assert!(!dom.is_scroll_locked());
}
