//! Pin registry behaviour against the in-memory window system.

mod common;

use common::{id, FakeDirectory};
use layerpin::{PinRegistry, WindowDirectory};

fn desk() -> FakeDirectory {
    let dir = FakeDirectory::new();
    dir.add_window(1, "Notes", (0, 0, 400, 300));
    dir.add_window(2, "Terminal", (500, 0, 900, 300));
    dir.add_window(3, "Browser", (0, 400, 400, 700));
    dir
}

// === Pin / unpin ===

#[test]
fn pin_sets_attribute_and_tracks() {
    let dir = desk();
    let mut registry = PinRegistry::new();

    assert!(registry.pin(&dir, id(1)));

    assert!(registry.is_tracked(id(1)));
    assert!(dir.is_pinned(id(1)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn pinning_twice_tracks_once_and_stays_pinned() {
    let dir = desk();
    let mut registry = PinRegistry::new();

    registry.pin(&dir, id(1));
    registry.pin(&dir, id(1));

    assert_eq!(registry.tracked(), vec![id(1)]);
    assert!(dir.topmost(id(1)));
}

#[test]
fn unpin_clears_attribute_and_untracks() {
    let dir = desk();
    let mut registry = PinRegistry::new();
    registry.pin(&dir, id(2));

    assert!(registry.unpin(&dir, id(2)));

    assert!(!registry.is_tracked(id(2)));
    assert!(!dir.is_pinned(id(2)));
    assert!(registry.is_empty());
}

#[test]
fn windows_topmost_for_other_reasons_are_not_tracked() {
    let dir = desk();
    dir.set_topmost_externally(id(3), true);
    let registry = PinRegistry::new();

    assert!(dir.is_pinned(id(3)));
    assert!(!registry.is_tracked(id(3)));
}

#[test]
fn refused_pin_is_not_tracked() {
    let dir = desk();
    dir.set_elevated(id(1));
    let mut registry = PinRegistry::new();

    assert!(!registry.pin(&dir, id(1)));
    assert!(!registry.is_tracked(id(1)));
    assert!(!dir.topmost(id(1)));
}

// === Stale handles ===

#[test]
fn pin_on_closed_window_is_a_no_op() {
    let dir = desk();
    dir.close(id(1));
    let mut registry = PinRegistry::new();

    assert!(!registry.pin(&dir, id(1)));

    assert!(registry.is_empty());
    assert!(!dir.topmost(id(1)));
    assert_eq!(dir.set_calls(), 0);
}

#[test]
fn unpin_on_closed_window_drops_entry_without_os_call() {
    let dir = desk();
    let mut registry = PinRegistry::new();
    registry.pin(&dir, id(1));
    dir.close(id(1));
    let calls = dir.set_calls();

    assert!(!registry.unpin(&dir, id(1)));

    assert!(!registry.is_tracked(id(1)));
    assert_eq!(dir.set_calls(), calls);
}

#[test]
fn unknown_handle_is_harmless() {
    let dir = desk();
    let mut registry = PinRegistry::new();

    assert!(!registry.pin(&dir, id(99)));
    assert!(!registry.unpin(&dir, id(99)));
    assert!(registry.is_empty());
}

// === Unlock all ===

#[test]
fn unlock_all_releases_everything() {
    let dir = desk();
    let mut registry = PinRegistry::new();
    for raw in [1, 2, 3] {
        registry.pin(&dir, id(raw));
    }

    assert_eq!(registry.unlock_all(&dir), 3);

    assert!(registry.is_empty());
    for raw in [1, 2, 3] {
        assert!(!dir.topmost(id(raw)), "window {raw} still topmost");
    }
}

#[test]
fn unlock_all_counts_only_live_windows() {
    let dir = desk();
    let mut registry = PinRegistry::new();
    for raw in [1, 2, 3] {
        registry.pin(&dir, id(raw));
    }
    dir.close(id(2));

    assert_eq!(registry.unlock_all(&dir), 2);
    assert!(registry.is_empty());
}

#[test]
fn unlock_all_on_empty_registry_returns_zero() {
    let dir = desk();
    let mut registry = PinRegistry::new();

    assert_eq!(registry.unlock_all(&dir), 0);
    assert!(registry.is_empty());
}

#[test]
fn unlock_all_leaves_foreign_topmost_windows_alone() {
    let dir = desk();
    dir.set_topmost_externally(id(3), true);
    let mut registry = PinRegistry::new();
    registry.pin(&dir, id(1));

    registry.unlock_all(&dir);

    assert!(!dir.topmost(id(1)));
    assert!(dir.topmost(id(3)));
}

// === Prune ===

#[test]
fn prune_drops_closed_windows() {
    let dir = desk();
    let mut registry = PinRegistry::new();
    registry.pin(&dir, id(1));
    registry.pin(&dir, id(2));
    dir.close(id(1));

    assert_eq!(registry.prune(&dir), 1);
    assert_eq!(registry.tracked(), vec![id(2)]);
}
