use crate::charge::Charge;
use crate::config;
use ultraviolet::Vec2;

#[test]
fn charge_ids_are_unique() {
    let a = Charge::new(Vec2::zero(), 5);
    let b = Charge::new(Vec2::zero(), 5);
    assert_ne!(a.id, b.id);
}

#[test]
fn center_is_offset_by_half_extent() {
    let c = Charge::with_extent(Vec2::new(100.0, 60.0), 1, 40.0);
    assert_eq!(c.center(), Vec2::new(120.0, 80.0));
}

#[test]
fn magnitude_is_absolute_value() {
    let c = Charge::new(Vec2::zero(), -17);
    assert_eq!(c.magnitude(), 17);
}

#[test]
fn new_charge_is_unselected_and_unfocused() {
    let c = Charge::new(Vec2::zero(), 0);
    assert!(!c.selected);
    assert!(!c.focused);
    assert!(c.connections.is_empty());
}

#[test]
fn set_value_accepts_out_of_range_values() {
    let mut c = Charge::new(Vec2::zero(), 0);
    c.set_value(config::MAX_CHARGE_VALUE * 50);
    assert_eq!(c.value, 1000, "edits are not clamped to the spawn range");
}
