// commands/selection.rs
// Handlers for selection, focus, and the press/drag/release cycle

use ultraviolet::Vec2;

use crate::system::ChargeSystem;

pub fn handle_press(system: &mut ChargeSystem, id: u64) {
    system.press(id);
}

pub fn handle_drag(system: &mut ChargeSystem, id: u64, pos: Vec2) {
    system.drag(id, pos);
}

pub fn handle_release(system: &mut ChargeSystem) {
    system.release();
}

pub fn handle_set_selection(system: &mut ChargeSystem, ids: &[u64]) {
    system.set_selection(ids);
}

pub fn handle_focus_gained(system: &mut ChargeSystem, id: u64) {
    system.focus_gained(id);
}

pub fn handle_focus_lost(system: &mut ChargeSystem, editor_active: bool) {
    system.focus_lost(editor_active);
}

pub fn handle_resize(system: &mut ChargeSystem, width: f32, height: f32) {
    system.resize(width, height);
}
