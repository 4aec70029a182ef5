// commands/charge.rs
// Handlers for the commands that create, delete, and edit charges

use log::debug;

use crate::system::ChargeSystem;

pub fn handle_add_charge(system: &mut ChargeSystem) {
    let id = system.add_charge();
    debug!("added charge {} ({} present)", id, system.charges.len());
}

pub fn handle_delete_selected(system: &mut ChargeSystem) {
    let selected = system.selected_ids().len();
    system.delete_selected();
    debug!(
        "deleted {} charge(s), {} remain",
        selected,
        system.charges.len()
    );
}

pub fn handle_set_selected_value(system: &mut ChargeSystem, value: i32) {
    system.set_value_for_selected(value);
    debug!("selected charges set to value {}", value);
}
