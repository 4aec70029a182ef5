// commands/dispatcher.rs

use crate::events::UiCommand;
use crate::system::ChargeSystem;

use super::{charge, selection};

/// Process a single `UiCommand` by delegating to the appropriate handler.
/// Commands are applied to completion, in arrival order, on the caller's
/// thread.
pub fn process_command(cmd: UiCommand, system: &mut ChargeSystem) {
    match cmd {
        UiCommand::AddCharge => {
            charge::handle_add_charge(system);
        }
        UiCommand::DeleteSelected => {
            charge::handle_delete_selected(system);
        }
        UiCommand::SetSelectedValue { value } => {
            charge::handle_set_selected_value(system, value);
        }
        UiCommand::Press { id } => {
            selection::handle_press(system, id);
        }
        UiCommand::Drag { id, pos } => {
            selection::handle_drag(system, id, pos);
        }
        UiCommand::Release => {
            selection::handle_release(system);
        }
        UiCommand::SetSelection { ids } => {
            selection::handle_set_selection(system, &ids);
        }
        UiCommand::FocusGained { id } => {
            selection::handle_focus_gained(system, id);
        }
        UiCommand::FocusLost { editor_active } => {
            selection::handle_focus_lost(system, editor_active);
        }
        UiCommand::Resize { width, height } => {
            selection::handle_resize(system, width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::process_command;
    use crate::events::{UiCommand, UiUpdate};
    use crate::system::{ChargeSystem, Viewport};
    use std::sync::mpsc::channel;

    #[test]
    fn commands_round_trip_through_the_dispatcher() {
        let (tx, rx) = channel();
        let mut system = ChargeSystem::new(Viewport::default(), tx);

        process_command(UiCommand::AddCharge, &mut system);
        process_command(UiCommand::AddCharge, &mut system);
        assert_eq!(system.charges.len(), 2);
        assert_eq!(system.connections.len(), 1);

        process_command(UiCommand::DeleteSelected, &mut system);
        assert_eq!(system.charges.len(), 1, "only the selected charge goes");

        let saw_editor_update = rx
            .try_iter()
            .any(|u| matches!(u, UiUpdate::EnableValueEditor { .. }));
        assert!(saw_editor_update);
    }
}
