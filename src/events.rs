// events.rs
// Messages exchanged with the UI collaborator over the command boundary

use ultraviolet::Vec2;

use crate::color::ColorBucket;

// These are sent by the UI collaborator to drive the charge system
#[derive(Clone, Debug, PartialEq)]
pub enum UiCommand {
    AddCharge,
    DeleteSelected,
    SetSelectedValue { value: i32 },
    /// Mouse-down on a charge; its connections detach before the drag.
    Press { id: u64 },
    /// Position report while a drag is in flight.
    Drag { id: u64, pos: Vec2 },
    /// Mouse-up; staged charges reconnect at their release positions.
    Release,
    /// The toolkit's current selection, reported after it changes.
    SetSelection { ids: Vec<u64> },
    FocusGained { id: u64 },
    /// `editor_active` is true while the value editor itself holds
    /// keyboard focus.
    FocusLost { editor_active: bool },
    Resize { width: f32, height: f32 },
}

// Sent back to the UI collaborator as commands are applied
#[derive(Clone, Debug, PartialEq)]
pub enum UiUpdate {
    EnableValueEditor { value: i32 },
    DisableValueEditor,
    ChargeColor { id: u64, bucket: ColorBucket },
    /// `None` clears the readout (fewer than two charges present).
    EnergyText { text: Option<String> },
    /// The full connection line set; replaces whatever was drawn before.
    Connections { lines: Vec<(Vec2, Vec2)> },
}
