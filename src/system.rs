// system.rs
// The ChargeSystem owns the charges and their connections and sequences
// every user-driven operation: creation, deletion, value edits, selection,
// focus, and the press/drag/release reconnection cycle.

use std::sync::mpsc::Sender;

use log::warn;
use ultraviolet::Vec2;

use crate::charge::Charge;
use crate::color::ColorBucket;
use crate::config;
use crate::connection::ConnectionGraph;
use crate::energy;
use crate::events::UiUpdate;
use crate::utils;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: config::DEFAULT_VIEWPORT_WIDTH,
            height: config::DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

pub struct ChargeSystem {
    pub charges: Vec<Charge>,
    pub connections: ConnectionGraph,
    /// Largest absolute charge value seen since the last full repaint.
    /// Monotonically non-decreasing between repaints; `repaint_all` resets
    /// it to the true maximum over the present charges (0 when empty).
    pub max_color_value: u32,
    /// Charges whose connections were torn down on press and are pending
    /// reconnection on the next release.
    staged: Vec<u64>,
    viewport: Viewport,
    extent: f32,
    updates: Sender<UiUpdate>,
}

impl ChargeSystem {
    pub fn new(viewport: Viewport, updates: Sender<UiUpdate>) -> Self {
        Self::with_extent(viewport, config::DEFAULT_EXTENT, updates)
    }

    pub fn with_extent(viewport: Viewport, extent: f32, updates: Sender<UiUpdate>) -> Self {
        Self {
            charges: Vec::new(),
            connections: ConnectionGraph::new(),
            max_color_value: 0,
            staged: Vec::new(),
            viewport,
            extent,
            updates,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn energy(&self) -> Option<f32> {
        energy::total_energy(&self.charges)
    }

    pub fn selected_ids(&self) -> Vec<u64> {
        self.charges
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.id)
            .collect()
    }

    pub fn focused_id(&self) -> Option<u64> {
        self.charges.iter().find(|c| c.focused).map(|c| c.id)
    }

    /// Spawn a charge with a uniformly random value and position, wired to
    /// every existing charge, selected and focused.
    pub fn add_charge(&mut self) -> u64 {
        let value = utils::random_value();
        let pos = utils::random_position(self.viewport, self.extent);
        self.add_charge_at(pos, value)
    }

    /// Deterministic spawn entry point used by `add_charge` and by callers
    /// that already know the position and value.
    pub fn add_charge_at(&mut self, pos: Vec2, value: i32) -> u64 {
        let bucket = self.color_for_value(value);
        for charge in &mut self.charges {
            charge.selected = false;
        }
        let mut charge = Charge::with_extent(pos, value, self.extent);
        charge.selected = true;
        let id = charge.id;
        self.charges.push(charge);
        self.emit(UiUpdate::ChargeColor { id, bucket });

        self.focus_gained(id);

        // The fresh charge is the sole staged member; the release path
        // wires it to every existing charge and refreshes the readout.
        self.staged.clear();
        self.staged.push(id);
        self.release();
        id
    }

    /// Remove every selected charge and its connections. A benign no-op
    /// when nothing is selected.
    pub fn delete_selected(&mut self) {
        let deleted: Vec<u64> = self.selected_ids();
        if deleted.is_empty() {
            return;
        }
        let max_deleted = self
            .charges
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.magnitude())
            .max()
            .unwrap_or(0);

        for &id in &deleted {
            self.connections.remove_incident(&mut self.charges, id);
        }
        self.charges.retain(|c| !c.selected);
        self.staged.retain(|id| !deleted.contains(id));

        self.emit(UiUpdate::DisableValueEditor);

        // The ceiling may have left with the deleted set.
        if max_deleted == self.max_color_value {
            self.repaint_all();
        }

        self.emit(UiUpdate::Connections {
            lines: self.connections.endpoints(),
        });
        self.refresh_energy();
    }

    /// Apply `value` to every selected charge. A no-op when nothing is
    /// selected. Out-of-range values are accepted; the spawn range only
    /// constrains generation.
    pub fn set_value_for_selected(&mut self, value: i32) {
        if !self.charges.iter().any(|c| c.selected) {
            return;
        }
        for charge in self.charges.iter_mut().filter(|c| c.selected) {
            charge.set_value(value);
        }

        let m = value.unsigned_abs();
        if m > self.max_color_value {
            // The edited value is the new ceiling; recolor everything
            // against it without rescanning.
            self.max_color_value = m;
            self.recolor_all();
        } else {
            // The previous maximum may have been edited away.
            self.repaint_all();
        }

        // Keyboard focus returns to the scene after an edit commit.
        for charge in &mut self.charges {
            charge.focused = false;
        }
    }

    /// Mouse-down on a charge: tear down the connections of every selected
    /// charge, plus the pressed one when it is not selected, and stage them
    /// for reconnection on release.
    pub fn press(&mut self, id: u64) {
        if self.find(id).is_none() {
            warn!("press on unknown charge {}", id);
            return;
        }
        let mut stage = self.selected_ids();
        if !stage.contains(&id) {
            stage.push(id);
        }
        for &sid in &stage {
            self.connections.remove_incident(&mut self.charges, sid);
            if !self.staged.contains(&sid) {
                self.staged.push(sid);
            }
        }
        self.emit(UiUpdate::Connections {
            lines: self.connections.endpoints(),
        });
    }

    /// Position report while a drag is in flight. Connections are already
    /// absent, so nothing is recomputed until the release.
    pub fn drag(&mut self, id: u64, pos: Vec2) {
        match self.find(id) {
            Some(i) => self.charges[i].pos = pos,
            None => warn!("drag on unknown charge {}", id),
        }
    }

    /// Mouse-up: reconnect every staged charge to every present charge and
    /// refresh the energy readout.
    pub fn release(&mut self) {
        self.connections.reconcile(&self.staged, &mut self.charges);
        self.staged.clear();
        self.emit(UiUpdate::Connections {
            lines: self.connections.endpoints(),
        });
        self.refresh_energy();
    }

    /// Selection report from the UI toolkit; replaces the selected set.
    pub fn set_selection(&mut self, ids: &[u64]) {
        for charge in &mut self.charges {
            charge.selected = ids.contains(&charge.id);
        }
    }

    /// Move input focus to a charge and enable the value editor with its
    /// current value. At most one charge is focused at a time.
    pub fn focus_gained(&mut self, id: u64) {
        let i = match self.find(id) {
            Some(i) => i,
            None => {
                warn!("focus on unknown charge {}", id);
                return;
            }
        };
        for charge in &mut self.charges {
            charge.focused = false;
        }
        self.charges[i].focused = true;
        let value = self.charges[i].value;
        self.emit(UiUpdate::EnableValueEditor { value });
    }

    /// Focus left the focused charge. Skipped while the value editor itself
    /// holds keyboard focus, so the editor does not flicker mid-edit.
    pub fn focus_lost(&mut self, editor_active: bool) {
        if editor_active {
            return;
        }
        for charge in &mut self.charges {
            charge.focused = false;
        }
        self.emit(UiUpdate::DisableValueEditor);
    }

    /// New viewport bounds from the collaborator; affects future spawns.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport { width, height };
    }

    /// Full repaint: rediscover the true maximum magnitude over the present
    /// charges, then recolor every charge against it.
    pub fn repaint_all(&mut self) {
        self.max_color_value = 0;
        for charge in &self.charges {
            if charge.magnitude() > self.max_color_value {
                self.max_color_value = charge.magnitude();
            }
        }
        self.recolor_all();
    }

    /// Raise the ceiling when `value` exceeds it, then bucket the value.
    /// This is the incremental path: existing charges keep their colors
    /// even when the ceiling moves, until the next full repaint.
    fn color_for_value(&mut self, value: i32) -> ColorBucket {
        let m = value.unsigned_abs();
        if m > self.max_color_value {
            self.max_color_value = m;
        }
        ColorBucket::for_magnitude(m, self.max_color_value)
    }

    fn recolor_all(&self) {
        for charge in &self.charges {
            let bucket = ColorBucket::for_magnitude(charge.magnitude(), self.max_color_value);
            self.emit(UiUpdate::ChargeColor {
                id: charge.id,
                bucket,
            });
        }
    }

    fn refresh_energy(&self) {
        let text = self.energy().map(energy::format_energy);
        self.emit(UiUpdate::EnergyText { text });
    }

    fn find(&self, id: u64) -> Option<usize> {
        self.charges.iter().position(|c| c.id == id)
    }

    fn emit(&self, update: UiUpdate) {
        // The collaborator owns the receiver's lifetime; updates are
        // best-effort once it is gone.
        let _ = self.updates.send(update);
    }
}
