// Headless driver: runs a short scripted session through the same command
// boundary a GUI collaborator would use and logs what the display sink
// would show.

use std::sync::mpsc::{channel, Receiver};

use log::{info, warn};
use ultraviolet::Vec2;

use charge_sim::commands::process_command;
use charge_sim::events::{UiCommand, UiUpdate};
use charge_sim::init_config::SessionConfig;
use charge_sim::system::ChargeSystem;

const SESSION_CONFIG_PATH: &str = "session.toml";

fn drain(rx: &Receiver<UiUpdate>) {
    for update in rx.try_iter() {
        match update {
            UiUpdate::EnableValueEditor { value } => info!("editor enabled, value {}", value),
            UiUpdate::DisableValueEditor => info!("editor disabled"),
            UiUpdate::ChargeColor { id, bucket } => {
                let c = bucket.srgba();
                info!(
                    "charge {} painted {:?} (#{:02x}{:02x}{:02x})",
                    id, bucket, c.red, c.green, c.blue
                );
            }
            UiUpdate::EnergyText { text: Some(text) } => info!("energy: {}", text),
            UiUpdate::EnergyText { text: None } => info!("energy readout cleared"),
            UiUpdate::Connections { lines } => info!("{} connection line(s)", lines.len()),
        }
    }
}

fn main() {
    env_logger::init();

    let session = match SessionConfig::load_from_file(SESSION_CONFIG_PATH) {
        Ok(session) => session,
        Err(e) => {
            warn!("no session config loaded ({}); using defaults", e);
            SessionConfig::default()
        }
    };
    if let Some(seed) = session.seed {
        fastrand::seed(seed);
    }

    let (tx, rx) = channel();
    let mut system = ChargeSystem::with_extent(session.viewport(), session.extent(), tx);

    for _ in 0..3 {
        process_command(UiCommand::AddCharge, &mut system);
    }
    drain(&rx);

    // Drag the first charge somewhere else and let its connections reform.
    let first = system.charges[0].id;
    process_command(UiCommand::SetSelection { ids: vec![first] }, &mut system);
    process_command(UiCommand::Press { id: first }, &mut system);
    process_command(
        UiCommand::Drag {
            id: first,
            pos: Vec2::new(120.0, 80.0),
        },
        &mut system,
    );
    process_command(UiCommand::Release, &mut system);
    drain(&rx);

    // Bump the selected charge past the current ceiling, then remove it.
    process_command(UiCommand::SetSelectedValue { value: 25 }, &mut system);
    process_command(UiCommand::DeleteSelected, &mut system);
    drain(&rx);

    info!(
        "session done: {} charge(s), {} connection(s) remain",
        system.charges.len(),
        system.connections.len()
    );
}
