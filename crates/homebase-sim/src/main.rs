//! Homebase device simulator - main entry point.
//!
//! Loads the launcher config and a device profile, wires a simulated phone
//! into the launcher, and runs one command against it.

mod cli;
mod device;
mod error;
mod profile;
mod store;

use std::process::ExitCode;
use std::sync::Arc;

use homebase_core::{
    config_path, ActionDescriptor, ActionKind, AppData, BatteryStatus, ChargeState,
    ConfigureForm, LauncherConfig, Route, Screen,
};
use homebase_dispatch::{Device, Launcher, Navigator};

use crate::cli::{Command, Table, USAGE};
use crate::device::SimDevice;
use crate::error::SimError;
use crate::profile::{profile_path, store_path, DeviceProfile};
use crate::store::FileStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("homebase: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<(), SimError> {
    let command = Command::parse(args)?;
    if command == Command::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = LauncherConfig::load(&config_path()?)?;
    let profile = DeviceProfile::load(&profile_path()?)?;
    let store = FileStore::new(store_path()?);
    tracing::debug!("Using storage at {:?}", store.path());

    let sim = Arc::new(SimDevice::new(profile, store));
    let launcher = Launcher::new(&config, Device::from_platform(sim.clone()))?;

    execute(command, &launcher, &sim).await
}

async fn execute(command: Command, launcher: &Launcher, sim: &SimDevice) -> Result<(), SimError> {
    match command {
        Command::Help => println!("{}", USAGE),
        Command::Home => {
            if !launcher.on_home_shown().await {
                let home = Route::Home {
                    shortcuts: launcher.catalog().home.clone(),
                };
                if let Err(e) = sim.navigate(home) {
                    tracing::warn!("Showing home screen failed: {}", e);
                }
            }
        }
        Command::List(table) => {
            let catalog = launcher.catalog();
            let shortcuts = match table {
                Table::Home => &catalog.home,
                Table::Extras => &catalog.extras,
                Table::Background => &catalog.background,
            };
            for shortcut in shortcuts {
                let kind = shortcut.action.as_ref().map_or("none", ActionKind::label);
                println!("{:<16} {:<20} {}", shortcut.key, shortcut.name, kind);
            }
        }
        Command::Tap(key) => {
            // Failures have already been shown as alerts.
            match launcher.activate_key(&key).await {
                Ok(outcome) => tracing::debug!("{}: {:?}", key, outcome),
                Err(e) => tracing::debug!("{} failed ({:?})", key, e.class()),
            }
        }
        Command::Contacts(key) => {
            for (index, choice) in contact_choices(launcher, &key).await?.iter().enumerate() {
                println!("{:>3}  {}", index, choice.name);
            }
        }
        Command::TapContact { key, index } => {
            let choices = contact_choices(launcher, &key).await?;
            let choice = choices.get(index).ok_or_else(|| {
                SimError::Usage(format!("{} has {} contacts", key, choices.len()))
            })?;
            if let Err(e) = launcher.activate(choice).await {
                tracing::debug!("{} failed ({:?})", choice.key, e.class());
            }
        }
        Command::Configure {
            home_address,
            emergency_contact,
            fav_music_genre,
        } => {
            let configurator = launcher.configurator();
            configurator.request_permissions().await;
            let form = ConfigureForm {
                home_address,
                emergency_contact,
                fav_music_genre,
            };
            let data = configurator.submit(&form).await?;
            tracing::info!("Saved home address {:?}", data.home_address);
        }
        Command::ShowConfig => {
            for line in config_lines(launcher.app_data().load().await.as_ref()) {
                println!("{}", line);
            }
        }
        Command::Missing => {
            for shortcut in launcher.configurator().missing_apps().await {
                let package = shortcut.effective_dependency().unwrap_or_default();
                println!("{:<16} {}", shortcut.name, package);
            }
        }
        Command::Battery(level) => launcher.on_battery_state(BatteryStatus {
            state: ChargeState::Unplugged,
            level,
        }),
        Command::Clock => println!("{}", launcher.clock_text()),
    }
    Ok(())
}

/// The saved app configuration, one field per line.
fn config_lines(data: Option<&AppData>) -> Vec<String> {
    let Some(data) = data else {
        return vec!["Not configured yet; run `homebase configure`.".to_string()];
    };
    vec![
        format!("home address:      {}", data.home_address),
        format!("emergency contact: {}", data.emergency_contact),
        format!("music genre:       {}", data.fav_music_genre),
    ]
}

/// Contact-enriched copies of a contact-list shortcut.
async fn contact_choices(
    launcher: &Launcher,
    key: &str,
) -> Result<Vec<ActionDescriptor>, SimError> {
    let descriptor = launcher
        .catalog()
        .find(key)
        .ok_or_else(|| SimError::Usage(format!("Unknown shortcut: {}", key)))?;
    match &descriptor.action {
        Some(ActionKind::Screen { screen, .. })
            if screen.resolve().ok() == Some(Screen::ContactList) =>
        {
            Ok(launcher.contact_choices(descriptor).await)
        }
        _ => Err(SimError::Usage(format!("{} does not open the contact list", key))),
    }
}
