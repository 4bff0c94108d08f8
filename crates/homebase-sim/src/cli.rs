//! Command-line parsing for the simulator.

use crate::error::SimError;

pub const USAGE: &str = "\
usage: homebase <command>

commands:
  home                         show the home screen (configure on first run)
  list [home|extras|background]
  tap <key>                    activate a shortcut
  contacts <key>               list the contact choices for a shortcut
  tap-contact <key> <index>    activate a shortcut for one contact
  configure <address> <contact> <genre>
  show-config                  print the saved app configuration
  missing                      shortcuts whose app is not installed
  battery <level>              report an unplugged battery level (0.0-1.0)
  clock                        print the clock header";

/// Shortcut tables that can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Home,
    Extras,
    Background,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Home,
    List(Table),
    Tap(String),
    Contacts(String),
    TapContact { key: String, index: usize },
    Configure {
        home_address: String,
        emergency_contact: String,
        fav_music_genre: String,
    },
    ShowConfig,
    Missing,
    Battery(f32),
    Clock,
}

impl Command {
    pub fn parse(args: &[String]) -> Result<Self, SimError> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            [] | ["help"] | ["-h"] | ["--help"] => Ok(Command::Help),
            ["home"] => Ok(Command::Home),
            ["list"] => Ok(Command::List(Table::Home)),
            ["list", table] => Ok(Command::List(parse_table(table)?)),
            ["tap", key] => Ok(Command::Tap(key.to_string())),
            ["contacts", key] => Ok(Command::Contacts(key.to_string())),
            ["tap-contact", key, index] => Ok(Command::TapContact {
                key: key.to_string(),
                index: index
                    .parse()
                    .map_err(|_| usage(format!("Not a contact index: {}", index)))?,
            }),
            ["configure", address, contact, genre] => Ok(Command::Configure {
                home_address: address.to_string(),
                emergency_contact: contact.to_string(),
                fav_music_genre: genre.to_string(),
            }),
            ["show-config"] => Ok(Command::ShowConfig),
            ["missing"] => Ok(Command::Missing),
            ["battery", level] => {
                let level: f32 = level
                    .parse()
                    .map_err(|_| usage(format!("Not a battery level: {}", level)))?;
                if !(0.0..=1.0).contains(&level) {
                    return Err(usage(format!("Battery level out of range: {}", level)));
                }
                Ok(Command::Battery(level))
            }
            ["clock"] => Ok(Command::Clock),
            [other, ..] => Err(usage(format!("Unknown command: {}", other))),
        }
    }
}

fn parse_table(name: &str) -> Result<Table, SimError> {
    match name {
        "home" => Ok(Table::Home),
        "extras" => Ok(Table::Extras),
        "background" => Ok(Table::Background),
        other => Err(usage(format!("Unknown table: {}", other))),
    }
}

fn usage(message: String) -> SimError {
    SimError::Usage(format!("{}\n\n{}", message, USAGE))
}
