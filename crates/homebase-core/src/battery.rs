//! Low-battery warnings.

use serde::{Deserialize, Serialize};

/// Levels at which a warning fires when crossed on the way down.
pub const BATTERY_LEVELS: [f32; 6] = [0.2, 0.1, 0.05, 0.03, 0.02, 0.01];

/// Charging state reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeState {
    Unplugged,
    Charging,
    Full,
    Unknown,
}

/// A battery state change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryStatus {
    pub state: ChargeState,
    /// Charge level in `0.0..=1.0`.
    pub level: f32,
}

/// Tracks the last seen level and decides when to warn.
#[derive(Debug, Clone)]
pub struct BatteryWatcher {
    last_level: f32,
}

impl BatteryWatcher {
    pub fn new() -> Self {
        Self { last_level: 1.0 }
    }

    /// Feed a state change. Returns the warning to show, if any.
    pub fn on_state_change(&mut self, status: BatteryStatus) -> Option<String> {
        let previous = std::mem::replace(&mut self.last_level, status.level);
        if status.state != ChargeState::Unplugged {
            return None;
        }

        let crossed = BATTERY_LEVELS
            .iter()
            .any(|&threshold| previous > threshold && status.level <= threshold);
        if !crossed {
            return None;
        }

        let advice = if status.level >= 0.05 {
            "Please charge phone."
        } else {
            "Charge phone immediately!"
        };
        Some(format!(
            "Warning, battery is low ({}%). {}",
            (status.level * 100.0).round() as i32,
            advice
        ))
    }
}

impl Default for BatteryWatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unplugged(level: f32) -> BatteryStatus {
        BatteryStatus {
            state: ChargeState::Unplugged,
            level,
        }
    }

    #[test]
    fn test_warns_once_per_threshold() {
        let mut watcher = BatteryWatcher::new();
        assert!(watcher.on_state_change(unplugged(0.5)).is_none());
        assert_eq!(
            watcher.on_state_change(unplugged(0.19)).as_deref(),
            Some("Warning, battery is low (19%). Please charge phone.")
        );
        assert!(watcher.on_state_change(unplugged(0.15)).is_none());
    }

    #[test]
    fn test_critical_message() {
        let mut watcher = BatteryWatcher::new();
        watcher.on_state_change(unplugged(0.06));
        assert_eq!(
            watcher.on_state_change(unplugged(0.04)).as_deref(),
            Some("Warning, battery is low (4%). Charge phone immediately!")
        );
    }

    #[test]
    fn test_charging_only_tracks_level() {
        let mut watcher = BatteryWatcher::new();
        let charging = BatteryStatus {
            state: ChargeState::Charging,
            level: 0.15,
        };
        assert!(watcher.on_state_change(charging).is_none());
        // Already below 20% when unplugged, so only the 10% mark warns.
        assert!(watcher.on_state_change(unplugged(0.12)).is_none());
        assert!(watcher.on_state_change(unplugged(0.1)).is_some());
    }
}
