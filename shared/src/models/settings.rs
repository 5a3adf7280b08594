//! Venue device settings
//!
//! Kept per device (printer address, PIN preference). Stored through a
//! settings repository on the server side.

use serde::{Deserialize, Serialize};

fn default_paper_width() -> u8 {
    48
}

/// Docket printer settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrinterSettings {
    #[serde(default)]
    pub name: Option<String>,
    /// Host:port of the printer bridge
    #[serde(default)]
    pub address: Option<String>,
    /// Characters per line (48 for 80mm, 32 for 58mm)
    #[serde(default = "default_paper_width")]
    pub paper_width: u8,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            name: None,
            address: None,
            paper_width: default_paper_width(),
        }
    }
}

/// All device settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VenueSettings {
    #[serde(default)]
    pub printer: PrinterSettings,
    /// Ask for the staff PIN before state-changing actions
    #[serde(default)]
    pub require_pin: bool,
}

/// Partial update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueSettingsUpdate {
    pub printer: Option<PrinterSettings>,
    pub require_pin: Option<bool>,
}

impl VenueSettings {
    pub fn apply(&mut self, update: VenueSettingsUpdate) {
        if let Some(printer) = update.printer {
            self.printer = printer;
        }
        if let Some(require_pin) = update.require_pin {
            self.require_pin = require_pin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings: VenueSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, VenueSettings::default());
        assert_eq!(settings.printer.paper_width, 48);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut settings = VenueSettings::default();
        settings.apply(VenueSettingsUpdate {
            printer: None,
            require_pin: Some(true),
        });
        assert!(settings.require_pin);
        assert_eq!(settings.printer, PrinterSettings::default());
    }
}
