//! Named session presets
//!
//! The preset table mirrors the Pomodoro variants offered in the product UI.
//! Applying a preset goes through the same validated configure path as a
//! manual configuration, so every preset here must satisfy the
//! positive-duration rule.

use crate::config::TimerConfig;
use serde::Serialize;

/// A named timer preset with durations in minutes
#[derive(Debug, Clone, Serialize)]
pub struct SessionPreset {
    /// Stable identifier used for lookup
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub long_break_minutes: u32,
    pub cycles_before_long_break: u32,
    /// Short description shown in the UI
    pub description: &'static str,
}

impl SessionPreset {
    /// Convert to a TimerConfig (minutes to seconds)
    pub fn config(&self) -> TimerConfig {
        TimerConfig {
            focus_seconds: self.focus_minutes * 60,
            break_seconds: self.break_minutes * 60,
            long_break_seconds: self.long_break_minutes * 60,
            cycles_before_long_break: self.cycles_before_long_break,
        }
    }
}

/// All built-in presets
pub const PRESETS: &[SessionPreset] = &[
    SessionPreset {
        id: "classic",
        name: "Classic Pomodoro (25/5)",
        focus_minutes: 25,
        break_minutes: 5,
        long_break_minutes: 15,
        cycles_before_long_break: 4,
        description: "25 minutes of focused work, 5 minute breaks, \
                      long break after 4 cycles.",
    },
    SessionPreset {
        id: "long",
        name: "Long Pomodoro (50/10)",
        focus_minutes: 50,
        break_minutes: 10,
        long_break_minutes: 20,
        cycles_before_long_break: 2,
        description: "50 minutes of focused work for longer concentration spans.",
    },
    SessionPreset {
        id: "short",
        name: "Short Pomodoro (15/5)",
        focus_minutes: 15,
        break_minutes: 5,
        long_break_minutes: 10,
        cycles_before_long_break: 4,
        description: "Short sessions for beginners or short attention spans.",
    },
    SessionPreset {
        id: "flexible",
        name: "Flexible Pomodoro (30/10)",
        focus_minutes: 30,
        break_minutes: 10,
        long_break_minutes: 15,
        cycles_before_long_break: 3,
        description: "Middle-ground durations for experienced users.",
    },
    SessionPreset {
        id: "reverse",
        name: "Reverse Pomodoro (5/25)",
        focus_minutes: 5,
        break_minutes: 25,
        long_break_minutes: 25,
        cycles_before_long_break: 1,
        description: "5 minutes of work, 25 of rest. Kickstarts stalled tasks.",
    },
];

/// Look up a preset by its stable id
pub fn find_preset(id: &str) -> Option<&'static SessionPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_produce_valid_configs() {
        for preset in PRESETS {
            let config = preset.config();
            assert!(
                config.validate().is_ok(),
                "preset '{}' must produce a valid config",
                preset.id
            );
        }
    }

    #[test]
    fn test_find_preset() {
        let classic = find_preset("classic").expect("classic preset exists");
        assert_eq!(classic.config().focus_seconds, 1500);
        assert_eq!(classic.config().cycles_before_long_break, 4);

        assert!(find_preset("nonexistent").is_none());
    }

    #[test]
    fn test_preset_ids_are_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in PRESETS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
