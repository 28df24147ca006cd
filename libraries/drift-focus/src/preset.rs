//! Focus timer presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Built-in focus timer presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FocusPreset {
    /// Classic 25-minute pomodoro
    Pomodoro,
    /// 50-minute study block
    Study,
    /// 90-minute deep work block
    DeepWork,
    /// 60-minute wind-down timer
    Sleep,
    /// 10-minute meditation
    Meditation,
    /// 5-minute break
    ShortBreak,
}

impl FocusPreset {
    /// All presets in display order
    pub const ALL: [FocusPreset; 6] = [
        FocusPreset::Pomodoro,
        FocusPreset::Study,
        FocusPreset::DeepWork,
        FocusPreset::Sleep,
        FocusPreset::Meditation,
        FocusPreset::ShortBreak,
    ];

    /// Preset duration
    pub fn duration(self) -> Duration {
        let minutes = match self {
            FocusPreset::Pomodoro => 25,
            FocusPreset::Study => 50,
            FocusPreset::DeepWork => 90,
            FocusPreset::Sleep => 60,
            FocusPreset::Meditation => 10,
            FocusPreset::ShortBreak => 5,
        };
        Duration::from_secs(minutes * 60)
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            FocusPreset::Pomodoro => "Pomodoro",
            FocusPreset::Study => "Study Session",
            FocusPreset::DeepWork => "Deep Work",
            FocusPreset::Sleep => "Sleep Timer",
            FocusPreset::Meditation => "Meditation",
            FocusPreset::ShortBreak => "Short Break",
        }
    }
}

impl fmt::Display for FocusPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_match_labels() {
        assert_eq!(FocusPreset::Pomodoro.duration(), Duration::from_secs(25 * 60));
        assert_eq!(FocusPreset::DeepWork.duration(), Duration::from_secs(90 * 60));
        assert_eq!(FocusPreset::ShortBreak.duration(), Duration::from_secs(5 * 60));
    }

    #[test]
    fn all_presets_are_distinct() {
        for (i, a) in FocusPreset::ALL.iter().enumerate() {
            for b in &FocusPreset::ALL[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
