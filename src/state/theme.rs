//! Theme resolution: user mode + OS preference + optional nightly window.

use std::fmt;
use std::str::FromStr;

use crate::config::AutoDarkConfig;

/// The visitor's explicit appearance choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Next mode in the toggle cycle: light → dark → system → light.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(UnknownThemeMode(s.to_string())),
        }
    }
}

/// The appearance actually applied to the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }
}

/// Hours of the day treated as night. Wraps past midnight when
/// `start_hour > end_hour`; empty when they are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl NightWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour: start_hour % 24,
            end_hour: end_hour % 24,
        }
    }

    pub fn from_config(config: &AutoDarkConfig) -> Self {
        Self::new(config.start_hour, config.end_hour)
    }

    pub fn contains(&self, hour: u32) -> bool {
        let hour = hour % 24;
        if self.start_hour <= self.end_hour {
            self.start_hour <= hour && hour < self.end_hour
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

/// Resolves a [`ThemeMode`] against the signals the browser provides.
///
/// The resolver holds no browser handles. The theme store feeds it OS
/// preference notifications and clock samples and reads back
/// [`ThemeResolver::appearance`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeResolver {
    mode: ThemeMode,
    /// `None` when `matchMedia` is unavailable.
    os_prefers_dark: Option<bool>,
    night: Option<NightWindow>,
    hour: Option<u32>,
}

impl ThemeResolver {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            os_prefers_dark: None,
            night: None,
            hour: None,
        }
    }

    pub fn with_os_preference(mut self, prefers_dark: Option<bool>) -> Self {
        self.os_prefers_dark = prefers_dark;
        self
    }

    pub fn with_night_window(mut self, night: Option<NightWindow>, hour: Option<u32>) -> Self {
        self.night = night;
        self.hour = hour;
        self
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Returns `true` if the mode changed.
    pub fn set_mode(&mut self, mode: ThemeMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    pub fn set_os_preference(&mut self, prefers_dark: bool) {
        self.os_prefers_dark = Some(prefers_dark);
    }

    pub fn night_window(&self) -> Option<NightWindow> {
        self.night
    }

    /// Turn the nightly override on or off. Returns `true` if it changed.
    pub fn set_night_window(&mut self, night: Option<NightWindow>) -> bool {
        let changed = self.night != night;
        self.night = night;
        changed
    }

    pub fn set_hour(&mut self, hour: u32) {
        self.hour = Some(hour % 24);
    }

    /// Whether OS color-scheme notifications matter right now.
    pub fn watches_os(&self) -> bool {
        self.mode == ThemeMode::System
    }

    /// Whether the nightly clock check should be running.
    pub fn watches_clock(&self) -> bool {
        self.mode == ThemeMode::System && self.night.is_some()
    }

    pub fn appearance(&self) -> Appearance {
        match self.mode {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => {
                let os_dark = self.os_prefers_dark.unwrap_or(false);
                let night = match (self.night, self.hour) {
                    (Some(window), Some(hour)) => window.contains(hour),
                    _ => false,
                };
                if os_dark || night {
                    Appearance::Dark
                } else {
                    Appearance::Light
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(" Dark ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("SYSTEM".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_mode_string_roundtrip() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.as_str().parse::<ThemeMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn test_toggle_cycle_visits_every_mode() {
        let mut mode = ThemeMode::Light;
        let mut seen = vec![mode];
        for _ in 0..2 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen, vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
        assert_eq!(mode.next(), ThemeMode::Light);
    }

    #[test]
    fn test_explicit_modes_ignore_os_and_clock() {
        let night = Some(NightWindow::new(18, 6));
        for os in [None, Some(false), Some(true)] {
            for hour in [0, 12, 22] {
                let light = ThemeResolver::new(ThemeMode::Light)
                    .with_os_preference(os)
                    .with_night_window(night, Some(hour));
                assert_eq!(light.appearance(), Appearance::Light, "os={:?} hour={}", os, hour);

                let dark = ThemeResolver::new(ThemeMode::Dark)
                    .with_os_preference(os)
                    .with_night_window(night, Some(hour));
                assert_eq!(dark.appearance(), Appearance::Dark, "os={:?} hour={}", os, hour);
            }
        }
    }

    #[test]
    fn test_system_follows_os_preference() {
        let mut resolver = ThemeResolver::new(ThemeMode::System).with_os_preference(Some(true));
        assert_eq!(resolver.appearance(), Appearance::Dark);

        resolver.set_os_preference(false);
        assert_eq!(resolver.appearance(), Appearance::Light);

        resolver.set_os_preference(true);
        assert_eq!(resolver.appearance(), Appearance::Dark);
    }

    #[test]
    fn test_missing_media_query_falls_back_to_light() {
        let resolver = ThemeResolver::new(ThemeMode::System).with_os_preference(None);
        assert_eq!(resolver.appearance(), Appearance::Light);
    }

    #[test]
    fn test_night_window_forces_dark_in_system_mode() {
        let mut resolver = ThemeResolver::new(ThemeMode::System)
            .with_os_preference(Some(false))
            .with_night_window(Some(NightWindow::new(18, 6)), Some(22));
        assert_eq!(resolver.appearance(), Appearance::Dark);

        resolver.set_hour(12);
        assert_eq!(resolver.appearance(), Appearance::Light);

        // Daytime still follows a dark OS
        resolver.set_os_preference(true);
        assert_eq!(resolver.appearance(), Appearance::Dark);
    }

    #[test]
    fn test_night_window_without_clock_sample_is_ignored() {
        let resolver = ThemeResolver::new(ThemeMode::System)
            .with_os_preference(Some(false))
            .with_night_window(Some(NightWindow::new(18, 6)), None);
        assert_eq!(resolver.appearance(), Appearance::Light);
    }

    #[test]
    fn test_night_window_wraps_midnight() {
        let window = NightWindow::new(18, 6);
        assert!(window.contains(18));
        assert!(window.contains(23));
        assert!(window.contains(0));
        assert!(window.contains(5));
        assert!(!window.contains(6));
        assert!(!window.contains(12));
        assert!(!window.contains(17));
    }

    #[test]
    fn test_night_window_same_day_and_empty() {
        let window = NightWindow::new(1, 4);
        assert!(window.contains(1));
        assert!(window.contains(3));
        assert!(!window.contains(4));
        assert!(!window.contains(0));

        let empty = NightWindow::new(5, 5);
        assert!((0..24).all(|h| !empty.contains(h)));
    }

    #[test]
    fn test_night_window_from_config_hours() {
        let config = AutoDarkConfig {
            start_hour: 20,
            end_hour: 30,
            ..AutoDarkConfig::default()
        };
        assert_eq!(NightWindow::from_config(&config), NightWindow::new(20, 6));
    }

    #[test]
    fn test_toggling_night_window_starts_and_stops_override() {
        let window = NightWindow::new(18, 6);
        let mut resolver = ThemeResolver::new(ThemeMode::System).with_os_preference(Some(false));
        resolver.set_hour(23);
        assert_eq!(resolver.appearance(), Appearance::Light);
        assert!(!resolver.watches_clock());

        assert!(resolver.set_night_window(Some(window)));
        assert_eq!(resolver.appearance(), Appearance::Dark);
        assert!(resolver.watches_clock());
        assert!(!resolver.set_night_window(Some(window)), "Same window is not a change");

        assert!(resolver.set_night_window(None));
        assert_eq!(resolver.appearance(), Appearance::Light);
        assert!(!resolver.watches_clock());
    }

    #[test]
    fn test_watchers_only_in_system_mode() {
        let mut resolver = ThemeResolver::new(ThemeMode::System)
            .with_night_window(Some(NightWindow::new(18, 6)), Some(9));
        assert!(resolver.watches_os());
        assert!(resolver.watches_clock());

        assert!(resolver.set_mode(ThemeMode::Dark));
        assert!(!resolver.watches_os());
        assert!(!resolver.watches_clock());

        let plain = ThemeResolver::new(ThemeMode::System);
        assert!(plain.watches_os());
        assert!(!plain.watches_clock(), "No clock without an auto-dark window");
    }

    #[test]
    fn test_set_mode_reports_change() {
        let mut resolver = ThemeResolver::new(ThemeMode::Light);
        assert!(!resolver.set_mode(ThemeMode::Light));
        assert!(resolver.set_mode(ThemeMode::System));
        assert_eq!(resolver.mode(), ThemeMode::System);
    }
}
