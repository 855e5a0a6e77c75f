//! User configuration — widget timings and motion settings.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/smilebook/config.toml` (default `~/.config/smilebook/config.toml`).

use std::path::PathBuf;
use std::time::Duration;

/// Application configuration.  All durations are whole seconds and clamped
/// to sane ranges when loaded, so a hand-edited file can't freeze a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Carousel auto-advance interval.
    pub autoplay_secs: u64,
    /// Pause after a manual carousel action before autoplay resumes.
    pub cooldown_secs: u64,
    /// Length of the simulated booking call.
    pub submit_secs: u64,
    /// How long the booking success banner stays before the form resets.
    pub success_secs: u64,
    /// Eased scrolling on section jumps.
    pub smooth_scroll: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            autoplay_secs: 5,
            cooldown_secs: 10,
            submit_secs: 2,
            success_secs: 5,
            smooth_scroll: true,
        }
    }
}

impl AppConfig {
    pub fn autoplay(&self) -> Duration {
        Duration::from_secs(self.autoplay_secs)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_secs(self.submit_secs)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_secs(self.success_secs)
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse(&contents);
            }
        }
        Self::default()
    }

    /// Persist the current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "autoplay_secs" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.autoplay_secs = v.clamp(1, 60);
                    }
                }
                "cooldown_secs" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.cooldown_secs = v.clamp(1, 120);
                    }
                }
                "submit_secs" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.submit_secs = v.clamp(0, 10);
                    }
                }
                "success_secs" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.success_secs = v.clamp(1, 30);
                    }
                }
                "smooth_scroll" => {
                    config.smooth_scroll = value == "true";
                }
                _ => {}
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let lines = vec![
            "# smilebook configuration".to_string(),
            String::new(),
            "# Carousel timings (seconds)".to_string(),
            format!("autoplay_secs = {}", self.autoplay_secs),
            format!("cooldown_secs = {}", self.cooldown_secs),
            String::new(),
            "# Booking form timings (seconds)".to_string(),
            format!("submit_secs = {}", self.submit_secs),
            format!("success_secs = {}", self.success_secs),
            String::new(),
            "# Motion".to_string(),
            format!("smooth_scroll = {}", self.smooth_scroll),
            String::new(),
        ];
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/smilebook/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("smilebook").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_serialise_and_parse() {
        let config = AppConfig::default();
        assert_eq!(AppConfig::parse(&config.serialise()), config);
    }

    #[test]
    fn unknown_keys_and_comments_are_ignored() {
        let parsed = AppConfig::parse(
            "# comment\n[section]\nnonsense = 42\nautoplay_secs = 7\n",
        );
        assert_eq!(parsed.autoplay_secs, 7);
        assert_eq!(parsed.cooldown_secs, 10);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let parsed = AppConfig::parse("autoplay_secs = 0\ncooldown_secs = 999\n");
        assert_eq!(parsed.autoplay_secs, 1);
        assert_eq!(parsed.cooldown_secs, 120);
    }

    #[test]
    fn garbage_values_keep_defaults() {
        let parsed = AppConfig::parse("autoplay_secs = soon\nsmooth_scroll = maybe\n");
        assert_eq!(parsed.autoplay_secs, 5);
        assert!(!parsed.smooth_scroll); // anything but "true" is false
    }
}
