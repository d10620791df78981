//! Display preferences
//!
//! Read from the page URL query string (`?fps=1&contrast=high&demo=1`).
//! Nothing is stored between visits.

/// Color palette choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Contrast {
    #[default]
    Normal,
    High,
}

impl Contrast {
    pub fn as_str(&self) -> &'static str {
        match self {
            Contrast::Normal => "Normal",
            Contrast::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" | "default" => Some(Contrast::Normal),
            "high" | "hc" => Some(Contrast::High),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Show FPS counter
    pub show_fps: bool,
    /// Palette
    pub contrast: Contrast,
    /// Start with the autopilot enabled
    pub demo: bool,
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Settings {
    /// Parse a URL query string; unknown keys and bad values are ignored
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "fps" => match parse_flag(value) {
                    Some(on) => settings.show_fps = on,
                    None => log::warn!("Ignoring fps={value}"),
                },
                "demo" => match parse_flag(value) {
                    Some(on) => settings.demo = on,
                    None => log::warn!("Ignoring demo={value}"),
                },
                "contrast" => match Contrast::from_str(value) {
                    Some(contrast) => settings.contrast = contrast,
                    None => log::warn!("Ignoring contrast={value}"),
                },
                _ => {}
            }
        }
        settings
    }

    #[inline]
    pub fn high_contrast(&self) -> bool {
        self.contrast == Contrast::High
    }

    /// Read settings from the current page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let settings = Self::from_query(&search);
        log::info!("Settings: {:?}", settings);
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(Settings::from_query(""), Settings::default());
        assert_eq!(Settings::from_query("?"), Settings::default());
    }

    #[test]
    fn test_parses_known_keys() {
        let s = Settings::from_query("?fps=1&contrast=high&demo");
        assert!(s.show_fps);
        assert!(s.high_contrast());
        assert!(s.demo);
    }

    #[test]
    fn test_ignores_unknown_and_bad_values() {
        let s = Settings::from_query("fps=maybe&contrast=neon&volume=11&demo=off");
        assert_eq!(s, Settings::default());
    }
}
