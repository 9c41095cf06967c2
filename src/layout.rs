//! The two static layout profiles and the rule that picks between them.
//!
//! When the Samsung Odyssey G9 (`LC49G95T`) is attached it sits on top and
//! the laptop panel is centred underneath it.  With any other external
//! display the two outputs are placed side by side.

use std::fmt;

/// Hardware identifier that selects [`LayoutProfile::Ultrawide`].
pub const ULTRAWIDE_MARKER: &str = "LC49G95T";

const ULTRAWIDE_TEXT: &str = "\
monitor = HDMI-A-1,3840x1080@60,0x0,1
monitor = eDP-1,1920x1080@60,960x1080,1
";

const STANDARD_TEXT: &str = "\
monitor = HDMI-A-1,preferred,0x0,1
monitor = eDP-1,1920x1080@60,auto,1
";

/// A named monitor arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutProfile {
    Ultrawide,
    Standard,
}

impl LayoutProfile {
    /// Pick a profile for the given monitor listing.
    ///
    /// An empty or unreadable listing falls through to
    /// [`Standard`](LayoutProfile::Standard).
    pub fn select(monitors: &str) -> Self {
        if monitors.contains(ULTRAWIDE_MARKER) {
            LayoutProfile::Ultrawide
        } else {
            LayoutProfile::Standard
        }
    }

    /// The monitor directives for this profile, newline-terminated.
    pub fn text(self) -> &'static str {
        match self {
            LayoutProfile::Ultrawide => ULTRAWIDE_TEXT,
            LayoutProfile::Standard => STANDARD_TEXT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutProfile::Ultrawide => "ultrawide",
            LayoutProfile::Standard => "standard",
        }
    }
}

impl fmt::Display for LayoutProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ultrawide_selected_when_marker_present() {
        let json = r#"{"monitors":[{"name":"HDMI-A-1","description":"Samsung LC49G95T"}]}"#;
        let profile = LayoutProfile::select(json);
        assert_eq!(profile, LayoutProfile::Ultrawide);
        assert_eq!(
            profile.text(),
            "monitor = HDMI-A-1,3840x1080@60,0x0,1\nmonitor = eDP-1,1920x1080@60,960x1080,1\n"
        );
    }

    #[test]
    fn standard_selected_otherwise() {
        let json = r#"[{"name":"HDMI-A-1","description":"Dell U2720Q"}]"#;
        let profile = LayoutProfile::select(json);
        assert_eq!(profile, LayoutProfile::Standard);
        assert_eq!(
            profile.text(),
            "monitor = HDMI-A-1,preferred,0x0,1\nmonitor = eDP-1,1920x1080@60,auto,1\n"
        );
    }

    #[test]
    fn empty_probe_is_standard() {
        assert_eq!(LayoutProfile::select(""), LayoutProfile::Standard);
    }

    #[test]
    fn marker_match_is_case_sensitive() {
        assert_eq!(LayoutProfile::select("lc49g95t"), LayoutProfile::Standard);
    }

    #[test]
    fn names_display() {
        assert_eq!(LayoutProfile::Ultrawide.to_string(), "ultrawide");
        assert_eq!(LayoutProfile::Standard.to_string(), "standard");
    }
}
