//! Output resolution tiers and the size-hint mapping onto them.

use serde::{Deserialize, Serialize};

/// Longest edge, in pixels, from which a size hint maps to [`Resolution::High`].
const HIGH_TIER_MIN_EDGE: u32 = 720;

/// Resolution tiers accepted by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// 480p.
    #[serde(rename = "480p")]
    Low,
    /// 720p.
    #[default]
    #[serde(rename = "720p")]
    High,
}

impl Resolution {
    /// Returns the tier label sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "480p",
            Self::High => "720p",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Picks a resolution tier for a request.
///
/// A well-formed `"WxH"` hint wins; otherwise the explicit tier is used, and
/// failing that the default ([`Resolution::High`]). Malformed hints are
/// ignored rather than reported.
pub fn select_resolution(size: Option<&str>, explicit: Option<Resolution>) -> Resolution {
    size.and_then(resolution_from_size)
        .or(explicit)
        .unwrap_or_default()
}

fn resolution_from_size(size: &str) -> Option<Resolution> {
    let (width, height) = parse_dimensions(size)?;
    if width.max(height) >= HIGH_TIER_MIN_EDGE {
        Some(Resolution::High)
    } else {
        Some(Resolution::Low)
    }
}

fn parse_dimensions(size: &str) -> Option<(u32, u32)> {
    let (width, height) = size.trim().split_once('x')?;
    let width: u32 = width.trim().parse().ok()?;
    let height: u32 = height.trim().parse().ok()?;
    (width > 0 && height > 0).then_some((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_hint_selects_tier() {
        assert_eq!(select_resolution(Some("1280x720"), None), Resolution::High);
        assert_eq!(select_resolution(Some("720x1280"), None), Resolution::High);
        assert_eq!(select_resolution(Some("640x480"), None), Resolution::Low);
        assert_eq!(select_resolution(Some("719x719"), None), Resolution::Low);
    }

    #[test]
    fn test_size_hint_beats_explicit_tier() {
        assert_eq!(
            select_resolution(Some("640x480"), Some(Resolution::High)),
            Resolution::Low
        );
        assert_eq!(
            select_resolution(Some("1920x1080"), Some(Resolution::Low)),
            Resolution::High
        );
    }

    #[test]
    fn test_malformed_hint_falls_through() {
        assert_eq!(select_resolution(Some("bad"), Some(Resolution::High)), Resolution::High);
        assert_eq!(select_resolution(Some("bad"), Some(Resolution::Low)), Resolution::Low);
        assert_eq!(select_resolution(Some("1280x"), Some(Resolution::Low)), Resolution::Low);
        assert_eq!(select_resolution(Some("x720"), None), Resolution::High);
        assert_eq!(select_resolution(Some("0x480"), Some(Resolution::Low)), Resolution::Low);
        assert_eq!(select_resolution(Some("-800x600"), Some(Resolution::Low)), Resolution::Low);
        assert_eq!(select_resolution(Some("640x480x3"), Some(Resolution::High)), Resolution::High);
        assert_eq!(select_resolution(Some(""), Some(Resolution::Low)), Resolution::Low);
    }

    #[test]
    fn test_defaults_to_high() {
        assert_eq!(select_resolution(None, None), Resolution::High);
        assert_eq!(Resolution::default(), Resolution::High);
    }

    #[test]
    fn test_explicit_tier_without_hint() {
        assert_eq!(select_resolution(None, Some(Resolution::Low)), Resolution::Low);
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&Resolution::Low).unwrap(), r#""480p""#);
        let tier: Resolution = serde_json::from_str(r#""720p""#).unwrap();
        assert_eq!(tier, Resolution::High);
        assert_eq!(Resolution::Low.to_string(), "480p");
    }
}
