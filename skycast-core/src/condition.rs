//! Condition-to-background mapping.
//!
//! Every screen picks its background image through this one lookup; the
//! home screen and the details screens must never diverge on the fallback.

/// Identifier of a background image asset, one per recognized weather
/// condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Clear,
    Clouds,
    Drizzle,
    Dust,
    Fog,
    Haze,
    Mist,
    Rain,
    Sand,
    Smoke,
    Snow,
    Squall,
    Tornado,
    Thunderstorm,
}

impl AssetKey {
    /// Resolve a condition category keyword to its asset key, matching
    /// case-insensitively. Anything outside the closed set, including the
    /// empty string, resolves to [`AssetKey::Clouds`].
    pub fn from_condition(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "clear" => AssetKey::Clear,
            "clouds" => AssetKey::Clouds,
            "drizzle" => AssetKey::Drizzle,
            "dust" => AssetKey::Dust,
            "fog" => AssetKey::Fog,
            "haze" => AssetKey::Haze,
            "mist" => AssetKey::Mist,
            "rain" => AssetKey::Rain,
            "sand" => AssetKey::Sand,
            "smoke" => AssetKey::Smoke,
            "snow" => AssetKey::Snow,
            "squall" => AssetKey::Squall,
            "tornado" => AssetKey::Tornado,
            "thunderstorm" => AssetKey::Thunderstorm,
            _ => AssetKey::Clouds,
        }
    }

    /// Asset identifier, also the stem of the background image file.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKey::Clear => "clear",
            AssetKey::Clouds => "clouds",
            AssetKey::Drizzle => "drizzle",
            AssetKey::Dust => "dust",
            AssetKey::Fog => "fog",
            AssetKey::Haze => "haze",
            AssetKey::Mist => "mist",
            AssetKey::Rain => "rain",
            AssetKey::Sand => "sand",
            AssetKey::Smoke => "smoke",
            AssetKey::Snow => "snow",
            AssetKey::Squall => "squall",
            AssetKey::Tornado => "tornado",
            AssetKey::Thunderstorm => "thunderstorm",
        }
    }

    pub const fn all() -> &'static [AssetKey] {
        &[
            AssetKey::Clear,
            AssetKey::Clouds,
            AssetKey::Drizzle,
            AssetKey::Dust,
            AssetKey::Fog,
            AssetKey::Haze,
            AssetKey::Mist,
            AssetKey::Rain,
            AssetKey::Sand,
            AssetKey::Smoke,
            AssetKey::Snow,
            AssetKey::Squall,
            AssetKey::Tornado,
            AssetKey::Thunderstorm,
        ]
    }
}

/// The fallback also doubles as the background shown before the first
/// fetch completes.
impl Default for AssetKey {
    fn default() -> Self {
        AssetKey::Clouds
    }
}

impl std::fmt::Display for AssetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
