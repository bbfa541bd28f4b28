use std::fmt;

use crate::error::guild::GuildSettingError;

/// Largest value an embed color may take.
pub const MAX_EMBED_COLOR: u32 = 0xFF_FFFF;

/// Values a guild receives the first time the bot sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuildDefaults {
    pub language: String,
    pub timezone: i32,
    pub weather_city: String,
    pub news_country: String,
    pub embed_color: u32,
}

impl Default for GuildDefaults {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timezone: 0,
            weather_city: "London".to_string(),
            news_country: "us".to_string(),
            embed_color: 0,
        }
    }
}

/// Per-guild configuration as held by the guild registry.
///
/// Records are immutable once shared; updates clone the record, apply the change
/// and swap the new value into the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuildRecord {
    pub guild_id: String,
    pub language: String,
    /// Offset from UTC in whole hours.
    pub timezone: i32,
    pub weather_city: String,
    pub news_country: String,
    pub embed_color: u32,
}

impl GuildRecord {
    pub fn with_defaults(guild_id: &str, defaults: &GuildDefaults) -> Self {
        Self {
            guild_id: guild_id.to_string(),
            language: defaults.language.clone(),
            timezone: defaults.timezone,
            weather_city: defaults.weather_city.clone(),
            news_country: defaults.news_country.clone(),
            embed_color: defaults.embed_color,
        }
    }

    pub fn from_entity(entity: entity::guild_config::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            language: entity.language,
            timezone: entity.timezone,
            weather_city: entity.weather_city,
            news_country: entity.news_country,
            embed_color: (entity.embed_color.max(0) as u32).min(MAX_EMBED_COLOR),
        }
    }

    /// Applies a single setting change to this record.
    pub fn apply(&mut self, setting: &GuildSetting) {
        match setting {
            GuildSetting::Language(value) => self.language = value.clone(),
            GuildSetting::Timezone(value) => self.timezone = *value,
            GuildSetting::WeatherCity(value) => self.weather_city = value.clone(),
            GuildSetting::NewsCountry(value) => self.news_country = value.clone(),
            GuildSetting::EmbedColor(value) => self.embed_color = *value,
        }
    }

    /// Current value of each settable key, in `!b conflist` order.
    pub fn settings(&self) -> Vec<(&'static str, String)> {
        vec![
            (GuildSetting::LANGUAGE, self.language.clone()),
            (GuildSetting::TIMEZONE, self.timezone.to_string()),
            (GuildSetting::WEATHER_CITY, self.weather_city.clone()),
            (GuildSetting::NEWS_COUNTRY, self.news_country.clone()),
            (GuildSetting::EMBED_COLOR, format!("#{:06x}", self.embed_color)),
        ]
    }
}

/// A single configuration change for a guild.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuildSetting {
    Language(String),
    Timezone(i32),
    WeatherCity(String),
    NewsCountry(String),
    EmbedColor(u32),
}

impl GuildSetting {
    pub const LANGUAGE: &'static str = "general.language";
    pub const TIMEZONE: &'static str = "general.timezone";
    pub const WEATHER_CITY: &'static str = "weather.city";
    pub const NEWS_COUNTRY: &'static str = "news.country";
    pub const EMBED_COLOR: &'static str = "embed.color";

    pub const KEYS: [&'static str; 5] = [
        Self::LANGUAGE,
        Self::TIMEZONE,
        Self::WEATHER_CITY,
        Self::NEWS_COUNTRY,
        Self::EMBED_COLOR,
    ];

    /// Parses a `section.key` name and its raw value.
    ///
    /// Keys are matched case-insensitively. Text values are trimmed and must not be
    /// empty; the language code is lowercased.
    pub fn parse(key: &str, value: &str) -> Result<Self, GuildSettingError> {
        let key = key.to_lowercase();
        let value = value.trim();

        if !Self::KEYS.contains(&key.as_str()) {
            return Err(GuildSettingError::UnknownSetting(key));
        }

        let invalid = |reason: String| GuildSettingError::InvalidValue {
            key: key.clone(),
            value: value.to_string(),
            reason,
        };
        if value.is_empty() {
            return Err(invalid("value must not be empty".to_string()));
        }

        match key.as_str() {
            Self::LANGUAGE => Ok(Self::Language(value.to_lowercase())),
            Self::TIMEZONE => value
                .parse::<i32>()
                .map(Self::Timezone)
                .map_err(|e| invalid(e.to_string())),
            Self::WEATHER_CITY => Ok(Self::WeatherCity(value.to_string())),
            Self::NEWS_COUNTRY => Ok(Self::NewsCountry(value.to_string())),
            _ => parse_embed_color(value).map(Self::EmbedColor).map_err(invalid),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Language(_) => Self::LANGUAGE,
            Self::Timezone(_) => Self::TIMEZONE,
            Self::WeatherCity(_) => Self::WEATHER_CITY,
            Self::NewsCountry(_) => Self::NEWS_COUNTRY,
            Self::EmbedColor(_) => Self::EMBED_COLOR,
        }
    }
}

impl fmt::Display for GuildSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Language(v) | Self::WeatherCity(v) | Self::NewsCountry(v) => {
                write!(f, "{} = {}", self.key(), v)
            }
            Self::Timezone(v) => write!(f, "{} = {}", self.key(), v),
            Self::EmbedColor(v) => write!(f, "{} = #{:06x}", self.key(), v),
        }
    }
}

/// Parses a hex color with an optional leading `#`.
pub fn parse_embed_color(value: &str) -> Result<u32, String> {
    let hex = value.trim().trim_start_matches('#');
    let color = u32::from_str_radix(hex, 16).map_err(|e| e.to_string())?;
    if color > MAX_EMBED_COLOR {
        return Err(format!("color must not exceed #{:06x}", MAX_EMBED_COLOR));
    }
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_setting_key() {
        assert_eq!(
            GuildSetting::parse("general.language", "FR").unwrap(),
            GuildSetting::Language("fr".to_string())
        );
        assert_eq!(
            GuildSetting::parse("general.timezone", "-5").unwrap(),
            GuildSetting::Timezone(-5)
        );
        assert_eq!(
            GuildSetting::parse("weather.city", " Berlin ").unwrap(),
            GuildSetting::WeatherCity("Berlin".to_string())
        );
        assert_eq!(
            GuildSetting::parse("news.country", "de").unwrap(),
            GuildSetting::NewsCountry("de".to_string())
        );
        assert_eq!(
            GuildSetting::parse("Embed.Color", "#1abc9c").unwrap(),
            GuildSetting::EmbedColor(0x1abc9c)
        );
    }

    #[test]
    fn rejects_unknown_key() {
        assert!(matches!(
            GuildSetting::parse("general.nick", "herald"),
            Err(GuildSettingError::UnknownSetting(key)) if key == "general.nick"
        ));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(matches!(
            GuildSetting::parse("general.timezone", "UTC+2"),
            Err(GuildSettingError::InvalidValue { .. })
        ));
        assert!(matches!(
            GuildSetting::parse("embed.color", "1000000"),
            Err(GuildSettingError::InvalidValue { .. })
        ));
        assert!(matches!(
            GuildSetting::parse("weather.city", "   "),
            Err(GuildSettingError::InvalidValue { .. })
        ));
    }

    #[test]
    fn applies_setting_to_record() {
        let mut record = GuildRecord::with_defaults("G1", &GuildDefaults::default());
        record.apply(&GuildSetting::EmbedColor(0xff0000));
        record.apply(&GuildSetting::Timezone(3));

        assert_eq!(record.embed_color, 0xff0000);
        assert_eq!(record.timezone, 3);
        assert_eq!(record.language, "en");
    }

    #[test]
    fn displays_color_as_hex() {
        assert_eq!(
            GuildSetting::EmbedColor(0x00ff00).to_string(),
            "embed.color = #00ff00"
        );
    }
}
