use std::time::Duration;

use crate::{
    error::{config::ConfigError, AppError},
    model::guild::{parse_embed_color, GuildDefaults},
};

const TWITCH_API_URL: &str = "https://api.twitch.tv/helix";
const STREAM_SWEEP_SCHEDULE: &str = "0 * * * * *";
const STREAM_REQUEST_TIMEOUT_MS: u64 = 1000;
const GATEWAY_TIMEOUT_MS: u64 = 5000;

pub struct TwitchConfig {
    pub api_url: String,
    pub client_id: String,
    pub access_token: Option<String>,
    pub request_timeout: Duration,
}

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Discord user allowed to run the bot-admin commands (`!b logs`, `!b stats`).
    pub bot_admin_id: Option<u64>,
    pub bot_activity: Option<String>,
    pub gateway_timeout: Duration,

    pub stream_sweep_schedule: String,
    pub twitch: TwitchConfig,

    pub guild_defaults: GuildDefaults,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let millis = |name: &str, default: u64| -> Result<Duration, ConfigError> {
            match optional(name) {
                None => Ok(Duration::from_millis(default)),
                Some(value) => value
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|e| invalid(name, &value, e.to_string())),
            }
        };

        let bot_admin_id = match optional("BOT_ADMIN_ID") {
            None => None,
            Some(value) => Some(
                value
                    .parse::<u64>()
                    .map_err(|e| invalid("BOT_ADMIN_ID", &value, e.to_string()))?,
            ),
        };

        let timezone = match optional("DEFAULT_TIMEZONE") {
            None => 0,
            Some(value) => value
                .parse::<i32>()
                .map_err(|e| invalid("DEFAULT_TIMEZONE", &value, e.to_string()))?,
        };

        let embed_color = match optional("DEFAULT_EMBED_COLOR") {
            None => 0,
            Some(value) => parse_embed_color(&value)
                .map_err(|reason| invalid("DEFAULT_EMBED_COLOR", &value, reason))?,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            bot_admin_id,
            bot_activity: optional("BOT_ACTIVITY"),
            gateway_timeout: millis("GATEWAY_TIMEOUT_MS", GATEWAY_TIMEOUT_MS)?,
            stream_sweep_schedule: optional("STREAM_SWEEP_SCHEDULE")
                .unwrap_or_else(|| STREAM_SWEEP_SCHEDULE.to_string()),
            twitch: TwitchConfig {
                api_url: optional("TWITCH_API_URL")
                    .unwrap_or_else(|| TWITCH_API_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                client_id: required("TWITCH_CLIENT_ID")?,
                access_token: optional("TWITCH_ACCESS_TOKEN"),
                request_timeout: millis("STREAM_REQUEST_TIMEOUT_MS", STREAM_REQUEST_TIMEOUT_MS)?,
            },
            guild_defaults: GuildDefaults {
                language: optional("DEFAULT_LANGUAGE").unwrap_or_else(|| "en".to_string()),
                timezone,
                weather_city: optional("DEFAULT_WEATHER_CITY")
                    .unwrap_or_else(|| "London".to_string()),
                news_country: optional("DEFAULT_NEWS_COUNTRY").unwrap_or_else(|| "us".to_string()),
                embed_color,
            },
        })
    }
}

fn invalid(name: &str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    }
}
