mod bot_log;
mod guild_config;
mod stream_watch;
