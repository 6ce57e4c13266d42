// UI Constants
pub const APP_TITLE: &str = "Parley";
pub const TYPING_LABEL: &str = "Bot is typing...";
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
pub const USER_PREFIX: &str = "You: ";
pub const BOT_PREFIX: &str = "Bot: ";
pub const SEND_BUTTON_LABEL: &str = "[ Send ]";
pub const SEND_BUTTON_WIDTH: u16 = 10;
pub const DEFAULT_VIEWPORT_WIDTH: usize = 80;
pub const DEFAULT_VIEWPORT_HEIGHT: usize = 20;

/// Rendered as the bot reply whenever a delivery fails.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again.";

// API Constants
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CHAT_PATH: &str = "/chat";
pub const SERVER_URL_ENV: &str = "PARLEY_SERVER_URL";

// Logging Constants
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "parley.log";
