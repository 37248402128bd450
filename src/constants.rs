// Central constants for timing, game rules, and embed colors.

/// How often the reminder poller checks the database for due rows.
pub const REMINDER_POLL_INTERVAL_SECS: u64 = 1;

/// A game session that has seen no input for this long is considered abandoned.
pub const SESSION_IDLE_TIMEOUT_SECS: u64 = 300;
/// How often the background sweeper looks for abandoned sessions.
pub const SESSION_SWEEP_INTERVAL_SECS: u64 = 30;

/// The dealer draws while below this score (stand-on-17).
pub const DEALER_STANDS_AT: u8 = 17;
/// Bust threshold and the blackjack target.
pub const BLACKJACK_TARGET: u8 = 21;

// Embed colors, Discord palette.
pub const COLOR_TABLE: u32 = 0x2E7D32; // green felt
pub const COLOR_WIN: u32 = 0x57F287;
pub const COLOR_LOSS: u32 = 0xED4245;
pub const COLOR_PUSH: u32 = 0xFEE75C;
pub const COLOR_INFO: u32 = 0x5865F2;
