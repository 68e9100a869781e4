//! Protocol constants and decision tuning defaults.

// --- Protocol ---

/// Sentinel line closing the initial world-state stream.
pub const END_INIT_SIGNAL: &str = "END_INIT";

/// Sentinel line ending the game.
pub const END_SIGNAL: &str = "END";

// --- Evasion ---

/// Projected miss distance below which a bullet is dodged (map units).
pub const DEFAULT_DANGER_RADIUS: f64 = 40.0;

/// How many turns ahead a closest approach still counts as imminent.
pub const DEFAULT_HORIZON_TURNS: f64 = 30.0;

/// How far ahead an evasion heading is probed against the map bounds.
pub const EVASION_PROBE_DISTANCE: f64 = 50.0;

// --- Random play ---

/// Full turn in engine degrees.
pub const FULL_TURN_DEG: f64 = 360.0;
