// Constants for the Monkey REPL and token explorer

/// Prompt printed before every line in line mode
pub const PROMPT: &str = ">> ";

/// Number of submitted lines the explorer keeps for recall
pub const HISTORY_LIMIT: usize = 100;

/// How long the explorer waits for a key event before redrawing, in milliseconds
pub const POLL_INTERVAL_MS: u64 = 50;

/// Rows moved by PageUp / PageDown in a focused pane
pub const PAGE_SCROLL: usize = 10;
