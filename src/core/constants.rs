// Tick and timing
/// Duration of one physics tick in seconds of simulated time.
pub const FIXED_STEP: f64 = 1.0 / 60.0;
/// Target interval between rendered frames in the terminal loop.
pub const FRAME_INTERVAL_MS: u64 = 16;
/// Input poll timeout while a menu screen is shown.
pub const MENU_POLL_MS: u64 = 50;

// Playfield (abstract units, origin at the ground, y grows upward)
pub const DEFAULT_PLAYFIELD_WIDTH: f64 = 300.0;
pub const DEFAULT_PLAYFIELD_HEIGHT: f64 = 600.0;

// Bird physics, per tick
pub const DEFAULT_GRAVITY: f64 = 0.009;
pub const DEFAULT_JUMP_IMPULSE: f64 = 1.0;
pub const DEFAULT_TERMINAL_VELOCITY: f64 = -3.0;

// Pipe movement
pub const DEFAULT_PIPE_BASE_RATE: f64 = 0.5;
pub const DEFAULT_TIME_INCREASING_FACTOR: f64 = 0.05;

// Proportions relative to the playfield
pub const DEFAULT_PIPE_SPACING_RATIO: f64 = 2.0 / 3.0;
pub const DEFAULT_PIPE_WIDTH_RATIO: f64 = 1.0 / 6.0;
pub const DEFAULT_GAP_RATIO: f64 = 0.25;
pub const DEFAULT_HEIGHT_MIN_RATIO: f64 = 0.2;
pub const DEFAULT_HEIGHT_MAX_RATIO: f64 = 0.3;
pub const DEFAULT_BIRD_SIZE_RATIO: f64 = 0.1;
pub const DEFAULT_GROUND_TOLERANCE: f64 = 0.02;

/// Longest frame delta fed to the accumulator, in seconds.
pub const DEFAULT_MAX_FRAME_DELTA: f64 = 0.25;

/// Smallest `pipe_spacing_ratio + pipe_width_ratio` accepted. Keeps the pipe
/// pool at a few dozen pipes at most.
pub const MIN_PIPE_PITCH_RATIO: f64 = 0.05;

// Files in the data directory
pub const PARAMS_FILE: &str = "params.json";
pub const HIGH_SCORE_FILE: &str = "best_score.json";
pub const LOG_FILE: &str = "flappy.log";
