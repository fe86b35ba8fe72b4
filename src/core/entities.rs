//! Bird, pipe and playfield records.
//!
//! Coordinates are in playfield units. `y` has its origin at the ground and
//! grows upward. A pipe's `pos_x` is measured from the spawn edge and grows
//! as the pipe approaches the bird.

use super::config::SessionParams;
use super::error::ConfigError;
use super::recycler::random_pipe_height;
use rand::Rng;

/// Playfield dimensions, constant for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: super::constants::DEFAULT_PLAYFIELD_WIDTH,
            height: super::constants::DEFAULT_PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidPlayfield { width, height });
        }
        Ok(Self { width, height })
    }

    /// Horizontal distance between consecutive pipes.
    pub fn pipe_spacing(&self, params: &SessionParams) -> f64 {
        params.pipe_spacing_ratio * self.width
    }

    pub fn pipe_width(&self, params: &SessionParams) -> f64 {
        params.pipe_width_ratio * self.width
    }

    /// Vertical opening of every pipe.
    pub fn pipe_gap(&self, params: &SessionParams) -> f64 {
        params.gap_ratio * self.height
    }

    /// Pool size that keeps the screen filled while pipes recycle.
    pub fn pipe_count(&self, params: &SessionParams) -> usize {
        let spacing = self.pipe_spacing(params);
        let width = self.pipe_width(params);
        ((self.width + spacing) / (spacing + width)).floor() as usize + 1
    }
}

/// The player. Its horizontal position never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub pos_x: f64,
    pub pos_y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical speed per tick, positive upward.
    pub velocity: f64,
}

impl Bird {
    /// Spawn a bird centred in the playfield at rest.
    pub fn spawn(playfield: &Playfield, params: &SessionParams) -> Self {
        let size = params.bird_size_ratio * playfield.width;
        Self {
            pos_x: playfield.width / 2.0 - size / 2.0,
            pos_y: playfield.height / 2.0 - size / 2.0,
            width: size,
            height: size,
            velocity: 0.0,
        }
    }

    pub fn top(&self) -> f64 {
        self.pos_y + self.height
    }
}

/// A lower and an upper column separated by a single gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub pos_x: f64,
    pub width: f64,
    /// Height of the lower column.
    pub height: f64,
    /// Vertical opening between the columns.
    pub gap: f64,
    /// Whether this pipe already awarded a point on its current pass.
    pub passed: bool,
}

impl Pipe {
    /// Height of the upper column.
    pub fn upper_height(&self, playfield: &Playfield) -> f64 {
        playfield.height - self.height - self.gap
    }

    /// Top edge of the gap band.
    pub fn gap_top(&self) -> f64 {
        self.height + self.gap
    }
}

/// Build the initial pipe pool, staggered one spacing apart behind the
/// spawn edge.
pub fn spawn_pipes<R: Rng>(
    playfield: &Playfield,
    params: &SessionParams,
    rng: &mut R,
) -> Vec<Pipe> {
    let count = playfield.pipe_count(params);
    let spacing = playfield.pipe_spacing(params);
    let width = playfield.pipe_width(params);
    let gap = playfield.pipe_gap(params);

    (0..count)
        .map(|i| Pipe {
            pos_x: -width - spacing * i as f64,
            width,
            height: random_pipe_height(playfield, params, rng),
            gap,
            passed: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_bird_spawns_centred() {
        let playfield = Playfield::default();
        let bird = Bird::spawn(&playfield, &SessionParams::default());
        assert!((bird.width - 30.0).abs() < 1e-9);
        assert!((bird.pos_x - 135.0).abs() < 1e-9);
        assert!((bird.pos_y - 285.0).abs() < 1e-9);
        assert_eq!(bird.velocity, 0.0);
    }

    #[test]
    fn test_pipe_count_for_default_playfield() {
        // spacing 200, width 50: floor(500 / 250) + 1
        let playfield = Playfield::default();
        assert_eq!(playfield.pipe_count(&SessionParams::default()), 3);
    }

    #[test]
    fn test_spawn_pipes_staggered() {
        let playfield = Playfield::default();
        let params = SessionParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pipes = spawn_pipes(&playfield, &params, &mut rng);

        let spacing = playfield.pipe_spacing(&params);
        for (i, pipe) in pipes.iter().enumerate() {
            let expected = -pipe.width - spacing * i as f64;
            assert!((pipe.pos_x - expected).abs() < 1e-9);
            assert!((pipe.gap - 150.0).abs() < 1e-9);
            assert!(pipe.height >= 120.0 && pipe.height <= 180.0);
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn test_single_gap_band() {
        let playfield = Playfield::default();
        let pipe = Pipe {
            pos_x: 0.0,
            width: 50.0,
            height: 150.0,
            gap: 150.0,
            passed: false,
        };
        let total = pipe.height + pipe.gap + pipe.upper_height(&playfield);
        assert!((total - playfield.height).abs() < 1e-9);
        assert!((pipe.gap_top() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_playfield_rejected() {
        assert!(Playfield::new(0.0, 100.0).is_err());
        assert!(Playfield::new(f64::NAN, 100.0).is_err());
        assert!(Playfield::new(300.0, 600.0).is_ok());
    }
}
