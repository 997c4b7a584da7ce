use crate::gladiator::{BaseSkills, BaseStats};
use crate::state::Position;

/// Built-in game variants. See [`crate::rules::Rules::for_variant`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    /// Tight shrink: the dungeon hugs the living gladiators.
    #[default]
    Arena,
    /// Padded shrink: one spare tile around the living gladiators.
    Pit,
}

impl Variant {
    /// Human-readable game name used for persisted histories.
    pub fn game_name(self) -> &'static str {
        match self {
            Variant::Arena => "Arena",
            Variant::Pit => "Pit",
        }
    }
}

/// Explicit description of one gladiator at setup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GladiatorSpec {
    pub name: String,
    pub team: u32,
    pub stats: BaseStats,
    pub skills: BaseSkills,
    /// Starting position; rolled from the seed when `None`.
    pub pos: Option<Position>,
    pub range: u32,
}

impl GladiatorSpec {
    pub fn new(name: impl Into<String>, team: u32) -> Self {
        Self {
            name: name.into(),
            team,
            stats: BaseStats::default(),
            skills: BaseSkills::default(),
            pos: None,
            range: 1,
        }
    }

    pub fn at(mut self, pos: Position) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_skills(mut self, skills: BaseSkills) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_range(mut self, range: u32) -> Self {
        self.range = range;
        self
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    pub variant: Variant,
    pub seed: u64,
    /// Number of default gladiators when `gladiators` is empty.
    pub players: usize,
    /// Explicit roster; overrides `players` when non-empty.
    pub gladiators: Vec<GladiatorSpec>,
    /// Game ends once the clock reaches this tick.
    pub max_ticks: u64,
    /// Game ends once this many events have been executed.
    pub max_events: u64,
    /// Reject moves that were not offered instead of scheduling them.
    pub strict_moves: bool,
}

impl ArenaConfig {
    pub const MAX_PLAYERS: usize = 64;
    pub const DEFAULT_PLAYERS: usize = 2;
    pub const DEFAULT_MAX_TICKS: u64 = 100_000;
    pub const DEFAULT_MAX_EVENTS: u64 = 10_000;
    /// Largest absolute coordinate accepted for an explicit spawn.
    pub const MAX_COORD: i32 = 1 << 20;

    pub fn new() -> Self {
        Self {
            variant: Variant::default(),
            seed: 0,
            players: Self::DEFAULT_PLAYERS,
            gladiators: Vec::new(),
            max_ticks: Self::DEFAULT_MAX_TICKS,
            max_events: Self::DEFAULT_MAX_EVENTS,
            strict_moves: false,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    pub fn with_gladiators(mut self, gladiators: Vec<GladiatorSpec>) -> Self {
        self.gladiators = gladiators;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn with_max_events(mut self, max_events: u64) -> Self {
        self.max_events = max_events;
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict_moves = true;
        self
    }

    /// Number of gladiators the game will start with.
    pub fn roster_size(&self) -> usize {
        if self.gladiators.is_empty() {
            self.players
        } else {
            self.gladiators.len()
        }
    }

    /// Checks the configuration before a game is built from it.
    pub fn validate(&self) -> Result<(), &'static str> {
        let size = self.roster_size();
        if size < 2 {
            return Err("a game needs at least two gladiators");
        }
        if size > Self::MAX_PLAYERS {
            return Err("too many gladiators");
        }
        if self.gladiators.iter().any(|spec| spec.range == 0) {
            return Err("attack range must be at least 1");
        }
        let mut placed: Vec<Position> = self.gladiators.iter().filter_map(|s| s.pos).collect();
        let limit = Self::MAX_COORD.unsigned_abs();
        if placed
            .iter()
            .any(|p| p.x.unsigned_abs() > limit || p.y.unsigned_abs() > limit)
        {
            return Err("starting position too far from the origin");
        }
        placed.sort_unstable();
        if placed.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err("two gladiators share a starting position");
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
