//! Gladiators: combat units with stats, derived attributes and action costs.
//!
//! Death is a state, not a removal: a gladiator with zero hit points stays in
//! the roster so indices remain stable, but it never acts, never attacks and
//! never loses more hit points.

pub mod stats;

pub use stats::{BaseSkills, BaseStats, Boosts, Skill};

use crate::action::MoveKind;
use crate::combat::{self, AttackOutcome, AttackRolls, CombatParams};
use crate::state::{Direction, Position, Tick};

/// A combat unit controlled by an agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gladiator {
    pub name: String,
    pub team: u32,
    base_stats: BaseStats,
    base_skills: BaseSkills,
    boosts: Boosts,
    cur_hp: u32,
    cur_sp: u32,
    pos: Position,
    range: u32,
    damage_dealt: u32,
}

impl Gladiator {
    /// Highest boost a single skill can carry.
    pub const MAX_BOOST: u32 = 3;
    /// Speed offset in the cost formula; higher means speed matters less.
    pub const SPEED_SCALE: u64 = 10;
    pub const MOVE_COST: u64 = 100;
    pub const ATTACK_COST: u64 = 100;
    pub const STAY_COST: u64 = 50;
    /// Cost per boost point.
    pub const FOCUS_COST: u64 = 60;
    /// Stamina recovered by staying put.
    pub const REST_RECOVERY: u32 = 2;

    /// Creates a gladiator at full health and stamina with range 1.
    pub fn new(
        name: impl Into<String>,
        team: u32,
        base_stats: BaseStats,
        base_skills: BaseSkills,
        pos: Position,
    ) -> Self {
        let mut gladiator = Self {
            name: name.into(),
            team,
            base_stats,
            base_skills,
            boosts: Boosts::default(),
            cur_hp: 0,
            cur_sp: 0,
            pos,
            range: 1,
            damage_dealt: 0,
        };
        gladiator.cur_hp = gladiator.max_hp();
        gladiator.cur_sp = gladiator.max_sp();
        gladiator
    }

    /// Overrides the attack range (at least 1).
    pub fn with_range(mut self, range: u32) -> Self {
        self.range = range.max(1);
        self
    }

    /// Overrides current hit points and stamina, clamped to their maxima.
    pub fn with_resources(mut self, hp: u32, sp: u32) -> Self {
        self.cur_hp = hp.min(self.max_hp());
        self.cur_sp = sp.min(self.max_sp());
        self
    }

    // ===== base values =====

    pub fn stats(&self) -> BaseStats {
        self.base_stats
    }

    /// Base skills with boosts applied.
    pub fn skills(&self) -> BaseSkills {
        BaseSkills {
            accuracy: self.skill(Skill::Accuracy),
            evasion: self.skill(Skill::Evasion),
            speed: self.skill(Skill::Speed),
        }
    }

    pub fn base_skills(&self) -> BaseSkills {
        self.base_skills
    }

    pub fn boosts(&self) -> Boosts {
        self.boosts
    }

    fn skill(&self, skill: Skill) -> u32 {
        self.base_skills.get(skill) + self.boosts.get(skill)
    }

    // ===== derived attributes =====

    pub fn accuracy(&self) -> u32 {
        self.base_stats.dexterity + self.skill(Skill::Accuracy)
    }

    pub fn evasion(&self) -> u32 {
        self.base_stats.dexterity + self.skill(Skill::Evasion)
    }

    pub fn base_damage(&self) -> u32 {
        2 + self.base_stats.strength
    }

    pub fn base_protection(&self) -> u32 {
        self.base_stats.constitution / 2
    }

    pub fn damage(&self) -> u32 {
        self.base_damage()
    }

    pub fn protection(&self) -> u32 {
        self.base_protection()
    }

    pub fn max_hp(&self) -> u32 {
        10 + 5 * self.base_stats.constitution
    }

    pub fn max_sp(&self) -> u32 {
        5 + 2 * self.base_stats.constitution
    }

    pub fn speed(&self) -> u32 {
        self.skill(Skill::Speed) + self.base_stats.dexterity / 2
    }

    // ===== runtime state =====

    pub fn cur_hp(&self) -> u32 {
        self.cur_hp
    }

    pub fn cur_sp(&self) -> u32 {
        self.cur_sp
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    pub fn damage_dealt(&self) -> u32 {
        self.damage_dealt
    }

    pub fn is_dead(&self) -> bool {
        self.cur_hp == 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    /// Remaining boost capacity for a skill.
    pub fn boost_headroom(&self, skill: Skill) -> u32 {
        Self::MAX_BOOST.saturating_sub(self.boosts.get(skill))
    }

    /// `true` if `other` is within attack range.
    pub fn reaches(&self, other: Position) -> bool {
        self.pos.distance(other) <= self.range
    }

    // ===== costs =====

    /// Time cost in ticks of an action. `value` only matters for focus.
    ///
    /// ```text
    /// cost = base_cost * SPEED_SCALE / (SPEED_SCALE + speed), at least 1
    /// ```
    ///
    /// An exhausted gladiator (no stamina left) pays double for attacks.
    pub fn cost(&self, kind: MoveKind, value: u32) -> Tick {
        let base = match kind {
            MoveKind::Stay => Self::STAY_COST,
            MoveKind::Move => Self::MOVE_COST,
            MoveKind::Attack if self.cur_sp == 0 => Self::ATTACK_COST * 2,
            MoveKind::Attack => Self::ATTACK_COST,
            MoveKind::Focus => Self::FOCUS_COST * u64::from(value.max(1)),
        };
        let scaled = base * Self::SPEED_SCALE / (Self::SPEED_SCALE + u64::from(self.speed()));
        Tick(scaled.max(1))
    }

    // ===== actions =====

    /// Attacks `target`. Range-gated: out of range, or either side dead,
    /// leaves both untouched and yields [`AttackOutcome::Ineffective`].
    pub fn attack(
        &mut self,
        target: &mut Gladiator,
        rolls: AttackRolls,
        params: &CombatParams,
    ) -> AttackOutcome {
        if self.is_dead() || target.is_dead() || !self.reaches(target.pos) {
            return AttackOutcome::Ineffective;
        }

        self.cur_sp = self.cur_sp.saturating_sub(1);

        if !combat::check_hit(self.accuracy(), target.evasion(), rolls.hit, params) {
            return AttackOutcome::Miss;
        }

        let variance = rolls.variance.min(params.variance_max);
        let raw = combat::calculate_damage(self.damage(), target.protection(), variance);
        let (new_hp, applied) = combat::apply_damage(target.cur_hp, raw);
        target.cur_hp = new_hp;
        self.damage_dealt += applied;

        AttackOutcome::Hit {
            damage: applied,
            killed: target.is_dead(),
        }
    }

    /// Translates position by one step. No bounds check; no-op when dead.
    pub fn step(&mut self, direction: Direction) {
        if self.is_dead() {
            return;
        }
        self.pos = self.pos.step(direction);
    }

    /// Recovers stamina.
    pub fn rest(&mut self) {
        if self.is_dead() {
            return;
        }
        self.cur_sp = (self.cur_sp + Self::REST_RECOVERY).min(self.max_sp());
    }

    /// Adds a skill boost, capped at [`Self::MAX_BOOST`]. Returns the amount applied.
    pub fn boost(&mut self, skill: Skill, amount: u32) -> u32 {
        if self.is_dead() {
            return 0;
        }
        self.boosts.add(skill, amount, Self::MAX_BOOST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(pos: Position) -> Gladiator {
        Gladiator::new("Maximus", 1, BaseStats::default(), BaseSkills::default(), pos)
    }

    #[test]
    fn derived_attributes_from_defaults() {
        let g = fighter(Position::ORIGIN);
        assert_eq!(g.accuracy(), 4);
        assert_eq!(g.evasion(), 4);
        assert_eq!(g.damage(), 4);
        assert_eq!(g.protection(), 1);
        assert_eq!(g.max_hp(), 20);
        assert_eq!(g.cur_hp(), 20);
        assert_eq!(g.max_sp(), 9);
        assert_eq!(g.speed(), 3);
        assert!(!g.is_dead());
    }

    #[test]
    fn explicit_stats_are_kept() {
        let stats = BaseStats::new(3, 1, 2);
        let skills = BaseSkills::new(1, 3, 2);
        let g = Gladiator::new("Vlad", 7, stats, skills, Position::ORIGIN).with_resources(1, 1);
        assert_eq!(g.name, "Vlad");
        assert_eq!(g.team, 7);
        assert_eq!(g.stats(), stats);
        assert_eq!(g.base_skills(), skills);
        assert_eq!(g.cur_hp(), 1);
        assert_eq!(g.cur_sp(), 1);
    }

    #[test]
    fn move_cost_decreases_with_speed() {
        let slow = Gladiator::new(
            "slow",
            0,
            BaseStats::default(),
            BaseSkills::new(2, 2, 0),
            Position::ORIGIN,
        );
        let fast = Gladiator::new(
            "fast",
            1,
            BaseStats::default(),
            BaseSkills::new(2, 2, 10),
            Position::ORIGIN,
        );
        assert!(fast.cost(MoveKind::Move, 0) < slow.cost(MoveKind::Move, 0));
        assert!(fast.cost(MoveKind::Move, 0) >= Tick(1));
    }

    #[test]
    fn costs_are_integral_ticks() {
        let g = fighter(Position::ORIGIN);
        // speed 3: 100 * 10 / 13 = 76
        assert_eq!(g.cost(MoveKind::Attack, 0), Tick(76));
        assert_eq!(g.cost(MoveKind::Stay, 0), Tick(38));
        assert_eq!(g.cost(MoveKind::Focus, 2), Tick(92));
    }

    #[test]
    fn out_of_range_attack_has_no_effect() {
        let mut a = fighter(Position::ORIGIN);
        let mut b = fighter(Position::new(2, 0));
        let sp_before = a.cur_sp();
        let outcome = a.attack(&mut b, AttackRolls::SURE_HIT, &CombatParams::default());
        assert_eq!(outcome, AttackOutcome::Ineffective);
        assert_eq!(outcome.damage(), 0);
        assert_eq!(b.cur_hp(), b.max_hp());
        assert_eq!(a.cur_sp(), sp_before);
    }

    #[test]
    fn hit_applies_damage_minus_protection() {
        let mut a = fighter(Position::ORIGIN);
        let mut b = fighter(Position::new(1, 1));
        let outcome = a.attack(&mut b, AttackRolls::SURE_HIT, &CombatParams::default());
        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                damage: 3,
                killed: false
            }
        );
        assert_eq!(b.cur_hp(), 17);
        assert_eq!(a.damage_dealt(), 3);
    }

    #[test]
    fn miss_deals_nothing() {
        let mut a = fighter(Position::ORIGIN);
        let mut b = fighter(Position::new(1, 0));
        let outcome = a.attack(&mut b, AttackRolls::SURE_MISS, &CombatParams::default());
        assert_eq!(outcome, AttackOutcome::Miss);
        assert_eq!(b.cur_hp(), b.max_hp());
    }

    #[test]
    fn death_is_terminal() {
        let mut a = fighter(Position::ORIGIN);
        let mut b = fighter(Position::new(1, 0)).with_resources(2, 5);
        let outcome = a.attack(&mut b, AttackRolls::SURE_HIT, &CombatParams::default());
        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                damage: 2,
                killed: true
            }
        );
        assert!(b.is_dead());
        assert_eq!(b.cur_hp(), 0);

        let again = a.attack(&mut b, AttackRolls::SURE_HIT, &CombatParams::default());
        assert_eq!(again, AttackOutcome::Ineffective);
        assert_eq!(b.cur_hp(), 0);

        let pos = b.pos();
        b.step(Direction::East);
        assert_eq!(b.pos(), pos);
        assert_eq!(b.boost(Skill::Speed, 1), 0);
    }

    #[test]
    fn boosts_raise_effective_skills() {
        let mut g = fighter(Position::ORIGIN);
        assert_eq!(g.boost(Skill::Accuracy, 2), 2);
        assert_eq!(g.skills().accuracy, 4);
        assert_eq!(g.accuracy(), 6);
        assert_eq!(g.boost_headroom(Skill::Accuracy), 1);
        assert_eq!(g.base_skills().accuracy, 2);
    }

    #[test]
    fn exhausted_attacks_cost_double() {
        let g = fighter(Position::ORIGIN).with_resources(20, 0);
        assert_eq!(g.cost(MoveKind::Attack, 0), Tick(153));
    }
}
