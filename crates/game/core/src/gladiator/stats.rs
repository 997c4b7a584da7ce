//! Base attributes and temporary boosts.
//!
//! Stats (strength, dexterity, constitution) are fixed at creation. Skills
//! (accuracy, evasion, speed) are fixed too, but a gladiator can focus to
//! gain additive boosts on top of them. Derived attributes are computed in
//! [`super::Gladiator`] from the effective (base + boost) values.

/// Physical stats. Immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub strength: u32,
    pub dexterity: u32,
    pub constitution: u32,
}

impl BaseStats {
    pub const fn new(strength: u32, dexterity: u32, constitution: u32) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
        }
    }
}

impl Default for BaseStats {
    fn default() -> Self {
        Self::new(2, 2, 2)
    }
}

/// Trained skills. Immutable after creation; boosts are tracked separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseSkills {
    pub accuracy: u32,
    pub evasion: u32,
    pub speed: u32,
}

impl BaseSkills {
    pub const fn new(accuracy: u32, evasion: u32, speed: u32) -> Self {
        Self {
            accuracy,
            evasion,
            speed,
        }
    }

    pub const fn get(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Accuracy => self.accuracy,
            Skill::Evasion => self.evasion,
            Skill::Speed => self.speed,
        }
    }
}

impl Default for BaseSkills {
    fn default() -> Self {
        Self::new(2, 2, 2)
    }
}

/// Skill that can be boosted.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Skill {
    Accuracy,
    Evasion,
    Speed,
}

/// Additive per-skill boosts. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boosts {
    pub accuracy: u32,
    pub evasion: u32,
    pub speed: u32,
}

impl Boosts {
    pub const fn get(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Accuracy => self.accuracy,
            Skill::Evasion => self.evasion,
            Skill::Speed => self.speed,
        }
    }

    /// Adds up to `amount`, never exceeding `cap`. Returns what was applied.
    pub fn add(&mut self, skill: Skill, amount: u32, cap: u32) -> u32 {
        let slot = match skill {
            Skill::Accuracy => &mut self.accuracy,
            Skill::Evasion => &mut self.evasion,
            Skill::Speed => &mut self.speed,
        };
        let applied = amount.min(cap.saturating_sub(*slot));
        *slot += applied;
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boosts_are_capped() {
        let mut boosts = Boosts::default();
        assert_eq!(boosts.add(Skill::Speed, 2, 3), 2);
        assert_eq!(boosts.add(Skill::Speed, 2, 3), 1);
        assert_eq!(boosts.add(Skill::Speed, 2, 3), 0);
        assert_eq!(boosts.get(Skill::Speed), 3);
        assert_eq!(boosts.get(Skill::Accuracy), 0);
    }

    #[test]
    fn skill_names_are_snake_case() {
        assert_eq!(Skill::Accuracy.as_ref(), "accuracy");
        assert_eq!(Skill::Speed.as_ref(), "speed");
    }
}
