//! Characters, classes and the per-class formula tables.
//!
//! A class never changes how a character is structured, only which row of
//! the tables its formulas read. Each class maps to a [`ClassProfile`]
//! holding its damage and defense ranges and its special ability.

use rand::rngs::StdRng;

use crate::dice::RollRange;
use crate::error::{GameError, GameResult};

/// Attack every character starts with.
pub const BASE_ATTACK: i32 = 5;
/// Defense every character starts with.
pub const BASE_DEFENSE: i32 = 10;
/// Stamina every character starts with.
pub const BASE_STAMINA: i32 = 80;

/// One of the three paths a character can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// Close-quarters fighter.
    Warrior,
    /// Ranged elemental caster.
    Mage,
    /// Nature and spirit caster.
    Healer,
}

impl CharacterClass {
    /// All classes in the order they are offered to the player.
    pub const ALL: [Self; 3] = [Self::Warrior, Self::Mage, Self::Healer];

    /// Parse a class from a typed token, ignoring case and surrounding
    /// whitespace.
    pub fn from_token(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Some(Self::Warrior),
            "mage" => Some(Self::Mage),
            "healer" => Some(Self::Healer),
            _ => None,
        }
    }

    /// The token the player types to pick this class.
    pub fn token(self) -> &'static str {
        match self {
            Self::Warrior => "warrior",
            Self::Mage => "mage",
            Self::Healer => "healer",
        }
    }

    /// Display name for this class.
    pub fn name(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Healer => "Healer",
        }
    }

    /// Short pitch shown while the player is still choosing.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Warrior => {
                "Warrior: a daring close-combat fighter. Strong, hardy and brave."
            }
            Self::Mage => "Mage: a resourceful ranged fighter with a keen intellect.",
            Self::Healer => {
                "Healer: a mighty spellcaster who draws power from nature, faith and spirits."
            }
        }
    }

    /// The formula table row for this class.
    pub fn profile(self) -> ClassProfile {
        match self {
            Self::Warrior => ClassProfile {
                damage: RollRange::new(3, 5),
                defense: RollRange::new(5, 10),
                special: SpecialAbility {
                    stat: StatKind::Stamina,
                    bonus: 25,
                },
            },
            Self::Mage => ClassProfile {
                damage: RollRange::new(5, 10),
                defense: RollRange::new(-2, 2),
                special: SpecialAbility {
                    stat: StatKind::Attack,
                    bonus: 40,
                },
            },
            Self::Healer => ClassProfile {
                damage: RollRange::new(-3, -1),
                defense: RollRange::new(2, 5),
                special: SpecialAbility {
                    stat: StatKind::Defense,
                    bonus: 30,
                },
            },
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-class modifiers applied on top of a character's stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassProfile {
    /// Added to attack when dealing damage.
    pub damage: RollRange,
    /// Added to defense when blocking.
    pub defense: RollRange,
    /// The class's special ability.
    pub special: SpecialAbility,
}

/// A numeric stat on a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    /// Offensive power.
    Attack,
    /// Damage soaked when blocking.
    Defense,
    /// Endurance.
    Stamina,
}

impl StatKind {
    /// Display label for this stat.
    pub fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::Stamina => "Stamina",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A flat boost to one stat, reported but never applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialAbility {
    /// Which stat the ability boosts.
    pub stat: StatKind,
    /// How much is added to it.
    pub bonus: i32,
}

/// The outcome of using a special ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialOutcome {
    /// The stat that was boosted.
    pub stat: StatKind,
    /// The boosted value.
    pub value: i32,
}

/// Numeric stats of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Offensive power.
    pub attack: i32,
    /// Damage soaked when blocking.
    pub defense: i32,
    /// Endurance.
    pub stamina: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            attack: BASE_ATTACK,
            defense: BASE_DEFENSE,
            stamina: BASE_STAMINA,
        }
    }
}

impl Stats {
    /// Read a single stat.
    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Stamina => self.stamina,
        }
    }
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    class: CharacterClass,
    stats: Stats,
}

impl Character {
    /// Create a character with base stats.
    ///
    /// The name is trimmed; an empty name is rejected.
    pub fn new(name: &str, class: CharacterClass) -> GameResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            class,
            stats: Stats::default(),
        })
    }

    /// Replace the starting stats.
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The character's class.
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    /// The character's stats.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Every value [`attack_damage`](Self::attack_damage) can return.
    pub fn damage_range(&self) -> RollRange {
        self.class.profile().damage.offset(self.stats.attack)
    }

    /// Every value [`defense_value`](Self::defense_value) can return.
    pub fn defense_range(&self) -> RollRange {
        self.class.profile().defense.offset(self.stats.defense)
    }

    /// Roll the damage of one attack.
    ///
    /// Sums saturate at the `i32` bounds instead of overflowing.
    pub fn attack_damage(&self, rng: &mut StdRng) -> i32 {
        self.stats
            .attack
            .saturating_add(self.class.profile().damage.roll(rng))
    }

    /// Roll how much damage one block absorbs.
    pub fn defense_value(&self, rng: &mut StdRng) -> i32 {
        self.stats
            .defense
            .saturating_add(self.class.profile().defense.roll(rng))
    }

    /// Compute the boosted stat of the class's special ability.
    ///
    /// Stats are left untouched.
    pub fn special_ability(&self) -> SpecialOutcome {
        let special = self.class.profile().special;
        SpecialOutcome {
            stat: special.stat,
            value: self.stats.get(special.stat).saturating_add(special.bonus),
        }
    }

    /// Flavor line introducing the character as a member of their class.
    pub fn class_description(&self) -> String {
        let name = &self.name;
        match self.class {
            CharacterClass::Warrior => {
                format!("{name}, you are a Warrior, a superb close-combat fighter.")
            }
            CharacterClass::Mage => {
                format!("{name}, you are a Mage, a masterful tamer of the elements.")
            }
            CharacterClass::Healer => {
                format!("{name}, you are a Healer, a sorcerer able to mend wounds.")
            }
        }
    }
}
