//! Training actions and the registry that dispatches them by name.

use std::collections::BTreeMap;

use rand::rngs::StdRng;

use crate::character::Character;

/// Something a character can practice during training.
///
/// Actions are stateless. Executing one reports an outcome without changing
/// the character.
pub trait Action {
    /// The command that triggers this action.
    fn name(&self) -> &'static str;

    /// Perform the action and describe what happened.
    fn execute(&self, character: &Character, rng: &mut StdRng) -> String;
}

/// Strike at the enemy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackAction;

impl Action for AttackAction {
    fn name(&self) -> &'static str {
        "attack"
    }

    fn execute(&self, character: &Character, rng: &mut StdRng) -> String {
        let damage = character.attack_damage(rng);
        format!("{} dealt {damage} damage to the enemy.", character.name())
    }
}

/// Block an incoming blow.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefenseAction;

impl Action for DefenseAction {
    fn name(&self) -> &'static str {
        "defense"
    }

    fn execute(&self, character: &Character, rng: &mut StdRng) -> String {
        let blocked = character.defense_value(rng);
        format!("{} blocked {blocked} damage.", character.name())
    }
}

/// Use the class's special ability.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialAction;

impl Action for SpecialAction {
    fn name(&self) -> &'static str {
        "special"
    }

    fn execute(&self, character: &Character, _rng: &mut StdRng) -> String {
        let outcome = character.special_ability();
        format!(
            "{} used special ability `{} {}`",
            character.name(),
            outcome.stat,
            outcome.value
        )
    }
}

/// Actions keyed by the exact command that triggers them.
#[derive(Default)]
pub struct ActionRegistry {
    actions: BTreeMap<&'static str, Box<dyn Action>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding attack, defense and special.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(AttackAction);
        registry.register(DefenseAction);
        registry.register(SpecialAction);
        registry
    }

    /// Register an action under its own name, replacing any previous one.
    pub fn register<A: Action + 'static>(&mut self, action: A) {
        self.actions.insert(action.name(), Box::new(action));
    }

    /// Look up an action. Matching is exact and case-sensitive.
    pub fn get(&self, name: &str) -> Option<&dyn Action> {
        self.actions.get(name).map(|a| a.as_ref())
    }

    /// Registered command names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.actions.keys().copied()
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.actions.keys()).finish()
    }
}
