//! Fixed lines printed by the game.

/// First lines of every run.
pub const WELCOME: &[&str] = &[
    "Greetings, adventurer!",
    "Before the game begins...",
];

/// Prompt for the character's name.
pub const NAME_PROMPT: &str = "...tell me your name: ";

/// Heading above the list of classes.
pub const PATHS_INTRO: &str = "You may choose one of three paths of power:";

/// Prompt for the class token.
pub const CLASS_PROMPT: &str =
    "Enter your class: Warrior - warrior, Mage - mage, Healer - healer: ";

/// Printed when the class token matches nothing.
pub const UNKNOWN_CLASS: &str = "Unknown character class. Try again.";

/// Prompt asking the player to commit to a class.
pub const CONFIRM_PROMPT: &str =
    "Press (Y) to confirm your choice, or any other key to choose another class: ";

/// Training instructions shown once the character exists.
pub const INSTRUCTIONS: &[&str] = &[
    "Practice using your skills.",
    "Enter one of the commands:",
    "  attack - to attack the enemy",
    "  defense - to block the enemy's attack",
    "  special - to use your special power",
    "  skip - to end the training",
];

/// Prompt for a training command.
pub const COMMAND_PROMPT: &str = "Enter a command: ";

/// Command that ends training.
pub const SKIP_COMMAND: &str = "skip";

/// Printed when training ends.
pub const TRAINING_OVER: &str = "Training is over.";

/// Printed when the command matches nothing.
pub const UNKNOWN_COMMAND: &str = "Unknown command. Try: attack, defense, special or skip";

/// Greeting once the name is known.
pub fn greeting(name: &str) -> String {
    format!("Hello, {name}")
}

/// Report of the starting stats.
pub fn base_stats(stamina: i32, attack: i32, defense: i32) -> String {
    format!("Your stamina is {stamina}, attack {attack} and defense {defense}.")
}
