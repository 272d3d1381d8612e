//! The interactive game: character creation followed by training.
//!
//! `Game` reads one line at a time from any [`BufRead`] and writes prompts
//! and results to any [`Write`], so the binary hands it stdin and stdout
//! while tests hand it in-memory buffers.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::action::ActionRegistry;
use crate::character::{Character, CharacterClass, Stats};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::text;

/// A single play session.
pub struct Game<R, W> {
    input: R,
    output: W,
    actions: ActionRegistry,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Create a game with the default actions.
    pub fn new(input: R, output: W, config: &GameConfig) -> Self {
        Self::with_rng(input, output, config.rng())
    }

    /// Create a game with the default actions and an explicit RNG.
    pub fn with_rng(input: R, output: W, rng: StdRng) -> Self {
        Self {
            input,
            output,
            actions: ActionRegistry::with_defaults(),
            rng,
        }
    }

    /// The actions available during training.
    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    /// Consume the game and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play a full session: create a character, then train until `skip`.
    pub fn run(&mut self) -> GameResult<()> {
        for line in text::WELCOME {
            self.say(line)?;
        }

        let character = self.create_character().map_err(GameError::creation)?;
        info!(
            name = character.name(),
            class = %character.class(),
            "character created"
        );

        self.train(&character)
    }

    /// Ask for a name and a class and build the character.
    pub fn create_character(&mut self) -> GameResult<Character> {
        let name = self.read_input(text::NAME_PROMPT)?;
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }

        let base = Stats::default();
        self.say(&text::greeting(&name))?;
        self.say(&text::base_stats(base.stamina, base.attack, base.defense))?;
        self.say(text::PATHS_INTRO)?;
        let paths: Vec<&str> = CharacterClass::ALL.iter().map(|c| c.name()).collect();
        self.say(&paths.join(", "))?;

        let class = self.choose_class()?;
        Character::new(&name, class)
    }

    /// Prompt until the player picks and confirms a class.
    fn choose_class(&mut self) -> GameResult<CharacterClass> {
        loop {
            let token = self.read_input(text::CLASS_PROMPT)?;
            let Some(class) = CharacterClass::from_token(&token) else {
                debug!(token = %token, "unknown class");
                self.say(text::UNKNOWN_CLASS)?;
                continue;
            };

            self.say(class.summary())?;

            let confirm = self.read_input(text::CONFIRM_PROMPT)?;
            if confirm.eq_ignore_ascii_case("y") {
                return Ok(class);
            }
            debug!(%class, "class not confirmed");
        }
    }

    /// Run the training loop until the player types `skip`.
    pub fn train(&mut self, character: &Character) -> GameResult<()> {
        self.say(&character.class_description())?;
        for line in text::INSTRUCTIONS {
            self.say(line)?;
        }

        loop {
            let command = self.read_input(text::COMMAND_PROMPT)?;
            if command == text::SKIP_COMMAND {
                info!("training finished");
                return self.say(text::TRAINING_OVER);
            }

            let Some(action) = self.actions.get(&command) else {
                debug!(command = %command, "unknown command");
                self.say(text::UNKNOWN_COMMAND)?;
                continue;
            };

            debug!(action = action.name(), "executing action");
            let result = action.execute(character, &mut self.rng);
            self.say(&result)?;
        }
    }

    /// Print a prompt and read one trimmed line.
    fn read_input(&mut self, prompt: &str) -> GameResult<String> {
        write!(self.output, "{prompt}").map_err(GameError::Output)?;
        self.output.flush().map_err(GameError::Output)?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(GameError::InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(GameError::Input(e)),
        }
    }

    fn say(&mut self, line: &str) -> GameResult<()> {
        writeln!(self.output, "{line}").map_err(GameError::Output)
    }
}
