//! The menu loop.
//!
//! [`Shell`] walks the [`MenuState`] machine: every action except
//! [`MenuState::Exit`] ends on an acknowledgement screen and goes back to
//! the main menu.

pub mod menu;

use log::{debug, info, warn};

use crate::player_selection::choose_player;
use crate::screen::{Key, Screen};
use databaseball_core::dataset::Dataset;
use databaseball_core::error::Result;
use databaseball_core::execution::RandomPlayerSource;
use databaseball_core::matcher::{match_query, MatchResult};
use databaseball_core::stats::{render_player_page, Presentation};
pub use menu::MenuState;
use menu::{
    main_menu_lines, toggle_message, ACKNOWLEDGE_PROMPT, MENU_ACTIONS, NOT_FOUND_MESSAGE,
    TUTORIAL_LINES,
};

pub const NAME_PROMPT: &str = "Enter player's name: ";
pub const RANDOM_PLAYER_PROMPT: &str = "Press Enter to view their stats, any other key to return.";

/// Rows kept free below a player page for the acknowledgement prompt.
const PROMPT_ROWS: u16 = 2;

/// Settings that live for one run of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Show long menu descriptions and empty stat categories.
    pub extra_info: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { extra_info: true }
    }
}

pub struct Shell<'a, S: Screen, R: RandomPlayerSource> {
    dataset: &'a Dataset,
    screen: S,
    random_players: R,
    session: Session,
    menu_row: usize,
}

impl<'a, S: Screen, R: RandomPlayerSource> Shell<'a, S, R> {
    pub fn new(dataset: &'a Dataset, screen: S, random_players: R) -> Self {
        Self {
            dataset,
            screen,
            random_players,
            session: Session::default(),
            menu_row: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Runs the menu loop until the user exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails. Failed lookups and a failing
    /// random player helper are shown to the user instead.
    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::MainMenu;

        while state != MenuState::Exit {
            debug!("Entering {:?}", state);
            state = self.step(state)?;
        }

        info!("Exiting");
        Ok(())
    }

    /// Performs the action of `state` and returns the state that follows.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn step(&mut self, state: MenuState) -> Result<MenuState> {
        match state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::Tutorial => {
                let lines = TUTORIAL_LINES.iter().map(ToString::to_string).collect();
                self.acknowledge(lines)
            }
            MenuState::ToggleInfo => self.toggle_info(),
            MenuState::RandomPlayer => self.random_player(),
            MenuState::PlayerLookup => self.player_lookup(),
            MenuState::Exit => Ok(MenuState::Exit),
        }
    }

    fn main_menu(&mut self) -> Result<MenuState> {
        let last_row = MENU_ACTIONS.len() - 1;

        loop {
            let (lines, highlight) = main_menu_lines(self.session.extra_info, self.menu_row);
            self.screen.render(&lines, Some(highlight))?;

            match self.screen.read_key()? {
                Key::Up => self.menu_row = self.menu_row.saturating_sub(1),
                Key::Down => self.menu_row = (self.menu_row + 1).min(last_row),
                Key::Enter => return Ok(MENU_ACTIONS[self.menu_row]),
                Key::Char('q') | Key::Escape | Key::Interrupt => return Ok(MenuState::Exit),
                Key::Char(c) => {
                    if let Some(row) = row_for_digit(c) {
                        self.menu_row = row;
                        return Ok(MENU_ACTIONS[row]);
                    }
                }
                _ => {}
            }
        }
    }

    fn toggle_info(&mut self) -> Result<MenuState> {
        self.session.extra_info = !self.session.extra_info;
        info!("Extra information is now {}", self.session.extra_info);

        self.acknowledge(vec![toggle_message(self.session.extra_info)])
    }

    fn player_lookup(&mut self) -> Result<MenuState> {
        let query = self.screen.read_line(NAME_PROMPT)?;
        if query.is_empty() {
            debug!("Name entry abandoned");
            return Ok(MenuState::MainMenu);
        }

        match match_query(self.dataset, &query) {
            MatchResult::NotFound => self.acknowledge(vec![NOT_FOUND_MESSAGE.to_string()]),
            MatchResult::Resolved(player_id) => self.show_player(&player_id),
            MatchResult::Ambiguous(candidates) => {
                match choose_player(&mut self.screen, &candidates)? {
                    Some(player_id) => self.show_player(&player_id),
                    None => {
                        debug!("Player selection cancelled");
                        Ok(MenuState::MainMenu)
                    }
                }
            }
        }
    }

    fn random_player(&mut self) -> Result<MenuState> {
        let name = match self.random_players.random_player_name() {
            Ok(name) => name,
            Err(e) => {
                warn!("Random player helper failed: {e}");
                return self.acknowledge(vec![format!("Could not generate a random player: {e}")]);
            }
        };

        let lines = vec![
            format!("Random MLB player: {name}"),
            String::new(),
            RANDOM_PLAYER_PROMPT.to_string(),
        ];
        if self.wait_for_key(&lines)? != Key::Enter {
            return Ok(MenuState::MainMenu);
        }

        let dataset = self.dataset;
        match dataset.find_by_full_name(&name) {
            Some(player) => self.show_player(&player.id),
            None => self.acknowledge(vec![format!("{name} is not in the database.")]),
        }
    }

    fn show_player(&mut self, player_id: &str) -> Result<MenuState> {
        let (_, height) = self.screen.size()?;
        let max_lines = height.saturating_sub(PROMPT_ROWS) as usize;
        let presentation = Presentation::from_extra_info(self.session.extra_info);

        info!("Showing player `{}`", player_id);
        let page = render_player_page(self.dataset, player_id, presentation, max_lines);
        self.acknowledge(page)
    }

    /// Shows `lines` with the return prompt and waits for any key.
    fn acknowledge(&mut self, mut lines: Vec<String>) -> Result<MenuState> {
        lines.push(String::new());
        lines.push(ACKNOWLEDGE_PROMPT.to_string());

        self.wait_for_key(&lines)?;
        Ok(MenuState::MainMenu)
    }

    fn wait_for_key(&mut self, lines: &[String]) -> Result<Key> {
        loop {
            self.screen.render(lines, None)?;
            let key = self.screen.read_key()?;
            if key != Key::Resize {
                return Ok(key);
            }
        }
    }
}

/// Menu row selected by the digits `1` to `5`.
fn row_for_digit(c: char) -> Option<usize> {
    c.to_digit(10)
        .and_then(|digit| (digit as usize).checked_sub(1))
        .filter(|row| *row < MENU_ACTIONS.len())
}
