//! Text and layout of the main menu.

use std::fmt::{Display, Formatter};

pub const INTRO_LINES: [&str; 3] = [
    "Welcome to DataBaseball! Look up the career statistics of",
    "Major League Baseball players, from the 1870s to today.",
    "Navigate the main menu using the arrow keys, and press enter to proceed.",
];

pub const TUTORIAL_LINES: [&str; 4] = [
    "----- Tutorial -----",
    "1. Choose 'Random Player' (3) and a random player's name is generated, for example 'Shohei Ohtani'.",
    "2. Choose 'Player Stats' (4), type in 'Shohei Ohtani' and that player's MLB career stats appear.",
    "3. When several players match a name, pick one with the arrow keys and enter, or press q to go back.",
];

pub const ACKNOWLEDGE_PROMPT: &str = "Press any key to return.";

pub const NOT_FOUND_MESSAGE: &str =
    "Our database was unable to find that player's name, please try again.";

/// States of the interaction loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Tutorial,
    ToggleInfo,
    RandomPlayer,
    PlayerLookup,
    Exit,
}

/// Menu entries in display order.
pub const MENU_ACTIONS: [MenuState; 5] = [
    MenuState::Tutorial,
    MenuState::ToggleInfo,
    MenuState::RandomPlayer,
    MenuState::PlayerLookup,
    MenuState::Exit,
];

/// One main menu entry as displayed.
pub struct MenuOption {
    pub number: usize,
    pub action: MenuState,
    pub extra_info: bool,
}

impl MenuOption {
    fn label(&self) -> &'static str {
        match self.action {
            MenuState::Tutorial => "Tutorial",
            MenuState::ToggleInfo if self.extra_info => "Toggle Extra Information [ON]",
            MenuState::ToggleInfo => "Toggle Extra Information [OFF]",
            MenuState::RandomPlayer => "Random Player",
            MenuState::PlayerLookup => "Player Stats",
            MenuState::Exit => "Exit",
            MenuState::MainMenu => "Main Menu",
        }
    }

    fn description(&self) -> Option<&'static str> {
        match self.action {
            MenuState::RandomPlayer => Some("Generate a random MLB player's name"),
            MenuState::PlayerLookup => Some("Return the stats of a specified MLB player"),
            _ => None,
        }
    }
}

impl Display for MenuOption {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}. {}", self.number, self.label())?;

        if self.extra_info {
            if let Some(description) = self.description() {
                write!(formatter, " [{description}]")?;
            }
        }

        Ok(())
    }
}

/// The menu entries for the current extra information setting.
pub fn menu_options(extra_info: bool) -> Vec<MenuOption> {
    MENU_ACTIONS
        .iter()
        .enumerate()
        .map(|(index, action)| MenuOption {
            number: index + 1,
            action: *action,
            extra_info,
        })
        .collect()
}

/// Intro text, a blank line, then the numbered entries.
///
/// Returns the lines and the row of the entry at `selected_row`.
pub fn main_menu_lines(extra_info: bool, selected_row: usize) -> (Vec<String>, usize) {
    let mut lines: Vec<String> = INTRO_LINES.iter().map(ToString::to_string).collect();
    lines.push(String::new());

    let first_option_row = lines.len();
    lines.extend(menu_options(extra_info).iter().map(ToString::to_string));

    (lines, first_option_row + selected_row)
}

/// Confirmation shown after toggling, describing the new setting.
pub fn toggle_message(extra_info: bool) -> String {
    let setting = if extra_info { "on" } else { "off" };
    format!("The extra information has been toggled {setting}.")
}
