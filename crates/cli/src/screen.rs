//! Terminal capability used by the menus.
//!
//! Everything interactive draws through [`Screen`], so the menus and the
//! player picker can be driven by a scripted implementation in tests.
//! [`CrosstermScreen`] is the real full-screen terminal.

use std::io::{stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue, ExecutableCommand};

use databaseball_core::error::Result;

/// Longest accepted free-text entry.
pub const MAX_INPUT_LENGTH: usize = 60;

/// A key press, reduced to what the menus react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    Backspace,
    Char(char),
    /// Ctrl-C
    Interrupt,
    /// The terminal changed size; the caller should redraw.
    Resize,
    Other,
}

pub trait Screen {
    /// Clears the screen and draws `lines` from the top, one per row.
    /// The `highlight` row is drawn in reverse video.
    fn render(&mut self, lines: &[String], highlight: Option<usize>) -> Result<()>;

    /// Blocks until the next key press.
    fn read_key(&mut self) -> Result<Key>;

    /// Clears the screen, shows `prompt` and reads one line of text.
    /// Escape abandons the entry and yields an empty string.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Width and height in cells.
    fn size(&self) -> Result<(u16, u16)>;
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Full-screen terminal on stdout. The terminal is restored on drop.
pub struct CrosstermScreen {
    _raw_mode_guard: RawModeGuard,
}

impl CrosstermScreen {
    /// Switches to the alternate screen in raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured.
    pub fn enter() -> Result<Self> {
        let mut stdout = stdout();
        stdout.execute(EnterAlternateScreen)?;
        enable_raw_mode()?;

        // When this goes out of scope, raw mode is disabled
        let raw_mode_guard = RawModeGuard;
        stdout.execute(cursor::Hide)?;

        Ok(Self {
            _raw_mode_guard: raw_mode_guard,
        })
    }
}

fn fit_to_width(line: &str, width: u16) -> String {
    line.chars().take((width as usize).saturating_sub(1)).collect()
}

fn key_from_event(key_event: KeyEvent) -> Key {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

impl Screen for CrosstermScreen {
    fn render(&mut self, lines: &[String], highlight: Option<usize>) -> Result<()> {
        let mut stdout = stdout();
        let (width, height) = terminal::size()?;

        queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

        for (row, line) in lines.iter().take(height as usize).enumerate() {
            queue!(stdout, MoveTo(0, row as u16))?;
            let content = fit_to_width(line, width);

            if highlight == Some(row) {
                queue!(
                    stdout,
                    SetAttribute(Attribute::Bold),
                    SetBackgroundColor(Color::DarkBlue),
                    SetForegroundColor(Color::Yellow),
                    Print(content),
                    SetAttribute(Attribute::Reset),
                    SetBackgroundColor(Color::Reset),
                    SetForegroundColor(Color::Reset),
                )?;
            } else {
                queue!(stdout, Print(content))?;
            }
        }

        stdout.flush()?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    return Ok(key_from_event(key_event));
                }
                Event::Resize(_, _) => return Ok(Key::Resize),
                _ => {}
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = stdout();
        let mut input = String::new();

        queue!(stdout, Clear(ClearType::All), cursor::Show)?;

        loop {
            queue!(
                stdout,
                MoveTo(0, 0),
                Clear(ClearType::CurrentLine),
                Print(prompt),
                Print(&input)
            )?;
            stdout.flush()?;

            match self.read_key()? {
                Key::Enter => break,
                Key::Escape | Key::Interrupt => {
                    input.clear();
                    break;
                }
                Key::Backspace => {
                    input.pop();
                }
                Key::Char(c) if input.chars().count() < MAX_INPUT_LENGTH => input.push(c),
                _ => {}
            }
        }

        execute!(stdout, cursor::Hide)?;
        Ok(input.trim().to_string())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }
}
