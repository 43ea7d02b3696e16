//! Shared fixtures for the cli integration tests.

use std::collections::VecDeque;

use databaseball_cli::screen::{Key, Screen};
use databaseball_core::dataset::Dataset;
use databaseball_core::error::Result;

pub const PEOPLE: &str = "\
playerID,birthYear,birthMonth,birthDay,birthCountry,birthState,birthCity,deathYear,nameFirst,nameLast,debut,finalGame
ruthba01,1895,2,6,USA,MD,Baltimore,1948,Babe,Ruth,1914-07-11,1935-05-30
smithjo01,1960,1,1,USA,CA,Fresno,,John,Smith,1985-04-09,1990-10-01
smithja01,1970,3,3,USA,TX,Austin,,Jane,Smith,1995-04-02,
marichu01,1937,10,20,D.R.,Monte Cristi,Laguna Verde,,Juan,Marichal,1960-07-19,1975-04-16
";

pub const BATTING: &str = "\
playerID,yearID,stint,teamID,lgID,G,AB,R,H,HR,RBI
ruthba01,1920,1,NYA,AL,142,458,158,172,54,135
ruthba01,1921,1,NYA,AL,152,540,177,204,59,171
smithja01,1995,1,SEA,AL,20,41,3,9,0,2
";

pub const FIELDING: &str = "\
playerID,yearID,stint,teamID,lgID,G,A,E,DP
smithjo01,1986,1,OAK,AL,101,250,12,55
";

pub const PITCHING: &str = "\
playerID,yearID,stint,teamID,lgID,W,L,ERA,G,SV,SO
marichu01,1963,1,SFN,NL,25,8,2.41,41,0,248
";

pub fn dataset() -> Dataset {
    Dataset::from_readers(
        PEOPLE.as_bytes(),
        BATTING.as_bytes(),
        FIELDING.as_bytes(),
        PITCHING.as_bytes(),
    )
    .unwrap()
}

/// One `render` or `read_line` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub lines: Vec<String>,
    pub highlight: Option<usize>,
}

impl Frame {
    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|line| line.contains(text))
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlight
            .and_then(|row| self.lines.get(row))
            .map(String::as_str)
    }
}

/// A [`Screen`] fed from queued keys and lines that records what was drawn.
///
/// Once the keys run out every read yields Ctrl-C, which backs out of any
/// screen.
pub struct ScriptedScreen {
    keys: VecDeque<Key>,
    lines: VecDeque<String>,
    pub frames: Vec<Frame>,
    pub size: (u16, u16),
}

impl ScriptedScreen {
    pub fn new(keys: &[Key], lines: &[&str]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            lines: lines.iter().map(ToString::to_string).collect(),
            frames: Vec::new(),
            size: (120, 40),
        }
    }

    pub fn with_height(mut self, height: u16) -> Self {
        self.size.1 = height;
        self
    }

    pub fn frames_containing(&self, text: &str) -> Vec<&Frame> {
        self.frames.iter().filter(|frame| frame.contains(text)).collect()
    }

    pub fn last_frame(&self) -> &Frame {
        self.frames.last().unwrap()
    }
}

impl Screen for ScriptedScreen {
    fn render(&mut self, lines: &[String], highlight: Option<usize>) -> Result<()> {
        self.frames.push(Frame {
            lines: lines.to_vec(),
            highlight,
        });
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::Interrupt))
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let line = self.lines.pop_front().unwrap_or_default();
        self.frames.push(Frame {
            lines: vec![format!("{prompt}{line}")],
            highlight: None,
        });
        Ok(line.trim().to_string())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(self.size)
    }
}
