//! Player name matching.
//!
//! A query is normalized, lower-cased and split on whitespace. A single token
//! matches any player whose first or last name contains it. With several
//! tokens, the first must appear in the first name and the rest, joined by
//! single spaces, in the last name. Both sides of every comparison go
//! through [`fold`], so accents and case never matter.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;

use crate::dataset::{Dataset, Player};
use crate::normalize::fold;

/// Shown when a candidate has no debut date.
pub const UNKNOWN_DEBUT: &str = "N/A";
/// Shown when a candidate has no final game date.
pub const ACTIVE_PLAYER: &str = "Present";

/// A player satisfying a query, with what is needed to tell it apart from
/// the other candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub player_id: String,
    pub first_name: String,
    pub last_name: String,
    pub debut_year: Option<i32>,
    pub final_year: Option<i32>,
}

impl Candidate {
    pub fn from_player(player: &Player) -> Self {
        Self {
            player_id: player.id.clone(),
            first_name: player.first_name.clone().unwrap_or_default(),
            last_name: player.last_name.clone().unwrap_or_default(),
            debut_year: player.debut_year(),
            final_year: player.final_year(),
        }
    }

    /// `"(1914 - 1935)"`, with placeholders for missing years.
    pub fn active_years(&self) -> String {
        let debut = self
            .debut_year
            .map_or_else(|| UNKNOWN_DEBUT.to_string(), |year| year.to_string());
        let last = self
            .final_year
            .map_or_else(|| ACTIVE_PLAYER.to_string(), |year| year.to_string());
        format!("({debut} - {last})")
    }
}

impl Display for Candidate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} {} {}",
            self.first_name,
            self.last_name,
            self.active_years()
        )
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    NotFound,
    Resolved(String),
    /// Two or more candidates, in `People.csv` row order.
    Ambiguous(Vec<Candidate>),
}

enum Query {
    Either(String),
    FirstAndLast { first: String, last: String },
}

impl Query {
    fn parse(query: &str) -> Option<Self> {
        let folded = fold(Some(query));
        let mut tokens = folded.split_whitespace();

        let first = tokens.next()?.to_string();
        let rest = tokens.join(" ");

        if rest.is_empty() {
            Some(Query::Either(first))
        } else {
            Some(Query::FirstAndLast { first, last: rest })
        }
    }

    fn matches(&self, player: &Player) -> bool {
        let first_name = fold(player.first_name.as_deref());
        let last_name = fold(player.last_name.as_deref());

        match self {
            Query::Either(token) => first_name.contains(token) || last_name.contains(token),
            Query::FirstAndLast { first, last } => {
                first_name.contains(first) && last_name.contains(last)
            }
        }
    }
}

/// Finds the players matching a free-text query.
///
/// A blank query matches nobody.
///
/// # Examples
///
/// ```
/// use databaseball_core::dataset::Dataset;
/// use databaseball_core::matcher::{match_query, MatchResult};
///
/// let people = "playerID,nameFirst,nameLast\nruthba01,Babe,Ruth\n";
/// let batting = "playerID,yearID,teamID,G,AB,R,H,HR,RBI\n";
/// let fielding = "playerID,yearID,teamID,G,A,E,DP\n";
/// let pitching = "playerID,yearID,teamID,W,L,ERA,G,SV,SO\n";
/// let dataset = Dataset::from_readers(
///     people.as_bytes(),
///     batting.as_bytes(),
///     fielding.as_bytes(),
///     pitching.as_bytes(),
/// )?;
///
/// assert_eq!(
///     match_query(&dataset, "ruth"),
///     MatchResult::Resolved("ruthba01".to_string())
/// );
/// # Ok::<(), databaseball_core::error::Error>(())
/// ```
pub fn match_query(dataset: &Dataset, query: &str) -> MatchResult {
    let Some(parsed) = Query::parse(query) else {
        debug!("Blank query, nothing to match");
        return MatchResult::NotFound;
    };

    let mut matches: Vec<&Player> = dataset
        .players()
        .iter()
        .filter(|player| parsed.matches(player))
        .collect();

    debug!("Query `{}` matched {} players", query, matches.len());

    match matches.len() {
        0 => MatchResult::NotFound,
        1 => MatchResult::Resolved(matches.remove(0).id.clone()),
        _ => MatchResult::Ambiguous(matches.into_iter().map(Candidate::from_player).collect()),
    }
}
