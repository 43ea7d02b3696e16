//! Non-interactive lookup, used when a name is given on the command line.

use std::io::Write;

use log::info;

use crate::shell::menu::NOT_FOUND_MESSAGE;
use databaseball_core::dataset::Dataset;
use databaseball_core::error::Result;
use databaseball_core::matcher::{match_query, MatchResult};
use databaseball_core::stats::{render_player_page, Presentation};

/// Prints the result of looking up `query` to `out`.
///
/// A single match prints the full player page. Several matches print the
/// numbered candidates so the name can be refined. Returns whether a
/// player was found.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_lookup<W: Write>(out: &mut W, dataset: &Dataset, query: &str) -> Result<bool> {
    match match_query(dataset, query) {
        MatchResult::NotFound => {
            writeln!(out, "{NOT_FOUND_MESSAGE}")?;
            Ok(false)
        }
        MatchResult::Resolved(player_id) => {
            info!("Printing page for `{}`", player_id);
            let page = render_player_page(dataset, &player_id, Presentation::Detailed, usize::MAX);
            for line in page {
                writeln!(out, "{}", line.trim_end())?;
            }
            Ok(true)
        }
        MatchResult::Ambiguous(candidates) => {
            let width = candidates.len().to_string().len();
            writeln!(out, "{} players match `{}`:", candidates.len(), query)?;
            for (index, candidate) in candidates.iter().enumerate() {
                writeln!(out, "{:>width$}. {}", index + 1, candidate)?;
            }
            writeln!(out, "Refine the name to pick one.")?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_readers(
            "playerID,nameFirst,nameLast,debut,finalGame\n\
             ruthba01,Babe,Ruth,1914-07-11,1935-05-30\n\
             smithjo01,John,Smith,1985-04-09,1990-10-01\n\
             smithja01,Jane,Smith,1995-04-02,\n"
                .as_bytes(),
            "playerID,yearID,teamID,G,AB,R,H,HR,RBI\nruthba01,1927,NYA,151,540,158,192,60,165\n"
                .as_bytes(),
            "playerID,yearID,teamID,G,A,E,DP\n".as_bytes(),
            "playerID,yearID,teamID,W,L,ERA,G,SV,SO\n".as_bytes(),
        )
        .unwrap()
    }

    fn lookup(query: &str) -> (bool, String) {
        let mut out = Vec::new();
        let found = print_lookup(&mut out, &dataset(), query).unwrap();
        (found, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_resolved_prints_every_category() {
        let (found, output) = lookup("ruth");
        assert!(found);
        assert!(output.contains("Batting Stats:\nyearID  teamID  G    AB   R    H    HR  RBI\n"));
        assert!(output.contains("No fielding stats available."));
        assert!(output.contains("No pitching stats available."));
    }

    #[test]
    fn test_ambiguous_lists_candidates() {
        let (found, output) = lookup("Smith");
        assert!(found);
        assert_eq!(
            output,
            "2 players match `Smith`:\n\
             1. John Smith (1985 - 1990)\n\
             2. Jane Smith (1995 - Present)\n\
             Refine the name to pick one.\n"
        );
    }

    #[test]
    fn test_not_found() {
        let (found, output) = lookup("zzzznotaplayer");
        assert!(!found);
        assert_eq!(output, format!("{NOT_FOUND_MESSAGE}\n"));
    }
}
