use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;

use super::types::{CycleDirection, SelectionState};
use crate::screen::{Key, Screen};
use databaseball_core::error::Result;
use databaseball_core::matcher::Candidate;
use databaseball_core::normalize::fold;

/// Rows used by the header line and the spare line below the list.
const RESERVED_ROWS: u16 = 2;

fn list_height(screen_height: u16) -> usize {
    screen_height.saturating_sub(RESERVED_ROWS) as usize
}

/// Lets the user pick one of `candidates` and returns its player identifier.
///
/// Returns `None` when the user backs out with `q`, Escape or Ctrl-C.
///
/// # Errors
///
/// Returns an error if the screen cannot be drawn or read.
pub fn choose_player<S: Screen>(screen: &mut S, candidates: &[Candidate]) -> Result<Option<String>> {
    let (_, height) = screen.size()?;
    let mut state = SelectionState::new(list_height(height));

    loop {
        let displayed = filter_candidates(candidates, &state.filter_text);
        let (lines, highlight) = build_lines(&state, candidates, &displayed);
        screen.render(&lines, highlight)?;

        state = match screen.read_key()? {
            Key::Up => state.move_selection(CycleDirection::Up, displayed.len()),
            Key::Down => state.move_selection(CycleDirection::Down, displayed.len()),
            Key::Enter => {
                if let Some(candidate) = displayed
                    .get(state.selected_index)
                    .and_then(|index| candidates.get(*index))
                {
                    debug!("Picked candidate {}", candidate.player_id);
                    return Ok(Some(candidate.player_id.clone()));
                }
                state
            }
            Key::Interrupt => return Ok(None),
            Key::Backspace if state.is_filtering => {
                let mut filter_text = state.filter_text.clone();
                filter_text.pop();
                state.with_filter_text(filter_text)
            }
            Key::Escape if state.is_filtering => state.stop_filtering(),
            Key::Char(c) if state.is_filtering => {
                let mut filter_text = state.filter_text.clone();
                filter_text.push(c);
                state.with_filter_text(filter_text)
            }
            Key::Char('/') => state.start_filtering(),
            Key::Char('q') | Key::Escape => return Ok(None),
            Key::Resize => {
                let (_, height) = screen.size()?;
                state.resize(list_height(height), displayed.len())
            }
            _ => state,
        };
    }
}

/// Indexes into `candidates` matching `predicate`, in their original order.
///
/// A numeric predicate matches against the 1-based list numbers; anything
/// else is a fuzzy match on the candidate's text, ignoring accents.
pub fn filter_candidates(candidates: &[Candidate], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..candidates.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let folded_predicate = fold(Some(predicate));
    let predicate_index = predicate.parse::<usize>().ok();

    candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            let is_match = if let Some(predicate_index) = predicate_index {
                // Index-based filtering
                (index + 1).to_string().contains(&predicate_index.to_string())
            } else {
                // Fuzzy name-based filtering
                let description = fold(Some(&candidate.to_string()));
                matcher.fuzzy_match(&description, &folded_predicate).is_some()
            };
            is_match.then_some(index)
        })
        .collect()
}

fn header(state: &SelectionState, displayed_count: usize) -> String {
    if state.is_filtering {
        format!("Filter: {}   |   <esc>: Stop Filtering", state.filter_text)
    } else {
        format!(
            "Select a player   |   /: Filter   |   {}/{}   |   q: Back",
            pad_to_width_of(state.selected_index + 1, displayed_count),
            displayed_count
        )
    }
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of(value: usize, max_number: usize) -> String {
    let width = max_number.to_string().len();
    format!("{value:>width$}")
}

fn build_lines(
    state: &SelectionState,
    candidates: &[Candidate],
    displayed: &[usize],
) -> (Vec<String>, Option<usize>) {
    let mut lines = vec![header(state, displayed.len())];

    if displayed.is_empty() {
        lines.push("No matching players!".to_string());
        return (lines, None);
    }

    let viewport = &state.viewport;
    let number_width = candidates.len().to_string().len();

    lines.extend(
        displayed
            .iter()
            .skip(viewport.offset)
            .take(viewport.height)
            .map(|index| {
                format!(
                    "{:>number_width$}. {}",
                    index + 1,
                    candidates[*index]
                )
            }),
    );

    // Row 0 is the header
    let highlight = state.selected_index - viewport.offset + 1;
    (lines, Some(highlight))
}
