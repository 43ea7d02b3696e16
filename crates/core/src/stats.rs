//! Formatting of a player's page: biography plus aligned statistics tables.

use itertools::Itertools;

use crate::dataset::{Category, Dataset, Player, Table};

/// Spaces added after the widest value of every column.
pub const COLUMN_GUTTER: usize = 2;

/// How much the page says about what is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Categories without rows are left out.
    Compact,
    /// Categories without rows are reported as having no data.
    Detailed,
}

impl Presentation {
    pub fn from_extra_info(extra_info: bool) -> Self {
        if extra_info {
            Presentation::Detailed
        } else {
            Presentation::Compact
        }
    }
}

/// The rendered lines of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub category: Category,
    pub title: String,
    /// Header row then one row per season, or a single "no data" line.
    pub lines: Vec<String>,
}

/// Aligns the chosen columns of `rows` under their headers.
///
/// Every cell is left-justified to the width of the widest value in its
/// column (header included) plus [`COLUMN_GUTTER`].
pub fn format_table(table: &Table, rows: &[usize], columns: &[&str]) -> Vec<String> {
    let widths: Vec<usize> = columns
        .iter()
        .map(|column| {
            rows.iter()
                .map(|row| cell_width(table.value(*row, column).unwrap_or_default()))
                .chain(std::iter::once(cell_width(column)))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let header = render_row(columns.iter().copied(), &widths);
    let body = rows.iter().map(|row| {
        render_row(
            columns
                .iter()
                .map(|column| table.value(*row, column).unwrap_or_default()),
            &widths,
        )
    });

    std::iter::once(header).chain(body).collect()
}

fn cell_width(value: &str) -> usize {
    value.chars().count()
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}", width = width + COLUMN_GUTTER))
        .join("")
}

/// One section per category, batting then fielding then pitching.
pub fn format_stats(dataset: &Dataset, player_id: &str, presentation: Presentation) -> Vec<Section> {
    Category::ALL
        .iter()
        .filter_map(|category| {
            let table = dataset.table(*category);
            let rows = table.rows_for_player(player_id);

            let lines = if !rows.is_empty() {
                format_table(table, &rows, category.columns())
            } else if presentation == Presentation::Detailed {
                vec![format!("No {category} stats available.")]
            } else {
                return None;
            };

            Some(Section {
                category: *category,
                title: category.title().to_string(),
                lines,
            })
        })
        .collect()
}

/// A one-paragraph biography.
///
/// Missing location parts are skipped. A birth date with a missing month or
/// day falls back to the year alone.
///
/// # Examples
///
/// ```
/// use databaseball_core::dataset::Player;
/// use databaseball_core::stats::format_biography;
///
/// let player = Player {
///     id: "ruthba01".to_string(),
///     first_name: Some("Babe".to_string()),
///     last_name: Some("Ruth".to_string()),
///     birth_year: Some(1895),
///     birth_month: Some(2),
///     birth_day: Some(6),
///     birth_city: Some("Baltimore".to_string()),
///     birth_state: Some("MD".to_string()),
///     birth_country: Some("USA".to_string()),
///     death_year: Some(1948),
///     debut: None,
///     final_game: None,
/// };
///
/// assert_eq!(
///     format_biography(&player),
///     "Babe Ruth was born in Baltimore, MD, USA on 2/6/1895. \
///      Unfortunately, they passed away in 1948."
/// );
/// ```
pub fn format_biography(player: &Player) -> String {
    let name = match player.full_name() {
        name if name.is_empty() => player.id.clone(),
        name => name,
    };

    let location = [
        player.birth_city.as_deref(),
        player.birth_state.as_deref(),
        player.birth_country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .join(", ");

    let date = match (player.birth_month, player.birth_day, player.birth_year) {
        (Some(month), Some(day), Some(year)) => Some(format!("{month}/{day}/{year}")),
        (_, _, Some(year)) => Some(year.to_string()),
        _ => None,
    };

    let mut biography = match (location.is_empty(), date) {
        (false, Some(date)) => format!("{name} was born in {location} on {date}."),
        (false, None) => format!("{name} was born in {location}."),
        (true, Some(date)) => format!("{name} was born on {date}."),
        (true, None) => format!("{name} has no recorded birth information."),
    };

    if let Some(death_year) = player.death_year {
        biography.push_str(&format!(" Unfortunately, they passed away in {death_year}."));
    }

    biography
}

/// The full page for a player, cut to `max_lines`.
///
/// Lines beyond `max_lines` are dropped without notice.
pub fn render_player_page(
    dataset: &Dataset,
    player_id: &str,
    presentation: Presentation,
    max_lines: usize,
) -> Vec<String> {
    let mut lines = match dataset.player(player_id) {
        Some(player) => vec![format_biography(player)],
        None => vec![format!("No biographical data recorded for `{player_id}`.")],
    };
    lines.push(String::new());

    for section in format_stats(dataset, player_id, presentation) {
        lines.push(format!("{}:", section.title));
        lines.extend(section.lines);
        lines.push(String::new());
    }

    lines.truncate(max_lines);
    lines
}
