//! In-memory store for the baseballdatabank tables.
//!
//! Four CSV files are loaded at startup: `People.csv` plus one statistics
//! file per [`Category`]. Each file becomes a [`Table`] that keeps every
//! column in file order; people rows are additionally decoded into
//! [`Player`] values for matching and biography display.
//!
//! Loading is all or nothing. A missing file, a malformed row or a missing
//! required column aborts the load with an [`Error`].

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::io::Read;

use chrono::{Datelike, NaiveDate};
use csv::StringRecord;
use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::file_handling::{data_file_path, get_reader};
use crate::normalize::fold;

pub const PEOPLE_FILE_NAME: &str = "People.csv";
pub const PLAYER_ID_COLUMN: &str = "playerID";

const PEOPLE_COLUMNS: [&str; 3] = [PLAYER_ID_COLUMN, "nameFirst", "nameLast"];

/// Source description used when a table does not come from a file.
const READER_PATH: &str = "<reader>";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// One of the per-season statistics tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Batting,
    Fielding,
    Pitching,
}

impl Category {
    /// Display order of the categories.
    pub const ALL: [Category; 3] = [Category::Batting, Category::Fielding, Category::Pitching];

    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Batting => "Batting.csv",
            Category::Fielding => "Fielding.csv",
            Category::Pitching => "Pitching.csv",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Batting => "Batting Stats",
            Category::Fielding => "Fielding Stats",
            Category::Pitching => "Pitching Stats",
        }
    }

    /// The statistics shown for this category, in display order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Category::Batting => &["yearID", "teamID", "G", "AB", "R", "H", "HR", "RBI"],
            Category::Fielding => &["yearID", "teamID", "G", "A", "E", "DP"],
            Category::Pitching => &["yearID", "teamID", "W", "L", "ERA", "G", "SV", "SO"],
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Batting => "batting",
            Category::Fielding => "fielding",
            Category::Pitching => "pitching",
        };
        f.write_str(name)
    }
}

/// A delimited file held as rows of strings with named columns.
#[derive(Debug, Clone)]
pub struct Table {
    headers: StringRecord,
    columns: IndexMap<String, usize>,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Parses a CSV table, checking that every `required_columns` entry is
    /// present in the header row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Csv`] for malformed input and
    /// [`Error::MissingColumn`] when a required column is absent.
    pub fn from_reader<R: Read>(
        reader: R,
        file_description: &str,
        path: &str,
        required_columns: &[&str],
    ) -> Result<Self> {
        let csv_error =
            |e: csv::Error| Error::csv_error(file_description.to_string(), path.to_string(), e);

        let mut reader = csv::Reader::from_reader(reader);

        // Some exports of the dataset start with a byte order mark
        let headers: StringRecord = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').trim())
            .collect();

        let columns: IndexMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, header)| (header.to_string(), index))
            .collect();

        for column in required_columns {
            if !columns.contains_key(*column) {
                return Err(Error::missing_column(
                    file_description.to_string(),
                    path.to_string(),
                    column,
                ));
            }
        }

        let rows = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(csv_error)?;

        Ok(Self {
            headers,
            columns,
            rows,
        })
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.get(column).copied()
    }

    /// The value at `row` in `column`. Empty cells are `None`.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows
            .get(row)?
            .get(index)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Every value of `column` in row order, or `None` if there is no such
    /// column.
    pub fn column(&self, column: &str) -> Option<impl Iterator<Item = Option<&str>> + '_> {
        let index = self.column_index(column)?;
        Some(self.rows.iter().map(move |row| {
            row.get(index)
                .map(str::trim)
                .filter(|value| !value.is_empty())
        }))
    }

    /// Indexes of the rows whose `column` equals `value`, in row order.
    pub fn rows_where(&self, column: &str, value: &str) -> Vec<usize> {
        match self.column(column) {
            Some(values) => values
                .enumerate()
                .filter(|(_, cell)| *cell == Some(value))
                .map(|(row, _)| row)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Rows belonging to one player, in row order.
    pub fn rows_for_player(&self, player_id: &str) -> Vec<usize> {
        self.rows_where(PLAYER_ID_COLUMN, player_id)
    }

    fn deserialize_rows<'a, T: Deserialize<'a>>(&'a self) -> csv::Result<Vec<T>> {
        self.rows
            .iter()
            .map(|row| row.deserialize(Some(&self.headers)))
            .collect()
    }
}

/// Biographical record from `People.csv`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    #[serde(rename = "playerID")]
    pub id: String,
    #[serde(rename = "nameFirst", default)]
    pub first_name: Option<String>,
    #[serde(rename = "nameLast", default)]
    pub last_name: Option<String>,
    #[serde(rename = "birthYear", default, deserialize_with = "csv::invalid_option")]
    pub birth_year: Option<i32>,
    #[serde(rename = "birthMonth", default, deserialize_with = "csv::invalid_option")]
    pub birth_month: Option<u32>,
    #[serde(rename = "birthDay", default, deserialize_with = "csv::invalid_option")]
    pub birth_day: Option<u32>,
    #[serde(rename = "birthCity", default)]
    pub birth_city: Option<String>,
    #[serde(rename = "birthState", default)]
    pub birth_state: Option<String>,
    #[serde(rename = "birthCountry", default)]
    pub birth_country: Option<String>,
    #[serde(rename = "deathYear", default, deserialize_with = "csv::invalid_option")]
    pub death_year: Option<i32>,
    #[serde(default)]
    pub debut: Option<String>,
    #[serde(rename = "finalGame", default)]
    pub final_game: Option<String>,
}

impl Player {
    /// First and last name separated by a space, skipping missing parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn debut_year(&self) -> Option<i32> {
        self.debut.as_deref().and_then(parse_year)
    }

    pub fn final_year(&self) -> Option<i32> {
        self.final_game.as_deref().and_then(parse_year)
    }
}

fn parse_year(date: &str) -> Option<i32> {
    let date = date.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
        .map(|date| date.year())
}

/// The four tables, loaded once and never modified.
#[derive(Debug, Clone)]
pub struct Dataset {
    people: Table,
    players: Vec<Player>,
    player_index: HashMap<String, usize>,
    batting: Table,
    fielding: Table,
    pitching: Table,
}

impl Dataset {
    /// Loads the four CSV files from `data_directory`.
    ///
    /// # Errors
    ///
    /// Returns an error if any file is missing, malformed, or lacks one of
    /// its required columns.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use databaseball_core::dataset::Dataset;
    ///
    /// let dataset = Dataset::load("baseballdatabank-2023.1/core")?;
    /// println!("Loaded {} players", dataset.players().len());
    /// # Ok::<(), databaseball_core::error::Error>(())
    /// ```
    pub fn load(data_directory: &str) -> Result<Self> {
        let people = load_table_file(data_directory, PEOPLE_FILE_NAME, "people", &PEOPLE_COLUMNS)?;
        let batting = load_category_file(data_directory, Category::Batting)?;
        let fielding = load_category_file(data_directory, Category::Fielding)?;
        let pitching = load_category_file(data_directory, Category::Pitching)?;

        let dataset = Self::from_tables(
            people,
            batting,
            fielding,
            pitching,
            &data_file_path(data_directory, PEOPLE_FILE_NAME),
        )?;

        info!(
            "Loaded {} players, {} batting, {} fielding and {} pitching rows from `{}`",
            dataset.players.len(),
            dataset.batting.len(),
            dataset.fielding.len(),
            dataset.pitching.len(),
            data_directory
        );

        Ok(dataset)
    }

    /// Loads the dataset from in-memory readers instead of files.
    ///
    /// # Errors
    ///
    /// Same as [`Dataset::load`], minus the I/O failures of opening files.
    pub fn from_readers(
        people: impl Read,
        batting: impl Read,
        fielding: impl Read,
        pitching: impl Read,
    ) -> Result<Self> {
        let people = Table::from_reader(people, "people", READER_PATH, &PEOPLE_COLUMNS)?;
        let batting = load_category(batting, Category::Batting, READER_PATH)?;
        let fielding = load_category(fielding, Category::Fielding, READER_PATH)?;
        let pitching = load_category(pitching, Category::Pitching, READER_PATH)?;

        Self::from_tables(people, batting, fielding, pitching, READER_PATH)
    }

    fn from_tables(
        people: Table,
        batting: Table,
        fielding: Table,
        pitching: Table,
        people_path: &str,
    ) -> Result<Self> {
        let players: Vec<Player> = people
            .deserialize_rows()
            .map_err(|e| Error::csv_error("people".to_string(), people_path.to_string(), e))?;

        let mut player_index = HashMap::with_capacity(players.len());
        for (index, player) in players.iter().enumerate() {
            // First occurrence wins if the file repeats an identifier
            player_index.entry(player.id.clone()).or_insert(index);
        }

        Ok(Self {
            people,
            players,
            player_index,
            batting,
            fielding,
            pitching,
        })
    }

    /// All players in `People.csv` row order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.player_index
            .get(player_id)
            .and_then(|index| self.players.get(*index))
    }

    pub fn people(&self) -> &Table {
        &self.people
    }

    pub fn table(&self, category: Category) -> &Table {
        match category {
            Category::Batting => &self.batting,
            Category::Fielding => &self.fielding,
            Category::Pitching => &self.pitching,
        }
    }

    /// The first player whose first and last name equal the given ones,
    /// ignoring case and accents.
    pub fn find_by_exact_name(&self, first_name: &str, last_name: &str) -> Option<&Player> {
        let first_name = fold(Some(first_name.trim()));
        let last_name = fold(Some(last_name.trim()));

        let found = self.players.iter().find(|player| {
            fold(player.first_name.as_deref()) == first_name
                && fold(player.last_name.as_deref()) == last_name
        });

        debug!(
            "Exact name lookup for `{} {}`: {:?}",
            first_name,
            last_name,
            found.map(|player| &player.id)
        );

        found
    }

    /// Exact lookup of a full name such as `"Juan Marichal"`.
    ///
    /// Every split of the words into a first and a last name is tried in
    /// turn, so multi-word names like `"Ken Griffey Jr."` are found too.
    pub fn find_by_full_name(&self, full_name: &str) -> Option<&Player> {
        let words: Vec<&str> = full_name.split_whitespace().collect();

        (1..words.len()).find_map(|split| {
            let (first, last) = words.split_at(split);
            self.find_by_exact_name(&first.join(" "), &last.join(" "))
        })
    }
}

fn category_columns(category: Category) -> Vec<&'static str> {
    let mut columns = vec![PLAYER_ID_COLUMN];
    columns.extend_from_slice(category.columns());
    columns
}

fn load_category(reader: impl Read, category: Category, path: &str) -> Result<Table> {
    Table::from_reader(
        reader,
        &category.to_string(),
        path,
        &category_columns(category),
    )
}

fn load_category_file(data_directory: &str, category: Category) -> Result<Table> {
    load_table_file(
        data_directory,
        category.file_name(),
        &category.to_string(),
        &category_columns(category),
    )
}

fn load_table_file(
    data_directory: &str,
    file_name: &str,
    file_description: &str,
    required_columns: &[&str],
) -> Result<Table> {
    let path = data_file_path(data_directory, file_name);
    debug!("Loading {} table from `{}`", file_description, path);

    let reader = get_reader(file_description, &path)?;
    Table::from_reader(reader, file_description, &path, required_columns)
}
