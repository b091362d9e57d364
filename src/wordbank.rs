//! Category word lists and random word selection.
//!
//! Lists are newline-delimited artist names, one file per category. They are
//! compiled into the binary and can be overridden by a directory on disk that
//! holds files with the same names.

use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-user directory (under the platform data dir) that may hold
/// custom lists.
pub const DATA_DIR_NAME: &str = "hiphop-hangman";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub file: &'static str,
    pub name: &'static str,
}

pub static CATEGORIES: [Category; 7] = [
    Category {
        key: "1",
        file: "east_coast.txt",
        name: "East Coast (NY, NJ, PA, MD, VA, CT)",
    },
    Category {
        key: "2",
        file: "west_coast.txt",
        name: "West Coast (CA, WA, OR, NV)",
    },
    Category {
        key: "3",
        file: "south.txt",
        name: "South (GA, TX, FL, AL, MS, LA, NC, SC, TN)",
    },
    Category {
        key: "4",
        file: "midwest.txt",
        name: "Midwest (IL, MI, OH, MN, WI, IN)",
    },
    Category {
        key: "5",
        file: "international.txt",
        name: "International (Non-US artists)",
    },
    Category {
        key: "6",
        file: "groups.txt",
        name: "Groups (Collective groups)",
    },
    Category {
        key: "7",
        file: "names.txt",
        name: "All Artists (Complete collection)",
    },
];

#[must_use]
pub fn find_category(key: &str) -> Option<&'static Category> {
    let key = key.trim();
    CATEGORIES.iter().find(|c| c.key == key)
}

fn embedded_list(file: &str) -> Option<&'static str> {
    let data = match file {
        "east_coast.txt" => include_str!("resources/east_coast.txt"),
        "west_coast.txt" => include_str!("resources/west_coast.txt"),
        "south.txt" => include_str!("resources/south.txt"),
        "midwest.txt" => include_str!("resources/midwest.txt"),
        "international.txt" => include_str!("resources/international.txt"),
        "groups.txt" => include_str!("resources/groups.txt"),
        "names.txt" => include_str!("resources/names.txt"),
        _ => return None,
    };
    Some(data)
}

#[derive(Debug, Error)]
pub enum WordSupplyError {
    #[error("word list '{}' is unavailable: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list for {category} is empty")]
    Empty { category: String },
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

/// One category together with the number of entries in its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: &'static Category,
    pub count: usize,
}

pub fn load_wordlist_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_wordlist_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordSupplyError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| WordSupplyError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_wordlist_from_str(&data))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Embedded,
    Directory(PathBuf),
}

/// Where category lists are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSupply {
    source: Source,
}

impl WordSupply {
    pub fn embedded() -> Self {
        Self {
            source: Source::Embedded,
        }
    }

    pub fn from_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            source: Source::Directory(dir.into()),
        }
    }

    /// Use `override_dir` if given, else the user's data directory if it
    /// exists, else the embedded lists.
    pub fn discover(override_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = override_dir {
            log::info!("Using word lists from {}", dir.display());
            return Self::from_dir(dir);
        }
        match user_wordlist_dir() {
            Some(dir) if dir.is_dir() => {
                log::info!("Using word lists from {}", dir.display());
                Self::from_dir(dir)
            }
            _ => {
                log::info!("Using embedded word lists");
                Self::embedded()
            }
        }
    }

    /// Directory the lists are read from, or `None` for the embedded lists.
    pub fn dir(&self) -> Option<&Path> {
        match &self.source {
            Source::Embedded => None,
            Source::Directory(dir) => Some(dir),
        }
    }

    pub fn load(&self, category: &Category) -> Result<Vec<String>, WordSupplyError> {
        match &self.source {
            Source::Embedded => embedded_list(category.file)
                .map(load_wordlist_from_str)
                .ok_or_else(|| WordSupplyError::UnknownCategory(category.key.to_string())),
            Source::Directory(dir) => load_wordlist_from_file(dir.join(category.file)),
        }
    }

    /// Pick one entry of `category` uniformly at random.
    pub fn random_word(&self, category: &Category) -> Result<String, WordSupplyError> {
        self.random_word_with(category, &mut rand::rng())
    }

    pub fn random_word_with<R: Rng + ?Sized>(
        &self,
        category: &Category,
        rng: &mut R,
    ) -> Result<String, WordSupplyError> {
        let words = self.load(category)?;
        let word = words.choose(rng).ok_or_else(|| WordSupplyError::Empty {
            category: category.name.to_string(),
        })?;
        log::debug!("Picked a word of {} characters from {}", word.chars().count(), category.file);
        Ok(word.clone())
    }

    /// Number of entries in `category`, or 0 if the list cannot be read.
    pub fn count(&self, category: &Category) -> usize {
        match self.load(category) {
            Ok(words) => words.len(),
            Err(e) => {
                log::warn!("Could not count {}: {e}", category.file);
                0
            }
        }
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        CATEGORIES
            .iter()
            .map(|category| CategorySummary {
                category,
                count: self.count(category),
            })
            .collect()
    }
}

impl Default for WordSupply {
    fn default() -> Self {
        Self::embedded()
    }
}

/// `<data dir>/hiphop-hangman/wordlists`, if the platform has a data dir.
pub fn user_wordlist_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME).join("wordlists"))
}
