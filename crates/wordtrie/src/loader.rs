// Bulk loading of whitespace-separated word lists

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use wordtrie_core::AlphabetError;

use crate::trie::{Insertion, Trie};

/// Error type for corpus loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The corpus file could not be opened or read.
    #[error("failed to read corpus {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from the supplied reader failed.
    #[error("failed to read corpus: {0}")]
    Read(#[from] io::Error),
}

/// Tally of insert outcomes for a batch of words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Words that were not stored before.
    pub added: usize,
    /// Words that were already stored.
    pub duplicates: usize,
    /// Tokens rejected because they are not alphabet words.
    pub rejected: usize,
}

impl LoadReport {
    /// Count one insert outcome for `word`.
    pub fn record(&mut self, word: &str, outcome: Result<Insertion, AlphabetError>) {
        match outcome {
            Ok(Insertion::Added) => self.added += 1,
            Ok(Insertion::AlreadyPresent) => self.duplicates += 1,
            Err(e) => {
                warn!(word, error = %e, "skipping token");
                self.rejected += 1;
            }
        }
    }

    /// Total number of tokens seen.
    pub fn total(&self) -> usize {
        self.added + self.duplicates + self.rejected
    }
}

/// Insert every whitespace-separated token read from `reader`.
///
/// Tokens that are not alphabet words are counted as rejected and
/// skipped. Words already in `trie` count as duplicates.
pub fn load_from_reader<R: BufRead>(trie: &mut Trie, reader: R) -> Result<LoadReport, LoadError> {
    let mut report = LoadReport::default();
    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            report.record(token, trie.insert(token));
        }
    }
    debug!(
        added = report.added,
        duplicates = report.duplicates,
        rejected = report.rejected,
        "corpus loaded"
    );
    Ok(report)
}

/// Open `path` and load it with [`load_from_reader`].
pub fn load_from_path(trie: &mut Trie, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    load_from_reader(trie, BufReader::new(file)).map_err(|e| match e {
        LoadError::Read(source) => io_error(source),
        other => other,
    })
}
