// Line-oriented command protocol over a word index.
//
// One command per line: a keyword, then a single space and the argument
// for commands that take one.
//
//   load              load the corpus file
//   i WORD            insert
//   c PREFIX          count words with a prefix
//   e WORD            erase
//   p                 print all words
//   spellcheck WORD   spellcheck
//   empty             is the index empty
//   clear             drop all words
//   size              number of words
//   exit              stop

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{info, warn};
use wordtrie::{Insertion, LoadError, Spelling, Trie};

/// Error type for parsing or running a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The line holds nothing but whitespace.
    #[error("blank command")]
    Blank,

    /// The keyword is not part of the protocol.
    #[error("unknown command: {0}")]
    Unknown(String),

    /// The command needs an argument and none was given.
    #[error("{0} requires an argument")]
    MissingArgument(&'static str),

    /// Loading the corpus failed.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load,
    Insert(String),
    Count(String),
    Erase(String),
    Print,
    Spellcheck(String),
    Empty,
    Clear,
    Size,
    Exit,
}

impl Command {
    /// Parse one protocol line. Surrounding whitespace (including `\r`) is
    /// ignored, as is any argument given to a command that takes none.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let (keyword, argument) = match line.split_once(' ') {
            Some((keyword, argument)) => (keyword, argument.trim()),
            None => (line, ""),
        };

        let arg = |name: &'static str| {
            if argument.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(argument.to_string())
            }
        };

        match keyword {
            "" => Err(CommandError::Blank),
            "load" | "l" => Ok(Command::Load),
            "i" => arg("i").map(Command::Insert),
            "c" => arg("c").map(Command::Count),
            "e" => arg("e").map(Command::Erase),
            "p" => Ok(Command::Print),
            "spellcheck" | "sp" => arg("spellcheck").map(Command::Spellcheck),
            "empty" | "em" => Ok(Command::Empty),
            "clear" | "cl" => Ok(Command::Clear),
            "size" | "s" => Ok(Command::Size),
            "exit" | "ex" => Ok(Command::Exit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What a command produced. `Display` renders the protocol reply line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Success,
    Failure,
    Count(usize),
    NotFound,
    Words(Vec<String>),
    Correct,
    Suggestions(Vec<String>),
    Empty(bool),
    Size(usize),
    Exit,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Success => f.write_str("success"),
            Reply::Failure => f.write_str("failure"),
            Reply::Count(n) => write!(f, "count is {n}"),
            Reply::NotFound => f.write_str("not found"),
            Reply::Words(words) | Reply::Suggestions(words) => f.write_str(&words.join(" ")),
            Reply::Correct => f.write_str("correct"),
            Reply::Empty(empty) => write!(f, "empty {}", u8::from(*empty)),
            Reply::Size(n) => write!(f, "number of words is {n}"),
            Reply::Exit => Ok(()),
        }
    }
}

/// A word index plus the corpus it loads from.
#[derive(Debug)]
pub struct Session {
    trie: Trie,
    corpus: PathBuf,
}

impl Session {
    pub fn new(trie: Trie, corpus: impl Into<PathBuf>) -> Self {
        Self {
            trie,
            corpus: corpus.into(),
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Run one command against the index.
    pub fn execute(&mut self, command: Command) -> Result<Reply, CommandError> {
        let reply = match command {
            Command::Load => {
                let report = wordtrie::load_from_path(&mut self.trie, &self.corpus)?;
                info!(
                    corpus = %self.corpus.display(),
                    added = report.added,
                    duplicates = report.duplicates,
                    rejected = report.rejected,
                    "corpus loaded"
                );
                Reply::Success
            }
            Command::Insert(word) => match self.trie.insert(&word) {
                Ok(Insertion::Added) => Reply::Success,
                Ok(Insertion::AlreadyPresent) => Reply::Failure,
                Err(e) => {
                    warn!(word = %word, error = %e, "cannot insert");
                    Reply::Failure
                }
            },
            Command::Count(prefix) => match self.trie.count_prefix(&prefix) {
                0 => Reply::NotFound,
                n => Reply::Count(n),
            },
            Command::Erase(word) => {
                if self.trie.delete(&word) {
                    Reply::Success
                } else {
                    Reply::Failure
                }
            }
            Command::Print => Reply::Words(self.trie.words().collect()),
            Command::Spellcheck(word) => match self.trie.spellcheck(&word) {
                Spelling::Correct => Reply::Correct,
                Spelling::Suggestions(words) => Reply::Suggestions(words),
            },
            Command::Empty => Reply::Empty(self.trie.is_empty()),
            Command::Clear => {
                self.trie.clear();
                Reply::Success
            }
            Command::Size => Reply::Size(self.trie.len()),
            Command::Exit => Reply::Exit,
        };
        Ok(reply)
    }

    /// Parse and run one protocol line.
    pub fn execute_line(&mut self, line: &str) -> Result<Reply, CommandError> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    /// Answer commands read from `input` until `exit` or end of input.
    ///
    /// Each reply is flushed as soon as it is written so an interactive
    /// caller sees it before sending the next command. Command errors go
    /// to `errors` and the session keeps reading.
    pub fn serve<R, W, E>(&mut self, input: R, out: &mut W, errors: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        for line in input.lines() {
            let line = line?;
            match self.execute_line(&line) {
                Ok(Reply::Exit) => break,
                Ok(reply) => {
                    writeln!(out, "{reply}")?;
                    out.flush()?;
                }
                Err(CommandError::Blank) => {}
                Err(e) => {
                    writeln!(errors, "error: {e}")?;
                    errors.flush()?;
                }
            }
        }
        out.flush()
    }
}
