// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/flags/extractor.rs
//!
//! YCM configuration generation from a compilation database
//!
//! Given a build directory, reads `compile_commands.json`, aggregates the
//! compiler flags of every entry and renders them into
//! `ycm_extra_conf.template`, writing the result to `.ycm_extra_conf.py`.
//!
//! Nothing is written until the database and template have both been
//! read and rendered successfully, and the final write is atomic, so a
//! failure never leaves a partial configuration behind.

use atomic_write_file::AtomicWriteFile;
use std::{
    collections::HashMap,
    fs,
    io::{self, BufRead, Write},
    path::{Component, Path, PathBuf, MAIN_SEPARATOR},
};

use crate::flags::{database, template, FlagMap, FlagsError};

/// Compilation database file name inside the base directory.
pub const DATABASE_FILE: &str = "compile_commands.json";

/// Template file name inside the base directory.
pub const TEMPLATE_FILE: &str = "ycm_extra_conf.template";

/// Generated configuration file name inside the base directory.
pub const OUTPUT_FILE: &str = ".ycm_extra_conf.py";

/// Question asked before an existing configuration is replaced.
pub const OVERWRITE_QUESTION: &str = ".ycm_extra_conf already exists. Overwrite? [y/N] ";

/// Template placeholder receiving the rendered flags.
pub const FLAGS_PLACEHOLDER: &str = "flags";

/// Template placeholder receiving the database directory.
pub const DATABASE_PLACEHOLDER: &str = "database";

/// Input and output locations for one extraction
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtractorPaths {
    /// Absolute base directory
    pub base_dir: PathBuf,
    /// `compile_commands.json`
    pub database: PathBuf,
    /// `ycm_extra_conf.template`
    pub template: PathBuf,
    /// `.ycm_extra_conf.py`
    pub output: PathBuf,
}

impl ExtractorPaths {
    /// Resolves the file layout under `base_dir`.
    ///
    /// Relative paths are made absolute against the current directory and
    /// `.`/`..` components are folded away without touching the filesystem,
    /// so `build/../out` resolves to `<cwd>/out`.
    ///
    /// # Errors
    ///
    /// Returns `FlagsError::InvalidBaseDir` if `base_dir` is not an
    /// existing directory.
    pub fn new(base_dir: &Path) -> Result<Self, FlagsError> {
        let base_dir = std::path::absolute(base_dir)
            .map(|absolute| normalize_lexically(&absolute))
            .map_err(|_| FlagsError::InvalidBaseDir(base_dir.to_path_buf()))?;

        if !base_dir.is_dir() {
            return Err(FlagsError::InvalidBaseDir(base_dir));
        }

        Ok(Self {
            database: base_dir.join(DATABASE_FILE),
            template: base_dir.join(TEMPLATE_FILE),
            output: base_dir.join(OUTPUT_FILE),
            base_dir,
        })
    }

    /// Base directory as text, with a trailing separator.
    ///
    /// # Errors
    ///
    /// Returns `FlagsError::NonUtf8Path` if the directory is not UTF-8.
    pub fn database_dir(&self) -> Result<String, FlagsError> {
        let mut dir = self
            .base_dir
            .to_str()
            .ok_or_else(|| FlagsError::NonUtf8Path(self.base_dir.clone()))?
            .to_string();

        if !dir.ends_with(MAIN_SEPARATOR) {
            dir.push(MAIN_SEPARATOR);
        }

        Ok(dir)
    }
}

/// Removes `.` and `..` components from an absolute path by text alone.
///
/// `..` at the root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component);
            }
        }
    }

    normalized
}

/// Asks the user a yes/no question.
pub trait Confirm {
    /// Returns true only for an explicit yes.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while asking or reading the answer.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Line-based prompt over any reader and writer
///
/// The question is written without a newline and the answer is one line
/// of input. Only `y` or `yes`, in any case, count as agreement; anything
/// else, including end of input, declines.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt reading answers from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        Ok(is_affirmative(&answer))
    }
}

/// Always agrees; used when overwriting is forced.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(true)
    }
}

/// Checks an answer for `y` or `yes`, ignoring case and surrounding space.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// How an extraction ended
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The configuration was written to this path
    Written(PathBuf),
    /// An existing configuration was kept at the user's request
    Declined,
}

/// Renders the configuration text for `paths` without writing anything.
///
/// # Errors
///
/// Returns an error if the database or template cannot be read or parsed,
/// or if the template uses an unknown placeholder.
pub fn render_config(paths: &ExtractorPaths) -> Result<String, FlagsError> {
    let entries = database::load_database(&paths.database)?;
    let flags = FlagMap::from_entries(&entries);
    log::debug!("{} distinct flags after normalization", flags.len());

    let source = fs::read_to_string(&paths.template).map_err(|source| FlagsError::Read {
        path: paths.template.clone(),
        source,
    })?;

    let mut values = HashMap::new();
    values.insert(FLAGS_PLACEHOLDER, flags.render());
    values.insert(DATABASE_PLACEHOLDER, paths.database_dir()?);

    Ok(template::render(&source, &values)?)
}

/// Writes `content` to `path` atomically.
///
/// # Errors
///
/// Returns `FlagsError::WriteFailed` if any step of the write fails; the
/// destination is left untouched in that case.
pub fn write_config(path: &Path, content: &str) -> Result<(), FlagsError> {
    let write = || -> io::Result<()> {
        let mut file = AtomicWriteFile::options().open(path)?;
        file.write_all(content.as_bytes())?;
        file.commit()
    };

    write().map_err(|source| FlagsError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs a full extraction for `base_dir`.
///
/// If the output already exists, `confirm` decides whether it is replaced.
///
/// # Errors
///
/// Returns an error if any input is missing or malformed, the prompt
/// cannot be read, or the write fails. No file is written on error.
pub fn run<C: Confirm>(base_dir: &Path, confirm: &mut C) -> Result<Outcome, FlagsError> {
    let paths = ExtractorPaths::new(base_dir)?;
    let content = render_config(&paths)?;

    if paths.output.exists() {
        let overwrite = confirm
            .confirm(OVERWRITE_QUESTION)
            .map_err(FlagsError::Prompt)?;

        if !overwrite {
            log::info!("keeping existing {}", paths.output.display());
            return Ok(Outcome::Declined);
        }
    }

    write_config(&paths.output, &content)?;
    Ok(Outcome::Written(paths.output))
}
