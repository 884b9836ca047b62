// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code shared between the `astrocalc` subcommands: argument files, result
//! files and printers.

mod printers;

#[cfg(test)]
pub(crate) use printers::take_warnings;
pub(crate) use printers::{display_warnings, InfoPrinter, Warn};

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use itertools::Itertools;
use log::debug;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

lazy_static::lazy_static! {
    pub(super) static ref FILE_FORMATS_COMMA_SEPARATED: String = FileFormat::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *FILE_FORMATS_COMMA_SEPARATED);

    pub(super) static ref OUTPUT_HELP: String =
        format!("Also write the inputs and result to this file. Supported formats: {}", *FILE_FORMATS_COMMA_SEPARATED);
}

/// The serialisation formats understood for argument files and result files.
/// The format is determined by the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub(super) enum FileFormat {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

impl FileFormat {
    pub(super) fn from_path(path: &Path) -> Option<FileFormat> {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| FileFormat::from_str(&e).ok())
    }
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read};

        use crate::cli::common::{FileFormat, FILE_FORMATS_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        match FileFormat::from_path(&$arg_file) {
            Some(FileFormat::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(AstrocalcError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(FileFormat::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(AstrocalcError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            None => {
                return Err(AstrocalcError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *FILE_FORMATS_COMMA_SEPARATED)
                ))
            }
        }
    });
}

#[derive(Error, Debug)]
pub(super) enum ResultFileError {
    #[error("Output file '{}' doesn't have a recognised file extension! Valid extensions are: {}", .0.display(), *FILE_FORMATS_COMMA_SEPARATED)]
    UnsupportedFormat(PathBuf),

    #[error("Couldn't serialise the result as toml: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Couldn't serialise the result as json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Where a result should be written to, if anywhere. Checking the format
/// happens while arguments are parsed, so that bad output paths are caught
/// before anything is calculated.
#[derive(Debug, Clone)]
pub(super) struct ResultFile {
    pub(super) path: PathBuf,
    pub(super) format: FileFormat,
}

impl ResultFile {
    pub(super) fn parse(path: Option<PathBuf>) -> Result<Option<ResultFile>, ResultFileError> {
        match path {
            None => Ok(None),
            Some(path) => match FileFormat::from_path(&path) {
                Some(format) => Ok(Some(ResultFile { path, format })),
                None => Err(ResultFileError::UnsupportedFormat(path)),
            },
        }
    }

    pub(super) fn write<T: Serialize>(&self, thing: &T) -> Result<(), ResultFileError> {
        let contents = match self.format {
            FileFormat::Toml => toml::to_string(thing)?,
            FileFormat::Json => serde_json::to_string_pretty(thing)?,
        };
        let mut f = BufWriter::new(File::create(&self.path)?);
        f.write_all(contents.as_bytes())?;
        f.flush()?;
        debug!("Wrote {}", self.path.display());
        Ok(())
    }
}
