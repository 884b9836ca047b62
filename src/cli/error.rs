// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all astrocalc-related errors. This should be the *only*
//! error enum that is publicly visible from the command-line interface.

use thiserror::Error;

use super::common::ResultFileError;
use crate::{presets::PresetError, validation::InputError};

/// The *only* publicly visible error from astrocalc. Each error message should
/// say where to find more info, unless it's "generic".
#[derive(Error, Debug)]
pub enum AstrocalcError {
    /// An error related to the values given to a calculator.
    #[error("{0}\n\nFocal lengths, apertures, pixel sizes and sensor dimensions must all be positive numbers. See for more info: astrocalc <npf|pixel-scale> --help")]
    Input(String),

    /// An error related to camera or telescope presets.
    #[error("{0}\n\nSee for more info: astrocalc presets")]
    Preset(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files contain the same arguments as the command line, under a table named after the subcommand (e.g. [npf]).")]
    ArgFile(String),

    /// An error related to writing results.
    #[error("{0}")]
    ResultFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

impl From<InputError> for AstrocalcError {
    fn from(e: InputError) -> Self {
        Self::Input(e.to_string())
    }
}

impl From<PresetError> for AstrocalcError {
    fn from(e: PresetError) -> Self {
        Self::Preset(e.to_string())
    }
}

impl From<ResultFileError> for AstrocalcError {
    fn from(e: ResultFileError) -> Self {
        match e {
            ResultFileError::UnsupportedFormat(_)
            | ResultFileError::Toml(_)
            | ResultFileError::Json(_) => Self::ResultFile(e.to_string()),
            ResultFileError::IO(e) => Self::from(e),
        }
    }
}

impl From<std::io::Error> for AstrocalcError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
