// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with calculator inputs.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("The {name} must be greater than 0, but got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("The {name} must be a finite number, but got {value}")]
    NotFinite { name: &'static str, value: f64 },
}
