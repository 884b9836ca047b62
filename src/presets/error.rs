// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Unknown camera preset '{key}'. Valid presets are: {valid}")]
    UnknownCamera { key: String, valid: &'static str },

    #[error("Unknown telescope preset '{key}'. Valid presets are: {valid}")]
    UnknownTelescope { key: String, valid: &'static str },
}
