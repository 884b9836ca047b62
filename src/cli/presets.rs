// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Print the camera and telescope presets.

use std::path::PathBuf;

use clap::Parser;
use log::info;
use serde::Serialize;

use super::common::{InfoPrinter, ResultFile, OUTPUT_HELP};
use crate::{
    presets::{CameraPreset, TelescopePreset, CAMERAS, TELESCOPES},
    AstrocalcError,
};

/// List the camera and telescope presets that can be used with --camera and
/// --telescope. All values are approximate manufacturer specifications.
#[derive(Parser, Debug)]
pub struct PresetsArgs {
    #[clap(short, long, help = OUTPUT_HELP.as_str())]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct Presets {
    cameras: &'static [CameraPreset],
    telescopes: &'static [TelescopePreset],
}

impl PresetsArgs {
    pub(super) fn run(self) -> Result<(), AstrocalcError> {
        let result_file = ResultFile::parse(self.output)?;

        let mut camera_printer = InfoPrinter::new("Cameras".into());
        for c in &CAMERAS {
            let npf = if c.npf { "" } else { " (pixel-scale only)" };
            camera_printer.push_line(format!("{:<13} {}{npf}", c.key, c.label()).into());
        }
        camera_printer.display();

        let mut telescope_printer = InfoPrinter::new("Telescopes".into());
        for t in &TELESCOPES {
            telescope_printer.push_line(format!("{:<13} {}", t.key, t.label()).into());
        }
        telescope_printer.display();

        if let Some(result_file) = result_file {
            result_file.write(&Presets {
                cameras: &CAMERAS,
                telescopes: &TELESCOPES,
            })?;
            info!("Wrote presets to {}", result_file.path.display());
        }

        Ok(())
    }
}
