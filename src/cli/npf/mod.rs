// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the longest exposure before stars trail with the NPF rule.

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{
    display_warnings, InfoPrinter, ResultFile, Warn, ARG_FILE_HELP, OUTPUT_HELP,
};
use crate::{
    exposure::{ExposureInput, ExposureResult},
    form::ExposureForm,
    help_texts::*,
    presets::{find_camera, find_telescope},
    AstrocalcError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct NpfCliArgs {
    #[clap(short, long, help = NPF_FOCAL_LENGTH_HELP.as_str(), help_heading = "OPTICS")]
    pub(super) focal_length: Option<f64>,

    #[clap(short = 'N', long, help = NPF_APERTURE_HELP.as_str(), help_heading = "OPTICS")]
    pub(super) aperture: Option<f64>,

    #[clap(short, long, help = NPF_PIXEL_SIZE_HELP.as_str(), help_heading = "CAMERA")]
    pub(super) pixel_size: Option<f64>,

    #[clap(
        short,
        long,
        allow_hyphen_values = true,
        help = NPF_DECLINATION_HELP.as_str(),
        help_heading = "TARGET"
    )]
    pub(super) declination: Option<f64>,

    #[clap(short, long, help = NPF_CAMERA_HELP.as_str(), help_heading = "PRESETS")]
    pub(super) camera: Option<String>,

    #[clap(short, long, help = NPF_TELESCOPE_HELP.as_str(), help_heading = "PRESETS")]
    pub(super) telescope: Option<String>,

    #[clap(short, long, help = OUTPUT_HELP.as_str(), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,
}

impl NpfCliArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            focal_length: self.focal_length.or(other.focal_length),
            aperture: self.aperture.or(other.aperture),
            pixel_size: self.pixel_size.or(other.pixel_size),
            declination: self.declination.or(other.declination),
            camera: self.camera.or(other.camera),
            telescope: self.telescope.or(other.telescope),
            output: self.output.or(other.output),
        }
    }
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct NpfArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "npf")]
    #[serde(default)]
    pub(super) npf_args: NpfCliArgs,
}

/// Everything needed to run the NPF calculator, after arguments have been
/// checked.
#[derive(Debug)]
pub(super) struct NpfParams {
    pub(super) form: ExposureForm,
    pub(super) result_file: Option<ResultFile>,
}

/// What gets written to a result file.
#[derive(Serialize)]
struct NpfReport<'a> {
    input: &'a ExposureInput,
    result: &'a ExposureResult,
}

impl NpfArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified
    /// into a single struct. Where applicable, it will prefer CLI parameters
    /// over those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<NpfArgs, AstrocalcError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let NpfArgs {
                args_file: _,
                npf_args,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(NpfArgs {
                args_file: None,
                npf_args: cli_args.npf_args.merge(npf_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    /// Turn the arguments into an input snapshot. Presets are applied first,
    /// then any explicitly-given values, on top of the calculator defaults.
    pub(super) fn parse(self) -> Result<NpfParams, AstrocalcError> {
        debug!("{:#?}", self);

        // Expose all the struct fields to ensure they're all used.
        let NpfArgs {
            args_file: _,
            npf_args:
                NpfCliArgs {
                    focal_length,
                    aperture,
                    pixel_size,
                    declination,
                    camera,
                    telescope,
                    output,
                },
        } = self;

        let mut form = ExposureForm::default();
        let mut preset_printer = InfoPrinter::new("Presets".into());
        let mut num_presets = 0;
        if let Some(telescope) = telescope {
            let telescope = find_telescope(&telescope)?;
            preset_printer.push_line(format!("Telescope: {}", telescope.label()).into());
            form.apply_telescope(telescope);
            num_presets += 1;
        }
        if let Some(camera) = camera {
            let camera = find_camera(&camera)?;
            if !camera.npf {
                format!(
                    "{} isn't one of the usual NPF cameras; only its pixel size is used",
                    camera.name
                )
                .warn();
            }
            preset_printer.push_line(format!("Camera: {}", camera.label()).into());
            form.apply_camera(camera);
            num_presets += 1;
        }
        if num_presets > 0 {
            preset_printer.display();
        }

        if let Some(f) = focal_length {
            form.set_focal_length(f);
        }
        if let Some(n) = aperture {
            form.set_aperture(n);
        }
        if let Some(p) = pixel_size {
            form.set_pixel_size(p);
        }
        if let Some(d) = declination {
            form.set_declination(d);
        }

        let input = form.input();
        input.validate()?;
        let clamped = input.clamped_declination();
        if clamped != input.declination_deg {
            format!(
                "Declination {}° is outside [-90°, 90°]; using {clamped}°",
                input.declination_deg
            )
            .warn();
        }

        let result_file = ResultFile::parse(output)?;

        let mut input_printer = InfoPrinter::new("NPF inputs".into());
        input_printer.push_block(vec![
            format!("Focal length: {} mm", input.focal_length_mm).into(),
            format!("Aperture:     f/{}", input.aperture_f_number).into(),
            format!("Pixel size:   {} μm", input.pixel_size_microns).into(),
            format!("Declination:  {}°", clamped).into(),
        ]);
        input_printer.display();

        display_warnings();

        Ok(NpfParams { form, result_file })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), AstrocalcError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

impl NpfParams {
    pub(super) fn run(mut self) -> Result<ExposureResult, AstrocalcError> {
        let result = self.form.calculate().clone();

        let (sharp_low, sharp_high) = result.sharp_star_range();
        let mut printer = InfoPrinter::new(
            format!(
                "Maximum exposure time: {} seconds",
                result.exposure_time_s
            )
            .into(),
        );
        printer.push_line(format!("Formula: {}", result.formula).into());
        printer.push_line(
            format!("For sharper stars: {sharp_low} to {sharp_high} seconds").into(),
        );
        printer.push_block(NPF_TIPS.iter().map(|&t| t.into()).collect());
        printer.display();

        if let Some(result_file) = &self.result_file {
            result_file.write(&NpfReport {
                input: self.form.input(),
                result: &result,
            })?;
            info!("Wrote result to {}", result_file.path.display());
        }

        Ok(result)
    }
}
