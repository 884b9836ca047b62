// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the pixel scale and field of view of a camera and telescope, and
//! how well they sample typical seeing.


use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::common::{
    display_warnings, InfoPrinter, ResultFile, Warn, ARG_FILE_HELP, OUTPUT_HELP,
};
use crate::{
    form::PixelScaleForm,
    help_texts::*,
    pixel_scale::{PixelScaleInput, PixelScaleResult, SamplingClass},
    presets::{find_camera, find_telescope},
    AstrocalcError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct PixelScaleCliArgs {
    #[clap(short, long, help = PS_FOCAL_LENGTH_HELP.as_str(), help_heading = "OPTICS")]
    pub(super) focal_length: Option<f64>,

    #[clap(short, long, help = PS_PIXEL_SIZE_HELP.as_str(), help_heading = "CAMERA")]
    pub(super) pixel_size: Option<f64>,

    #[clap(short = 'W', long, help = PS_SENSOR_WIDTH_HELP.as_str(), help_heading = "CAMERA")]
    pub(super) sensor_width: Option<f64>,

    #[clap(short = 'H', long, help = PS_SENSOR_HEIGHT_HELP.as_str(), help_heading = "CAMERA")]
    pub(super) sensor_height: Option<f64>,

    #[clap(short, long, help = PS_CAMERA_HELP.as_str(), help_heading = "PRESETS")]
    pub(super) camera: Option<String>,

    #[clap(short, long, help = PS_TELESCOPE_HELP.as_str(), help_heading = "PRESETS")]
    pub(super) telescope: Option<String>,

    #[clap(short, long, help = OUTPUT_HELP.as_str(), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,
}

impl PixelScaleCliArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            focal_length: self.focal_length.or(other.focal_length),
            pixel_size: self.pixel_size.or(other.pixel_size),
            sensor_width: self.sensor_width.or(other.sensor_width),
            sensor_height: self.sensor_height.or(other.sensor_height),
            camera: self.camera.or(other.camera),
            telescope: self.telescope.or(other.telescope),
            output: self.output.or(other.output),
        }
    }
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct PixelScaleArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "pixel-scale")]
    #[serde(default)]
    pub(super) pixel_scale_args: PixelScaleCliArgs,
}

#[derive(Debug)]
pub(super) struct PixelScaleParams {
    pub(super) form: PixelScaleForm,
    pub(super) result_file: Option<ResultFile>,
}

#[derive(Serialize)]
struct PixelScaleReport<'a> {
    input: &'a PixelScaleInput,
    result: &'a PixelScaleResult,
}

impl PixelScaleArgs {
    /// Consolidate the command-line arguments and any argument file into a
    /// single struct, preferring the command line.
    pub(super) fn merge(self) -> Result<PixelScaleArgs, AstrocalcError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let PixelScaleArgs {
                args_file: _,
                pixel_scale_args,
            } = unpack_arg_file!(arg_file);

            Ok(PixelScaleArgs {
                args_file: None,
                pixel_scale_args: cli_args.pixel_scale_args.merge(pixel_scale_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<PixelScaleParams, AstrocalcError> {
        debug!("{:#?}", self);

        let PixelScaleArgs {
            args_file: _,
            pixel_scale_args:
                PixelScaleCliArgs {
                    focal_length,
                    pixel_size,
                    sensor_width,
                    sensor_height,
                    camera,
                    telescope,
                    output,
                },
        } = self;

        let mut form = PixelScaleForm::default();
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
        if let Some(p) = pixel_size {
            form.set_pixel_size(p);
        }
        if let Some(w) = sensor_width {
            form.set_sensor_width(w);
        }
        if let Some(h) = sensor_height {
            form.set_sensor_height(h);
        }

        let input = form.input();
        input.validate()?;
        if input.sensor_height_mm > input.sensor_width_mm {
            format!(
                "The sensor height ({} mm) is bigger than its width ({} mm); is the camera in portrait orientation?",
                input.sensor_height_mm, input.sensor_width_mm
            )
            .warn();
        }

        let result_file = ResultFile::parse(output)?;

        let mut input_printer = InfoPrinter::new("Pixel scale inputs".into());
        input_printer.push_block(vec![
            format!("Focal length: {} mm", input.focal_length_mm).into(),
            format!("Pixel size:   {} μm", input.pixel_size_microns).into(),
            format!(
                "Sensor:       {} × {} mm",
                input.sensor_width_mm, input.sensor_height_mm
            )
            .into(),
        ]);
        input_printer.display();

        display_warnings();

        Ok(PixelScaleParams { form, result_file })
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

impl PixelScaleParams {
    pub(super) fn run(mut self) -> Result<PixelScaleResult, AstrocalcError> {
        let result = self.form.calculate().clone();

        let mut printer = InfoPrinter::new("Results".into());
        printer.push_block(vec![
            format!("Pixel scale:      {} arcsec/pixel", result.pixel_scale_arcsec).into(),
            format!(
                "Field of view:    {}° × {}°",
                result.field_of_view.width_deg, result.field_of_view.height_deg
            )
            .into(),
            format!("Sampling quality: {}", result.sampling).into(),
        ]);
        printer.push_line(format!("Formula: {}", result.formula).into());
        printer.display();

        let mut guide_printer = InfoPrinter::new("Sampling guidelines".into());
        for class in SamplingClass::iter() {
            let marker = if class == result.sampling { "→" } else { " " };
            guide_printer.push_line(format!("{marker} {}", class.guidance()).into());
        }
        guide_printer.display();

        if let Some(result_file) = &self.result_file {
            result_file.write(&PixelScaleReport {
                input: self.form.input(),
                result: &result,
            })?;
            info!("Wrote result to {}", result_file.path.display());
        }

        Ok(result)
    }
}
