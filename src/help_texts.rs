// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Help and guidance texts, for command-line interfaces and for reporting
//! results.

use crate::{
    constants::*,
    presets::{
        CAMERA_KEYS_COMMA_SEPARATED, NPF_CAMERA_KEYS_COMMA_SEPARATED,
        TELESCOPE_KEYS_COMMA_SEPARATED,
    },
};

pub const NPF_DESCRIPTION: &str = "The NPF rule calculates the maximum exposure time to avoid star trails. It's more accurate than the traditional 500 rule, especially for modern cameras with small pixels.";

pub const PIXEL_SCALE_DESCRIPTION: &str = "Calculate pixel scale (arcseconds per pixel) and field of view for your telescope and camera setup. This helps determine if your setup is properly sampled for the seeing conditions.";

/// Tips shown alongside an NPF result.
pub const NPF_TIPS: [&str; 4] = [
    "This is the maximum exposure time before stars start to trail",
    "For sharper stars, use 70-80% of this time",
    "Higher declination (closer to poles) allows longer exposures",
    "Consider using a star tracker for longer exposures",
];

lazy_static::lazy_static! {
    pub(crate) static ref NPF_FOCAL_LENGTH_HELP: String =
        format!("The focal length of the lens [mm]. Default: {DEFAULT_NPF_FOCAL_LENGTH_MM}");

    pub(crate) static ref NPF_APERTURE_HELP: String =
        format!("The aperture as an f-number (e.g. 2.8 for f/2.8). Default: {DEFAULT_NPF_APERTURE}");

    pub(crate) static ref NPF_PIXEL_SIZE_HELP: String =
        format!("The pixel size of the camera [μm]. Default: {DEFAULT_NPF_PIXEL_SIZE_UM}");

    pub(crate) static ref NPF_DECLINATION_HELP: String =
        format!("The declination of the target [degrees]. 0° is the celestial equator, 90° the north celestial pole. Values outside [{MIN_DECLINATION_DEG}, {MAX_DECLINATION_DEG}] are clamped. Default: {DEFAULT_NPF_DECLINATION_DEG}");

    pub(crate) static ref NPF_CAMERA_HELP: String =
        format!("Use the pixel size of this camera. An explicitly-given pixel size takes precedence. Valid cameras: {}", *NPF_CAMERA_KEYS_COMMA_SEPARATED);

    pub(crate) static ref NPF_TELESCOPE_HELP: String =
        format!("Use the focal length of this telescope. An explicitly-given focal length takes precedence. Valid telescopes: {}", *TELESCOPE_KEYS_COMMA_SEPARATED);

    pub(crate) static ref PS_FOCAL_LENGTH_HELP: String =
        format!("The focal length of the telescope [mm]. Default: {DEFAULT_PS_FOCAL_LENGTH_MM}");

    pub(crate) static ref PS_PIXEL_SIZE_HELP: String =
        format!("The pixel size of the camera [μm]. Default: {DEFAULT_PS_PIXEL_SIZE_UM}");

    pub(crate) static ref PS_SENSOR_WIDTH_HELP: String =
        format!("The width of the sensor [mm]. Default: {DEFAULT_PS_SENSOR_WIDTH_MM}");

    pub(crate) static ref PS_SENSOR_HEIGHT_HELP: String =
        format!("The height of the sensor [mm]. Default: {DEFAULT_PS_SENSOR_HEIGHT_MM}");

    pub(crate) static ref PS_CAMERA_HELP: String =
        format!("Use the pixel size and sensor dimensions of this camera. Explicitly-given values take precedence. Valid cameras: {}", *CAMERA_KEYS_COMMA_SEPARATED);

    pub(crate) static ref PS_TELESCOPE_HELP: String =
        format!("Use the focal length of this telescope. An explicitly-given focal length takes precedence. Valid telescopes: {}", *TELESCOPE_KEYS_COMMA_SEPARATED);
}
