// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Astrophotography calculators.

Two pure calculations live here: the NPF rule, which gives the longest exposure
before stars trail, and the pixel scale, field of view and sampling quality of a
camera behind a telescope. Both are exposed as plain functions, as stateful
"form" controllers that only compute on request, and as the `astrocalc`
command-line program.
 */

pub mod constants;
pub mod exposure;
pub mod form;
pub mod help_texts;
pub(crate) mod math;
pub mod pixel_scale;
pub mod presets;
pub mod validation;

mod cli;

// Re-exports.
pub use cli::{Astrocalc, AstrocalcError};
pub use exposure::{
    compute_exposure, exposure_formula, try_compute_exposure, ExposureInput, ExposureResult,
};
pub use form::{ExposureForm, PixelScaleForm};
pub use math::round2;
pub use pixel_scale::{
    compute_pixel_scale, pixel_scale_formula, try_compute_pixel_scale, FieldOfView,
    PixelScaleInput, PixelScaleResult, SamplingClass,
};
pub use presets::{find_camera, find_telescope, CameraPreset, PresetError, TelescopePreset};
pub use validation::InputError;
