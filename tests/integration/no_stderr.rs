// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use crate::{astrocalc, get_cmd_output};

fn assert_no_stderr(args: &[&str]) {
    let cmd = astrocalc().args(args).ok();
    assert!(
        cmd.is_ok(),
        "{args:?} failed: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_npf_no_stderr() {
    assert_no_stderr(&["npf"]);
}

#[test]
fn test_pixel_scale_no_stderr() {
    assert_no_stderr(&["pixel-scale"]);
}

#[test]
fn test_presets_no_stderr() {
    assert_no_stderr(&["presets"]);
}

#[test]
fn test_warnings_no_stderr() {
    // Warnings are logged, not written to stderr.
    #[rustfmt::skip]
    assert_no_stderr(&[
        "npf",
        "--declination", "120",
        "--camera", "asi533mc",
    ]);
}
