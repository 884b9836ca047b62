// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::{read_to_string, write};

use indoc::indoc;
use tempfile::TempDir;

use crate::{astrocalc, get_cmd_output};

#[test]
fn test_npf_defaults() {
    let cmd = astrocalc().arg("npf").ok();
    assert!(cmd.is_ok(), "npf failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Maximum exposure time: 4.66 seconds"),
        "{stdout}"
    );
    assert!(
        stdout.contains("t = (35 × 2.8 + 30 × 4.5) / 50 × cos(0°)"),
        "{stdout}"
    );
    assert!(stdout.contains("3.26 to 3.73 seconds"), "{stdout}");
}

#[test]
fn test_npf_exposure_alias_and_declination() {
    #[rustfmt::skip]
    let cmd = astrocalc()
        .args([
            "exposure",
            "-f", "50",
            "-N", "2.8",
            "-p", "4.5",
            "-d", "60",
        ])
        .ok();
    assert!(cmd.is_ok(), "npf failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Maximum exposure time: 2.33 seconds"),
        "{stdout}"
    );
}

#[test]
fn test_npf_negative_declination() {
    let cmd = astrocalc().args(["npf", "-d", "-60"]).ok();
    assert!(cmd.is_ok(), "npf failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Maximum exposure time: 2.33 seconds"),
        "{stdout}"
    );
}

#[test]
fn test_npf_zero_focal_length_fails() {
    let cmd = astrocalc().args(["npf", "--focal-length", "0"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("focal length"), "{stderr}");
}

#[test]
fn test_npf_unknown_camera_fails() {
    let cmd = astrocalc().args(["npf", "--camera", "hasselblad"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("hasselblad"), "{stderr}");
    assert!(stderr.contains("canon-eos-r5"), "{stderr}");
}

#[test]
fn test_npf_arg_file_and_output() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let arg_file = tmp_dir.path().join("npf.toml");
    write(
        &arg_file,
        indoc! {r#"
            [npf]
            focal_length = 24.0
            aperture = 2.8
            pixel_size = 4.5
        "#},
    )
    .unwrap();
    let output = tmp_dir.path().join("result.json");

    // The CLI declination is combined with the file's values.
    #[rustfmt::skip]
    let cmd = astrocalc()
        .args([
            "npf",
            &format!("{}", arg_file.display()),
            "--declination", "0",
            "--output", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "npf failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    // (35 × 2.8 + 30 × 4.5) / 24 = 9.708...
    assert!(
        stdout.contains("Maximum exposure time: 9.71 seconds"),
        "{stdout}"
    );

    let contents = read_to_string(&output).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["result"]["exposure_time_s"], 9.71);
    assert_eq!(json["input"]["focal_length_mm"], 24.0);
}

#[test]
fn test_npf_save_toml_round_trip() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let saved = tmp_dir.path().join("saved.toml");

    #[rustfmt::skip]
    let cmd = astrocalc()
        .args([
            "npf",
            "--focal-length", "14",
            "--aperture", "1.8",
            "--dry-run",
            "--save-toml", &format!("{}", saved.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "npf failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(!stdout.contains("Maximum exposure time"), "{stdout}");

    let contents = read_to_string(&saved).unwrap();
    assert!(contents.contains("[npf]"), "{contents}");

    // The saved file reproduces the run.
    let cmd = astrocalc()
        .args(["npf", &format!("{}", saved.display())])
        .ok();
    assert!(cmd.is_ok(), "npf failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    // (35 × 1.8 + 30 × 4.5) / 14 = 14.142...
    assert!(
        stdout.contains("Maximum exposure time: 14.14 seconds"),
        "{stdout}"
    );
}
