// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::read_to_string;

use tempfile::TempDir;

use crate::{astrocalc, get_cmd_output};

#[test]
fn test_pixel_scale_defaults() {
    let cmd = astrocalc().arg("pixel-scale").ok();
    assert!(cmd.is_ok(), "pixel-scale failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Pixel scale:      0.93 arcsec/pixel"),
        "{stdout}"
    );
    assert!(stdout.contains("Field of view:    2.06° × 1.38°"), "{stdout}");
    assert!(
        stdout.contains("Sampling quality: Excellent (undersampled)"),
        "{stdout}"
    );
    assert!(
        stdout.contains("Pixel Scale = (206.265 × 4.5) / 1000 = 0.93 arcsec/pixel"),
        "{stdout}"
    );
}

#[test]
fn test_pixel_scale_presets() {
    #[rustfmt::skip]
    let cmd = astrocalc()
        .args([
            "pixel-scale",
            "--camera", "asi533mc",
            "--telescope", "80mm-f5",
        ])
        .ok();
    assert!(cmd.is_ok(), "pixel-scale failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Pixel scale:      1.78 arcsec/pixel"),
        "{stdout}"
    );
    assert!(stdout.contains("Sampling quality: Good"), "{stdout}");
}

#[test]
fn test_pixel_scale_negative_pixel_size_fails() {
    let cmd = astrocalc()
        .args(["pixel-scale", "--pixel-size=-3"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("pixel size"), "{stderr}");
}

#[test]
fn test_pixel_scale_toml_output() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("result.toml");

    #[rustfmt::skip]
    let cmd = astrocalc()
        .args([
            "pixel-scale",
            "-f", "200",
            "-p", "2.9",
            "-o", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "pixel-scale failed: {}", cmd.err().unwrap());

    let contents = read_to_string(&output).unwrap();
    let value: toml::Value = toml::from_str(&contents).unwrap();
    // 206.265 × 2.9 / 200 = 2.99...
    assert_eq!(
        value["result"]["pixel_scale_arcsec"].as_float(),
        Some(2.99)
    );
    assert_eq!(
        value["result"]["sampling"].as_str(),
        Some("Fair (oversampled)")
    );
}

#[test]
fn test_pixel_scale_unsupported_output_fails() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("result.yaml");
    let cmd = astrocalc()
        .args(["pixel-scale", "-o", &format!("{}", output.display())])
        .ok();
    assert!(cmd.is_err());
    assert!(!output.exists());
}
