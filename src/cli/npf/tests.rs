// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use approx::assert_abs_diff_eq;
use indoc::indoc;
use serial_test::serial;
use tempfile::{Builder, TempDir};

use super::*;
use crate::cli::common::take_warnings;

fn args(npf_args: NpfCliArgs) -> NpfArgs {
    NpfArgs {
        args_file: None,
        npf_args,
    }
}

fn write_arg_file(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut f = Builder::new().suffix(suffix).tempfile().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
#[serial]
fn test_defaults() {
    let params = args(NpfCliArgs::default()).parse().unwrap();
    assert_eq!(*params.form.input(), ExposureInput::default());
    assert!(params.result_file.is_none());

    let result = params.run().unwrap();
    assert_abs_diff_eq!(result.exposure_time_s, 4.66);
}

#[test]
#[serial]
fn test_explicit_values_override_presets() {
    let params = args(NpfCliArgs {
        camera: Some("canon-eos-r6".to_string()),
        telescope: Some("80mm-f5".to_string()),
        focal_length: Some(14.0),
        ..Default::default()
    })
    .parse()
    .unwrap();
    let input = params.form.input();
    assert_abs_diff_eq!(input.focal_length_mm, 14.0);
    assert_abs_diff_eq!(input.pixel_size_microns, 5.9);
    assert_abs_diff_eq!(input.aperture_f_number, 2.8);

    let params = args(NpfCliArgs {
        camera: Some("canon-eos-r6".to_string()),
        pixel_size: Some(2.4),
        ..Default::default()
    })
    .parse()
    .unwrap();
    assert_abs_diff_eq!(params.form.input().pixel_size_microns, 2.4);
}

#[test]
#[serial]
fn test_unknown_preset_is_an_error() {
    let result = args(NpfCliArgs {
        camera: Some("hasselblad".to_string()),
        ..Default::default()
    })
    .parse();
    assert!(matches!(result, Err(AstrocalcError::Preset(_))));
}

#[test]
#[serial]
fn test_non_positive_input_is_an_error() {
    let result = args(NpfCliArgs {
        focal_length: Some(0.0),
        ..Default::default()
    })
    .parse();
    match result {
        Err(AstrocalcError::Input(msg)) => assert!(msg.contains("focal length"), "{msg}"),
        other => panic!("expected an input error, got {other:?}"),
    }

    let result = args(NpfCliArgs {
        aperture: Some(-2.0),
        ..Default::default()
    })
    .parse();
    assert!(matches!(result, Err(AstrocalcError::Input(_))));
}

#[test]
#[serial]
fn test_out_of_range_declination_is_clamped() {
    take_warnings();
    let params = args(NpfCliArgs {
        declination: Some(100.0),
        ..Default::default()
    })
    .parse()
    .unwrap();
    // display_warnings() has already flushed, so nothing is left over.
    assert!(take_warnings().is_empty());

    let result = params.run().unwrap();
    assert_abs_diff_eq!(result.exposure_time_s, 0.0);
    assert!(result.formula.ends_with("cos(90°)"));
}

#[test]
#[serial]
fn test_non_npf_camera_is_allowed() {
    let params = args(NpfCliArgs {
        camera: Some("asi533mc".to_string()),
        ..Default::default()
    })
    .parse()
    .unwrap();
    assert_abs_diff_eq!(params.form.input().pixel_size_microns, 3.45);
}

#[test]
#[serial]
fn test_bad_output_extension() {
    let result = args(NpfCliArgs {
        output: Some(PathBuf::from("result.csv")),
        ..Default::default()
    })
    .parse();
    assert!(matches!(result, Err(AstrocalcError::ResultFile(_))));
}

#[test]
#[serial]
fn test_toml_arg_file_is_merged() {
    let file = write_arg_file(
        indoc! {r#"
            [npf]
            focal_length = 24
            aperture = 1.4
            declination = -30.0
            camera = "nikon-z6"
        "#},
        ".toml",
    );

    let merged = NpfArgs {
        args_file: Some(file.path().to_path_buf()),
        npf_args: NpfCliArgs {
            // The CLI beats the file.
            aperture: Some(2.0),
            ..Default::default()
        },
    }
    .merge()
    .unwrap();
    assert!(merged.args_file.is_none());
    assert_eq!(merged.npf_args.focal_length, Some(24.0));
    assert_eq!(merged.npf_args.aperture, Some(2.0));
    assert_eq!(merged.npf_args.declination, Some(-30.0));
    assert_eq!(merged.npf_args.camera.as_deref(), Some("nikon-z6"));

    let params = merged.parse().unwrap();
    assert_abs_diff_eq!(params.form.input().pixel_size_microns, 4.6);
}

#[test]
#[serial]
fn test_json_arg_file_is_merged() {
    let file = write_arg_file(
        r#"{"npf": {"focal_length": 35.0, "pixel_size": 3.76}}"#,
        ".json",
    );
    let merged = NpfArgs {
        args_file: Some(file.path().to_path_buf()),
        npf_args: NpfCliArgs::default(),
    }
    .merge()
    .unwrap();
    assert_eq!(merged.npf_args.focal_length, Some(35.0));
    assert_eq!(merged.npf_args.pixel_size, Some(3.76));
    assert_eq!(merged.npf_args.aperture, None);
}

#[test]
fn test_bad_arg_files() {
    let file = write_arg_file("[npf]\nfocal_length = \"long\"\n", ".toml");
    let result = NpfArgs {
        args_file: Some(file.path().to_path_buf()),
        npf_args: NpfCliArgs::default(),
    }
    .merge();
    assert!(matches!(result, Err(AstrocalcError::ArgFile(_))));

    let file = write_arg_file("focal_length: 50", ".yaml");
    let result = NpfArgs {
        args_file: Some(file.path().to_path_buf()),
        npf_args: NpfCliArgs::default(),
    }
    .merge();
    assert!(matches!(result, Err(AstrocalcError::ArgFile(_))));
}

#[test]
#[serial]
fn test_result_is_written() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("npf.json");
    let params = args(NpfCliArgs {
        output: Some(output.clone()),
        ..Default::default()
    })
    .parse()
    .unwrap();
    params.run().unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["result"]["exposure_time_s"], 4.66);
    assert_eq!(value["input"]["focal_length_mm"], 50.0);
    assert_eq!(
        value["result"]["formula"],
        "t = (35 × 2.8 + 30 × 4.5) / 50 × cos(0°)"
    );
}

#[test]
#[serial]
fn test_dry_run_doesnt_write() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("npf.toml");
    args(NpfCliArgs {
        output: Some(output.clone()),
        ..Default::default()
    })
    .run(true)
    .unwrap();
    assert!(!output.exists());
}

#[test]
fn test_telescope_help_belongs_to_npf() {
    use clap::CommandFactory;

    let cmd = NpfArgs::command();
    let telescope = cmd
        .get_arguments()
        .find(|a| a.get_id() == "telescope")
        .unwrap();
    assert_eq!(telescope.get_help(), Some(NPF_TELESCOPE_HELP.as_str()));
    assert!(NPF_TELESCOPE_HELP.contains("80mm-f5"));
}
