// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::read_to_string;

use tempfile::TempDir;

use crate::{astrocalc, get_cmd_output};

#[test]
fn test_presets_lists_everything() {
    let cmd = astrocalc().arg("presets").ok();
    assert!(cmd.is_ok(), "presets failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    for label in [
        "Canon EOS R5 (36×24mm, 4.5μm)",
        "Sony A7R IV",
        "ASI533MC (17.3×13mm, 3.45μm)",
        "80mm f/5 (400mm)",
        "200mm f/10 (2000mm)",
    ] {
        assert!(stdout.contains(label), "missing {label}: {stdout}");
    }
}

#[test]
fn test_presets_json_output() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("presets.json");
    let cmd = astrocalc()
        .args(["presets", "--output", &format!("{}", output.display())])
        .ok();
    assert!(cmd.is_ok(), "presets failed: {}", cmd.err().unwrap());

    let json: serde_json::Value = serde_json::from_str(&read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["cameras"].as_array().unwrap().len(), 5);
    assert_eq!(json["telescopes"].as_array().unwrap().len(), 5);
    assert_eq!(json["telescopes"][0]["focal_length_mm"], 400.0);
}
