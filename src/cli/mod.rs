// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. More specific options for `astrocalc`
//! subcommands are contained in modules.
//!
//! Everything that isn't a boolean must be optional. This allows all arguments
//! to be optional *and* usable in an arguments file.
//!
//! Only 3 things should be public in this module: `Astrocalc`,
//! `Astrocalc::run`, and `AstrocalcError`.

#[macro_use]
mod common;
mod error;
mod npf;
mod pixel_scale;
mod presets;

pub use error::AstrocalcError;

use std::path::PathBuf;

use clap::{AppSettings, Args, Parser, Subcommand};
use log::info;

use crate::help_texts::{NPF_DESCRIPTION, PIXEL_SCALE_DESCRIPTION};

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    about = r#"Astrophotography calculators: the NPF rule for the longest exposure before
stars trail, and the pixel scale and field of view of a camera and telescope."#
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(disable_help_subcommand = true)]
#[clap(infer_subcommands = true)]
#[clap(propagate_version = true)]
#[clap(infer_long_args = true)]
pub struct Astrocalc {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    #[clap(global = true)]
    verbosity: u8,

    /// Only verify that arguments were correctly ingested and print out
    /// high-level information.
    #[clap(long)]
    #[clap(global = true)]
    dry_run: bool,

    /// Save the input arguments into a new TOML file that can be used to
    /// reproduce this run.
    #[clap(long)]
    #[clap(global = true)]
    save_toml: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(alias = "exposure")]
    #[clap(about = NPF_DESCRIPTION)]
    Npf(npf::NpfArgs),

    #[clap(alias = "fov")]
    #[clap(about = PIXEL_SCALE_DESCRIPTION)]
    PixelScale(pixel_scale::PixelScaleArgs),

    Presets(presets::PresetsArgs),
}

impl Astrocalc {
    pub fn run(self) -> Result<(), AstrocalcError> {
        // Set up logging.
        let GlobalArgs {
            verbosity,
            dry_run,
            save_toml,
        } = self.global_opts;
        setup_logging(verbosity).expect("Failed to initialise logging.");

        // Print the version of astrocalc and its build-time information.
        let sub_command = match &self.command {
            Command::Npf(_) => "npf",
            Command::PixelScale(_) => "pixel-scale",
            Command::Presets(_) => "presets",
        };
        info!("astrocalc {} {}", sub_command, env!("CARGO_PKG_VERSION"));
        display_build_info();

        macro_rules! merge_save_run {
            ($args:expr) => {{
                let args = $args.merge()?;
                if let Some(toml_path) = save_toml {
                    use std::{
                        fs::File,
                        io::{BufWriter, Write},
                    };

                    let mut f = BufWriter::new(File::create(toml_path)?);
                    let toml_str = toml::to_string(&args).map_err(|e| {
                        AstrocalcError::Generic(format!("Couldn't serialise arguments as toml: {e}"))
                    })?;
                    f.write_all(toml_str.as_bytes())?;
                    f.flush()?;
                }
                args.run(dry_run)?;
            }};
        }

        match self.command {
            Command::Npf(args) => merge_save_run!(args),

            Command::PixelScale(args) => merge_save_run!(args),

            Command::Presets(args) => args.run()?,
        }

        info!("astrocalc {} complete.", sub_command);
        Ok(())
    }
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write debug-level log lines of how this executable was compiled.
fn display_build_info() {
    let dirty = match GIT_DIRTY {
        Some(true) => " (dirty)",
        _ => "",
    };
    match GIT_COMMIT_HASH_SHORT {
        Some(hash) => {
            log::debug!("Compiled on git commit hash: {hash}{dirty}");
        }
        None => log::debug!("Compiled on git commit hash: <no git info>"),
    }
    if let Some(hr) = GIT_HEAD_REF {
        log::debug!("            git head ref: {}", hr);
    }
    log::debug!("            {}", BUILT_TIME_UTC);
    log::debug!("         with compiler {}", RUSTC_VERSION);
    log::debug!("");
}
