//! Build script for rpath-cli.
//!
//! Generates the `rpath.1` man page into OUT_DIR with clap_mangen.
//!
//! The command structure is rebuilt here by hand because a build script
//! cannot depend on the crate it builds.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("rpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and compose remote SFTP paths")
        .long_about(
            "Command-line tool for splitting, joining, comparing and validating \
             POSIX-style paths on remote SFTP hosts",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file")
                .value_name("PATH")
                .global(true)
                .env("RPATH_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (overrides the configured one)")
                .value_name("FORMAT")
                .value_parser(["human", "json"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("segments")
                .about("Split a path into its segments")
                .long_about(
                    "Print the root, each name and, for directory paths, the trailing '.' sentinel",
                ),
            Command::new("inspect")
                .about("Report everything known about a path")
                .long_about("Show classification, display name and segments of a path"),
            Command::new("join")
                .about("Concatenate paths left to right")
                .long_about(
                    "Append each part to the base; absolute parts are appended, not substituted",
                ),
            Command::new("compare")
                .about("Order and relate two paths")
                .long_about("Print the byte-wise ordering and the ancestor/descendant relationship"),
            Command::new("check")
                .about("Validate paths against the configured policy")
                .long_about("Exit with status 1 if any path breaks the configured path policy"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("rpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
