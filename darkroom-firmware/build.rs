//! Build script for darkroom-firmware
//!
//! - Sets up linker search paths for memory.x and the RP2040 link scripts
//! - Validates timer.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Largest time the four-digit readout can show
const TIME_LIMIT_S: u64 = 9999;

/// Longest author label the info screen holds
const MAX_AUTHOR_LEN: usize = 16;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TimerFile {
    #[serde(default)]
    timer: TimerSection,
    #[serde(default)]
    ui: UiSection,
    #[serde(default)]
    relay: RelaySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TimerSection {
    default_time: Option<u64>,
    min_time: Option<u64>,
    max_time: Option<u64>,
    second_increment: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct UiSection {
    redraw_interval_ms: Option<u64>,
    poll_interval_ms: Option<u64>,
    author: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RelaySection {
    #[allow(dead_code)]
    active_low: Option<bool>,
}

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate timer.toml configuration at compile time
fn validate_config() {
    // Re-run if timer.toml changes
    println!("cargo:rerun-if-changed=timer.toml");

    let config_path = Path::new("timer.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: timer.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a timer.toml configuration file.            ║\n\
            ║  Please create one in the darkroom-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read timer.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML syntax, section and key names
    let config: TimerFile = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid timer.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_timer(&config.timer, &mut errors);
    validate_ui(&config.ui, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid timer configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=timer.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check the `[timer]` ranges, filling in the firmware defaults
fn validate_timer(timer: &TimerSection, errors: &mut Vec<String>) {
    let default_time = timer.default_time.unwrap_or(600);
    let min_time = timer.min_time.unwrap_or(0);
    let max_time = timer.max_time.unwrap_or(TIME_LIMIT_S);
    let second_increment = timer.second_increment.unwrap_or(5);

    if second_increment == 0 {
        errors.push("[timer] second_increment must be at least 1".to_string());
    }
    if max_time > TIME_LIMIT_S {
        errors.push(format!("[timer] max_time must be at most {}", TIME_LIMIT_S));
    }
    if min_time > max_time {
        errors.push("[timer] min_time must not exceed max_time".to_string());
    }
    if default_time < min_time || default_time > max_time {
        errors.push("[timer] default_time must lie within min_time..=max_time".to_string());
    }
}

/// Check the `[ui]` values
fn validate_ui(ui: &UiSection, errors: &mut Vec<String>) {
    if ui.poll_interval_ms == Some(0) {
        errors.push("[ui] poll_interval_ms must be at least 1".to_string());
    }
    if matches!(ui.redraw_interval_ms, Some(ms) if ms > u32::MAX as u64) {
        errors.push("[ui] redraw_interval_ms is too large".to_string());
    }
    if let Some(author) = &ui.author {
        if author.chars().count() > MAX_AUTHOR_LEN {
            errors.push(format!(
                "[ui] author must be at most {} characters",
                MAX_AUTHOR_LEN
            ));
        }
    }
}
