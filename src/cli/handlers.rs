// src/cli/handlers.rs
use anyhow::{Context, Result};
use std::io::Write;

use crate::cli::Args;
use crate::core::config::Config;
use crate::generators::{self, PasswordGenerator};
use crate::models::{ClipboardOutcome, PasswordReport};
use crate::system;
use crate::utils;

// Summarise a finished password. Every check is re-derived from the string.
pub fn build_report<R>(
    generator: &PasswordGenerator<R>,
    password: String,
    clipboard: ClipboardOutcome,
) -> PasswordReport {
    let policy = generator.policy();
    let classes = generators::classes_present(&password);
    let length = password.chars().count();

    PasswordReport {
        length,
        classes_present: classes.count(),
        classes,
        first_char_allowed: password
            .chars()
            .next()
            .map_or(false, |first| !policy.is_forbidden_first(first)),
        max_consecutive_run: policy.max_consecutive_run,
        consecutive_run_ok: policy
            .max_consecutive_run
            .map_or(true, |max_run| !generators::has_excess_consecutive_run(&password, max_run)),
        entropy_bits: generators::estimate_entropy_bits(length),
        clipboard,
        password,
    }
}

pub fn write_report<W: Write>(out: &mut W, report: &PasswordReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialise report")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", utils::render_report(report))?;
    }
    Ok(())
}

/// Generate, optionally copy, and report one password.
pub fn handle_generate(args: &Args, config: &Config) -> Result<()> {
    let length = args.length.unwrap_or(config.default_password_length);

    let mut generator = PasswordGenerator::new();
    let password = generator.generate(length);

    let clipboard = if args.no_copy || !config.clipboard_enabled {
        log::debug!("Clipboard copy disabled");
        ClipboardOutcome::Skipped
    } else {
        system::copy_to_clipboard(&password)
    };

    let report = build_report(&generator, password, clipboard);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, args.json).context("Failed to write report")?;
    out.flush()?;

    Ok(())
}
