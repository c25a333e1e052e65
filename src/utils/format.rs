// src/utils/format.rs
use console::style;

use crate::models::{ClipboardOutcome, PasswordReport};

const RULE_WIDTH: usize = 50;

pub fn separator() -> String {
    "=".repeat(RULE_WIDTH)
}

// ✓ / ✗ marker for a boolean check
pub fn status_marker(ok: bool) -> String {
    if ok {
        style("✓").green().bold().to_string()
    } else {
        style("✗").red().bold().to_string()
    }
}

pub fn describe_clipboard(outcome: &ClipboardOutcome) -> String {
    match outcome {
        ClipboardOutcome::Copied { mechanism } => {
            format!("{} Copied to clipboard ({})", status_marker(true), mechanism)
        }
        ClipboardOutcome::Failed { reason } => {
            format!("{} Could not copy to clipboard: {}", status_marker(false), reason)
        }
        ClipboardOutcome::Unsupported { platform } => {
            format!("{} Clipboard not supported on {}", status_marker(false), platform)
        }
        ClipboardOutcome::Skipped => "- Clipboard copy skipped".to_string(),
    }
}

/// Render the human readable report printed after generation.
pub fn render_report(report: &PasswordReport) -> String {
    let rule = separator();
    let mut lines = Vec::new();

    lines.push(rule.clone());
    lines.push("Generated Password:".to_string());
    lines.push(rule.clone());
    lines.push(String::new());
    lines.push(format!("  {}", style(&report.password).bold()));
    lines.push(String::new());
    lines.push(rule.clone());
    lines.push(format!("Length: {} characters", report.length));
    lines.push(format!(
        "Character classes present ({}/{}):",
        report.classes_present,
        report.classes.iter().count()
    ));
    for (class, present) in report.classes.iter() {
        lines.push(format!("  {} {}", status_marker(present), class));
    }
    lines.push(format!(
        "{} First character is not one of the forbidden characters",
        status_marker(report.first_char_allowed)
    ));
    if let Some(max_run) = report.max_consecutive_run {
        lines.push(format!(
            "{} No more than {} consecutive characters of the same class",
            status_marker(report.consecutive_run_ok),
            max_run
        ));
    }
    lines.push(format!("Estimated entropy: {:.1} bits", report.entropy_bits));
    lines.push(describe_clipboard(&report.clipboard));
    lines.push(rule);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassPresence;

    fn sample_report(clipboard: ClipboardOutcome) -> PasswordReport {
        PasswordReport {
            password: "abcABC1@cAB2abcA3Cab".to_string(),
            length: 20,
            classes: ClassPresence {
                uppercase: true,
                lowercase: true,
                digits: true,
                punctuation: false,
            },
            classes_present: 3,
            first_char_allowed: true,
            max_consecutive_run: Some(3),
            consecutive_run_ok: true,
            entropy_bits: 122.98,
            clipboard,
        }
    }

    #[test]
    fn report_lists_each_class() {
        let text = console::strip_ansi_codes(&render_report(&sample_report(ClipboardOutcome::Skipped)))
            .to_string();

        assert!(text.contains("  abcABC1@cAB2abcA3Cab"));
        assert!(text.contains("Length: 20 characters"));
        assert!(text.contains("Character classes present (3/4):"));
        assert!(text.contains("  ✓ Uppercase"));
        assert!(text.contains("  ✓ Lowercase"));
        assert!(text.contains("  ✓ Digits"));
        assert!(text.contains("  ✗ Punctuation"));
        assert!(text.contains("No more than 3 consecutive characters"));
        assert!(text.contains("Estimated entropy: 123.0 bits"));
        assert!(text.contains("Clipboard copy skipped"));
    }

    #[test]
    fn run_line_is_omitted_without_cap() {
        let mut report = sample_report(ClipboardOutcome::Skipped);
        report.max_consecutive_run = None;
        let text = console::strip_ansi_codes(&render_report(&report)).to_string();
        assert!(!text.contains("consecutive"));
    }

    #[test]
    fn clipboard_outcomes_are_described() {
        let copied = describe_clipboard(&ClipboardOutcome::Copied { mechanism: "pbcopy".into() });
        assert!(console::strip_ansi_codes(&copied).contains("Copied to clipboard (pbcopy)"));

        let failed = describe_clipboard(&ClipboardOutcome::Failed { reason: "xsel exited".into() });
        assert!(console::strip_ansi_codes(&failed).contains("Could not copy to clipboard: xsel exited"));

        let unsupported =
            describe_clipboard(&ClipboardOutcome::Unsupported { platform: "haiku".into() });
        assert!(console::strip_ansi_codes(&unsupported).contains("not supported on haiku"));
    }
}
