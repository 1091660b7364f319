//! ANSI syntax highlighting for generated output
//!
//! Layered strictly on top of the formatter: [`highlight`] recolors the text
//! without touching a single byte of it, so stripping the escape codes always
//! restores the formatter's output exactly. The CLI applies it only when
//! writing to a terminal; piped output and `--output` files stay plain.
//!
//! Each output mode gets its own small rule set, applied line by line:
//! - Version-catalog: section headers bold, keys cyan, quoted strings green.
//! - Build script: comments dimmed, block keywords magenta, call keywords
//!   blue, `libs.` accessors green.

use colored::Colorize;
use regex::{Captures, Regex};

use crate::formatter::OutputMode;

/// Colorize generated text for terminal display.
///
/// The coloring is additive: removing ANSI escape sequences from the result
/// yields `text` unchanged.
#[must_use]
pub fn highlight(text: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::VersionCatalog => highlight_version_catalog(text),
        OutputMode::BuildScript => highlight_build_script(text),
    }
}

fn highlight_version_catalog(text: &str) -> String {
    let key_re = Regex::new(r"^([\w\-\.]+)(\s*=\s*)").unwrap();
    let string_re = Regex::new(r#""(.*?)""#).unwrap();

    text.split('\n')
        .map(|line| {
            if line.trim_start().starts_with('[') {
                return line.bold().to_string();
            }

            if let Some(caps) = key_re.captures(line) {
                let key = &caps[1];
                let separator = &caps[2];
                let rest = &line[caps[0].len()..];
                let rest =
                    string_re.replace_all(rest, |c: &Captures| c[0].green().to_string());
                return format!("{}{}{}", key.cyan(), separator, rest);
            }

            line.to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn highlight_build_script(text: &str) -> String {
    // Block keywords are anchored to the line start so the `plugins` inside
    // an accessor like libs.plugins.gms.plugin keeps its accessor color.
    let block_re = Regex::new(r"^(plugins|dependencies)\b").unwrap();
    let call_re = Regex::new(r"\b(implementation|alias|platform)\b").unwrap();
    let accessor_re = Regex::new(r"(libs\.[\w\.]+)").unwrap();

    text.split('\n')
        .map(|line| {
            if line.trim_start().starts_with("//") {
                return line.bright_black().to_string();
            }

            let line = block_re.replace_all(line, |c: &Captures| c[0].magenta().to_string());
            let line = call_re.replace_all(&line, |c: &Captures| c[0].blue().to_string());
            let line = accessor_re.replace_all(&line, |c: &Captures| c[0].green().to_string());
            line.into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn strip_ansi(text: &str) -> String {
        let ansi = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        ansi.replace_all(text, "").into_owned()
    }

    const TOML_SAMPLE: &str = r#"[versions]
firebase-bom = "34.6.0"

[libraries]
firebase-auth = { group = "com.google.firebase", name = "firebase-auth" }
"#;

    const GRADLE_SAMPLE: &str = r#"// build.gradle.kts

plugins {
    alias(libs.plugins.gms.plugin)
}

dependencies {
    // Google & Firebase
    implementation(platform(libs.firebase.bom))
    implementation(libs.firebase.auth)

}
"#;

    #[test]
    #[serial]
    fn test_version_catalog_highlight_is_lossless() {
        colored::control::set_override(true);
        let highlighted = highlight(TOML_SAMPLE, OutputMode::VersionCatalog);
        colored::control::unset_override();

        assert_ne!(highlighted, TOML_SAMPLE);
        assert_eq!(strip_ansi(&highlighted), TOML_SAMPLE);
    }

    #[test]
    #[serial]
    fn test_build_script_highlight_is_lossless() {
        colored::control::set_override(true);
        let highlighted = highlight(GRADLE_SAMPLE, OutputMode::BuildScript);
        colored::control::unset_override();

        assert_ne!(highlighted, GRADLE_SAMPLE);
        assert_eq!(strip_ansi(&highlighted), GRADLE_SAMPLE);
    }

    #[test]
    #[serial]
    fn test_version_catalog_colors_sections_keys_and_strings() {
        colored::control::set_override(true);
        let highlighted = highlight(TOML_SAMPLE, OutputMode::VersionCatalog);
        colored::control::unset_override();

        // Section header bold, key cyan, string value green
        assert!(highlighted.contains(&"[versions]".bold().to_string()));
        assert!(highlighted.contains(&"firebase-bom".cyan().to_string()));
        assert!(highlighted.contains(&"\"34.6.0\"".green().to_string()));
    }

    #[test]
    #[serial]
    fn test_build_script_colors_keywords_and_accessors() {
        colored::control::set_override(true);
        let highlighted = highlight(GRADLE_SAMPLE, OutputMode::BuildScript);
        colored::control::unset_override();

        assert!(highlighted.contains(&"plugins".magenta().to_string()));
        assert!(highlighted.contains(&"implementation".blue().to_string()));
        assert!(highlighted.contains(&"libs.firebase.auth".green().to_string()));
        // Comment lines are dimmed whole
        assert!(highlighted.contains(&"// build.gradle.kts".bright_black().to_string()));
    }

    #[test]
    #[serial]
    fn test_block_keyword_color_does_not_break_accessors() {
        colored::control::set_override(true);
        let highlighted = highlight("    alias(libs.plugins.gms.plugin)\n", OutputMode::BuildScript);
        colored::control::unset_override();

        // The whole dotted accessor stays one green span
        assert!(highlighted.contains(&"libs.plugins.gms.plugin".green().to_string()));
    }

    #[test]
    #[serial]
    fn test_highlight_empty_text() {
        colored::control::set_override(true);
        let highlighted = highlight("", OutputMode::VersionCatalog);
        colored::control::unset_override();

        assert_eq!(highlighted, "");
    }
}
