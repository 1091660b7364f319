//! Version-catalog (`libs.versions.toml`) rendering
//!
//! Emits up to three TOML sections in fixed order (`[versions]`,
//! `[libraries]`, `[plugins]`), each only when it has content, separated by
//! one blank line. Table keys are raw artifact ids; the `-` → `.` accessor
//! transformation never applies in this mode.

use crate::catalog::Artifact;
use crate::formatter::platform_governed;
use crate::selection::Selection;

pub(super) fn render(
    selection: &Selection,
    plugins: &[&Artifact],
    libraries: &[&Artifact],
) -> String {
    // Version keys in insertion order: plugins first, then libraries, each in
    // catalog order. A library governed by a selected BOM registers no key.
    let mut versions: Vec<(&str, &str)> = Vec::new();
    for plugin in plugins {
        register(&mut versions, &plugin.id, &plugin.version);
    }
    for library in libraries {
        if !platform_governed(library, selection) {
            register(&mut versions, &library.id, &library.version);
        }
    }

    let mut sections: Vec<String> = Vec::new();

    if !versions.is_empty() {
        let mut section = String::from("[versions]\n");
        for (key, value) in &versions {
            section.push_str(&format!("{key} = \"{value}\"\n"));
        }
        sections.push(section);
    }

    if !libraries.is_empty() {
        let mut section = String::from("[libraries]\n");
        for library in libraries {
            let coords = &library.coordinates;
            if platform_governed(library, selection) {
                section.push_str(&format!(
                    "{} = {{ group = \"{}\", name = \"{}\" }}\n",
                    library.id, coords.group, coords.artifact
                ));
            } else {
                section.push_str(&format!(
                    "{} = {{ group = \"{}\", name = \"{}\", version.ref = \"{}\" }}\n",
                    library.id, coords.group, coords.artifact, library.id
                ));
            }
        }
        sections.push(section);
    }

    if !plugins.is_empty() {
        let mut section = String::from("[plugins]\n");
        for plugin in plugins {
            section.push_str(&format!(
                "{} = {{ id = \"{}\", version.ref = \"{}\" }}\n",
                plugin.id, plugin.coordinates.group, plugin.id
            ));
        }
        sections.push(section);
    }

    sections.join("\n")
}

/// Register a version key at most once. Re-registering an existing key is a
/// no-op, so duplicate ids in a degenerate catalog cannot produce duplicate
/// keys.
fn register<'a>(versions: &mut Vec<(&'a str, &'a str)>, key: &'a str, value: &'a str) {
    if !versions.iter().any(|(existing, _)| *existing == key) {
        versions.push((key, value));
    }
}
