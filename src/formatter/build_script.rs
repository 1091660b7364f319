//! Build-script (`build.gradle.kts`) rendering
//!
//! Emits a header comment, a `plugins {}` block when plugins are selected,
//! and a `dependencies {}` block whenever anything at all is selected, even
//! when no libraries are, in which case the block is empty. Libraries are
//! grouped under `// <category>` comments in first-occurrence order, each
//! group followed by a blank line.

use crate::catalog::{Artifact, Catalog};

pub(super) fn render(catalog: &Catalog, plugins: &[&Artifact], libraries: &[&Artifact]) -> String {
    let mut out = String::from("// build.gradle.kts\n\n");

    if !plugins.is_empty() {
        out.push_str("plugins {\n");
        for plugin in plugins {
            out.push_str(&format!("    alias(libs.plugins.{})\n", plugin.accessor()));
        }
        out.push_str("}\n\n");
    }

    out.push_str("dependencies {\n");
    for (category_id, group) in group_by_category(libraries) {
        out.push_str(&format!("    // {}\n", catalog.category_name(category_id)));
        for library in group {
            // Substring detection on the id, deliberately independent of
            // bomRef: ids naming a BOM get the platform(...) wrapper.
            if library.id.contains("bom") {
                out.push_str(&format!(
                    "    implementation(platform(libs.{}))\n",
                    library.accessor()
                ));
            } else {
                out.push_str(&format!("    implementation(libs.{})\n", library.accessor()));
            }
        }
        out.push('\n');
    }
    out.push_str("}\n");

    out
}

/// Group libraries by category id, in first-occurrence order of the selected
/// libraries (not the catalog's declared category order). Members keep their
/// relative order.
fn group_by_category<'a>(libraries: &[&'a Artifact]) -> Vec<(&'a str, Vec<&'a Artifact>)> {
    let mut groups: Vec<(&str, Vec<&Artifact>)> = Vec::new();

    for &library in libraries {
        match groups.iter_mut().find(|(id, _)| *id == library.category) {
            Some((_, members)) => members.push(library),
            None => groups.push((library.category.as_str(), vec![library])),
        }
    }

    groups
}
