//! Shared fixtures for depmatrix integration tests.
//!
//! Provides sample catalog documents and a [`TestProject`] wrapper that runs
//! the `depmatrix` binary inside a temporary directory with the ambient
//! environment stripped, so tests cannot see a developer's real config or
//! `DEPMATRIX_*` variables.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for creating sample catalog documents
pub struct CatalogFixture {
    pub content: String,
    #[allow(dead_code)]
    pub name: String,
}

impl CatalogFixture {
    /// A small but representative catalog: a plugin, a BOM, a BOM-governed
    /// library, and two plain libraries across two categories.
    pub fn basic() -> Self {
        Self {
            name: "basic".to_string(),
            content: r#"{
  "metadata": { "lastUpdated": "2025-11-02", "kotlinVersion": "2.2.21" },
  "categories": [
    { "id": "google-firebase", "name": "Google & Firebase" },
    { "id": "networking", "name": "Networking" }
  ],
  "artifacts": [
    {
      "id": "gms-plugin",
      "name": "Google Services Plugin",
      "category": "google-firebase",
      "version": "4.4.4",
      "coordinates": { "group": "com.google.gms.google-services" },
      "type": "plugin"
    },
    {
      "id": "firebase-bom",
      "name": "Firebase BOM",
      "category": "google-firebase",
      "version": "34.6.0",
      "coordinates": { "group": "com.google.firebase", "artifact": "firebase-bom" },
      "type": "library"
    },
    {
      "id": "firebase-auth",
      "name": "Firebase Authentication",
      "category": "google-firebase",
      "version": "34.6.0",
      "coordinates": { "group": "com.google.firebase", "artifact": "firebase-auth" },
      "type": "library",
      "bomRef": "firebase-bom"
    },
    {
      "id": "retrofit",
      "name": "Retrofit",
      "category": "networking",
      "version": "3.0.0",
      "coordinates": { "group": "com.squareup.retrofit2", "artifact": "retrofit" },
      "type": "library"
    },
    {
      "id": "okhttp",
      "name": "OkHttp",
      "category": "networking",
      "version": "5.3.0",
      "coordinates": { "group": "com.squareup.okhttp3", "artifact": "okhttp" },
      "type": "library"
    }
  ]
}"#
            .to_string(),
        }
    }

    /// A catalog document that is not valid JSON
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: r#"{
  "categories": [
    { "id": "networking", "name": "Networking" }
  "artifacts": []
}"#
            .to_string(),
        }
    }

    /// A catalog with a declared category that owns no artifacts
    #[allow(dead_code)]
    pub fn empty_category() -> Self {
        Self {
            name: "empty_category".to_string(),
            content: r#"{
  "categories": [
    { "id": "networking", "name": "Networking" },
    { "id": "testing", "name": "Testing" }
  ],
  "artifacts": [
    {
      "id": "okhttp",
      "name": "OkHttp",
      "category": "networking",
      "version": "5.3.0",
      "coordinates": { "group": "com.squareup.okhttp3", "artifact": "okhttp" },
      "type": "library"
    }
  ]
}"#
            .to_string(),
        }
    }
}

/// A temporary project directory plus an isolated `depmatrix` command
pub struct TestProject {
    temp: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self { temp: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a catalog fixture into the project and return its path
    pub fn write_catalog(&self, fixture: &CatalogFixture) -> PathBuf {
        let path = self.path().join("catalog.json");
        fs::write(&path, &fixture.content).unwrap();
        path
    }

    /// Write a global config file into the project and return its path
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    /// A `depmatrix` command rooted in the project directory.
    ///
    /// The home directory is redirected into the project and all
    /// `DEPMATRIX_*` variables are cleared, so resolution falls back only to
    /// what the test itself provides.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("depmatrix").unwrap();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env_remove("DEPMATRIX_CATALOG")
            .env_remove("DEPMATRIX_CONFIG")
            .env_remove("DEPMATRIX_NO_PROGRESS")
            .env_remove("RUST_LOG");
        cmd
    }
}
