//! Loading of definition directories.
//!
//! ```no_run
//! use form_create_settings::{DefinitionSet, RendererConfig};
//!
//! let set = DefinitionSet::from_dir("forms/").unwrap();
//! if let Some(site) = set.get("site") {
//!     let outcome = site.build(&RendererConfig::default(), "token");
//!     println!("{}", outcome.form.to_json_pretty().unwrap());
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::FormDefinition;
use crate::definition::is_yaml;
use crate::error::Result;

/// Form definitions keyed by file stem.
///
/// `forms/site.yaml` is available as `"site"`.
#[derive(Debug)]
pub struct DefinitionSet {
    definitions: HashMap<String, FormDefinition>,
    source: PathBuf,
}

impl DefinitionSet {
    /// Loads every `*.json`, `*.yaml` and `*.yml` file in `path`.
    ///
    /// Other files and subdirectories are ignored.
    ///
    /// # Errors
    ///
    /// Fails on the first file that cannot be read, parsed or checked.
    pub fn from_dir(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut definitions = HashMap::new();

        for file_path in definition_paths_in(path)? {
            let Some(name) = file_path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let definition = FormDefinition::load(&file_path)?;
            definitions.insert(name.to_string(), definition);
        }

        debug!(
            path = %path.display(),
            count = definitions.len(),
            "Loaded definition directory"
        );

        Ok(Self {
            definitions,
            source: path.to_path_buf(),
        })
    }

    /// Looks up a definition by name.
    pub fn get(&self, name: &str) -> Option<&FormDefinition> {
        self.definitions.get(name)
    }

    /// Returns definition names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of loaded definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if no definitions were loaded.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns the directory this set was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Expands files and directories into definition file paths.
///
/// Files are kept as given, even with an unknown extension. Directories
/// contribute their definition files in sorted order, without recursing.
/// Nothing is parsed, so callers can report per-file load errors.
///
/// # Errors
///
/// Returns [`IoError`](crate::SettingsError::IoError) if an input does not
/// exist or a directory cannot be read.
pub fn collect_definition_paths<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            paths.extend(definition_paths_in(input)?);
        } else if input.is_file() {
            paths.push(input.to_path_buf());
        } else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such file or directory: '{}'", input.display()),
            )
            .into());
        }
    }
    Ok(paths)
}

fn definition_paths_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_definition_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Returns `true` for files [`FormDefinition::load`] understands.
pub fn is_definition_file(path: &Path) -> bool {
    is_yaml(path) || path.extension().and_then(|e| e.to_str()) == Some("json")
}
