use std::fs;
use std::path::Path;

use tracing::debug;

use crate::component::Component;
use crate::error::{Error, Result};
use crate::extract::group_blocks;
use crate::config::IniDocument;

/// Top-level key holding the core version.
const CORE_KEY: &str = "core";

/// A parsed drush makefile.
///
/// Holds the core record first, followed by one record per distinct
/// project name in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    components: Vec<Component>,
}

impl Manifest {
    /// Read and parse the makefile at `path`.
    ///
    /// The file is read once and closed before parsing starts. Bytes that
    /// are not valid UTF-8 are replaced rather than failing the read; they
    /// can only spoil the line they sit on.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Manifest> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read makefile");
        Manifest::parse(&String::from_utf8_lossy(&bytes))
    }

    /// Parse makefile text.
    ///
    /// Lines that don't match a known shape are skipped. The only failure is
    /// a key/value structure the config loader rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use drush_make::Manifest;
    ///
    /// let input = "\
    /// core = 7.x
    /// projects[views] = 3.1
    /// ";
    /// let manifest = Manifest::parse(input).unwrap();
    /// assert_eq!(manifest.len(), 2);
    /// assert_eq!(manifest.core().unwrap().version.as_deref(), Some("7.x"));
    /// assert_eq!(manifest.lookup_by_name("views").unwrap().version.as_deref(), Some("3.1"));
    /// ```
    pub fn parse(input: &str) -> Result<Manifest> {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        let doc = IniDocument::parse(input)?;
        let core_version = doc
            .get(None, CORE_KEY)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        let mut components = vec![Component::core(core_version)];
        components.extend(
            group_blocks(input)
                .into_iter()
                .map(|(name, lines)| Component::from_block(name, lines)),
        );

        debug!(components = components.len(), "parsed makefile");
        Ok(Manifest { components })
    }

    /// The core record, if this manifest came from [`Manifest::parse`].
    pub fn core(&self) -> Option<&Component> {
        self.components.first().filter(|c| c.is_core())
    }

    /// Find a component by exact name.
    pub fn lookup_by_name(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// All components whose name starts with `prefix`, in manifest order.
    ///
    /// # Examples
    ///
    /// ```
    /// use drush_make::Manifest;
    ///
    /// let input = "\
    /// core = 7.x
    /// projects[media] = 2.x-dev
    /// projects[views] = 3.1
    /// projects[media_youtube][version] = 1.0-alpha5
    /// ";
    /// let manifest = Manifest::parse(input).unwrap();
    /// let names: Vec<&str> = manifest
    ///     .list_by_prefix("media")
    ///     .iter()
    ///     .map(|c| c.name.as_str())
    ///     .collect();
    /// assert_eq!(names, ["media", "media_youtube"]);
    /// ```
    pub fn list_by_prefix(&self, prefix: &str) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|c| c.name.starts_with(prefix))
            .collect()
    }

    /// Iterate over all components, core first.
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// All components as a slice.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of components, core included.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the manifest has no components at all.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
