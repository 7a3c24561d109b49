use std::fmt;

use tracing::{trace, warn};

use crate::extract::CORE_NAME;
use crate::line::Line;

/// Kind tag given to the core component.
pub const CORE_KIND: &str = "core";

/// One distributable unit declared by a makefile.
///
/// Scalar fields take the last value assigned in the file. `patches` keeps
/// every `[patch][]` line in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Component {
    /// Project machine name (e.g. `views`).
    pub name: String,

    /// Version, from `projects[name]`, `[version]` or `[download][branch]`.
    pub version: Option<String>,

    /// Declared project type (e.g. `module`, `theme`, `core`).
    pub kind: Option<String>,

    /// Download method (`[download][type]`, e.g. `git`).
    pub download_type: Option<String>,

    /// Source-control revision (`[download][revision]`).
    pub revision: Option<String>,

    /// Raw `[download][branch]` value.
    pub branch: Option<String>,

    /// Download location (`[download][url]`).
    pub download_url: Option<String>,

    /// Install subdirectory (`[subdir]`).
    pub subdir: Option<String>,

    /// Patch URLs, in the order they appear.
    pub patches: Vec<String>,
}

impl Component {
    /// An empty record for `name`.
    pub fn new(name: impl Into<String>) -> Component {
        Component {
            name: name.into(),
            ..Component::default()
        }
    }

    /// The core record, built from the top-level `core` value.
    pub fn core(version: Option<String>) -> Component {
        Component {
            name: CORE_NAME.to_string(),
            version,
            kind: Some(CORE_KIND.to_string()),
            ..Component::default()
        }
    }

    /// Build a record for `name` by folding every line of its block.
    ///
    /// # Examples
    ///
    /// ```
    /// use drush_make::Component;
    ///
    /// let c = Component::from_block("ns_core", [
    ///     "projects[ns_core][type] = module",
    ///     "projects[ns_core][download][type] = git",
    ///     "projects[ns_core][download][branch] = 7.x-2.x",
    /// ]);
    /// assert_eq!(c.kind.as_deref(), Some("module"));
    /// assert_eq!(c.download_type.as_deref(), Some("git"));
    /// assert_eq!(c.version.as_deref(), Some("7.x-2.x"));
    /// ```
    pub fn from_block<'a, I>(name: &str, lines: I) -> Component
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut component = Component::new(name);
        for line in lines {
            component.fold(Line::classify(line));
        }
        component
    }

    /// Apply one classified line to this record.
    ///
    /// Returns `false` when the line was not applied: it was unrecognized or
    /// names a different component.
    pub fn fold(&mut self, line: Line<'_>) -> bool {
        let Some(a) = line.assignment() else {
            return false;
        };
        if a.name != self.name {
            warn!(
                component = %self.name,
                line_name = a.name,
                "discarding line for a different component"
            );
            return false;
        }
        trace!(component = %self.name, ?line, "folding line");

        let value = a.value.to_string();
        match line {
            Line::Direct(_) | Line::Version(_) => self.version = Some(value),
            Line::Branch(_) => {
                self.version = Some(value.clone());
                self.branch = Some(value);
            }
            Line::Type(_) => self.kind = Some(value),
            Line::DownloadType(_) => self.download_type = Some(value),
            Line::Revision(_) => self.revision = Some(value),
            Line::DownloadUrl(_) => self.download_url = Some(value),
            Line::Subdir(_) => self.subdir = Some(value),
            Line::Patch(_) => self.patches.push(value),
            Line::Unrecognized => return false,
        }
        true
    }

    /// Whether this is the core record.
    pub fn is_core(&self) -> bool {
        self.name == CORE_NAME && self.kind.as_deref() == Some(CORE_KIND)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(ref version) = self.version {
            write!(f, " {version}")?;
        }
        if let Some(ref kind) = self.kind {
            write!(f, " ({kind})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ns_core_block() {
        let c = Component::from_block(
            "ns_core",
            [
                "projects[ns_core][type] = module",
                "projects[ns_core][download][type] = git",
                "projects[ns_core][download][branch] = 7.x-2.x",
            ],
        );
        assert_eq!(c.name, "ns_core");
        assert_eq!(c.kind.as_deref(), Some("module"));
        assert_eq!(c.download_type.as_deref(), Some("git"));
        assert_eq!(c.branch.as_deref(), Some("7.x-2.x"));
        assert_eq!(c.version.as_deref(), Some("7.x-2.x"));
        assert!(c.revision.is_none());
        assert!(c.patches.is_empty());
    }

    #[test]
    fn revision_block() {
        let c = Component::from_block(
            "draggableviews",
            [
                "projects[draggableviews][type] = module",
                "projects[draggableviews][download][type] = git",
                "projects[draggableviews][download][revision] = 9677bc18b7255e13c33ac3cca48732b855c6817d",
                "projects[draggableviews][download][branch] = 7.x-2.x",
            ],
        );
        assert_eq!(
            c.revision.as_deref(),
            Some("9677bc18b7255e13c33ac3cca48732b855c6817d")
        );
        assert_eq!(c.download_type.as_deref(), Some("git"));
        assert_eq!(c.version.as_deref(), Some("7.x-2.x"));
    }

    #[test]
    fn direct_version() {
        let c = Component::from_block("views", ["projects[views] = 3.1"]);
        assert_eq!(c, {
            let mut expected = Component::new("views");
            expected.version = Some("3.1".to_string());
            expected
        });
    }

    #[test]
    fn patches_accumulate() {
        let c = Component::from_block(
            "nodequeue",
            [
                "projects[nodequeue][subdir] = contrib",
                "projects[nodequeue][patch][] = \"http://drupal.org/files/issues/1023606-qid-to-name-6.patch\"",
                "projects[nodequeue][version] = 2.0-alpha1",
                "projects[nodequeue][patch][] = \"http://drupal.org/files/issues/nodequeue_d7_autocomplete-872444-6.patch\"",
            ],
        );
        assert_eq!(c.version.as_deref(), Some("2.0-alpha1"));
        assert_eq!(c.subdir.as_deref(), Some("contrib"));
        assert_eq!(
            c.patches,
            vec![
                "http://drupal.org/files/issues/1023606-qid-to-name-6.patch",
                "http://drupal.org/files/issues/nodequeue_d7_autocomplete-872444-6.patch",
            ]
        );
    }

    #[test]
    fn duplicate_patches_kept() {
        let c = Component::from_block(
            "x",
            ["projects[x][patch][] = a.patch", "projects[x][patch][] = a.patch"],
        );
        assert_eq!(c.patches.len(), 2);
    }

    #[test]
    fn last_version_wins() {
        let c = Component::from_block(
            "x",
            [
                "projects[x][version] = 1.0",
                "projects[x][download][branch] = 7.x-1.x",
                "projects[x][version] = 2.0",
            ],
        );
        assert_eq!(c.version.as_deref(), Some("2.0"));
        assert_eq!(c.branch.as_deref(), Some("7.x-1.x"));
    }

    #[test]
    fn foreign_line_discarded() {
        let mut c = Component::new("views");
        assert!(!c.fold(Line::classify("projects[ctools] = 1.4")));
        assert!(!c.fold(Line::classify("garbage")));
        assert_eq!(c, Component::new("views"));
    }

    #[test]
    fn core_record() {
        let core = Component::core(Some("7.x".to_string()));
        assert_eq!(core.name, "drupal");
        assert_eq!(core.kind.as_deref(), Some("core"));
        assert!(core.is_core());
        assert!(!Component::new("drupal").is_core());
    }

    #[test]
    fn display() {
        assert_eq!(
            Component::core(Some("7.x".to_string())).to_string(),
            "drupal 7.x (core)"
        );
        assert_eq!(Component::new("views").to_string(), "views");
    }
}
