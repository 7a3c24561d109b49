use ini::Ini;

use crate::error::{Error, Result};

/// A loaded INI key/value document.
///
/// Drush makefiles are INI files at heart: top-level `key = value` pairs,
/// optionally grouped under `[section]` headers. The manifest only needs flat
/// string lookup from it, to read the `core` declaration without scanning
/// lines itself.
#[derive(Debug, Clone)]
pub struct IniDocument {
    inner: Ini,
}

impl IniDocument {
    /// Load a document from text.
    ///
    /// Lines the INI grammar can't hold at all (free text with no `=` or
    /// `:`) are left out before loading, so stray prose in a makefile never
    /// fails the load.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidConfig`] when the loader rejects the
    /// structure, e.g. a section header that is never closed.
    ///
    /// # Examples
    ///
    /// ```
    /// use drush_make::IniDocument;
    ///
    /// let doc = IniDocument::parse("core = 7.x\napi = 2\n").unwrap();
    /// assert_eq!(doc.get(None, "core"), Some("7.x"));
    /// assert_eq!(doc.get(None, "missing"), None);
    /// ```
    pub fn parse(input: &str) -> Result<IniDocument> {
        let loadable: Vec<&str> = input.lines().filter(|l| is_ini_line(l)).collect();
        let inner = Ini::load_from_str(&loadable.join("\n"))
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        Ok(IniDocument { inner })
    }

    /// Look up `key` in `section` (`None` for the keys before any header).
    ///
    /// A repeated key resolves to its last value.
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&str> {
        self.inner.section(section)?.get_all(key).last()
    }
}

fn is_ini_line(line: &str) -> bool {
    let line = line.trim();
    line.is_empty()
        || line.starts_with(';')
        || line.starts_with('#')
        || line.starts_with('[')
        || line.contains('=')
        || line.contains(':')
}
