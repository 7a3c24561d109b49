//! Drush makefile parser.
//!
//! A drush makefile (`*.make`) describes a Drupal distribution: the core
//! version plus a list of contributed projects, each with a version, a type,
//! and optional download and patch metadata. This crate turns that text into
//! a [`Manifest`] of typed [`Component`] records.
//!
//! # Overview
//!
//! The format is INI-flavoured. The core version is a plain top-level
//! `core = ...` key and is read through a small key/value loader
//! ([`IniDocument`]). Everything else lives under `projects[...]` key paths
//! that repeat the project name on every line:
//!
//! ```text
//! core = 7.x
//! projects[views] = 3.1
//! projects[ns_core][type] = module
//! projects[ns_core][download][type] = git
//! projects[ns_core][download][branch] = 7.x-2.x
//! projects[nodequeue][patch][] = "http://drupal.org/files/fix.patch"
//! ```
//!
//! Lines are grouped by project name and each group is folded into one
//! record. Lines that don't match a known shape are skipped.
//!
//! # Examples
//!
//! ```
//! use drush_make::Manifest;
//!
//! let input = "\
//! core = 7.x
//! projects[views] = 3.1
//! projects[ns_core][type] = module
//! projects[ns_core][download][type] = git
//! ";
//! let manifest = Manifest::parse(input).unwrap();
//! assert_eq!(manifest.len(), 3);
//!
//! let ns_core = manifest.lookup_by_name("ns_core").unwrap();
//! assert_eq!(ns_core.kind.as_deref(), Some("module"));
//! assert_eq!(ns_core.download_type.as_deref(), Some("git"));
//! ```

mod component;
mod config;
mod error;
pub mod extract;
mod line;
mod manifest;

// Re-export public types
pub use component::{Component, CORE_KIND};
pub use config::IniDocument;
pub use error::{Error, Result};
pub use extract::CORE_NAME;
pub use line::{Assignment, Line};
pub use manifest::Manifest;
