use winnow::ascii::space0;
use winnow::combinator::{delimited, eof, preceded, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

/// Literal every component line starts with.
pub(crate) const PREFIX: &str = "projects";

/// The component name and value carried by a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    /// Component name, the first bracketed key after `projects`.
    pub name: &'a str,
    /// Assigned value with surrounding double quotes removed.
    pub value: &'a str,
}

/// A single makefile line, classified by the key path it assigns to.
///
/// Every variant except [`Line::Unrecognized`] targets exactly one field of
/// a [`Component`](crate::Component), so a line can never update more than
/// one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `projects[name] = value`, shorthand for the version.
    Direct(Assignment<'a>),
    /// `projects[name][version] = value`.
    Version(Assignment<'a>),
    /// `projects[name][download][branch] = value`.
    Branch(Assignment<'a>),
    /// `projects[name][type] = value`.
    Type(Assignment<'a>),
    /// `projects[name][download][type] = value`.
    DownloadType(Assignment<'a>),
    /// `projects[name][download][revision] = value`.
    Revision(Assignment<'a>),
    /// `projects[name][download][url] = value`.
    DownloadUrl(Assignment<'a>),
    /// `projects[name][subdir] = value`.
    Subdir(Assignment<'a>),
    /// `projects[name][patch][] = value`, appended to the patch list.
    Patch(Assignment<'a>),
    /// Anything else: comments, blank lines, `core`, unknown attributes,
    /// and lines that do not parse as an assignment at all.
    Unrecognized,
}

impl<'a> Line<'a> {
    /// Classify one line of makefile text.
    ///
    /// The whole line must be an assignment; whitespace is allowed around
    /// `=` and at the end of the line. The value is a single
    /// whitespace-free token.
    ///
    /// # Examples
    ///
    /// ```
    /// use drush_make::{Assignment, Line};
    ///
    /// let line = Line::classify("projects[ns_core][download][branch] = 7.x-2.x");
    /// assert_eq!(
    ///     line,
    ///     Line::Branch(Assignment { name: "ns_core", value: "7.x-2.x" })
    /// );
    ///
    /// assert_eq!(Line::classify("projects[] ="), Line::Unrecognized);
    /// ```
    pub fn classify(line: &'a str) -> Line<'a> {
        let Ok((name, path, raw)) = assignment.parse(line) else {
            return Line::Unrecognized;
        };
        let a = Assignment {
            name,
            value: unquote(raw),
        };

        match path.as_slice() {
            [] => Line::Direct(a),
            ["version"] => Line::Version(a),
            ["type"] => Line::Type(a),
            ["subdir"] => Line::Subdir(a),
            ["patch", ""] => Line::Patch(a),
            ["download", "branch"] => Line::Branch(a),
            ["download", "type"] => Line::DownloadType(a),
            ["download", "revision"] => Line::Revision(a),
            ["download", "url"] => Line::DownloadUrl(a),
            _ => Line::Unrecognized,
        }
    }

    /// The name and value, unless the line is unrecognized.
    pub fn assignment(&self) -> Option<&Assignment<'a>> {
        match self {
            Line::Direct(a)
            | Line::Version(a)
            | Line::Branch(a)
            | Line::Type(a)
            | Line::DownloadType(a)
            | Line::Revision(a)
            | Line::DownloadUrl(a)
            | Line::Subdir(a)
            | Line::Patch(a) => Some(a),
            Line::Unrecognized => None,
        }
    }
}

// Winnow parsers

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_value_char(c: char) -> bool {
    !c.is_whitespace()
}

/// Strip one pair of surrounding double quotes, if present.
fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s)
}

fn key_segment<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    delimited('[', take_while(0.., |c: char| c != '[' && c != ']'), ']').parse_next(input)
}

/// `projects[name][seg]... = value`, returning the name, the remaining key
/// segments, and the raw value.
fn assignment<'s>(input: &mut &'s str) -> ModalResult<(&'s str, Vec<&'s str>, &'s str)> {
    (
        preceded(PREFIX, delimited('[', take_while(1.., is_name_char), ']')),
        repeat(0.., key_segment),
        delimited(
            (space0, '=', space0),
            take_while(1.., is_value_char),
            (space0, eof),
        ),
    )
        .parse_next(input)
}
