use std::collections::HashMap;

use crate::line::PREFIX;

/// Name reserved for the core declaration.
pub const CORE_NAME: &str = "drupal";

/// Extract the bracketed key after the `projects` prefix.
///
/// Returns the text between `projects[` and the first `]`, or `None` when
/// the line does not start with the prefix, the bracket is never closed, or
/// the key is empty. Only the prefix is checked; the name itself may still
/// fail classification later.
pub fn key_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(PREFIX)?.strip_prefix('[')?;
    let (name, _) = rest.split_once(']')?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Distinct component names in order of first appearance.
///
/// The reserved core name is skipped.
///
/// # Examples
///
/// ```
/// use drush_make::extract::component_names;
///
/// let input = "\
/// projects[views] = 3.1
/// projects[ctools][version] = 1.4
/// projects[views][type] = module
/// ";
/// assert_eq!(component_names(input), vec!["views", "ctools"]);
/// ```
pub fn component_names(input: &str) -> Vec<&str> {
    group_blocks(input).into_iter().map(|(name, _)| name).collect()
}

/// All lines whose key name is exactly `name`, in source order.
pub fn find_block<'a>(name: &str, input: &'a str) -> Vec<&'a str> {
    input
        .lines()
        .filter(|line| key_name(line) == Some(name))
        .collect()
}

/// Group every named line by its key name in one pass.
///
/// Groups are ordered by the first appearance of their name and each group
/// keeps its lines in source order, so the result is the same as calling
/// [`find_block`] for every entry of [`component_names`].
pub fn group_blocks(input: &str) -> Vec<(&str, Vec<&str>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();

    for line in input.lines() {
        let Some(name) = key_name(line) else {
            continue;
        };
        if name == CORE_NAME {
            continue;
        }
        match index.get(name) {
            Some(&i) => groups[i].1.push(line),
            None => {
                index.insert(name, groups.len());
                groups.push((name, vec![line]));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAKEFILE: &str = "\
core = 7.x
api = 2
projects[media] = 2.x-dev
projects[media_youtube][version] = 1.0-alpha5
projects[media_youtube][subdir] = media_plugins
projects[media_flickr][version] = 1.0-alpha1
projects[media_flickr][subdir] = media_plugins
projects[rubik] = 4.0-beta7
projects[rubik][patch][] = \"http://drupal.org/files/rubik-print-css.patch\"
projects[nodequeue][subdir] = contrib
projects[nodequeue][version] = 2.0-alpha1
projects[nodequeue][patch][] = \"http://drupal.org/files/issues/1023606-qid-to-name-6.patch\"
projects[nodequeue][patch][] = \"http://drupal.org/files/issues/nodequeue_d7_autocomplete-872444-6.patch\"
";

    #[test]
    fn key_name_variants() {
        assert_eq!(key_name("projects[views] = 3.1"), Some("views"));
        assert_eq!(key_name("projects[views][patch][] = x"), Some("views"));
        assert_eq!(key_name("projects[foo-bar] = 1"), Some("foo-bar"));
        assert_eq!(key_name("projects[] = 1"), None);
        assert_eq!(key_name("projects[views = 1"), None);
        assert_eq!(key_name("core = 7.x"), None);
        assert_eq!(key_name(" projects[views] = 3.1"), None);
        assert_eq!(key_name(""), None);
    }

    #[test]
    fn names_in_first_seen_order() {
        assert_eq!(
            component_names(MAKEFILE),
            vec!["media", "media_youtube", "media_flickr", "rubik", "nodequeue"]
        );
    }

    #[test]
    fn core_name_excluded() {
        let input = "projects[drupal][version] = 7.34\nprojects[views] = 3.1\n";
        assert_eq!(component_names(input), vec!["views"]);
    }

    #[test]
    fn block_is_exact_name_match() {
        // `media` must not pick up `media_youtube` lines.
        assert_eq!(find_block("media", MAKEFILE), vec!["projects[media] = 2.x-dev"]);
        assert_eq!(find_block("nodequeue", MAKEFILE).len(), 4);
        assert!(find_block("missing", MAKEFILE).is_empty());
    }

    #[test]
    fn grouping_matches_block_scan() {
        for (name, lines) in group_blocks(MAKEFILE) {
            assert_eq!(lines, find_block(name, MAKEFILE));
        }
    }

    #[test]
    fn interleaved_lines_grouped() {
        let input = "\
projects[a] = 1
projects[b] = 2
projects[a][type] = module
";
        let groups = group_blocks(input);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "a");
        assert_eq!(
            groups[0].1,
            vec!["projects[a] = 1", "projects[a][type] = module"]
        );
        assert_eq!(groups[1].0, "b");
    }

    #[test]
    fn empty_input() {
        assert!(group_blocks("").is_empty());
        assert!(component_names("\n\n; nothing\n").is_empty());
    }
}
