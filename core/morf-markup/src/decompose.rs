use crate::markers::{is_markup_only, remove_markers, HYPHEN, UNDERSCORE};

/// Tokens of a marked-up root, grouped by hyphen.
///
/// A root without a hyphen yields exactly one group. Tokens carry no markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootTokenGroups {
    groups: Vec<Vec<String>>,
}

impl RootTokenGroups {
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// Iterates every token left to right, across groups.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flatten().map(String::as_str)
    }

    pub fn flatten(&self) -> Vec<String> {
        self.groups.iter().flatten().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Splits a marked-up root into hyphen groups of underscore-separated tokens.
///
/// A root made only of markers or separators (`-`, `--`, `<+`) comes back
/// as a single one-token group.
/// Malformed markup such as a doubled `_` produces an empty token instead
/// of an error; the engine accepted the data, so it is passed on as-is.
pub fn decompose(root: &str) -> RootTokenGroups {
    if is_markup_only(root) {
        return RootTokenGroups {
            groups: vec![vec![root.to_string()]],
        };
    }

    let groups = root
        .split(HYPHEN)
        .map(|group| {
            group
                .split(UNDERSCORE)
                .map(|token| remove_markers(token).into_owned())
                .collect()
        })
        .collect();

    RootTokenGroups { groups }
}
