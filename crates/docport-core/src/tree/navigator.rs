use super::DocNode;

/// Walk `slug_path` down from the top level, taking the first sibling whose
/// slug matches each segment. `None` for an empty path or any miss.
pub fn find_node_by_path<'a, S: AsRef<str>>(
    tree: &'a [DocNode],
    slug_path: &[S],
) -> Option<&'a DocNode> {
    let (first, rest) = slug_path.split_first()?;
    let mut node = tree.iter().find(|n| n.slug == first.as_ref())?;

    for segment in rest {
        node = node.children.iter().find(|n| n.slug == segment.as_ref())?;
    }

    Some(node)
}

/// Pre-order listing of the whole forest (reading order)
pub fn flatten_tree(tree: &[DocNode]) -> Vec<&DocNode> {
    let mut out = Vec::new();
    let mut stack: Vec<&DocNode> = tree.iter().rev().collect();

    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.children.iter().rev());
    }

    out
}

/// Sequential navigation around one page
#[derive(Debug, Clone, Copy, Default)]
pub struct Neighbors<'a> {
    pub prev: Option<&'a DocNode>,
    pub next: Option<&'a DocNode>,
}

/// Split a `/`-joined URL path into segments, ignoring empty ones
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Link to a page: `<base>/<project>/<path>`
pub fn href(base: &str, project: &str, path: &str) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), project, path)
}
