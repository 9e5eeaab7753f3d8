use crate::errors::{RecorderError, Result};
use crate::recorder::source::NodeTree;
use crate::scene::NodeHandle;

/// Separator between node names in a resolved path.
pub const PATH_SEPARATOR: char = '/';

/// Computes the hierarchical name of `target` relative to `root`.
///
/// Names of the nodes strictly below `root` down to and including `target`
/// are joined root-to-target with [`PATH_SEPARATOR`]. The root itself is not
/// part of the path, so `target == root` resolves to `""`.
pub fn resolve_path<T: NodeTree + ?Sized>(tree: &T, root: NodeHandle, target: NodeHandle) -> Result<String> {
    let mut names: Vec<&str> = Vec::new();
    let mut current = target;

    while current != root {
        let name = tree
            .node_name(current)
            .ok_or_else(|| RecorderError::NodeNotFound(format!("{current:?}")))?;
        names.push(name);

        current = tree.parent(current).ok_or_else(|| RecorderError::UnresolvedPath {
            target: display_name(tree, target),
            root: display_name(tree, root),
        })?;
    }

    names.reverse();
    let mut path = String::with_capacity(names.iter().map(|n| n.len() + 1).sum());
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            path.push(PATH_SEPARATOR);
        }
        path.push_str(name);
    }
    Ok(path)
}

fn display_name<T: NodeTree + ?Sized>(tree: &T, node: NodeHandle) -> String {
    tree.node_name(node)
        .map_or_else(|| format!("{node:?}"), str::to_owned)
}
