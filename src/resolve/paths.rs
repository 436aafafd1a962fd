//! Path anchoring against the project root.

use std::path::{Path, PathBuf};

/// Anchor `path` at `root`.
///
/// Relative paths are joined onto the root; paths that are already absolute
/// win outright, the same rule the external tools apply. No `..`
/// normalization and no symlink resolution happens here, so the result is
/// independent of the filesystem state and of the process working directory.
pub fn anchor(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Anchor every path in `paths`, preserving order.
pub fn anchor_all(root: &Path, paths: &[PathBuf]) -> Vec<PathBuf> {
    paths.iter().map(|p| anchor(root, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_paths_onto_the_root() {
        let root = Path::new("/proj");
        assert_eq!(anchor(root, Path::new("./public")), Path::new("/proj/public"));
        assert_eq!(anchor(root, Path::new("public")), Path::new("/proj/public"));
        assert_eq!(
            anchor(root, Path::new("src/App.fs.js")),
            Path::new("/proj/src/App.fs.js")
        );
    }

    #[test]
    fn absolute_paths_win() {
        let root = Path::new("/proj");
        assert_eq!(anchor(root, Path::new("/opt/cache")), Path::new("/opt/cache"));
    }

    #[test]
    fn dotdot_segments_are_kept_verbatim() {
        let root = Path::new("/proj");
        assert_eq!(
            anchor(root, Path::new("../shared")),
            Path::new("/proj/../shared")
        );
    }

    #[test]
    fn anchor_all_preserves_order() {
        let root = Path::new("/proj");
        let anchored = anchor_all(
            root,
            &[PathBuf::from("node_modules"), PathBuf::from("vendor")],
        );
        assert_eq!(
            anchored,
            vec![
                PathBuf::from("/proj/node_modules"),
                PathBuf::from("/proj/vendor")
            ]
        );
    }
}
