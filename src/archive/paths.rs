//! Entry naming and destination containment.

use std::path::{Component, Path, PathBuf};

use crate::error::ArchiveError;

/// Name under which `path` is stored in the archive.
///
/// Root, drive-prefix, `.` and `..` components are dropped and the remaining
/// components joined with `/`, so stored names are relative forward-slash
/// paths no matter how the tool was invoked.
pub fn entry_name(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|comp| match comp {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.join("/")
}

/// Join an entry name onto the extraction root, refusing names that escape it.
///
/// Only normal components are pushed; `..`, root, and drive-prefix components
/// fail with [`ArchiveError::PathTraversal`]. The result is then verified to
/// be a strict descendant of `root` by component comparison rather than
/// string prefixing, so a sibling like `root-evil` can never pass.
///
/// The check is lexical: directories that already exist under the root are
/// trusted, so a pre-existing symlink among them is followed. Symlinks never
/// come from the archive itself — the extractor skips non-file entries.
pub fn join_checked(root: &Path, name: &Path) -> Result<PathBuf, ArchiveError> {
    let mut dest = root.to_path_buf();
    for comp in name.components() {
        match comp {
            Component::Normal(part) => dest.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ArchiveError::PathTraversal {
                    name: name.display().to_string(),
                });
            }
        }
    }
    if dest == root || !dest.starts_with(root) {
        return Err(ArchiveError::PathTraversal {
            name: name.display().to_string(),
        });
    }
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_name_is_relative_forward_slash() {
        assert_eq!(entry_name(Path::new("a.txt")), "a.txt");
        assert_eq!(entry_name(Path::new("./a.txt")), "a.txt");
        assert_eq!(entry_name(Path::new("dir/sub/file.bin")), "dir/sub/file.bin");
        assert_eq!(entry_name(Path::new("/home/user/a.txt")), "home/user/a.txt");
        assert_eq!(entry_name(Path::new("../a.txt")), "a.txt");
    }

    #[test]
    fn join_checked_accepts_nested_names() {
        let root = Path::new("/data/out");
        let dest = join_checked(root, Path::new("sub/file.txt")).unwrap();
        assert_eq!(dest, Path::new("/data/out/sub/file.txt"));
    }

    #[test]
    fn join_checked_compares_components_not_string_prefixes() {
        // A string-prefix check would let `/data/out` + `-evil.txt` style
        // concatenations through; component joining cannot produce a sibling
        // of the root.
        let root = Path::new("/data/out");
        let dest = join_checked(root, Path::new("evil.txt")).unwrap();
        assert_eq!(dest, Path::new("/data/out/evil.txt"));
        assert_ne!(dest, Path::new("/data/out-evil.txt"));
        assert_eq!(dest.parent().unwrap(), root);

        // And the inverse: a sibling sharing the root's string prefix is not
        // a component descendant.
        assert!(!Path::new("/data/out-evil/file.txt").starts_with(root));
    }

    #[test]
    fn join_checked_rejects_parent_components() {
        let root = Path::new("/data/out");
        let err = join_checked(root, Path::new("../evil.txt")).unwrap_err();
        assert!(matches!(err, ArchiveError::PathTraversal { .. }));
        // A `..` buried deeper in the name is just as bad.
        let err = join_checked(root, Path::new("a/../../evil.txt")).unwrap_err();
        assert!(matches!(err, ArchiveError::PathTraversal { .. }));
    }

    #[test]
    fn join_checked_rejects_absolute_names() {
        let root = Path::new("/data/out");
        let err = join_checked(root, Path::new("/etc/passwd")).unwrap_err();
        assert!(matches!(err, ArchiveError::PathTraversal { .. }));
    }

    #[test]
    fn join_checked_rejects_names_resolving_to_the_root() {
        let root = Path::new("/data/out");
        assert!(join_checked(root, Path::new("")).is_err());
        assert!(join_checked(root, Path::new(".")).is_err());
    }
}
