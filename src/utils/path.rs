use std::path::{Component, Path, PathBuf};

/// Lexically normalizes `path`: drops `.` segments and folds `name/..`.
/// Does not touch the filesystem, so symlinks are not resolved.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.last() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(component),
            },
            other => cleaned.push(other),
        }
    }

    if cleaned.is_empty() {
        return PathBuf::from(".");
    }
    cleaned.iter().collect()
}
