use std::path::{Component, Path, PathBuf};

/// Renders a path for messages: canonical when it exists, otherwise made
/// absolute against the working directory with `.` and `..` folded away.
pub fn best_effort_path_display(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    let absolute = match std::env::current_dir() {
        Ok(current_dir) if path.is_relative() => current_dir.join(path),
        _ => path.to_path_buf(),
    };
    lexically_normalize(&absolute).display().to_string()
}

fn lexically_normalize(path: &Path) -> PathBuf {
    let mut normalized: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.last(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }
    normalized.iter().collect()
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl<P: AsRef<Path> + ?Sized> BestEffortPathExt for P {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_normalized() {
        let display = Path::new("/no/such/./dir/../file.yaml").best_effort_path_display();
        assert_eq!(display, "/no/such/file.yaml");
    }

    #[test]
    fn parent_of_root_stays_at_root() {
        let display = Path::new("/../missing-nstree-file").best_effort_path_display();
        assert_eq!(display, "/missing-nstree-file");
    }

    #[test]
    fn relative_path_becomes_absolute() {
        let display = PathBuf::from("missing-nstree-dir/x").best_effort_path_display();
        assert!(Path::new(&display).is_absolute());
        assert!(display.ends_with("missing-nstree-dir/x"));
    }
}
