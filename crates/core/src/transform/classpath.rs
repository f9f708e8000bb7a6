use indexmap::IndexSet;
use std::path::{Path, PathBuf};

/// The transform scope split by container kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScopeClasspath {
    pub directories: Vec<PathBuf>,
    pub archives: Vec<PathBuf>,
}

impl ScopeClasspath {
    /// Directories on disk become folder inputs; anything else is treated as an archive.
    pub fn split<P: AsRef<Path>>(files: impl IntoIterator<Item = P>) -> Self {
        let mut classpath = Self::default();
        for file in files {
            let file = file.as_ref().to_path_buf();
            if file.is_dir() {
                classpath.directories.push(file);
            } else {
                classpath.archives.push(file);
            }
        }
        classpath
    }

    pub fn all_files(&self) -> IndexSet<PathBuf> {
        self.directories
            .iter()
            .chain(self.archives.iter())
            .cloned()
            .collect()
    }

    /// Boot classpath plus every java classpath entry outside the scope.
    pub fn extra_classpath(&self, boot: &[PathBuf], java: &[PathBuf]) -> IndexSet<PathBuf> {
        let scope = self.all_files();
        boot.iter()
            .cloned()
            .chain(java.iter().filter(|f| !scope.contains(*f)).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_by_kind() {
        let temp = tempfile::tempdir().unwrap();
        let classes = temp.path().join("classes");
        std::fs::create_dir(&classes).unwrap();
        let jar = temp.path().join("lib.jar");

        let classpath = ScopeClasspath::split([&classes, &jar]);

        assert_eq!(classpath.directories, vec![classes]);
        assert_eq!(classpath.archives, vec![jar]);
    }

    #[test]
    fn test_extra_classpath_excludes_scope() {
        let classpath = ScopeClasspath {
            directories: vec![PathBuf::from("/p/classes")],
            archives: vec![PathBuf::from("/p/scope.jar")],
        };
        let boot = vec![PathBuf::from("/sdk/platform.jar")];
        let java = vec![
            PathBuf::from("/p/scope.jar"),
            PathBuf::from("/m2/dep.jar"),
            PathBuf::from("/sdk/platform.jar"),
        ];

        let extra: Vec<_> = classpath.extra_classpath(&boot, &java).into_iter().collect();

        assert_eq!(
            extra,
            vec![PathBuf::from("/sdk/platform.jar"), PathBuf::from("/m2/dep.jar")]
        );
    }
}
