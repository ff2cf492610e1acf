use std::collections::BTreeMap;
use std::io::{Error, ErrorKind};
use std::path::{Component, Path, PathBuf};

use crate::config::FileSystem;

/// In-memory stand-in for the config file's surroundings.
///
/// Holds config files by absolute path plus directory links, so `canonicalize`
/// behaves like the real one: `.` and `..` are folded and links are followed.
pub struct MockFileSystem {
    configs: BTreeMap<PathBuf, String>,
    links: BTreeMap<PathBuf, PathBuf>,
    current_dir: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            configs: BTreeMap::new(),
            links: BTreeMap::new(),
            current_dir: PathBuf::from("/project"),
        }
    }

    /// Place a config file. Relative paths land under the current directory.
    pub fn with_config(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = self.absolute(path.as_ref());
        self.configs.insert(fold_dots(&path), content.to_string());
        self
    }

    /// Make `link` an alias of the directory `target`.
    pub fn with_dir_link(mut self, link: impl AsRef<Path>, target: impl AsRef<Path>) -> Self {
        let link = fold_dots(&self.absolute(link.as_ref()));
        let target = fold_dots(&self.absolute(target.as_ref()));
        self.links.insert(link, target);
        self
    }

    pub fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
        self
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir.join(path)
        }
    }

    /// Fold `.`/`..` one component at a time, swapping in link targets as
    /// they are reached so a later `..` climbs out of the target.
    fn resolve(&self, path: &Path) -> PathBuf {
        let mut resolved = PathBuf::from("/");
        for component in self.absolute(path).components() {
            match component {
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::Normal(name) => {
                    resolved.push(name);
                    if let Some(target) = self.links.get(&resolved) {
                        resolved.clone_from(target);
                    }
                }
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }
        resolved
    }

    fn not_found(path: &Path) -> Error {
        Error::new(
            ErrorKind::NotFound,
            format!("no config at {}", path.display()),
        )
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.configs
            .get(&self.resolve(path))
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.configs.contains_key(&self.resolve(path))
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        let resolved = self.resolve(path);
        if self.configs.contains_key(&resolved) {
            Ok(resolved)
        } else {
            Err(Self::not_found(path))
        }
    }
}

/// Lexical `.`/`..` folding for absolute paths, ignoring links.
fn fold_dots(path: &Path) -> PathBuf {
    let mut folded = PathBuf::from("/");
    for component in path.components() {
        match component {
            Component::ParentDir => {
                folded.pop();
            }
            Component::Normal(name) => folded.push(name),
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    folded
}
