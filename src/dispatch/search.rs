// src/dispatch/search.rs
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::DispatchError;

/// Directories searched for a delegate program, in order.
///
/// `prepended` is true when the shim's own directory was put in front of
/// `PATH`; in that case the joined list is also handed to the delegate so it
/// can find its own siblings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
    prepended: bool,
}

impl SearchPath {
    pub fn new(sibling: Option<&Path>, path_var: Option<&OsStr>) -> Self {
        let mut dirs = Vec::new();
        if let Some(dir) = sibling {
            dirs.push(dir.to_path_buf());
        }
        if let Some(var) = path_var {
            dirs.extend(env::split_paths(var));
        }
        Self { dirs, prepended: sibling.is_some() }
    }

    /// Directory holding the shim executable, or None if it has no parent.
    pub fn sibling_dir(shim_exe: &Path) -> Option<&Path> {
        shim_exe.parent().filter(|p| !p.as_os_str().is_empty())
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn joined(&self) -> Result<OsString, DispatchError> {
        Ok(env::join_paths(&self.dirs)?)
    }

    /// `PATH` value for the delegate; None leaves its environment untouched.
    pub fn child_path_var(&self) -> Result<Option<OsString>, DispatchError> {
        if self.prepended { self.joined().map(Some) } else { Ok(None) }
    }

    pub fn resolve(&self, tool: &str, program: &str) -> Result<PathBuf, DispatchError> {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let paths = if self.is_empty() { None } else { Some(self.joined()?) };

        let found = which::which_in(program, paths, cwd).map_err(|source| DispatchError::NotFound {
            tool: s!(tool),
            program: s!(program),
            source,
        })?;
        debug!(tool, path = %found.display(), "resolved delegate");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_goes_first() {
        let path = env::join_paths(["/usr/bin", "/bin"]).unwrap();
        let sp = SearchPath::new(Some(Path::new("/opt/tools")), Some(&path));
        assert_eq!(
            sp.dirs(),
            &[PathBuf::from("/opt/tools"), PathBuf::from("/usr/bin"), PathBuf::from("/bin")]
        );
    }

    #[test]
    fn child_path_only_when_prepended() {
        let path = env::join_paths(["/usr/bin"]).unwrap();

        let plain = SearchPath::new(None, Some(&path));
        assert_eq!(plain.child_path_var().unwrap(), None);

        let sib = SearchPath::new(Some(Path::new("/opt/tools")), Some(&path));
        let child = sib.child_path_var().unwrap().unwrap();
        let dirs: Vec<PathBuf> = env::split_paths(&child).collect();
        assert_eq!(dirs, vec![PathBuf::from("/opt/tools"), PathBuf::from("/usr/bin")]);
    }

    #[test]
    fn no_path_var_no_sibling_is_empty() {
        assert!(SearchPath::new(None, None).is_empty());
    }

    #[test]
    fn sibling_dir_of_bare_name_is_none() {
        assert_eq!(SearchPath::sibling_dir(Path::new("scrape")), None);
        assert_eq!(
            SearchPath::sibling_dir(Path::new("/opt/tools/scrape")),
            Some(Path::new("/opt/tools"))
        );
    }

    #[test]
    fn missing_program_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let sp = SearchPath::new(Some(dir.path()), None);
        let err = sp.resolve("s1f", "s1f-cli").unwrap_err();
        assert!(matches!(err, DispatchError::NotFound { ref program, .. } if program == "s1f-cli"));
    }
}
