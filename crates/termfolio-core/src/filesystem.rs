//! Static, read-only virtual filesystem.
//!
//! # Path Convention
//!
//! - Root: `"/"`
//! - Everything else is absolute with no trailing slash: `"/projects"`,
//!   `"/projects/intra-enterprise.md"`
//!
//! The working directory is not stored here; it lives in the
//! [`Session`](crate::Session) and is passed in by the caller.

use crate::config::ABOUT_TEXT;
use crate::error::ShellError;
use crate::models::{ROOT_PATH, Section};

/// A node of the tree. Children keep their declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsEntry {
    File {
        name: &'static str,
        content: &'static str,
    },
    Directory {
        name: &'static str,
        children: Vec<FsEntry>,
    },
}

impl FsEntry {
    pub fn file(name: &'static str, content: &'static str) -> Self {
        Self::File { name, content }
    }

    pub fn dir(name: &'static str, children: Vec<FsEntry>) -> Self {
        Self::Directory { name, children }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::File { name, .. } | Self::Directory { name, .. } => name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    fn child(&self, name: &str) -> Option<&FsEntry> {
        match self {
            Self::Directory { children, .. } => children.iter().find(|c| c.name() == name),
            Self::File { .. } => None,
        }
    }
}

/// What a listing row refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Canonical section file, only listed at the root
    SectionFile,
}

/// Directory entry returned by [`VirtualFs::list_dir`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    /// Listing label, with a trailing `/` for directories.
    pub fn label(&self) -> String {
        match self.kind {
            EntryKind::Directory => format!("{}/", self.name),
            EntryKind::File | EntryKind::SectionFile => self.name.clone(),
        }
    }
}

/// Result of reading a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileContent {
    /// Static content of a regular file
    Text(&'static str),
    /// The name is a section file; it opens in the editor instead
    Section(Section),
}

/// Read-only tree built once at startup.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    root: FsEntry,
}

impl VirtualFs {
    /// Wrap an existing tree. `root` must be a directory.
    pub fn from_root(root: FsEntry) -> Self {
        debug_assert!(root.is_directory(), "filesystem root must be a directory");
        Self { root }
    }

    /// The portfolio tree served by the shell.
    pub fn portfolio() -> Self {
        Self::from_root(FsEntry::dir(
            "",
            vec![
                FsEntry::dir(
                    "projects",
                    vec![
                        FsEntry::file(
                            "university-collaboration.md",
                            "# University Collaboration\n\n\
                             Research data platform built with three university partners.\n\
                             Ingests lab instrument output, versions datasets and exposes\n\
                             reproducible query notebooks to students.\n\n\
                             Stack: Rust, PostgreSQL, Arrow",
                        ),
                        FsEntry::file(
                            "intra-enterprise.md",
                            "# Intra Enterprise\n\n\
                             Internal developer portal for a 4,000 person organisation.\n\
                             Service catalogue, ownership tracking and on-call tooling.\n\n\
                             Stack: TypeScript, Go, Kubernetes",
                        ),
                    ],
                ),
                FsEntry::dir(
                    "experience",
                    vec![
                        FsEntry::file(
                            "current.md",
                            "# Staff Engineer, Platform (2022 - present)\n\n\
                             Leading the data platform team.",
                        ),
                        FsEntry::file(
                            "previous.md",
                            "# Software Engineer (2017 - 2022)\n\n\
                             Backend services, build tooling and observability.",
                        ),
                    ],
                ),
                FsEntry::dir(
                    "blog",
                    vec![
                        FsEntry::file(
                            "hello-world.md",
                            "# Hello, world\n\nWhy this site is a terminal.",
                        ),
                        FsEntry::file(
                            "ownership.md",
                            "# Ownership without tears\n\n\
                             Notes from teaching Rust to a backend team.",
                        ),
                    ],
                ),
                FsEntry::file("about.txt", ABOUT_TEXT),
                FsEntry::file(
                    "contact.txt",
                    "Email: hello@alexmorgan.dev\nGitHub: github.com/alexmorgan",
                ),
                FsEntry::file(
                    "skills.txt",
                    "Languages: Rust, Go, TypeScript, Python, SQL\n\
                     Infrastructure: Kubernetes, Terraform, PostgreSQL, Kafka\n\
                     Practices: API design, observability, mentoring",
                ),
            ],
        ))
    }

    // =========================================================================
    // Path Resolution
    // =========================================================================

    /// Resolve a path string against `current` without filesystem validation.
    ///
    /// - `""`, `~` and `/` mean root
    /// - `~/x` and `/x` are absolute
    /// - `..` is the parent of `current`
    /// - anything else is relative to `current`
    pub fn resolve_path_string(current: &str, path: &str) -> String {
        match path {
            "" | "~" | ROOT_PATH => return ROOT_PATH.to_string(),
            ".." => return Self::parent_path(current),
            _ => {}
        }

        if let Some(rest) = path.strip_prefix("~/") {
            return Self::normalize_path(rest);
        }
        if path.starts_with('/') {
            return Self::normalize_path(path);
        }

        Self::normalize_path(&format!("{}/{}", current, path))
    }

    /// Parent of an absolute path, by truncating at the last `/`.
    pub fn parent_path(path: &str) -> String {
        match path.trim_end_matches('/').rsplit_once('/') {
            Some((parent, _)) if !parent.is_empty() => parent.to_string(),
            _ => ROOT_PATH.to_string(),
        }
    }

    /// Normalize a path by resolving `.` and `..` components.
    ///
    /// Always returns an absolute path.
    pub fn normalize_path(path: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for part in path.split('/').filter(|s| !s.is_empty()) {
            match part {
                ".." => {
                    parts.pop();
                }
                "." => {}
                _ => parts.push(part),
            }
        }

        format!("/{}", parts.join("/"))
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Get an entry by absolute path.
    pub fn get_entry(&self, path: &str) -> Option<&FsEntry> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(&self.root, |entry, part| entry.child(part))
    }

    pub fn is_directory(&self, path: &str) -> bool {
        self.get_entry(path).is_some_and(FsEntry::is_directory)
    }

    /// Absolute paths of every directory, root first.
    pub fn directories(&self) -> Vec<String> {
        fn walk(entry: &FsEntry, path: String, out: &mut Vec<String>) {
            if let FsEntry::Directory { children, .. } = entry {
                for child in children.iter().filter(|c| c.is_directory()) {
                    let child_path = if path == ROOT_PATH {
                        format!("/{}", child.name())
                    } else {
                        format!("{}/{}", path, child.name())
                    };
                    out.push(child_path.clone());
                    walk(child, child_path, out);
                }
            }
        }

        let mut out = vec![ROOT_PATH.to_string()];
        walk(&self.root, ROOT_PATH.to_string(), &mut out);
        out
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Resolve the target of `cd`. `None` means root.
    ///
    /// A bare name that is not a child of `current` still matches any
    /// known directory of that exact name.
    pub fn change_dir(
        &self,
        current: &str,
        target: Option<&str>,
    ) -> Result<String, ShellError> {
        let target = target.unwrap_or(ROOT_PATH);
        let resolved = Self::resolve_path_string(current, target);

        match self.get_entry(&resolved) {
            Some(entry) if entry.is_directory() => Ok(resolved),
            Some(_) => Err(ShellError::not_a_directory("cd", target)),
            None => self
                .find_directory(target)
                .ok_or_else(|| ShellError::unknown_directory("cd", target)),
        }
    }

    /// First directory, root first, whose name is exactly `name`.
    fn find_directory(&self, name: &str) -> Option<String> {
        if name.contains('/') || matches!(name, "" | "." | ".." | "~") {
            return None;
        }
        self.directories()
            .into_iter()
            .find(|dir| dir.rsplit('/').next() == Some(name))
    }

    /// Direct children of a directory. `None` lists `current`.
    ///
    /// Listing the root also yields every section file not already present.
    pub fn list_dir(
        &self,
        current: &str,
        target: Option<&str>,
    ) -> Result<Vec<DirEntry>, ShellError> {
        let resolved = match target {
            Some(t) => Self::resolve_path_string(current, t),
            None => current.to_string(),
        };
        let shown = target.unwrap_or(current);

        let children = match self.get_entry(&resolved) {
            Some(FsEntry::Directory { children, .. }) => children,
            Some(FsEntry::File { .. }) => return Err(ShellError::not_a_directory("ls", shown)),
            None => return Err(ShellError::unknown_directory("ls", shown)),
        };

        let mut entries: Vec<DirEntry> = children
            .iter()
            .map(|child| DirEntry {
                name: child.name().to_string(),
                kind: if child.is_directory() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                },
            })
            .collect();

        if resolved == ROOT_PATH {
            for section in Section::ALL {
                if !entries.iter().any(|e| e.name == section.file_name()) {
                    entries.push(DirEntry {
                        name: section.file_name().to_string(),
                        kind: EntryKind::SectionFile,
                    });
                }
            }
        }

        Ok(entries)
    }

    /// Read a file relative to `current`, or absolute when prefixed with `/`.
    pub fn read_file(&self, current: &str, target: &str) -> Result<FileContent, ShellError> {
        let resolved = Self::resolve_path_string(current, target);

        match self.get_entry(&resolved) {
            Some(FsEntry::File { content, .. }) => Ok(FileContent::Text(content)),
            Some(FsEntry::Directory { .. }) => Err(ShellError::is_a_directory("cat", target)),
            None => Section::from_file_name(target.trim_start_matches('/'))
                .map(FileContent::Section)
                .ok_or_else(|| ShellError::unknown_file("cat", target)),
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::portfolio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[DirEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_resolve_path_string() {
        assert_eq!(VirtualFs::resolve_path_string("/blog", "~"), "/");
        assert_eq!(VirtualFs::resolve_path_string("/blog", "/"), "/");
        assert_eq!(VirtualFs::resolve_path_string("/blog", "~/projects"), "/projects");
        assert_eq!(VirtualFs::resolve_path_string("/", "blog"), "/blog");
        assert_eq!(VirtualFs::resolve_path_string("/a", "b"), "/a/b");
        assert_eq!(VirtualFs::resolve_path_string("/a/b", ".."), "/a");
        assert_eq!(VirtualFs::resolve_path_string("/a/b/c", "../../d"), "/a/d");
        assert_eq!(VirtualFs::resolve_path_string("/a", "."), "/a");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(VirtualFs::parent_path("/projects"), "/");
        assert_eq!(VirtualFs::parent_path("/a/b"), "/a");
        assert_eq!(VirtualFs::parent_path("/"), "/");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(VirtualFs::normalize_path("/a/./b"), "/a/b");
        assert_eq!(VirtualFs::normalize_path("/../.."), "/");
        assert_eq!(VirtualFs::normalize_path(""), "/");
    }

    #[test]
    fn test_get_entry() {
        let fs = VirtualFs::portfolio();
        assert!(fs.is_directory("/"));
        assert!(fs.is_directory("/projects"));
        assert!(!fs.is_directory("/about.txt"));
        assert!(fs.get_entry("/projects/intra-enterprise.md").is_some());
        assert!(fs.get_entry("/nope").is_none());
        assert!(fs.get_entry("/about.txt/deeper").is_none());
    }

    #[test]
    fn test_list_subdirectory_is_direct_children_only() {
        let fs = VirtualFs::portfolio();
        let entries = fs.list_dir("/projects", None).unwrap();
        assert_eq!(
            names(&entries),
            vec!["university-collaboration.md", "intra-enterprise.md"]
        );
    }

    #[test]
    fn test_list_root_includes_section_files() {
        let fs = VirtualFs::portfolio();
        let entries = fs.list_dir("/", None).unwrap();
        let listed = names(&entries);
        assert!(listed.contains(&"projects"));
        assert!(listed.contains(&"about.txt"));
        for section in Section::ALL {
            assert!(listed.contains(&section.file_name()));
        }
        assert!(!listed.contains(&"intra-enterprise.md"));
        let section_files = entries
            .iter()
            .filter(|e| e.kind == EntryKind::SectionFile)
            .count();
        assert_eq!(section_files, Section::ALL.len());
    }

    #[test]
    fn test_list_errors() {
        let fs = VirtualFs::portfolio();
        assert_eq!(
            fs.list_dir("/", Some("ghost")),
            Err(ShellError::unknown_directory("ls", "ghost"))
        );
        assert_eq!(
            fs.list_dir("/", Some("about.txt")),
            Err(ShellError::not_a_directory("ls", "about.txt"))
        );
    }

    #[test]
    fn test_change_dir() {
        let fs = VirtualFs::portfolio();
        assert_eq!(fs.change_dir("/", Some("projects")), Ok("/projects".to_string()));
        assert_eq!(fs.change_dir("/projects", Some("..")), Ok("/".to_string()));
        assert_eq!(fs.change_dir("/projects", Some("/")), Ok("/".to_string()));
        assert_eq!(fs.change_dir("/projects", None), Ok("/".to_string()));
        assert_eq!(fs.change_dir("/", Some("..")), Ok("/".to_string()));
        assert_eq!(
            fs.change_dir("/", Some("ghost")),
            Err(ShellError::unknown_directory("cd", "ghost"))
        );
        assert_eq!(
            fs.change_dir("/", Some("about.txt")),
            Err(ShellError::not_a_directory("cd", "about.txt"))
        );
    }

    #[test]
    fn test_change_dir_by_known_name() {
        let fs = VirtualFs::portfolio();
        assert_eq!(fs.change_dir("/blog", Some("projects")), Ok("/projects".to_string()));
        assert_eq!(fs.change_dir("/projects", Some("experience")), Ok("/experience".to_string()));
        assert_eq!(
            fs.change_dir("/blog", Some("ghost")),
            Err(ShellError::unknown_directory("cd", "ghost"))
        );
        assert_eq!(
            fs.change_dir("/blog", Some("nested/projects")),
            Err(ShellError::unknown_directory("cd", "nested/projects"))
        );
    }

    #[test]
    fn test_read_file() {
        let fs = VirtualFs::portfolio();
        assert_eq!(fs.read_file("/", "about.txt"), Ok(FileContent::Text(ABOUT_TEXT)));
        assert_eq!(
            fs.read_file("/projects", "/about.txt"),
            Ok(FileContent::Text(ABOUT_TEXT))
        );
        assert!(matches!(
            fs.read_file("/projects", "intra-enterprise.md"),
            Ok(FileContent::Text(s)) if s.starts_with("# Intra Enterprise")
        ));
    }

    #[test]
    fn test_read_section_file_redirects() {
        let fs = VirtualFs::portfolio();
        assert_eq!(
            fs.read_file("/", "about.md"),
            Ok(FileContent::Section(Section::About))
        );
        assert_eq!(
            fs.read_file("/blog", "/skills.json"),
            Ok(FileContent::Section(Section::Skills))
        );
    }

    #[test]
    fn test_read_errors() {
        let fs = VirtualFs::portfolio();
        assert_eq!(
            fs.read_file("/", "projects"),
            Err(ShellError::is_a_directory("cat", "projects"))
        );
        assert_eq!(
            fs.read_file("/", "missing.txt"),
            Err(ShellError::unknown_file("cat", "missing.txt"))
        );
    }

    #[test]
    fn test_directories() {
        let fs = VirtualFs::portfolio();
        assert_eq!(
            fs.directories(),
            vec!["/", "/projects", "/experience", "/blog"]
        );
    }

    #[test]
    fn test_label() {
        let dir = DirEntry {
            name: "blog".into(),
            kind: EntryKind::Directory,
        };
        assert_eq!(dir.label(), "blog/");
    }
}
