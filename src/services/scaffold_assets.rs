use include_dir::{Dir, DirEntry, include_dir};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

/// One file of the starter workspace scaffold.
#[derive(Debug, Clone)]
pub struct ScaffoldFile {
    /// Path relative to the workspace root.
    pub path: String,
    pub content: String,
}

/// Starter-workspace assets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedScaffold;

impl EmbeddedScaffold {
    pub fn new() -> Self {
        Self
    }

    /// All scaffold files, sorted by path.
    pub fn files(&self) -> Vec<ScaffoldFile> {
        let mut files = Vec::new();
        collect_files(&SCAFFOLD_DIR, &mut files);
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }
}

fn collect_files(dir: &'static Dir, files: &mut Vec<ScaffoldFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                if let Some(content) = file.contents_utf8() {
                    files.push(ScaffoldFile {
                        path: file.path().to_string_lossy().to_string(),
                        content: content.to_string(),
                    });
                }
            }
            DirEntry::Dir(subdir) => collect_files(subdir, files),
        }
    }
}
