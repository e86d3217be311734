#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a temporary source-tree fixture for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a report written next to the given prefix.
    pub fn report_path(&self, prefix: &str, ext: &str) -> std::path::PathBuf {
        self.dir.path().join(format!("{prefix}.{ext}"))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A minimal Windows-flavored C++ tree: one source file with API indicators,
/// one header, a solution, a project, and a referenced import library.
pub fn populate_windows_tree(fixture: &TestFixture) {
    fixture.create_file(
        "src/main.cpp",
        "#include <windows.h>\n\
         // link against foo.lib\n\
         int WinMain(HINSTANCE h, HINSTANCE p, LPSTR c, int n) { return 0; }\n",
    );
    fixture.create_file("src/util.h", "#pragma once\nvoid helper();\n");
    fixture.create_file("app.sln", "Microsoft Visual Studio Solution File\n");
    fixture.create_file("app.vcxproj", "<Project></Project>\n");
    fixture.create_file("lib/foo.lib", "");
}
