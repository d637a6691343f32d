#![allow(dead_code)]
#![allow(deprecated)] // cargo_bin deprecation - still works fine

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the diff-sloc binary.
pub fn diff_sloc() -> Command {
    Command::cargo_bin("diff-sloc").expect("binary should exist")
}

/// A temporary directory holding patch and config fixtures.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".diff-sloc.toml", content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// A git patch touching a Python file and a Markdown file.
pub const GIT_PATCH: &str = "\
diff --git a/src/app.py b/src/app.py
index 83db48f..bf269f4 100644
--- a/src/app.py
+++ b/src/app.py
@@ -1,4 +1,6 @@
 import sys
-# TODO: remove
+import os
+
+def main():
+    \"\"\"Entry point.\"\"\"

diff --git a/README.md b/README.md
index 1234567..89abcde 100644
--- a/README.md
+++ b/README.md
@@ -1,2 +1,3 @@
 # Project
+
+Usage notes.
";

/// An svn patch touching one C file.
pub const SVN_PATCH: &str = "\
Index: trunk/src/main.c
===================================================================
--- trunk/src/main.c\t(revision 12)
+++ trunk/src/main.c\t(working copy)
@@ -1,3 +1,4 @@
 #include <stdio.h>
+/* greet */
 int main(void) {
-    return 1;
+    return 0;
";
