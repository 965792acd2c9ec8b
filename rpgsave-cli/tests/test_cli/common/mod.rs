use std::fs;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;


pub use data::{generate_save_document, HP_DOCUMENT, SAVE_DOCUMENT};

/// Name of the binary under test
pub const BINARY: &str = "rpgsave";

/// Returns the path to a binary built by cargo.
///
/// # Panics
///
/// Panics if the binary cannot be found.
fn cargo_binary_path(name: &str) -> PathBuf {
    let bin_env = format!("CARGO_BIN_EXE_{name}");
    locate_cargo_binary(name, &bin_env).unwrap_or_else(|| {
        panic!("Binary '{name}' not found. Set '{bin_env}' or build the project binaries.")
    })
}

fn locate_cargo_binary(name: &str, bin_env: &str) -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(bin_env) {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
    }

    let exe_name = format!("{name}{}", std::env::consts::EXE_SUFFIX);
    let profiles = if cfg!(debug_assertions) {
        ["debug", "release"]
    } else {
        ["release", "debug"]
    };

    candidate_target_dirs()
        .into_iter()
        .flat_map(|dir| profiles.map(|profile| dir.join(profile).join(&exe_name)))
        .find(|path| path.is_file())
}

fn candidate_target_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(dir) = std::env::var_os("CARGO_TARGET_DIR") {
        dirs.push(PathBuf::from(dir));
    }
    if let Some(dir) = std::env::var_os("CARGO_MANIFEST_DIR") {
        let manifest = PathBuf::from(dir);
        for ancestor in manifest.ancestors() {
            dirs.push(ancestor.join("target"));
        }
    }
    dirs.push(PathBuf::from("target"));
    dirs.retain(|dir| dir.is_dir());
    dirs
}

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn empty() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with multiple files
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if any fixture file
    /// cannot be written.
    pub fn with_files(names: &[&str], contents: &[&[u8]]) -> Self {
        let fixture = Self::empty();
        for (name, contents) in names.iter().zip(contents) {
            fs::write(fixture.root_dir.path().join(name), contents).unwrap();
        }
        fixture
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        Self::with_files(&[name], &[contents])
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Check if a file exists in the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.root_dir.path().join(name).exists()
    }

    /// Read a file from the fixture, or an empty buffer if it is missing
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap_or_default()
    }

    /// Sorted names of all files in the fixture
    ///
    /// # Panics
    ///
    /// Panics if the fixture directory cannot be listed.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that files have expected contents
    ///
    /// # Panics
    ///
    /// Panics if any file's contents don't match the expected bytes.
    pub fn assert_files(&self, names: &[&str], contents: &[&[u8]]) {
        for (name, expected_contents) in names.iter().zip(contents) {
            let actual_contents = self.read(name);
            assert!(
                actual_contents == *expected_contents,
                "unexpected contents in {name}"
            );
        }
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run the binary with the specified arguments and a closed stdin
    pub async fn run_cargo(&mut self, args: &[&str]) -> Output {
        self.run_with_stdin(args, b"").await
    }

    /// Run the binary with the specified arguments and raw stdin bytes
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned, if writing to stdin fails, or if
    /// awaiting process output fails.
    pub async fn run_with_stdin(&mut self, args: &[&str], stdin: &[u8]) -> Output {
        let mut child = tokio::process::Command::new(cargo_binary_path(BINARY))
            .args(args)
            .current_dir(self.root_dir.path())
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap();

        if let Some(ref mut child_stdin) = child.stdin {
            child_stdin.write_all(stdin).await.unwrap_or_else(|err| {
                // The child may exit before reading its input.
                if err.kind() != std::io::ErrorKind::BrokenPipe {
                    panic!("failed write to stdin ({} bytes): {err}", stdin.len());
                }
            });
        }

        // Drop stdin to send EOF to the child process
        drop(child.stdin.take());

        let raw_output = child.wait_with_output().await.unwrap();
        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
