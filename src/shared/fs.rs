//! Filesystem capabilities needed by the export writer.

use std::io;
use std::path::Path;

pub trait CreateDirAll {
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

pub trait CreateNewFile {
    type Writer: io::Write + Send + 'static;

    /// Fails with `AlreadyExists` instead of touching an existing file.
    fn create_new(&self, path: &Path) -> io::Result<Self::Writer>;
}

/// Delegates to `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemFs;

impl CreateDirAll for SystemFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

impl CreateNewFile for SystemFs {
    type Writer = std::fs::File;

    fn create_new(&self, path: &Path) -> io::Result<Self::Writer> {
        std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
    }
}

#[cfg(test)]
pub use mem::MemFs;

#[cfg(test)]
mod mem {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// Paths are stored verbatim, with no normalization.
    #[derive(Clone, Default)]
    pub struct MemFs {
        files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
        dirs: Arc<Mutex<HashSet<PathBuf>>>,
    }

    pub struct MemFileWriter {
        path: PathBuf,
        files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    }

    impl MemFs {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn paths(&self) -> Vec<PathBuf> {
            self.files.lock().unwrap().keys().cloned().collect()
        }

        pub fn read(&self, path: &Path) -> Option<String> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        }

        pub fn dir_exists(&self, path: &Path) -> bool {
            self.dirs.lock().unwrap().contains(path)
        }
    }

    impl CreateDirAll for MemFs {
        fn create_dir_all(&self, path: &Path) -> io::Result<()> {
            self.dirs.lock().unwrap().insert(path.to_path_buf());
            Ok(())
        }
    }

    impl CreateNewFile for MemFs {
        type Writer = MemFileWriter;

        fn create_new(&self, path: &Path) -> io::Result<Self::Writer> {
            let mut files = self.files.lock().unwrap();
            if files.contains_key(path) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists", path.display()),
                ));
            }
            files.insert(path.to_path_buf(), Vec::new());
            Ok(MemFileWriter {
                path: path.to_path_buf(),
                files: self.files.clone(),
            })
        }
    }

    impl io::Write for MemFileWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.files
                .lock()
                .unwrap()
                .entry(self.path.clone())
                .or_default()
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
