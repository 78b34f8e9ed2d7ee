//! Dynamic extension loading. An extension is a platform dynamic library
//! exporting the [`PLUGIN_ENTRY`] symbol; the loader resolves it, hands it
//! the interpreter so it can register operators, and keeps the library
//! resident for the interpreter's lifetime.

use std::{env::consts::DLL_EXTENSION, fs, path::Path};

use libloading::Library;

use crate::{diagnostics::ThistleError, runtime::Interpreter};

/// Symbol every extension module must export.
pub const PLUGIN_ENTRY: &[u8] = b"thistle_register\0";

/// Signature of the registration entry point. The interpreter pointer is
/// valid for the duration of the call.
pub type RegisterFn = unsafe extern "C" fn(*mut Interpreter);

impl Interpreter {
    /// Load one extension module and let it register operators. A missing
    /// path is a silent no-op; a module that cannot be opened or lacks the
    /// entry point is reported to stderr and skipped. On success the
    /// library handle is retained until the interpreter is dropped.
    pub fn load_extension(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if !path.exists() {
            return;
        }

        let library = match unsafe { Library::new(path) } {
            Ok(library) => library,
            Err(err) => {
                report_skip(path, err.to_string());
                return;
            }
        };

        let entry: RegisterFn = match unsafe { library.get::<RegisterFn>(PLUGIN_ENTRY) } {
            Ok(symbol) => *symbol,
            Err(err) => {
                report_skip(path, format!("no `thistle_register` entry point ({err})"));
                return;
            }
        };

        unsafe { entry(self as *mut Interpreter) };
        self.extensions.push(library);
    }

    /// Scan a directory for files bearing the platform dynamic-library
    /// suffix and load each one, in sorted order. A missing or
    /// non-directory path is a silent no-op; individual load failures never
    /// abort the pass.
    pub fn load_extensions(&mut self, dir: impl AsRef<Path>) {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return;
        }
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return,
        };

        let mut candidates: Vec<_> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|ext| ext.to_str()) == Some(DLL_EXTENSION)
            })
            .collect();
        candidates.sort();

        for path in candidates {
            self.load_extension(path);
        }
    }
}

fn report_skip(path: &Path, reason: String) {
    let err = ThistleError::UnresolvedModule {
        path: path.to_path_buf(),
        reason,
    };
    eprintln!("warning: {err}");
}
