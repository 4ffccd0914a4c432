//! Load `KEY=VALUE` files into the process environment or a typed record.
//!
//! Two entry points cover most uses:
//!
//! - [`load`] reads each file in order and sets every pair as a process
//!   environment variable.
//! - [`unmarshal`] merges the files (last file wins) and binds the pairs onto
//!   the fields of a [`Record`], coercing each value to the field's type.
//!
//! ```no_run
//! use loadenv::impl_record;
//!
//! #[derive(Debug, Default)]
//! struct Credentials {
//!     username: String,
//!     port: u16,
//!     verbose: bool,
//! }
//!
//! impl_record!(Credentials {
//!     username => "Username",
//!     port => "Port",
//!     verbose => "Verbose" [required = "false"],
//! });
//!
//! let mut creds = Credentials::default();
//! loadenv::unmarshal(&mut creds, &[".env"])?;
//! # Ok::<(), loadenv::LoadError>(())
//! ```

pub mod constants;
mod loader;
pub mod parser;
pub mod record;

pub use loader::{
    EnvWriter, LoadError, Loader, MemoryEnv, ProcessEnv, lines_from_file, load, load_with,
    read_vars, unmarshal,
};
pub use parser::{ParseError, VarMap, parse_lines, parse_str};
pub use record::{Field, IntSlot, Record, Slot, UintSlot};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
