//! Store enumeration and `pass` command plumbing for `passage`.
//!
//! The core crate owns everything that touches the world outside the
//! terminal: walking the secret store on disk, and shelling out to the
//! `pass` command line tool for reveal, OTP, and git synchronization.

pub mod store;

pub use store::{PasswordStore, SecretStore, default_store_dir, run_shell_command};
