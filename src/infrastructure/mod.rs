//! Host filesystem access from inside the Zellij sandbox.

pub mod paths;

pub use paths::{data_dir, expand_tilde, strip_host_prefix};
