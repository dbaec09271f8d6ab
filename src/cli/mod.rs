//! Command-line front end for the `adjg` binary.

pub mod commands;
