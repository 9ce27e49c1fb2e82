//! go-getter: collect external Go imports into a manifest and replay it with `go get`
//!
//! `--update` scans a directory of Go sources and writes every hostname-qualified
//! import to the manifest. `--install` reads the manifest back and fetches each
//! entry in order.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod install;
pub mod manifest;
