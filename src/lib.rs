//! Command-line inspection of IP addresses.
//!
//! This package is the front end over [`netaddr_core`]: it parses addresses
//! given as text, reports their family and classification, and sorts them in
//! the address total order. The binary is a thin wrapper around [`cli::run`].

pub mod cli;
mod logging;
pub mod report;
