//! Ambient services shared by bridge binaries.

pub mod logging;
