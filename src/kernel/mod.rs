//! Headless service layer: backend channel, configuration, platform paths.

pub mod services;
