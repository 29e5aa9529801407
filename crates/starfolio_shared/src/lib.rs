//! # Starfolio Shared
//!
//! Content model and configuration used by both the UI engine and the
//! browser entry point.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `web-sys`
//! - `wasm-bindgen`
//! - Anything that only links on `wasm32`
//!
//! If you need browser types, put them in `starfolio`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod content;
pub mod error;

pub use config::{GreetingConfig, SiteConfig, StarfieldConfig};
pub use constants::{RESUME_PATH, STAR_COUNT, WAVE_AMPLITUDE_DEG, WAVE_DURATION_MS};
pub use content::{Icon, LinkAction, Profile, Project, Section, SectionContent, SocialLink};
pub use error::{StarfolioError, StarfolioResult};
