//! # flyer-core - Core Domain Types
//!
//! Foundation crate for Flyer Studio. Provides the closed option sets a user
//! picks from, the shape of generated flyer content, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`TargetAudience`] - Who the flyer addresses
//! - [`Category`] - Content angle/style
//! - [`SocialFormat`] - Output platform and aspect ratio
//! - [`FlyerContent`] - Structured text produced by the content generator
//! - [`FlyerState`] - Current selections plus the last generated flyer
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Config and export failures, wrapping IO and JSON errors
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use flyer_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    AspectRatio, Category, FlyerContent, FlyerState, ParseOptionError, SocialFormat,
    TargetAudience,
};
