//! Progress module containing run events and progress bar display.
//!
//! # Overview
//!
//! - `event` - [`ProgressEvent`] and the [`ProgressCallback`] receiving them
//! - `style` - Progress bar styling options and templates
//! - `display` - Progress bar coordination during a run
//!
//! # Examples
//!
//! ```rust
//! use trawl::progress::{progress_callback, ProgressEvent};
//!
//! let on_progress = progress_callback(|event: &ProgressEvent| println!("{event}"));
//! on_progress(&ProgressEvent::Starting);
//! ```

pub(crate) mod display;
pub(crate) mod event;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use event::{progress_callback, silent, ProgressCallback, ProgressEvent};
pub use style::{ProgressBarOpts, StyleOptions};
