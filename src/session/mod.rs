//! Session module bridging a front end to background download runs.
//!
//! # Overview
//!
//! - `input` - [`RunInputs`], validation of the URL and directory fields
//! - `controller` - [`SessionController`], the single-slot run launcher
//!   owning cancellation

pub mod controller;
pub mod input;

pub use controller::{SessionController, SessionState};
pub use input::RunInputs;
