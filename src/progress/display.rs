//! Terminal progress bars for a download run.
//!
//! The main bar counts files over the whole listing and starts at the run's
//! offset, so a run resumed at file 40 of 100 begins at 39/100. Each transfer
//! gets a child bar counting bytes.
//!
//! # Examples
//!
//! ```rust
//! use trawl::progress::{ProgressDisplay, StyleOptions};
//!
//! let display = ProgressDisplay::new(StyleOptions::default(), 3, 1);
//! display.start_file("b.zip");
//!
//! let file_progress = display.create_child_progress(1024);
//! file_progress.inc(1024);
//! display.finish_child(file_progress);
//! display.increment_main();
//! display.finish();
//! ```

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Progress display manager that coordinates the run bar and file bars.
pub struct ProgressDisplay {
    /// Coordinates the main and child bars.
    multi: MultiProgress,
    /// Files processed over the whole listing.
    main: ProgressBar,
    /// Style options for progress bars.
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display manager.
    ///
    /// # Arguments
    /// * `style_options` - Style configuration for progress bars
    /// * `total_files` - Number of records in the listing
    /// * `offset` - Number of records skipped by the start index
    pub fn new(style_options: StyleOptions, total_files: usize, offset: usize) -> Self {
        let multi = match style_options.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };

        let main = multi.add(
            style_options
                .main()
                .clone()
                .to_progress_bar(total_files as u64)
                .with_position(offset as u64),
        );
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Show the name of the file being transferred on the main bar.
    pub fn start_file(&self, name: &str) {
        self.main.set_message(name.to_string());
    }

    /// Create a child progress bar for one transfer of `size` bytes.
    pub fn create_child_progress(&self, size: u64) -> ProgressBar {
        self.multi
            .add(self.style_options.child().clone().to_progress_bar(size))
    }

    /// Increment the main progress bar by one.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Current position of the main bar.
    pub fn position(&self) -> u64 {
        self.main.position()
    }

    /// Finish the main bar, clearing or keeping it based on configuration.
    pub fn finish(self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }

    /// Abandon the main bar where it stands, used when a run is canceled.
    pub fn abandon(self) {
        self.main.abandon_with_message("canceled");
    }

    /// Finish a child progress bar based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }
}
