use indicatif::{ProgressBar, ProgressStyle};

/// A progress bar that advances as simulated users complete.
///
/// Hidden when `no_progress` is set, so unit threads can report to it
/// unconditionally.
pub(crate) fn start_progress(users: usize, no_progress: bool) -> ProgressBar {
    if no_progress {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(users as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} users [{elapsed_precise}]",
        )
        .expect("Failed to set progress style")
        .progress_chars("#>-"),
    );
    pb
}
