use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spins on stderr while the pipeline drains the input. Cleared before the
/// summary prints so it never mixes with the report.
pub fn start_processing() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.set_message("Classifying records...");
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}
