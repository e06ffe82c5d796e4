use std::time::Duration;

use colored::*;
use geosift_common::filter::TargetFilter;
use geosift_common::tally::Tally;

use crate::terminal::format::group_digits;

pub const TOTAL_WIDTH: usize = 64;

/// Prints the final run summary: totals and matches always, failure
/// counters only when non-zero.
pub fn report(tally: &Tally, filter: &TargetFilter, elapsed: Duration) {
    header("Classification Summary");

    let mut details: Vec<(String, ColoredString)> = Vec::new();
    details.push(("Records".to_string(), group_digits(tally.total).bold()));

    if let Some(country) = filter.country() {
        details.push((
            format!("IPs from {country}"),
            group_digits(tally.country_matched).green(),
        ));
    }
    details.push((
        format!("IPs from {}", filter.subdivision()),
        group_digits(tally.matched).green().bold(),
    ));

    if tally.parse_failed > 0 {
        details.push((
            "Unparseable IPs".to_string(),
            group_digits(tally.parse_failed).yellow(),
        ));
    }
    if tally.lookup_failed > 0 {
        details.push((
            "Lookup errors".to_string(),
            group_digits(tally.lookup_failed).yellow(),
        ));
    }
    if tally.no_subdivision > 0 {
        details.push((
            "No subdivision found".to_string(),
            group_digits(tally.no_subdivision).yellow(),
        ));
    }

    aligned_lines(details);

    fat_separator();
    let records: ColoredString = format!("{} records", group_digits(tally.total)).bold().green();
    let secs: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();
    centerln(&format!("Classified {records} in {secs}"));
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

fn aligned_lines(key_value_pairs: Vec<(String, ColoredString)>) {
    let key_width: usize = key_value_pairs
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    for (key, value) in key_value_pairs {
        let dots: String = ".".repeat((key_width + 1).saturating_sub(key.chars().count()));
        println!(
            "{} {}{}{} {}",
            ">".bright_black(),
            key,
            dots.bright_black(),
            ":".bright_black(),
            value
        );
    }
}

fn fat_separator() {
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}

fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    println!("{}{}", space, msg);
}
