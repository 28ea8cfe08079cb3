//! Fixed-width event table for terminal output.

use washlab_core::Event;

use super::narrative::format_size;

const HEADER: [&str; 6] = ["Time", "Actor", "Action", "Price", "Size", "Note"];

/// Every event, one row each, in generation order.
pub fn render_event_table(events: &[Event]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:>4}  {:<15} {:<10} {:<21} {:>5}  {}\n",
        HEADER[0], HEADER[1], HEADER[2], HEADER[3], HEADER[4], HEADER[5]
    ));
    out.push_str(&"-".repeat(90));
    out.push('\n');

    for e in events {
        let size = e.size.map(format_size).unwrap_or_else(|| "-".into());
        out.push_str(&format!(
            "{:>4}  {:<15} {:<10} {:<21} {:>5}  {}\n",
            e.time,
            e.actor.as_str(),
            e.action.as_str(),
            e.price.to_string(),
            size,
            e.note
        ));
    }

    out
}
