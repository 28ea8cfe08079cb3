//! Panel 5 (Help): keyboard shortcuts and glossary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-5", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "?", "Jump to this panel");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1: Parameters");
    key(&mut lines, "j / k", "Select slider");
    key(&mut lines, "h / l", "Decrease / increase by one step");
    key(&mut lines, "H / L", "Decrease / increase by five steps");
    key(&mut lines, "d", "Reset selected slider to its default");
    key(&mut lines, "r", "Reset every slider");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 3: Events");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "PgDn / PgUp", "Move ten rows");
    key(&mut lines, "g / G", "Jump to first / last event");
    lines.push(Line::from(""));

    section(&mut lines, "Glossary");
    key(&mut lines, "Wash trade", "Algo buys from itself to print a higher last price");
    key(&mut lines, "Momentum buyer", "Chases the printed price, pays fair + 2");
    key(&mut lines, "Sell threshold", "Fair x 1.20, where the algo dumps on the buyer");
    key(&mut lines, "Unrealized loss", "Threshold minus fair, per contract");

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
