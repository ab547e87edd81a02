use std::fmt::Write;

use interning_core::{AppViewModel, CompanyRowView, CLOSED_SENTINEL};
use interning_engine::LevelsTable;
use owo_colors::{OwoColorize, Style};

const TITLE: &str = "interning.dev (OFFSEASON FORK EDITION)";
const DATA_SOURCE: &str = "https://github.com/SimplifyJobs/Summer2024-Internships";

/// Styles for one colour scheme. `colored == false` renders plain text.
struct Palette {
    colored: bool,
    heading: Style,
    accent: Style,
    muted: Style,
    selected: Style,
}

impl Palette {
    fn new(dark_mode: bool, colored: bool) -> Self {
        if dark_mode {
            Self {
                colored,
                heading: Style::new().bold().bright_white(),
                accent: Style::new().bright_cyan(),
                muted: Style::new().bright_black(),
                selected: Style::new().bold().bright_green(),
            }
        } else {
            Self {
                colored,
                heading: Style::new().bold().black(),
                accent: Style::new().blue(),
                muted: Style::new().dimmed(),
                selected: Style::new().bold().green(),
            }
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Renders the whole dashboard as text.
pub fn render(view: &AppViewModel, levels: &LevelsTable, colored: bool) -> String {
    let palette = Palette::new(view.dark_mode, colored);
    let mut out = String::new();

    let _ = writeln!(out, "{}", palette.paint(TITLE, palette.heading));
    let _ = writeln!(
        out,
        "{}",
        palette.paint(&format!("Data from {DATA_SOURCE}"), palette.muted)
    );
    let _ = writeln!(
        out,
        "order {}  mode {}",
        if view.flipped { "⬆️" } else { "⬇️" },
        if view.dark_mode { "☀️" } else { "🌙" }
    );

    if let Some(summary) = view.summary {
        let _ = writeln!(
            out,
            "You have applied to {} companies! (showing {})",
            palette.paint(
                &format!("{}/{}", summary.applied, summary.total),
                palette.heading
            ),
            palette.paint(&summary.shown.to_string(), palette.heading)
        );
    }

    let query = if view.query.is_empty() {
        palette.paint("Filter by text...", palette.muted)
    } else {
        format!("{:?}", view.query)
    };
    let _ = writeln!(
        out,
        "{} | Closed? {} | Applied? {} | Sponsorship? {}",
        query,
        view.closed.label(),
        view.applied.label(),
        view.sponsorship.label()
    );
    out.push('\n');

    if view.loading {
        out.push_str("Loading...\n");
    } else if view.rows.is_empty() {
        out.push_str("No companies found\n");
    } else {
        for row in &view.rows {
            render_row(&mut out, row, levels, &palette);
        }
    }
    out
}

fn render_row(out: &mut String, row: &CompanyRowView, levels: &LevelsTable, palette: &Palette) {
    let marker = if row.applied { "[x]" } else { "[ ]" };
    let name_style = if row.applied {
        palette.selected
    } else {
        palette.heading
    };
    let _ = write!(
        out,
        "{} {}  Status: {}",
        marker,
        palette.paint(&row.name, name_style),
        row.status.label()
    );
    if let Some(link) = levels.link(&row.name) {
        let _ = write!(out, "  levels.fyi: {}", palette.paint(link, palette.accent));
    }
    out.push('\n');

    if !row.locations.is_empty() {
        let _ = writeln!(
            out,
            "    {}",
            palette.paint(&row.locations.join(", "), palette.muted)
        );
    }
    for internship in &row.internships {
        match &internship.link {
            Some(link) => {
                let _ = writeln!(
                    out,
                    "    - {} <{}>",
                    internship.description,
                    palette.paint(link, palette.accent)
                );
            }
            None => {
                let _ = writeln!(out, "    - {} {}", CLOSED_SENTINEL, internship.description);
            }
        }
    }
}
