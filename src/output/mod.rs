use colored::Colorize;

use crate::browser::BrowserView;
use crate::pagination::PageToken;
use crate::record::Record;

const PREVIEW_CHARS: usize = 160;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", cut.trim_end())
}

pub fn render_header(total_count: usize) -> String {
    format!(
        "{} :: {} job posting{} available\n",
        "jobboard".bold().cyan(),
        total_count.to_string().bold(),
        plural(total_count)
    )
}

pub fn render_card(record: &Record) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "[{}] {}  {}\n",
        record.id,
        record.title.bold(),
        record.employment.cyan()
    ));
    out.push_str(&format!("    {}\n", record.employer.blue()));
    let description = preview(&record.description);
    if !description.is_empty() {
        out.push_str(&format!("    {}\n", description.dimmed()));
    }
    out.push_str(&format!(
        "    {} :: {}\n",
        format_opt_value(&record.location, "-"),
        record.salary.green()
    ));
    out
}

fn format_opt_value<'a>(v: &'a str, default: &'a str) -> &'a str {
    if v.trim().is_empty() {
        default
    } else {
        v
    }
}

pub fn render_pagination(view: &BrowserView<'_>) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.push(if view.has_prev {
        "< Prev".blue().to_string()
    } else {
        "< Prev".dimmed().to_string()
    });
    for token in view.pages.iter() {
        match token {
            PageToken::Page(n) if *n == view.current_page => {
                parts.push(format!("[{n}]").bold().magenta().to_string());
            }
            other => parts.push(other.to_string()),
        }
    }
    parts.push(if view.has_next {
        "Next >".blue().to_string()
    } else {
        "Next >".dimmed().to_string()
    });
    parts.join("  ")
}

pub fn render_detail(record: &Record) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", record.title.bold()));
    out.push_str(&format!("{}\n\n", record.employer.blue()));
    out.push_str(&format!(":: {:<10}: {}\n", "Location", record.location));
    out.push_str(&format!(":: {:<10}: {}\n", "Type", record.employment));
    out.push_str(&format!(":: {:<10}: {}\n", "Salary", record.salary));
    out.push_str(&format!(":: {:<10}: {}\n", "AI used", record.ai_used));
    out.push_str(&format!("\n{}\n{}\n", "Description".bold(), record.description));
    if !record.requirements.is_empty() {
        out.push_str(&format!("\n{}\n{}\n", "Requirements".bold(), record.requirements));
    }
    if !record.benefits.is_empty() {
        out.push_str(&format!("\n{}\n{}\n", "Benefits".bold(), record.benefits));
    }
    out
}

pub fn render_facets(view: &BrowserView<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Locations".bold()));
    for location in view.locations.iter() {
        out.push_str(&format!("  {location}\n"));
    }
    out.push_str(&format!("{}\n", "Employment types".bold()));
    for employment in view.employment_types.iter() {
        out.push_str(&format!("  {employment}\n"));
    }
    out
}

pub fn render_text(view: &BrowserView<'_>) -> String {
    if view.loading {
        return "Loading job postings...\n".to_string();
    }

    let mut out = render_header(view.total_count);
    if let Some(summary) = view.criteria.summary() {
        out.push_str(&format!(":: {:<10}: {}\n", "Filters", summary));
    }
    out.push('\n');

    if view.matched_count == 0 {
        out.push_str(&format!("{}\n", "No jobs found".bold()));
        out.push_str("Try adjusting your search or filters\n");
    } else {
        let mut line = format!(
            "Showing {}-{} of {} job{}",
            view.first_index,
            view.last_index,
            view.matched_count,
            plural(view.matched_count)
        );
        if view.total_pages > 1 {
            line.push_str(&format!(
                "    Page {} of {}",
                view.current_page, view.total_pages
            ));
        }
        out.push_str(&line);
        out.push_str("\n\n");
        for record in view.visible.iter() {
            out.push_str(&render_card(record));
            out.push('\n');
        }
        if view.total_pages > 1 {
            out.push_str(&render_pagination(view));
            out.push('\n');
        }
    }

    if let Some(selected) = view.selected {
        out.push('\n');
        out.push_str(&render_detail(selected));
    }
    out
}

pub fn render_json(view: &BrowserView<'_>) -> Vec<u8> {
    serde_json::to_vec_pretty(view).unwrap_or_else(|_| b"{}\n".to_vec())
}

pub fn render(view: &BrowserView<'_>, format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Text => render_text(view).into_bytes(),
        OutputFormat::Json => render_json(view),
    }
}
