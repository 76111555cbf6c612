use balagh_core::feed::{report_detail, FeedView, ReportDetail};

use crate::commands::common::{load_reports, open_backend, resolve_report};
use crate::error::CliError;

pub async fn run_show(
    query: &str,
    as_json: bool,
    global_profile: Option<&str>,
) -> Result<(), CliError> {
    let client = open_backend(global_profile)?;
    let reports = load_reports(&client, FeedView::List).await?;
    let detail = report_detail(resolve_report(&reports, query)?);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        for line in format_detail_lines(&detail) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn format_detail_lines(detail: &ReportDetail) -> Vec<String> {
    let mut lines = vec![detail.title.clone()];

    let mut badges = Vec::new();
    if let Some(category) = &detail.category {
        badges.push(category.clone());
    }
    badges.push(detail.status.label.to_string());
    if let Some(date) = &detail.date {
        badges.push(date.clone());
    }
    lines.push(badges.join("  ·  "));

    if let Some(image_url) = &detail.image_url {
        lines.push(image_url.clone());
    }
    for section in &detail.sections {
        lines.push(String::new());
        lines.push(format!("{}:", section.label));
        lines.push(section.text.clone());
    }
    lines
}
