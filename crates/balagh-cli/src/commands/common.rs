use balagh_core::config::BackendConfig;
use balagh_core::feed::{FeedState, FeedView, MapMarker, ReportCard, ReportFeed};
use balagh_core::store::SupabaseClient;
use balagh_core::Report;

use crate::config_profiles::CliProfilesConfig;
use crate::error::CliError;

/// Backend settings from the environment, falling back to the selected
/// profile.
pub fn resolve_backend_config(global_profile: Option<&str>) -> Result<BackendConfig, CliError> {
    if let Some(config) = BackendConfig::from_env()? {
        tracing::debug!("Using backend configuration from environment");
        return Ok(config);
    }

    let profiles = CliProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = profiles.resolve_profile_name(global_profile);
    profile_backend_config(&profiles, &profile_name)
}

pub fn profile_backend_config(
    profiles: &CliProfilesConfig,
    profile_name: &str,
) -> Result<BackendConfig, CliError> {
    let Some(profile) = profiles.profile(profile_name) else {
        return Err(CliError::NotConfigured);
    };
    tracing::debug!(profile = profile_name, "Using backend configuration from profile");
    profile.backend_config()?.ok_or(CliError::NotConfigured)
}

pub fn open_backend(global_profile: Option<&str>) -> Result<SupabaseClient, CliError> {
    Ok(SupabaseClient::new(resolve_backend_config(global_profile)?)?)
}

/// Fetch the collection the way a freshly mounted screen would.
pub async fn load_reports(
    client: &SupabaseClient,
    view: FeedView,
) -> Result<Vec<Report>, CliError> {
    let (state, notice) = ReportFeed::new(client)
        .load(FeedState::mounting(view))
        .await;
    if let Some(notice) = notice {
        return Err(CliError::Notice(notice.message));
    }
    Ok(state.reports().to_vec())
}

pub fn normalize_report_identifier(value: &str) -> Result<String, CliError> {
    let value = value.trim();
    if value.is_empty() {
        Err(CliError::EmptyReportId)
    } else {
        Ok(value.to_string())
    }
}

/// Find a report by exact id, or by a unique id prefix.
pub fn resolve_report<'a>(reports: &'a [Report], query: &str) -> Result<&'a Report, CliError> {
    let query = normalize_report_identifier(query)?;

    let id_of = |report: &Report| report.id.as_ref().map(|id| id.as_str().to_string());

    if let Some(report) = reports
        .iter()
        .find(|report| id_of(report).as_deref() == Some(query.as_str()))
    {
        return Ok(report);
    }

    let matches = reports
        .iter()
        .filter(|report| id_of(report).is_some_and(|id| id.starts_with(&query)))
        .collect::<Vec<_>>();

    match matches.as_slice() {
        [] => Err(CliError::ReportNotFound(query)),
        [report] => Ok(*report),
        _ => {
            let options = matches
                .iter()
                .take(3)
                .filter_map(|report| report.id.as_ref().map(ToString::to_string))
                .collect::<Vec<_>>()
                .join(", ");
            Err(CliError::AmbiguousReportId(format!(
                "ID prefix '{query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn format_card_lines(cards: &[ReportCard]) -> Vec<String> {
    cards
        .iter()
        .map(|card| {
            let key = card.key.chars().take(8).collect::<String>();
            let title = preview(&card.title, 40);
            let category = card.category.as_deref().unwrap_or("-");
            let timestamp = card.timestamp.as_deref().unwrap_or("");
            format!(
                "{key:<8}  {:<14}  {category:<8}  {title:<40}  {timestamp}",
                card.status.label
            )
        })
        .collect()
}

pub fn format_marker_lines(markers: &[MapMarker]) -> Vec<String> {
    markers
        .iter()
        .map(|marker| {
            format!(
                "{:<8}  {:>10.5}, {:>10.5}  {}",
                marker.key.chars().take(8).collect::<String>(),
                marker.coordinates.latitude,
                marker.coordinates.longitude,
                preview(&marker.title, 40)
            )
        })
        .collect()
}

/// First line of `text`, whitespace collapsed, cut to `max_chars`.
pub fn preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

pub fn redact_key(key: &str) -> String {
    let visible = key.chars().take(4).collect::<String>();
    format!("{visible}…[redacted]")
}
