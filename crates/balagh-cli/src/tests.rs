use std::collections::BTreeMap;

use balagh_core::config::BackendConfig;
use balagh_core::display::StatusBadge;
use balagh_core::feed::{list_view, map_markers, report_detail, ListView};
use balagh_core::models::{Coordinates, ADDRESS_PLACEHOLDER};
use balagh_core::{Category, Notice, Report, ReportId, ReportStatus};
use clap::Parser;
use pretty_assertions::assert_eq;

use crate::cli::{Cli, Commands, CompletionShell};
use crate::commands::categories::format_category_lines;
use crate::commands::common::{
    format_card_lines, format_marker_lines, preview, profile_backend_config, redact_key,
    resolve_report,
};
use crate::commands::completions::render_completions;
use crate::commands::config::{format_backend_lines, merge_profile, ProfileValues};
use crate::commands::show::format_detail_lines;
use crate::commands::submit::{compose_draft, report_outcome, SubmitArgs};
use crate::config_profiles::{CliProfile, CliProfilesConfig};
use crate::error::CliError;

fn report(id: &str, title: &str) -> Report {
    Report {
        id: Some(ReportId::new(id)),
        title: title.to_string(),
        ..Report::default()
    }
}

fn submit_args(photo: std::path::PathBuf) -> SubmitArgs {
    SubmitArgs {
        title: "Broken streetlight".to_string(),
        photo,
        description: None,
        category: Some(Category::Lighting),
        coordinates: None,
        address: None,
        geocode: false,
    }
}

#[test]
fn resolve_report_prefers_exact_id_over_prefix() {
    let reports = vec![report("12", "Twelve"), report("1", "One")];
    assert_eq!(resolve_report(&reports, "1").unwrap().title, "One");
    assert_eq!(resolve_report(&reports, " 12 ").unwrap().title, "Twelve");
}

#[test]
fn resolve_report_by_unique_prefix() {
    let reports = vec![report("a1b2c3", "First"), report("ff00", "Second")];
    assert_eq!(resolve_report(&reports, "a1").unwrap().title, "First");
}

#[test]
fn resolve_report_rejects_ambiguous_missing_and_empty() {
    let reports = vec![report("a10", "First"), report("a11", "Second")];

    let ambiguous = resolve_report(&reports, "a1").unwrap_err();
    assert!(matches!(ambiguous, CliError::AmbiguousReportId(_)));
    assert_eq!(
        ambiguous.to_string(),
        "ID prefix 'a1' is ambiguous; matches: a10, a11"
    );

    assert!(matches!(
        resolve_report(&reports, "zz"),
        Err(CliError::ReportNotFound(query)) if query == "zz"
    ));
    assert!(matches!(
        resolve_report(&reports, "  "),
        Err(CliError::EmptyReportId)
    ));
}

#[test]
fn card_lines_show_status_label_and_category() {
    let reports = vec![Report {
        category: Some("إنارة".to_string()),
        status: Some(ReportStatus::Pending),
        ..report("7", "Dark street")
    }];
    let ListView::Cards(cards) = list_view(&reports) else {
        panic!("expected cards");
    };

    let lines = format_card_lines(&cards);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("7 "));
    assert!(lines[0].contains(StatusBadge::PENDING.label));
    assert!(lines[0].contains("إنارة"));
    assert!(lines[0].contains("Dark street"));
}

#[test]
fn marker_lines_include_coordinates() {
    let reports = vec![Report {
        latitude: Some(34.68),
        longitude: Some(-1.91),
        ..report("3", "Pothole")
    }];
    let lines = format_marker_lines(&map_markers(&reports));
    assert_eq!(lines, vec!["3           34.68000,   -1.91000  Pothole"]);
}

#[test]
fn detail_lines_list_badges_then_sections() {
    let detail = report_detail(&Report {
        category: Some("مياه".to_string()),
        status: Some(ReportStatus::Resolved),
        address: Some("Oujda".to_string()),
        ..report("9", "Leak")
    });

    assert_eq!(
        format_detail_lines(&detail),
        vec![
            "Leak".to_string(),
            format!("مياه  ·  {}", StatusBadge::RESOLVED.label),
            String::new(),
            "Location:".to_string(),
            "📍 Oujda".to_string(),
        ]
    );
}

#[test]
fn preview_truncates_long_titles() {
    assert_eq!(preview("  short   title ", 40), "short title");
    assert_eq!(preview("abcdefghij", 6), "abc...");
}

#[test]
fn redact_key_hides_all_but_prefix() {
    let redacted = redact_key("eyJhbGciOiJIUzI1NiJ9.secret");
    assert!(redacted.starts_with("eyJh"));
    assert!(!redacted.contains("secret"));
}

#[test]
fn backend_lines_never_print_full_key() {
    let config = BackendConfig::new("https://demo.supabase.co", "anon-key-value").unwrap();
    let lines = format_backend_lines(&config);
    assert!(lines.iter().all(|line| !line.contains("anon-key-value")));
    assert_eq!(lines[0], "supabase_url:      https://demo.supabase.co");
}

#[test]
fn category_lines_mark_default() {
    let lines = format_category_lines();
    assert_eq!(lines.len(), Category::ALL.len());
    assert!(lines[0].ends_with("(default)"));
    assert!(lines[0].contains(Category::Roads.label()));
    assert!(!lines[1].contains("(default)"));
}

#[test]
fn merge_profile_prefers_explicit_then_env_then_stored() {
    let mut profile = CliProfile {
        supabase_url: Some("https://old.supabase.co".to_string()),
        supabase_anon_key: Some("old-key".to_string()),
        reports_table: Some("legacy".to_string()),
        storage_bucket: None,
    };

    merge_profile(
        &mut profile,
        ProfileValues {
            supabase_url: Some("https://new.supabase.co/rest/v1/".to_string()),
            ..ProfileValues::default()
        },
        ProfileValues {
            supabase_url: Some("https://env.supabase.co".to_string()),
            supabase_anon_key: Some("env-key".to_string()),
            reports_table: Some("  ".to_string()),
            storage_bucket: None,
        },
    )
    .unwrap();

    assert_eq!(
        profile,
        CliProfile {
            supabase_url: Some("https://new.supabase.co".to_string()),
            supabase_anon_key: Some("env-key".to_string()),
            reports_table: Some("legacy".to_string()),
            storage_bucket: None,
        }
    );
}

#[test]
fn merge_profile_rejects_non_http_url() {
    let mut profile = CliProfile::default();
    let error = merge_profile(
        &mut profile,
        ProfileValues {
            supabase_url: Some("project.supabase.co".to_string()),
            ..ProfileValues::default()
        },
        ProfileValues::default(),
    )
    .unwrap_err();
    assert!(matches!(error, CliError::Config(message) if message.contains("http")));
}

#[test]
fn missing_profile_is_not_configured() {
    let profiles = CliProfilesConfig::default();
    assert!(matches!(
        profile_backend_config(&profiles, "default"),
        Err(CliError::NotConfigured)
    ));

    let mut partial = CliProfilesConfig {
        version: 1,
        active_profile: None,
        profiles: BTreeMap::new(),
    };
    partial.profile_mut_or_default("default").supabase_url =
        Some("https://demo.supabase.co".to_string());
    assert!(matches!(
        profile_backend_config(&partial, "default"),
        Err(CliError::Core(balagh_core::Error::InvalidInput(_)))
    ));
}

#[test]
fn completions_reference_binary_name() {
    let script = String::from_utf8(render_completions(CompletionShell::Bash)).unwrap();
    assert!(script.contains("balagh"));
    assert!(script.contains("submit"));
}

#[test]
fn submit_parses_negative_coordinates_and_arabic_category() {
    let cli = Cli::try_parse_from([
        "balagh", "submit", "--title", "Pothole", "--photo", "shot.jpg", "--category", "طرق",
        "--lat", "34.68", "--lon", "-1.91",
    ])
    .unwrap();

    let Commands::Submit {
        category, lat, lon, ..
    } = cli.command
    else {
        panic!("expected submit");
    };
    assert_eq!(category, Some(Category::Roads));
    assert_eq!(lat, Some(34.68));
    assert_eq!(lon, Some(-1.91));
}

#[test]
fn submit_requires_both_coordinates() {
    assert!(Cli::try_parse_from([
        "balagh", "submit", "--title", "Pothole", "--photo", "shot.jpg", "--lat", "34.68",
    ])
    .is_err());
    assert!(Cli::try_parse_from([
        "balagh", "submit", "--title", "Pothole", "--photo", "shot.jpg", "--address", "Oujda",
    ])
    .is_err());
}

#[tokio::test]
async fn compose_draft_captures_photo_and_location() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("shot.jpg");
    std::fs::write(&photo, [0xFF, 0xD8, 0xFF]).unwrap();

    let draft = compose_draft(SubmitArgs {
        coordinates: Some(Coordinates::new(34.68, -1.91)),
        address: Some("Boulevard Mohammed V".to_string()),
        ..submit_args(photo.clone())
    })
    .await
    .unwrap();

    assert_eq!(draft.title(), "Broken streetlight");
    assert_eq!(draft.category(), Category::Lighting);
    assert_eq!(draft.photo().map(|shot| shot.path()), Some(photo.as_path()));
    assert_eq!(draft.location(), Some(Coordinates::new(34.68, -1.91)));
    assert_eq!(draft.address(), Some("Boulevard Mohammed V"));
    assert!(!draft.is_locating());
}

#[tokio::test]
async fn compose_draft_without_address_uses_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("shot.jpg");
    std::fs::write(&photo, [0xFF, 0xD8]).unwrap();

    let draft = compose_draft(SubmitArgs {
        coordinates: Some(Coordinates::new(34.68, -1.91)),
        ..submit_args(photo)
    })
    .await
    .unwrap();
    assert_eq!(draft.address(), Some(ADDRESS_PLACEHOLDER));
}

#[tokio::test]
async fn compose_draft_fails_for_missing_photo() {
    let dir = tempfile::tempdir().unwrap();
    let error = compose_draft(submit_args(dir.path().join("absent.jpg")))
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::Capture(message) if message.contains("absent.jpg")));
}

#[test]
fn submit_outcome_follows_composer_notice() {
    assert!(report_outcome(Some(Notice::success("Success", "Report sent to City Hall!"))).is_ok());
    assert!(report_outcome(None).is_ok());

    let error = report_outcome(Some(Notice::error("Bucket not found"))).unwrap_err();
    assert!(matches!(error, CliError::Notice(message) if message == "Bucket not found"));

    let validation = Notice::validation("Please fill the title and take a photo");
    let rejected = report_outcome(Some(validation)).unwrap_err();
    assert_eq!(rejected.to_string(), "Please fill the title and take a photo");
}
