use balagh_core::config::{
    normalize_supabase_url, BackendConfig, ENV_REPORTS_TABLE, ENV_STORAGE_BUCKET,
    ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL,
};
use balagh_core::util::normalize_text_option;

use crate::cli::ConfigCommands;
use crate::commands::common::{profile_backend_config, redact_key};
use crate::config_profiles::{CliProfile, CliProfilesConfig};
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, global_profile: Option<&str>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init {
            profile,
            supabase_url,
            supabase_anon_key,
            reports_table,
            storage_bucket,
            no_activate,
        } => run_config_init(
            profile.as_deref().or(global_profile),
            ProfileValues {
                supabase_url,
                supabase_anon_key,
                reports_table,
                storage_bucket,
            },
            no_activate,
        ),
        ConfigCommands::Show { profile } => run_config_show(profile.as_deref().or(global_profile)),
    }
}

/// Values passed to `config init`; absent ones fall back to the environment,
/// then to what the profile already holds.
#[derive(Debug, Default)]
pub struct ProfileValues {
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub reports_table: Option<String>,
    pub storage_bucket: Option<String>,
}

impl ProfileValues {
    pub fn from_env() -> Self {
        Self {
            supabase_url: std::env::var(ENV_SUPABASE_URL).ok(),
            supabase_anon_key: std::env::var(ENV_SUPABASE_ANON_KEY).ok(),
            reports_table: std::env::var(ENV_REPORTS_TABLE).ok(),
            storage_bucket: std::env::var(ENV_STORAGE_BUCKET).ok(),
        }
    }
}

pub fn run_config_init(
    profile_name: Option<&str>,
    explicit: ProfileValues,
    no_activate: bool,
) -> Result<(), CliError> {
    let mut config = CliProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(profile_name);

    merge_profile(
        config.profile_mut_or_default(&profile_name),
        explicit,
        ProfileValues::from_env(),
    )?;

    if !no_activate {
        config.active_profile = Some(profile_name.clone());
    }

    let path = config.save().map_err(CliError::Config)?;
    println!(
        "Profile '{}' initialized at {}",
        profile_name,
        path.display()
    );

    let missing = config
        .profile(&profile_name)
        .map(CliProfile::missing_fields)
        .unwrap_or_default();
    if missing.is_empty() {
        println!("Profile '{profile_name}' is ready. Run `balagh list` to check the connection.");
    } else {
        println!("Profile '{}' is missing: {}", profile_name, missing.join(", "));
    }

    Ok(())
}

/// Layer explicit values over environment values over the stored profile.
pub fn merge_profile(
    profile: &mut CliProfile,
    explicit: ProfileValues,
    from_env: ProfileValues,
) -> Result<(), CliError> {
    fn pick(explicit: Option<String>, from_env: Option<String>, stored: &mut Option<String>) {
        if let Some(value) =
            normalize_text_option(explicit).or_else(|| normalize_text_option(from_env))
        {
            *stored = Some(value);
        }
    }

    pick(explicit.supabase_url, from_env.supabase_url, &mut profile.supabase_url);
    pick(
        explicit.supabase_anon_key,
        from_env.supabase_anon_key,
        &mut profile.supabase_anon_key,
    );
    pick(explicit.reports_table, from_env.reports_table, &mut profile.reports_table);
    pick(explicit.storage_bucket, from_env.storage_bucket, &mut profile.storage_bucket);

    if let Some(url) = &profile.supabase_url {
        let normalized = normalize_supabase_url(url)
            .map_err(|error| CliError::Config(format!("supabase_url: {}", error.detail())))?;
        profile.supabase_url = Some(normalized);
    }
    Ok(())
}

pub fn run_config_show(profile_name: Option<&str>) -> Result<(), CliError> {
    if let Some(config) = BackendConfig::from_env()? {
        println!("Source: environment");
        for line in format_backend_lines(&config) {
            println!("{line}");
        }
        return Ok(());
    }

    let profiles = CliProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = profiles.resolve_profile_name(profile_name);
    let config = profile_backend_config(&profiles, &profile_name)?;
    println!("Source: profile '{profile_name}'");
    for line in format_backend_lines(&config) {
        println!("{line}");
    }
    Ok(())
}

pub fn format_backend_lines(config: &BackendConfig) -> Vec<String> {
    vec![
        format!("supabase_url:      {}", config.supabase_url),
        format!("supabase_anon_key: {}", redact_key(&config.supabase_anon_key)),
        format!("reports_table:     {}", config.reports_table),
        format!("storage_bucket:    {}", config.storage_bucket),
    ]
}
