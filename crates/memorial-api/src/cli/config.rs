//! `memorial config` -- show the resolved configuration.

use anyhow::Result;
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use console::style;

use memorial_infra::filesystem::config_path;
use memorial_infra::supabase::BackendSettings;

use crate::state::AppState;

/// Show every config value, with the API key masked, and whether the
/// backend settings are usable.
pub async fn show(state: &AppState, json: bool) -> Result<()> {
    let config = &state.config;
    let path = config_path(&state.data_dir);
    let backend = BackendSettings::from_config(config);
    let masked_key = config.supabase_key.as_deref().map(mask_secret);

    if json {
        let output = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "config_file": path.display().to_string(),
            "config_file_exists": path.exists(),
            "supabase_url": config.supabase_url,
            "supabase_key": masked_key,
            "bucket": config.bucket,
            "table": config.table,
            "request_timeout_secs": config.request_timeout_secs,
            "environment": config.environment,
            "honoree": config.honoree,
            "backend_ready": backend.is_ok(),
            "backend_error": backend.as_ref().err().map(ToString::to_string),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Setting", "Value"]);
    let unset = || style("(not set)").dim().to_string();
    table.add_row(vec![
        "supabase_url".to_string(),
        config.supabase_url.clone().unwrap_or_else(unset),
    ]);
    table.add_row(vec![
        "supabase_key".to_string(),
        masked_key.unwrap_or_else(unset),
    ]);
    table.add_row(vec!["bucket".to_string(), config.bucket.clone()]);
    table.add_row(vec!["table".to_string(), config.table.clone()]);
    table.add_row(vec![
        "request_timeout_secs".to_string(),
        config.request_timeout_secs.to_string(),
    ]);
    table.add_row(vec!["environment".to_string(), config.environment.clone()]);
    table.add_row(vec!["honoree".to_string(), config.honoree.clone()]);

    println!();
    println!(
        "  {} memorial v{}",
        style("◷").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  Data dir:    {}", style(state.data_dir.display()).cyan());
    let file_note = if path.exists() { "" } else { " (missing, using defaults)" };
    println!(
        "  Config file: {}{}",
        style(path.display()).cyan(),
        style(file_note).dim()
    );
    println!();
    println!("{table}");
    println!();
    match backend {
        Ok(settings) => println!(
            "  {} Backend ready at {}",
            style("✓").green().bold(),
            style(settings.base_url).cyan()
        ),
        Err(e) => {
            println!("  {} Backend not ready: {e}", style("✗").red().bold());
            println!(
                "  {}",
                style("Set MEMORIAL_SUPABASE_URL and MEMORIAL_SUPABASE_KEY, or edit the config file.")
                    .dim()
            );
        }
    }
    println!();
    Ok(())
}

/// Show the first four characters of a secret, masking the rest.
fn mask_secret(value: &str) -> String {
    let visible: String = value.chars().take(4).collect();
    if value.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}
