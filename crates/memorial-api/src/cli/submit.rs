//! `memorial submit` -- fill the memory form and send it.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use console::style;
use dialoguer::{Input, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};

use memorial_core::file_select::{SUGGESTED_ACCEPT, is_suggested};
use memorial_core::form::MemorialForm;
use memorial_core::tags::TagKey;
use memorial_infra::storage::load_selected_file;
use memorial_types::error::SubmitError;

use super::SubmitArgs;
use crate::state::AppState;

/// Build the form from arguments (and prompts), then submit it.
pub async fn submit(state: &AppState, args: SubmitArgs, json: bool, quiet: bool) -> Result<()> {
    let interactive = !args.no_input && !json && console::user_attended();
    let mut form = MemorialForm::new();

    form.set_name(required(args.name, "Your name", interactive)?);
    form.set_email(required(args.email, "Email address", interactive)?);

    let memory = match (args.memory, args.memory_file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(
            tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read memory from {}", path.display()))?,
        ),
        (None, None) => None,
    };
    form.set_memory(required(memory, "Your memory", interactive)?);
    form.set_notify_when_ready(!args.no_notify);

    for tag in &args.tags {
        if !form.add_tag(tag) && !json && !quiet {
            println!(
                "  {} Skipping tag '{}' (blank or duplicate)",
                style("i").blue().bold(),
                tag
            );
        }
    }
    if interactive && args.tags.is_empty() {
        prompt_tags(&mut form)?;
    }

    if let Some(path) = &args.file {
        let file = load_selected_file(path)
            .await
            .with_context(|| format!("Failed to read attachment: {}", path.display()))?;
        if !is_suggested(&file.file_name) && !json && !quiet {
            println!(
                "  {} '{}' is not one of the suggested kinds ({SUGGESTED_ACCEPT}); uploading anyway",
                style("!").yellow().bold(),
                file.file_name
            );
        }
        form.select_files([file]);
    }

    let workflow = state.workflow()?;

    let spinner = (!json && !quiet).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Submitting...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = form.submit(&workflow).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if json {
        let output = serde_json::json!({
            "status": form.status(),
            "file_path": form.last_stored_reference(),
            "tags": form.tags().tags(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    match result {
        Ok(()) => {
            if !json && !quiet {
                println!();
                println!("  {} {}", style("✓").green().bold(), style("Thank You").bold());
                println!("  {}", form.success_message(&state.config.honoree));
                println!();
            }
            Ok(())
        }
        Err(SubmitError::MissingField(field)) => {
            bail!("'{field}' is required (pass --{field} or run without --no-input)")
        }
        Err(err) => Err(err).context("Failed to submit. Please try again."),
    }
}

/// Use `value` if present and non-blank; otherwise prompt when interactive.
///
/// A blank value is passed through when not interactive; the form's
/// required-field check rejects it before anything is sent.
fn required(value: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ if interactive => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("This field is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()?),
        other => Ok(other.unwrap_or_default()),
    }
}

/// Prompt for tags one per line; an empty line finishes.
fn prompt_tags(form: &mut MemorialForm) -> Result<()> {
    println!(
        "  {}",
        style("Tag this record with dates, names, and locations (empty line to finish)").dim()
    );
    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Tag")
            .allow_empty(true)
            .interact_text()?;
        if line.trim().is_empty() {
            return Ok(());
        }
        form.set_pending_tag(line);
        form.tag_key(TagKey::Enter);
        if !form.tags().pending().is_empty() {
            println!("  {} already added", style("i").blue().bold());
            form.set_pending_tag("");
        }
    }
}
