use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::args::{BodyMode, ErrorPolicy, SnipeArgs};
use crate::config::RunConfig;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{Dispatcher, Exchange, HttpClient, Variant, expand, parse_with};

use super::inputs::{load_template, load_wordlist};
use super::summary::RunSummary;

/// Everything the driver needs for one run.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub config: RunConfig,
    pub template_path: PathBuf,
    pub wordlist_path: Option<PathBuf>,
}

impl RunPlan {
    /// Resolves the run settings from merged arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequest`] when no template path is set.
    pub fn from_args(args: &SnipeArgs) -> AppResult<Self> {
        let Some(template_path) = args.request.as_ref() else {
            error!("Missing request template (set -r/--request or provide in config).");
            return Err(AppError::validation(ValidationError::MissingRequest));
        };
        Ok(Self {
            config: RunConfig::from_args(args),
            template_path: PathBuf::from(template_path),
            wordlist_path: args.wordlist.as_ref().map(PathBuf::from),
        })
    }
}

/// Loads the inputs named by `plan` and replays every generated request.
///
/// # Errors
///
/// Returns an error when an input cannot be read, the template is malformed,
/// the marker is empty, the client cannot be built, or a request fails under
/// [`ErrorPolicy::Abort`].
pub async fn run<W: Write>(plan: &RunPlan, out: &mut W) -> AppResult<RunSummary> {
    let template = load_template(&plan.template_path)?;
    let payloads = plan
        .wordlist_path
        .as_deref()
        .map(load_wordlist)
        .transpose()?;
    let dispatcher = Dispatcher::from_config(&plan.config)?;
    run_with(
        &dispatcher,
        &plan.config,
        &template,
        payloads.as_deref(),
        out,
    )
    .await
}

/// Expands `template` and dispatches each variant in order, one at a time.
///
/// Without payloads the template is sent once as captured.
pub(crate) async fn run_with<C, W>(
    dispatcher: &Dispatcher<C>,
    config: &RunConfig,
    template: &str,
    payloads: Option<&[String]>,
    out: &mut W,
) -> AppResult<RunSummary>
where
    C: HttpClient,
    W: Write,
{
    if let Err(err) = parse_with(template, config.body_mode) {
        let marker = config.fuzz_marker.as_str();
        if payloads.is_none() || marker.is_empty() || !err.line().contains(marker) {
            error!("Malformed request template: {}", err);
            return Err(err.into());
        }
        debug!(
            "Template line '{}' only parses once the marker is filled; checking each variant instead.",
            err.line()
        );
    }

    let mut summary = RunSummary::default();
    match payloads {
        None => {
            info!("No wordlist given; replaying the template once.");
            let variant = Variant::replay(template);
            process_variant(dispatcher, config, &variant, &mut summary, out).await?;
        }
        Some(payloads) => {
            let expansion = expand(template, &config.fuzz_marker, payloads, config.fill_mode)?;
            info!(
                "Generated {} requests from {} payloads and {} marker occurrences ({:?} fill).",
                expansion.len(),
                payloads.len(),
                expansion.occurrence_count(),
                config.fill_mode
            );
            for variant in expansion {
                process_variant(dispatcher, config, &variant, &mut summary, out).await?;
            }
        }
    }

    summary.log();
    Ok(summary)
}

async fn process_variant<C, W>(
    dispatcher: &Dispatcher<C>,
    config: &RunConfig,
    variant: &Variant,
    summary: &mut RunSummary,
    out: &mut W,
) -> AppResult<()>
where
    C: HttpClient,
    W: Write,
{
    debug!("Sending {}", variant);
    match dispatch_variant(dispatcher, config.body_mode, variant).await {
        Ok(exchange) => {
            summary.record_response(exchange.response.status);
            writeln!(out, "{}", variant)?;
            writeln!(out, "{}", exchange.transcript)?;
            writeln!(out)?;
            out.flush()?;
            Ok(())
        }
        Err(err) => {
            summary.record_failure();
            error!("{} failed: {}", variant, err);
            writeln!(out, "{}", variant)?;
            writeln!(out, "Error: {}", err)?;
            writeln!(out)?;
            out.flush()?;
            match config.error_policy {
                ErrorPolicy::Continue => Ok(()),
                ErrorPolicy::Abort => Err(AppError::Aborted {
                    label: variant.to_string(),
                    source: Box::new(err),
                }),
            }
        }
    }
}

async fn dispatch_variant<C: HttpClient>(
    dispatcher: &Dispatcher<C>,
    body_mode: BodyMode,
    variant: &Variant,
) -> AppResult<Exchange> {
    let request = parse_with(&variant.raw, body_mode)?;
    Ok(dispatcher.send(&request).await?)
}
