//! Implementation of the `svgplan plan` command.
//!
//! Wires the pieces of a run together:
//! 1. Resolve `strict` and build the action manager
//! 2. Check the event is supported
//! 3. Resolve the config
//! 4. Build the filter chain and select the worklist
//! 5. Read and parse the optimizer configuration
//!
//! Every fallible step reports through the action manager; a hard failure
//! stops the run.

use crate::actions::{ActionManager, ConsoleReporter, Reporter};
use crate::cli::PlanArgs;
use crate::error::{PlanError, Result};
use crate::event::EventContext;
use crate::filters::get_filters;
use crate::git;
use crate::host::{GitHost, HostApi};
use crate::inputs::{
    Config, EnvInputSource, InputSource, LayeredInputSource, MapInputSource, get_is_strict_mode,
};
use crate::svgo_config::parse_raw_svgo_config;
use serde::Serialize;
use serde_json::{Value, json};
use std::path::Path;

/// What a run should do.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub event_name: String,
    pub config: Config,
    /// Paths to optimize, repo-relative.
    pub worklist: Vec<String>,
    /// Parsed optimizer options (`{}` when no configuration file exists).
    pub svgo_options: Value,
    pub dry_run: bool,
}

/// Everything a run reads from the outside world.
pub struct PlanContext<'a> {
    pub inputs: &'a dyn InputSource,
    pub host: &'a dyn HostApi,
    pub event: &'a EventContext,
    pub repo_root: &'a Path,
    /// Every candidate path (normally all tracked files).
    pub candidates: &'a [String],
}

/// Execute the `svgplan plan` command.
pub fn cmd_plan(args: PlanArgs) -> Result<()> {
    let cwd = match args.repo {
        Some(repo) => repo,
        None => std::env::current_dir().map_err(|e| {
            PlanError::UserError(format!("failed to determine current directory: {}", e))
        })?,
    };
    let repo_root = git::get_repo_root(&cwd)?;

    let mut overrides = MapInputSource::new();
    for assignment in &args.inputs {
        overrides
            .insert_assignment(assignment)
            .map_err(PlanError::UserError)?;
    }
    let env = EnvInputSource;
    let inputs = LayeredInputSource::new(&overrides, &env);

    let event = match args.event_name {
        Some(name) => EventContext::load(name, args.event_path.as_deref())?,
        None => EventContext::from_env()?,
    };

    let host = GitHost::new(&repo_root);
    let candidates = git::tracked_files(&repo_root)?;

    let reporter = ConsoleReporter::new();
    let ctx = PlanContext {
        inputs: &inputs,
        host: &host,
        event: &event,
        repo_root: &repo_root,
        candidates: &candidates,
    };

    let Some(plan) = build_plan(&ctx, &reporter) else {
        return Err(PlanError::Aborted);
    };

    if plan.dry_run {
        log::info!("dry run: optimized files will not be written");
    }

    if args.json {
        let out = serde_json::to_string_pretty(&plan)
            .map_err(|e| PlanError::UserError(format!("failed to serialize plan: {}", e)))?;
        println!("{}", out);
    } else {
        for path in &plan.worklist {
            println!("{}", path);
        }
    }

    Ok(())
}

/// Plan a run, reporting every problem through `reporter`.
///
/// Returns `None` as soon as a hard failure is reported.
pub fn build_plan(ctx: &PlanContext<'_>, reporter: &dyn Reporter) -> Option<Plan> {
    let (strict, strict_err) = get_is_strict_mode(ctx.inputs, false).into_parts();
    let actions = ActionManager::new(strict.value, reporter);
    if actions.fail_if(&strict_err, &with_detail("Your strict input is not valid", &strict_err)) {
        return None;
    }

    let event = ctx.event;
    if actions.strict_fail_if(
        !event.is_supported(),
        &format!("Event '{}' is not supported", event.event_name),
    ) {
        return None;
    }

    let (config, config_err) = Config::resolve(ctx.inputs).into_parts();
    if actions.fail_if(
        &config_err,
        &with_detail("Your configuration is not valid", &config_err),
    ) {
        return None;
    }

    let (filters, filters_err) = get_filters(ctx.host, &config, event).into_parts();
    if actions.fail_if(
        &filters_err,
        &with_detail("Could not determine the files to optimize", &filters_err),
    ) {
        return None;
    }
    let worklist = filters.worklist(ctx.candidates);

    let config_path = ctx.repo_root.join(&config.svgo_config_path);
    let svgo_options = match std::fs::read_to_string(&config_path) {
        Ok(raw) => {
            let (options, parse_err) = parse_raw_svgo_config(&raw, config.svgo_version).into_parts();
            if actions.fail_if(
                &parse_err,
                &with_detail("Could not parse the SVGO configuration", &parse_err),
            ) {
                return None;
            }
            options
        }
        Err(e) => {
            log::debug!("reading {}: {}", config_path.display(), e);
            let msg = format!(
                "SVGO configuration file '{}' not found, using defaults",
                config.svgo_config_path
            );
            if actions.strict_fail_if(true, &msg) {
                return None;
            }
            json!({})
        }
    };

    log::info!(
        "{} of {} candidate file(s) selected for optimization",
        worklist.len(),
        ctx.candidates.len()
    );

    Some(Plan {
        event_name: event.event_name.clone(),
        dry_run: config.is_dry_run,
        config,
        worklist,
        svgo_options,
    })
}

fn with_detail(msg: &str, error: &Option<String>) -> String {
    match error {
        Some(detail) => format!("{} ({})", msg, detail),
        None => msg.to_string(),
    }
}
