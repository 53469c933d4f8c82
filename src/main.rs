//! mw-bulk-upload - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use dialoguer::Password;
use tracing_subscriber::{fmt, EnvFilter};

use mw_bulk_upload::{
    api::WikiApi,
    cli::{parse_error_exit_code, Args},
    config::{parse_endpoint, validate_config, Config},
    error::{exit_codes, Error, Result},
    fs::BatchPlan,
    output::{
        print_batch_stats, print_error, print_info, print_run_summary, print_success,
        print_warning,
    },
    upload::{run_batch, UploadParams},
};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse before anything else so a usage error never touches the network
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_error_exit_code(&e) as u8);
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            if let Error::BatchAborted { position, .. } = &e {
                print_info(&format!(
                    "Files before position {} were uploaded; rerun with offset {} to resume",
                    position, position
                ));
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(args: Args) -> Result<()> {
    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration and merge CLI arguments over it
    let mut config = Config::load_or_default(&args.config)?;
    args.merge_into_config(&mut config);

    validate_config(&config)?;
    let endpoint = parse_endpoint(&config.job.api_endpoint)?;

    // The listing is taken once and not refreshed during the run
    let plan = BatchPlan::from_folder(&config.job.image_folder, config.job.image_offset)?;

    // Building the client does no network I/O
    let api = WikiApi::new(endpoint, &config.client.user_agent)?;

    print_run_summary(
        api.endpoint().as_str(),
        &config.job.username,
        &config.job.image_folder.display().to_string(),
        plan.total(),
        plan.remaining(),
        plan.skipped_dirs(),
    );

    if plan.remaining() == 0 {
        print_warning(&format!(
            "Offset {} is past the last of {} files, nothing to upload",
            config.job.image_offset,
            plan.total()
        ));
        return Ok(());
    }

    let password = Password::new()
        .with_prompt("Bot password")
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))?;

    print_info("Getting login token...");
    let login_token = api.fetch_login_token().await?;

    print_info("Logging in...");
    api.login(&login_token, &config.job.username, &password).await?;
    print_success(&format!("Logged in as {}", config.job.username));

    print_info("Getting CSRF token...");
    let csrf_token = api.fetch_csrf_token().await?;

    print_info("Uploading files...");
    let params = UploadParams::from_config(&config);
    let state = run_batch(&api, &params, &plan, csrf_token).await?;

    print_batch_stats(&state);
    print_success("All files uploaded");

    Ok(())
}
