use folio_verify::{ErrorReport, VerifyError, VerifyOptions, VerifyReport, run_verification};

use crate::bootstrap;
use crate::cli::{GlobalFlags, OutputFormat, VerifyArgs};
use crate::output::render;

/// Handle `folio verify`. Exits 1 when any check failed or the build output is missing.
pub async fn handle(args: &VerifyArgs, flags: &GlobalFlags) -> anyhow::Result<i32> {
    let resolved = bootstrap::load_config(flags, &args.site)?;
    let client = bootstrap::seo_client(&resolved.config)?;

    let options = VerifyOptions {
        site: resolved.site,
        dist: resolved.config.paths.dist.clone(),
        verify: resolved.config.verify.clone(),
    };

    let (rendered, code) = outcome(run_verification(&client, &options).await, flags.format)?;
    println!("{rendered}");
    Ok(code)
}

/// Stdout document and exit code for a finished or aborted run.
///
/// An aborted run always prints the one-line `{"error":"<code>"}` form.
fn outcome(
    result: Result<VerifyReport, VerifyError>,
    format: OutputFormat,
) -> anyhow::Result<(String, i32)> {
    match result {
        Ok(report) => Ok((render(&report, format)?, i32::from(report.failed))),
        Err(error) => {
            tracing::error!(%error, "verification aborted");
            let report = ErrorReport { error: error.code() };
            Ok((render(&report, OutputFormat::Raw)?, 1))
        }
    }
}
