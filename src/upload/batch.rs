//! Sequential batch driver.

use crate::api::{CsrfToken, WikiSession};
use crate::error::{Error, Result};
use crate::fs::BatchPlan;
use crate::output::print_progress;
use crate::upload::params::UploadParams;
use crate::upload::retry::upload_file;
use crate::upload::state::BatchState;

/// Upload every pending file of `plan` in order.
///
/// The CSRF token returned by each upload is used for the next one. The
/// first failure stops the batch; files uploaded before it stay uploaded.
pub async fn run_batch<S: WikiSession + ?Sized>(
    session: &S,
    params: &UploadParams,
    plan: &BatchPlan,
    csrf: CsrfToken,
) -> Result<BatchState> {
    let mut state = BatchState::default();
    let mut csrf = csrf;
    let total = plan.total();

    tracing::debug!(
        "Uploading {} of {} files",
        plan.remaining(),
        total
    );

    for (position, file) in plan.pending() {
        print_progress(position, total, &file.name);

        csrf = upload_file(session, params, file, csrf, &mut state)
            .await
            .map_err(|e| Error::BatchAborted {
                position,
                file: file.name.clone(),
                source: Box::new(e),
            })?;
    }

    Ok(state)
}
