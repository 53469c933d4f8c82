//! Single-file upload with bounded retries.

use tokio::time::sleep;

use crate::api::{CsrfToken, UploadOutcome, WikiSession};
use crate::error::{Error, Result};
use crate::fs::SourceFile;
use crate::output::{print_info, print_warning};
use crate::upload::params::UploadParams;
use crate::upload::state::BatchState;

/// Upload one file and return the CSRF token to use for the next one.
///
/// Two failures are retried, each at most once per file: a rejected token
/// (refetch, then retry) and rate limiting (wait, then retry). A rejected
/// token is checked first. Any other response, or a second occurrence of
/// either failure, ends with [`Error::UploadFailed`] carrying the raw body.
pub async fn upload_file<S: WikiSession + ?Sized>(
    session: &S,
    params: &UploadParams,
    file: &SourceFile,
    csrf: CsrfToken,
    state: &mut BatchState,
) -> Result<CsrfToken> {
    let mut csrf = csrf;
    let mut refetched_csrf = false;
    let mut ratelimit_waited = false;
    let upload_name = file.upload_name();

    loop {
        let response = session
            .upload(&params.request(file, &upload_name, &csrf))
            .await?;

        match response.outcome() {
            UploadOutcome::Success => {
                state.increment_uploaded();
                return Ok(csrf);
            }
            UploadOutcome::BadToken if !refetched_csrf => {
                print_warning("CSRF token rejected, refetching...");
                csrf = session.fetch_csrf_token().await?;
                refetched_csrf = true;
                state.increment_token_refetch();
            }
            UploadOutcome::RateLimited if !ratelimit_waited => {
                print_warning(&format!(
                    "Rate limited, waiting {} seconds...",
                    params.ratelimit_wait.as_secs()
                ));
                sleep(params.ratelimit_wait).await;
                ratelimit_waited = true;
                state.increment_ratelimit_wait();
            }
            _ => {
                return Err(Error::UploadFailed {
                    file: file.name.clone(),
                    body: response.raw,
                });
            }
        }

        print_info(&format!("Reattempting upload of {}...", file.name));
    }
}
