//! Forwarding waitlist sign-ups to the configured webhook

use deskaway_core::WaitlistSubmission;

use crate::paths;

/// Send `submission` to the waitlist webhook without blocking the form.
///
/// Builds without `DESKAWAY_WAITLIST_WEBHOOK` only log the sign-up.
pub fn submit_waitlist(submission: WaitlistSubmission) {
    let Some(url) = paths::waitlist_webhook() else {
        log::info!(
            "waitlist sign-up ({}) recorded locally; no webhook configured",
            submission.source.key()
        );
        return;
    };
    let body = submission.to_webhook_payload().to_string();
    send(url, body);
}

#[cfg(target_arch = "wasm32")]
fn send(url: String, body: String) {
    wasm_bindgen_futures::spawn_local(async move {
        match crate::dom::post_json(&url, &body).await {
            Ok(resp) if resp.ok() => log::debug!("waitlist webhook accepted sign-up"),
            Ok(resp) => log::warn!("waitlist webhook answered {}", resp.status()),
            Err(err) => {
                let message = crate::dom::js_error_message(&err);
                log::warn!("waitlist webhook failed: {message}");
                crate::dom::console_error(&format!("Webhook error: {message}"));
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn send(url: String, body: String) {
    log::debug!("skipping waitlist webhook {url} outside the browser ({} bytes)", body.len());
}
