use eyre::Result;

use crate::error::RequestError;
use crate::{SummaryResult, embed_url};

/// Render a summary as plain text: title, channel, player link, then the summary body
pub fn render_text(result: &SummaryResult) -> String {
    format!(
        "{}\nChannel: {}\n{}\n\n{}",
        result.title,
        result.channel,
        embed_url(&result.video_id),
        result.summary.trim_end()
    )
}

/// Render a summary as pretty-printed JSON
pub fn render_json(result: &SummaryResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render a failed submission for the user, with a hint when resubmitting may help
pub fn render_error(err: &RequestError) -> String {
    if !err.is_retryable() {
        return err.to_string();
    }
    match err {
        RequestError::RateLimited {
            retry_after_seconds, ..
        } if retry_after_seconds.as_f64().is_some_and(|s| s > 0.0) => {
            format!("{err}\nTry again in {retry_after_seconds} seconds.")
        }
        _ => format!("{err}\nTry again later."),
    }
}
