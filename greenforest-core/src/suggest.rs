//! Event description suggestions.
//!
//! A `DescriptionSource` (the CLI ships a Gemini client) turns an event's
//! title, location and style notes into promotional copy. Callers always get
//! a string back: without a source they get demo copy, and a failing or slow
//! source is replaced by a message the user can read.

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{error, warn};

use crate::error::StudioResult;

pub const GENERATION_FAILED: &str = "生成文案时发生错误，请检查网络或API Key。";
pub const EMPTY_RESPONSE: &str = "无法生成文案，请重试。";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionRequest {
    pub title: String,
    pub location: String,
    pub style_notes: String,
}

impl DescriptionRequest {
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        style_notes: impl Into<String>,
    ) -> Self {
        DescriptionRequest {
            title: title.into(),
            location: location.into(),
            style_notes: style_notes.into(),
        }
    }

    /// Prompt sent to text-generation services.
    pub fn prompt(&self) -> String {
        format!(
            "你是一个专业摄影活动的文案策划。请根据以下信息，写一段吸引人的摄影活动招募文案。\n\
             风格要清新、自然，符合“绿森林”这个社团的名字。\n\
             \n\
             活动主题：{}\n\
             活动地点：{}\n\
             活动风格/备注：{}\n\
             \n\
             要求：\n\
             1. 字数在100-150字之间。\n\
             2. 包含适当的emoji表情。\n\
             3. 语气热情且专业。",
            self.title, self.location, self.style_notes
        )
    }
}

/// Copy used when no text-generation service is configured.
pub fn fallback_description(request: &DescriptionRequest) -> String {
    format!(
        "[演示模式] 这是一个关于{}的精彩活动，地点在{}。期待您的参与！",
        request.title, request.location
    )
}

/// Something that can write an event description.
pub trait DescriptionSource {
    fn describe(
        &self,
        request: &DescriptionRequest,
    ) -> impl Future<Output = StudioResult<String>> + Send;
}

/// Ask `source` for a description, giving up after `limit`.
///
/// A call that times out is dropped; its result is never applied and the
/// call is not retried.
pub async fn suggest_description<S: DescriptionSource>(
    source: Option<&S>,
    request: &DescriptionRequest,
    limit: Duration,
) -> String {
    let Some(source) = source else {
        warn!("no description service configured, returning demo copy");
        return fallback_description(request);
    };

    match timeout(limit, source.describe(request)).await {
        Ok(Ok(text)) if text.trim().is_empty() => EMPTY_RESPONSE.to_string(),
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            error!(error = %e, "description generation failed");
            GENERATION_FAILED.to_string()
        }
        Err(_) => {
            warn!(timeout_secs = limit.as_secs(), "description generation timed out");
            GENERATION_FAILED.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudioError;

    enum Canned {
        Text(&'static str),
        Blank,
        Fail,
        Stall,
    }

    impl DescriptionSource for Canned {
        async fn describe(&self, request: &DescriptionRequest) -> StudioResult<String> {
            match self {
                Canned::Text(text) => Ok(format!("{} @ {}: {}", request.title, request.location, text)),
                Canned::Blank => Ok("  \n".into()),
                Canned::Fail => Err(StudioError::Suggestion("HTTP 401".into())),
                Canned::Stall => {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Ok("too late".into())
                }
            }
        }
    }

    fn request() -> DescriptionRequest {
        DescriptionRequest::new("夏日森林人像", "奥林匹克森林公园", "日系，小清新")
    }

    #[tokio::test]
    async fn no_source_returns_demo_copy() {
        let text = suggest_description::<Canned>(None, &request(), Duration::from_secs(1)).await;
        assert_eq!(
            text,
            "[演示模式] 这是一个关于夏日森林人像的精彩活动，地点在奥林匹克森林公园。期待您的参与！"
        );
    }

    #[tokio::test]
    async fn source_text_is_returned() {
        let source = Canned::Text("来拍照吧");
        let text = suggest_description(Some(&source), &request(), Duration::from_secs(1)).await;
        assert_eq!(text, "夏日森林人像 @ 奥林匹克森林公园: 来拍照吧");
    }

    #[tokio::test]
    async fn blank_text_asks_to_retry() {
        let text = suggest_description(Some(&Canned::Blank), &request(), Duration::from_secs(1)).await;
        assert_eq!(text, EMPTY_RESPONSE);
    }

    #[tokio::test]
    async fn failure_becomes_user_message() {
        let text = suggest_description(Some(&Canned::Fail), &request(), Duration::from_secs(1)).await;
        assert_eq!(text, GENERATION_FAILED);
    }

    #[tokio::test]
    async fn stalled_source_times_out() {
        let text =
            suggest_description(Some(&Canned::Stall), &request(), Duration::from_millis(20)).await;
        assert_eq!(text, GENERATION_FAILED);
    }

    #[test]
    fn prompt_mentions_all_fields() {
        let prompt = request().prompt();
        assert!(prompt.contains("活动主题：夏日森林人像"));
        assert!(prompt.contains("活动地点：奥林匹克森林公园"));
        assert!(prompt.contains("活动风格/备注：日系，小清新"));
    }
}
