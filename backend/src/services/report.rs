//! AI report service
//!
//! Builds the analysis prompt from the whole data snapshot and asks Gemini
//! for a Markdown report. Every failure is turned into a readable message;
//! callers always receive text.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use shared::AppData;

use crate::external::GeminiClient;

/// Returned when no API key is configured
pub const MISSING_API_KEY_MESSAGE: &str = "Lỗi: Chưa cấu hình API Key.";

/// Returned when the model answers without any text
pub const EMPTY_REPORT_MESSAGE: &str = "Không thể tạo báo cáo vào lúc này.";

/// Returned when the request to the model fails
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Đã xảy ra lỗi khi kết nối với AI. Vui lòng thử lại sau.";

/// Instruction used when the operator leaves the question empty
pub const DEFAULT_QUERY: &str = "Hãy phân tích hiệu suất của các vùng trồng, xu hướng thu mua, và đưa ra các đề xuất cải thiện năng suất và lợi nhuận. Đánh giá chất lượng nông sản dựa trên lịch sử thu mua.";

/// Build the analysis prompt for a snapshot and an optional operator question
pub fn build_prompt(data: &AppData, query: Option<&str>) -> Result<String, serde_json::Error> {
    let data_json = serde_json::to_string_pretty(data)?;
    let request = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(DEFAULT_QUERY);

    Ok(format!(
        "Bạn là một chuyên gia nông nghiệp AI hỗ trợ công ty \"Hoa Cương\".\n\n\
         Dữ liệu hiện tại của hệ thống (JSON):\n{}\n\n\
         Yêu cầu:\n{}\n\n\
         Hãy trả lời bằng định dạng Markdown đẹp mắt, sử dụng các gạch đầu dòng và tiêu đề rõ ràng. Ngôn ngữ: Tiếng Việt.",
        data_json, request
    ))
}

/// Single-slot tracker for the outstanding report request
#[derive(Debug, Clone, Default)]
pub struct ReportSlot {
    busy: Arc<AtomicBool>,
}

/// Held while a report is being generated; frees the slot on drop
#[derive(Debug)]
pub struct ReportSlotGuard {
    busy: Arc<AtomicBool>,
}

impl ReportSlot {
    /// Claim the slot, or `None` when a report is already in flight
    pub fn try_acquire(&self) -> Option<ReportSlotGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ReportSlotGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for ReportSlotGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Report generation service
#[derive(Debug, Clone)]
pub struct ReportService {
    client: Option<GeminiClient>,
    slot: ReportSlot,
}

impl ReportService {
    pub fn new(client: Option<GeminiClient>) -> Self {
        Self {
            client,
            slot: ReportSlot::default(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn slot(&self) -> &ReportSlot {
        &self.slot
    }

    /// Generate a report. Never fails: errors come back as message text.
    pub async fn generate_report(&self, data: &AppData, query: Option<&str>) -> String {
        let Some(client) = &self.client else {
            tracing::error!("API key is missing; set AGRI__GEMINI__API_KEY or API_KEY");
            return MISSING_API_KEY_MESSAGE.to_string();
        };

        let prompt = match build_prompt(data, query) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::error!("Failed to serialize data for report: {}", e);
                return CONNECTION_ERROR_MESSAGE.to_string();
            }
        };

        tracing::info!(
            model = client.model(),
            prompt_chars = prompt.chars().count(),
            "Requesting AI report"
        );

        match client.generate_content(&prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!("Gemini returned no report text");
                EMPTY_REPORT_MESSAGE.to_string()
            }
            Err(e) => {
                tracing::error!("Gemini API error: {}", e);
                CONNECTION_ERROR_MESSAGE.to_string()
            }
        }
    }
}
