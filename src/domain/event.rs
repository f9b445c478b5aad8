//! Event Resolver
//!
//! 事件标签 → cue id 的固定映射，不走外部配置

use crate::domain::cue::FALLBACK_CUE;

/// 已知事件标签及其对应的 cue
pub const EVENT_CUE_MAP: &[(&str, &str)] = &[
    // Tool
    ("tool-call", "tool_start"),
    ("tool-result", "tool_complete"),
    ("tool-error", "tool_error"),
    // Conversation
    ("conversation-start", "conversation_start"),
    ("conversation-end", "conversation_end"),
    // User interaction
    ("user-prompt-submit", "user_prompt_submit"),
    ("assistant-response", "assistant_response"),
    // General
    ("notification", FALLBACK_CUE),
    ("error", "system_error"),
];

/// 解析事件标签对应的 cue id
///
/// 全函数：未知标签返回 [`FALLBACK_CUE`]，从不失败
pub fn resolve_cue(event_label: &str) -> &'static str {
    lookup(event_label).unwrap_or(FALLBACK_CUE)
}

/// 标签是否在固定映射中
pub fn is_known_event(event_label: &str) -> bool {
    lookup(event_label).is_some()
}

fn lookup(event_label: &str) -> Option<&'static str> {
    EVENT_CUE_MAP
        .iter()
        .find(|(label, _)| *label == event_label)
        .map(|(_, cue)| *cue)
}
