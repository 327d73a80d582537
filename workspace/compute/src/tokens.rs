//! Monthly token volume estimator.
//!
//! Helps turn "conversations per day" into the token budget the AI-project
//! calculator consumes.

/// Tokens per question/answer exchange (input + context + output), a
/// reasonable average for RAG-style conversations.
pub const TOKENS_PER_EXCHANGE: u64 = 1_000;

const DAYS_PER_MONTH: u64 = 30;

/// Estimates tokens consumed per month.
pub fn estimate_monthly_tokens(conversations_per_day: u32, messages_per_conversation: u32) -> u64 {
    u64::from(conversations_per_day)
        * u64::from(messages_per_conversation)
        * DAYS_PER_MONTH
        * TOKENS_PER_EXCHANGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_monthly_tokens() {
        // 50 conversations × 10 exchanges × 30 days × 1k tokens
        assert_eq!(estimate_monthly_tokens(50, 10), 15_000_000);
    }

    #[test]
    fn test_zero_usage_is_zero_tokens() {
        assert_eq!(estimate_monthly_tokens(0, 10), 0);
        assert_eq!(estimate_monthly_tokens(50, 0), 0);
    }
}
