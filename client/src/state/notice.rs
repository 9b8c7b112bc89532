//! Unified notice channel for transaction outcomes.
//!
//! DESIGN
//! ======
//! Every panel reports failures (and a few successes) here instead of keeping
//! its own error field, so the page renders one banner stack with consistent
//! dismissal. Notices are tagged with the panel that raised them; a panel
//! clears its own notices when the user starts a new operation.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use chain::ChainError;

/// Panel that raised a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeSource {
    Wallet,
    TokenPanel,
    ContractPanel,
    NftGallery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub source: NoticeSource,
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

/// Visible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, source: NoticeSource, level: NoticeLevel, title: &str, message: &str) -> u64 {
        self.next_id += 1;
        self.items.push(Notice {
            id: self.next_id,
            source,
            level,
            title: title.to_owned(),
            message: message.to_owned(),
        });
        self.next_id
    }

    pub fn error(&mut self, source: NoticeSource, title: &str, message: &str) -> u64 {
        self.push(source, NoticeLevel::Error, title, message)
    }

    pub fn success(&mut self, source: NoticeSource, title: &str, message: &str) -> u64 {
        self.push(source, NoticeLevel::Success, title, message)
    }

    /// Report a failed chain operation. Wallet rejections get a plain message
    /// instead of the raw error.
    pub fn chain_failure(&mut self, source: NoticeSource, summary: &str, error: &ChainError) -> u64 {
        let detail = failure_detail(error);
        self.error(source, "Transaction Failed", &format!("{summary} {detail}"))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn clear_source(&mut self, source: NoticeSource) {
        self.items.retain(|n| n.source != source);
    }

    #[must_use]
    pub fn has_errors(&self, source: NoticeSource) -> bool {
        self.items.iter().any(|n| n.source == source && n.level == NoticeLevel::Error)
    }
}

/// Human explanation appended to a failure summary.
#[must_use]
pub fn failure_detail(error: &ChainError) -> String {
    match error {
        e if e.is_user_rejection() => "The request was rejected in your wallet.".to_owned(),
        ChainError::ReceiptTimeout { .. } => {
            "No confirmation was seen in time; check your wallet for its status.".to_owned()
        }
        ChainError::Reverted(_) => "The transaction reverted.".to_owned(),
        other => format!("({other})"),
    }
}
