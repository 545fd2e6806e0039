// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! User-facing notice queue with TTL + dedupe.
//!
//! Filter failures end up here: the backend message is shown verbatim, and a
//! rejected session (401) is escalated with [`NoticeKind::SessionInvalid`] so
//! the host can send the user back to sign in.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational note.
    Info,
    /// Warning that may need attention.
    Warn,
    /// Error requiring user awareness.
    Error,
    /// The backend rejected the session; the host should redirect.
    SessionInvalid,
}

/// Identifier for a notice entry.
pub type NoticeId = u64;

/// One queued notice.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Stable identifier.
    pub id: NoticeId,
    /// Severity.
    pub kind: NoticeKind,
    /// Message shown to the user.
    pub message: String,
    /// Time-to-live duration.
    pub ttl: Duration,
    /// Creation (or last refresh) time.
    pub created: Instant,
}

impl Notice {
    /// True until `ttl` has elapsed.
    pub fn is_visible(&self, now: Instant) -> bool {
        now.duration_since(self.created) < self.ttl
    }
}

/// Bounded notice queue. Identical notices inside the dedupe window refresh
/// the existing entry instead of stacking.
pub struct NoticeService {
    queue: VecDeque<Notice>,
    max: usize,
    dedupe_window: Duration,
    next_id: NoticeId,
}

impl NoticeService {
    /// Default lifetime of a notice.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

    /// Create a new queue with a maximum length.
    pub fn new(max: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            max,
            dedupe_window: Duration::from_millis(500),
            next_id: 1,
        }
    }

    /// Push a notice, deduping identical recent entries.
    pub fn push<M>(&mut self, kind: NoticeKind, message: M, ttl: Duration, now: Instant) -> NoticeId
    where
        M: Into<String>,
    {
        let message = message.into();

        if let Some(existing) = self.queue.iter_mut().find(|n| {
            n.kind == kind
                && n.message == message
                && now.duration_since(n.created) <= self.dedupe_window
        }) {
            existing.created = now;
            existing.ttl = ttl;
            return existing.id;
        }

        let id = self.next_id;
        self.next_id += 1;
        if self.queue.len() == self.max {
            self.queue.pop_front();
        }
        self.queue.push_back(Notice {
            id,
            kind,
            message,
            ttl,
            created: now,
        });
        id
    }

    /// Drop expired notices.
    pub fn retain_visible(&mut self, now: Instant) {
        self.queue.retain(|n| n.is_visible(now));
    }

    /// Notices still within their TTL, oldest first.
    pub fn visible(&self, now: Instant) -> Vec<&Notice> {
        self.queue.iter().filter(|n| n.is_visible(now)).collect()
    }

    /// Take every queued notice, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }

    /// True when a session-invalid notice is queued.
    pub fn session_invalid(&self) -> bool {
        self.queue.iter().any(|n| n.kind == NoticeKind::SessionInvalid)
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_notices_are_deduped() {
        let mut svc = NoticeService::new(4);
        let t0 = Instant::now();
        let a = svc.push(NoticeKind::Error, "edge label not found", NoticeService::DEFAULT_TTL, t0);
        let b = svc.push(
            NoticeKind::Error,
            "edge label not found",
            NoticeService::DEFAULT_TTL,
            t0 + Duration::from_millis(100),
        );
        assert_eq!(a, b);
        assert_eq!(svc.visible(t0 + Duration::from_millis(100)).len(), 1);
    }

    #[test]
    fn queue_is_bounded_and_expires() {
        let mut svc = NoticeService::new(2);
        let t0 = Instant::now();
        let ttl = Duration::from_secs(1);
        svc.push(NoticeKind::Info, "a", ttl, t0);
        svc.push(NoticeKind::Info, "b", ttl, t0);
        svc.push(NoticeKind::Info, "c", ttl, t0);
        let messages: Vec<_> = svc.visible(t0).iter().map(|n| n.message.clone()).collect();
        assert_eq!(messages, vec!["b", "c"]);

        svc.retain_visible(t0 + Duration::from_secs(2));
        assert!(svc.visible(t0 + Duration::from_secs(2)).is_empty());
    }

    #[test]
    fn session_invalid_is_reported_until_drained() {
        let mut svc = NoticeService::default();
        svc.push(NoticeKind::SessionInvalid, "unauthorized", NoticeService::DEFAULT_TTL, Instant::now());
        assert!(svc.session_invalid());
        assert_eq!(svc.drain().len(), 1);
        assert!(!svc.session_invalid());
    }
}
