//! Input watcher
//!
//! Turns password-field changes into "evaluate" or "hide" decisions and
//! stamps every request with a ticket. Only the completion of the current
//! ticket may change the display; everything else is stale.

use meter_core::Password;
use std::fmt;

/// Sequence number of an issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[inline]
    #[must_use]
    pub fn seq(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Request the watcher wants sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentRequest {
    pub ticket: RequestTicket,
    pub password: Password,
}

/// Outcome of one field change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchDecision {
    /// Field emptied: hide results, no request
    Hide,
    /// Field non-empty: show results and evaluate
    Evaluate(AssessmentRequest),
}

/// Why a completion was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Field was emptied after the request was issued
    Cleared,
    /// A newer request was issued
    Superseded { latest: RequestTicket },
}

/// Watches the password field
#[derive(Debug, Default)]
pub struct InputWatcher {
    issued: u64,
    current: Option<RequestTicket>,
}

impl InputWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// React to a new field value
    ///
    /// Emptying the field drops the current ticket, so every request still in
    /// flight becomes stale.
    pub fn observe(&mut self, value: &str) -> WatchDecision {
        if value.is_empty() {
            self.current = None;
            return WatchDecision::Hide;
        }

        self.issued += 1;
        let ticket = RequestTicket(self.issued);
        self.current = Some(ticket);

        WatchDecision::Evaluate(AssessmentRequest {
            ticket,
            password: Password::new(value),
        })
    }

    /// Check whether a completion for `ticket` may be applied
    pub fn accept(&self, ticket: RequestTicket) -> Result<(), DiscardReason> {
        match self.current {
            None => Err(DiscardReason::Cleared),
            Some(latest) if latest == ticket => Ok(()),
            Some(latest) => Err(DiscardReason::Superseded { latest }),
        }
    }

    /// Ticket whose completion is awaited, if any
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<RequestTicket> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ticket_of(decision: WatchDecision) -> RequestTicket {
        match decision {
            WatchDecision::Evaluate(request) => request.ticket,
            WatchDecision::Hide => panic!("expected a request"),
        }
    }

    #[test]
    fn empty_value_hides_without_request() {
        let mut watcher = InputWatcher::new();
        assert_eq!(watcher.observe(""), WatchDecision::Hide);
        assert_eq!(watcher.current(), None);
    }

    #[test]
    fn every_keystroke_issues_a_request() {
        let mut watcher = InputWatcher::new();
        let first = ticket_of(watcher.observe("a"));
        let second = ticket_of(watcher.observe("ab"));
        let third = ticket_of(watcher.observe("ab"));

        assert!(first < second && second < third);
        assert_eq!(watcher.current(), Some(third));
    }

    #[test]
    fn request_carries_value() {
        let mut watcher = InputWatcher::new();
        match watcher.observe("hunter2") {
            WatchDecision::Evaluate(request) => {
                assert_eq!(request.password.expose(), "hunter2");
            }
            WatchDecision::Hide => panic!("expected a request"),
        }
    }

    #[test]
    fn only_latest_ticket_is_accepted() {
        let mut watcher = InputWatcher::new();
        let old = ticket_of(watcher.observe("a"));
        let new = ticket_of(watcher.observe("ab"));

        assert_eq!(watcher.accept(new), Ok(()));
        assert_eq!(
            watcher.accept(old),
            Err(DiscardReason::Superseded { latest: new })
        );
    }

    #[test]
    fn clearing_makes_in_flight_stale() {
        let mut watcher = InputWatcher::new();
        let in_flight = ticket_of(watcher.observe("a"));
        watcher.observe("");

        assert_eq!(watcher.accept(in_flight), Err(DiscardReason::Cleared));
    }

    #[test]
    fn retyping_after_clear_does_not_revive_old_ticket() {
        let mut watcher = InputWatcher::new();
        let before = ticket_of(watcher.observe("a"));
        watcher.observe("");
        let after = ticket_of(watcher.observe("a"));

        assert_ne!(before, after);
        assert!(watcher.accept(before).is_err());
        assert!(watcher.accept(after).is_ok());
    }
}
