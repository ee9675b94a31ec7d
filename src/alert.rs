//! Transient alerts. One slot holds at most one visible alert; every
//! `show` hands back an epoch token and a scheduled clear only fires if
//! its token is still the current one, so a newer alert is never wiped
//! out by a stale timer.

use std::time::Duration;

pub const ERROR_WINDOW: Duration = Duration::from_secs(3);
pub const SUCCESS_WINDOW: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Alert { kind: AlertKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Alert { kind: AlertKind::Error, message: message.into() }
    }
}

#[derive(Default, Clone, PartialEq, Debug)]
pub struct AlertSlot {
    current: Option<Alert>,
    epoch: u64,
}

impl AlertSlot {
    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    /// Shows `alert` and returns the token its scheduled clear must
    /// present to [`AlertSlot::clear_if`].
    pub fn show(&mut self, alert: Alert) -> u64 {
        self.epoch += 1;
        self.current = Some(alert);
        self.epoch
    }

    /// Clears the slot only when `token` is still current. Returns
    /// whether it cleared.
    pub fn clear_if(&mut self, token: u64) -> bool {
        if self.epoch == token && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Manual close. Bumps the epoch so an outstanding timer for the
    /// dismissed alert becomes a no-op.
    pub fn dismiss(&mut self) {
        self.epoch += 1;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_with_current_token_clears() {
        let mut slot = AlertSlot::default();
        let token = slot.show(Alert::error("erro"));
        assert!(slot.current().is_some());
        assert!(slot.clear_if(token));
        assert!(slot.current().is_none());
    }

    #[test]
    fn stale_token_never_clears_a_newer_alert() {
        let mut slot = AlertSlot::default();
        let first = slot.show(Alert::error("primeiro"));
        let _second = slot.show(Alert::success("segundo"));
        assert!(!slot.clear_if(first));
        assert_eq!(slot.current().unwrap().message, "segundo");
    }

    #[test]
    fn dismiss_invalidates_outstanding_tokens() {
        let mut slot = AlertSlot::default();
        let token = slot.show(Alert::error("erro"));
        slot.dismiss();
        assert!(slot.current().is_none());
        assert!(!slot.clear_if(token));
    }

    #[test]
    fn clearing_twice_is_a_no_op() {
        let mut slot = AlertSlot::default();
        let token = slot.show(Alert::success("ok"));
        assert!(slot.clear_if(token));
        assert!(!slot.clear_if(token));
    }
}
