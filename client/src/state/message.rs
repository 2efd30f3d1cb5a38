//! Transient banner shown after actions.
//!
//! One banner at a time. Each `show` bumps a sequence number; the expiry
//! timer carries the sequence it was started for, so a timer never clears a
//! newer message that replaced the one it belonged to.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    /// CSS class for the banner element.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "message-success",
            Self::Error => "message-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub tone: Tone,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageState {
    pub current: Option<Banner>,
    pub seq: u64,
}

impl MessageState {
    /// Replace the banner; returns the sequence to pass to [`Self::expire`].
    pub fn show(&mut self, text: String, tone: Tone) -> u64 {
        self.seq = self.seq.wrapping_add(1);
        self.current = Some(Banner { text, tone });
        self.seq
    }

    /// Clear the banner if it is still the one shown under `seq`.
    pub fn expire(&mut self, seq: u64) -> bool {
        if seq != self.seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}
