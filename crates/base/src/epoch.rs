use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Session counter shared by everything one session starts.
///
/// Work takes an `EpochToken` when it begins. Ending the session through any
/// of its tokens bumps the counter, after which every earlier token reports
/// stale and the work holding it turns into a no-op.
#[derive(Clone, Debug, Default)]
pub struct Epoch {
    value: Arc<AtomicU64>,
}

/// The session an `Epoch` was in when the token was taken.
#[derive(Clone, Debug)]
pub struct EpochToken {
    epoch: Epoch,
    value: u64,
}

impl Epoch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }

    pub fn token(&self) -> EpochToken {
        EpochToken {
            epoch: self.clone(),
            value: self.current(),
        }
    }
}

impl EpochToken {
    /// False once the session this token belongs to has ended.
    pub fn is_live(&self) -> bool {
        self.epoch.current() == self.value
    }

    /// End the session this token belongs to. Does nothing if it already
    /// ended; returns whether this call ended it.
    pub fn end(&self) -> bool {
        self.epoch
            .value
            .compare_exchange(self.value, self.value + 1, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
