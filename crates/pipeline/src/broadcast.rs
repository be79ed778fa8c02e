use {
    com::ClassificationVector,
    tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError},
};

// only the latest classification matters; a slow listener skips ahead
const CAPACITY: usize = 1;

/// Fan-out of classification results to any number of listeners.
///
/// Publishing never waits and never fails. Listeners that subscribe later
/// miss everything published before they did.
#[derive(Debug, Clone)]
pub struct ResultBroadcaster {
    sender: broadcast::Sender<ClassificationVector>,
}

/// One listener's view of a `ResultBroadcaster`.
#[derive(Debug)]
pub struct Subscription {
    receiver: broadcast::Receiver<ClassificationVector>,
}

impl ResultBroadcaster {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Send `classification` to the current listeners and return how many
    /// there were.
    pub fn publish(&self, classification: ClassificationVector) -> usize {
        self.sender.send(classification).unwrap_or(0)
    }

    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ResultBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Subscription {
    /// Wait for the next classification. Returns `None` once every
    /// broadcaster handle is gone.
    pub async fn recv(&mut self) -> Option<ClassificationVector> {
        loop {
            match self.receiver.recv().await {
                Ok(classification) => return Some(classification),
                Err(RecvError::Lagged(skipped)) => {
                    log::debug!("listener skipped {} classifications", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// The newest classification published since the last call, if any.
    pub fn try_recv(&mut self) -> Option<ClassificationVector> {
        loop {
            match self.receiver.try_recv() {
                Ok(classification) => return Some(classification),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }
}
