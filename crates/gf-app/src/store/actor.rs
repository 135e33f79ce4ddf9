//! Check-in store actor.
//!
//! Single source of truth for the guest's check-in record. All reads and
//! writes are serialized through one mpsc queue, so the persisted document
//! has exactly one writer and merge updates never race each other.
//!
//! Lazy expiry happens at read time: a completed record whose checkout date
//! has passed resolves to a fresh expired record, no background job involved.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::warn;

use gf_core::checkin::{CheckInRecord, CheckInUpdate};
use gf_core::ports::{CheckInStatePort, ClockPort};

const COMMAND_QUEUE_DEPTH: usize = 32;

enum Command {
    Get {
        reply: oneshot::Sender<CheckInRecord>,
    },
    Update {
        update: CheckInUpdate,
        reply: oneshot::Sender<Result<CheckInRecord>>,
    },
    Reset {
        reply: oneshot::Sender<Result<()>>,
    },
}

/// Cloneable handle to the store actor.
#[derive(Clone)]
pub struct CheckInStore {
    tx: mpsc::Sender<Command>,
    clock: Arc<dyn ClockPort>,
}

/// Spawn the actor task; the handle is the only way to touch the record.
pub fn spawn(
    repo: Arc<dyn CheckInStatePort>,
    clock: Arc<dyn ClockPort>,
) -> (CheckInStore, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let task = tokio::spawn(run(repo, Arc::clone(&clock), rx));
    (CheckInStore { tx, clock }, task)
}

async fn run(
    repo: Arc<dyn CheckInStatePort>,
    clock: Arc<dyn ClockPort>,
    mut rx: mpsc::Receiver<Command>,
) {
    // Absent or unreadable persisted state starts the journey from idle.
    let mut record = match repo.get().await {
        Ok(Some(record)) => record,
        Ok(None) => CheckInRecord::default(),
        Err(err) => {
            warn!(error = %err, "could not load check-in record; starting idle");
            CheckInRecord::default()
        }
    };

    while let Some(command) = rx.recv().await {
        match command {
            Command::Get { reply } => {
                let resolved = record.clone().resolved(clock.today());
                if resolved != record {
                    record = resolved.clone();
                }
                let _ = reply.send(resolved);
            }

            Command::Update { update, reply } => {
                let mut next = record.clone();
                next.apply(update);
                match repo.set(&next).await {
                    Ok(()) => {
                        record = next.clone();
                        let _ = reply.send(Ok(next));
                    }
                    Err(err) => {
                        // In-memory record stays at the last persisted value.
                        let _ = reply.send(Err(err));
                    }
                }
            }

            Command::Reset { reply } => {
                let result = repo.reset().await;
                if result.is_ok() {
                    record = CheckInRecord::default();
                }
                let _ = reply.send(result);
            }
        }
    }
}

impl CheckInStore {
    /// Current record with lazy expiry applied.
    pub async fn get(&self) -> Result<CheckInRecord> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Get { reply }).await?;
        rx.await.map_err(|_| anyhow!("check-in store is gone"))
    }

    /// Shallow-merge `update` and persist the merged record.
    pub async fn update(&self, update: CheckInUpdate) -> Result<CheckInRecord> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Update { update, reply }).await?;
        rx.await.map_err(|_| anyhow!("check-in store is gone"))?
    }

    /// Back to idle; the persisted document is deleted, not blanked.
    pub async fn reset(&self) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Reset { reply }).await?;
        rx.await.map_err(|_| anyhow!("check-in store is gone"))?
    }

    /// Signed calendar days until check-in, `None` without a stored date.
    pub async fn days_until_check_in(&self) -> Result<Option<i64>> {
        let record = self.get().await?;
        Ok(record.days_until_check_in(self.clock.now_local()))
    }

    /// Whether the check-in action is currently available.
    pub async fn is_check_in_available(&self) -> Result<bool> {
        let record = self.get().await?;
        Ok(record.is_check_in_available(self.clock.now_local()))
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.tx
            .send(command)
            .await
            .map_err(|_| anyhow!("check-in store is gone"))
    }
}
