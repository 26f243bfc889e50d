use std::fmt::{Debug, Display};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};

use crate::audit::{AuditEntry, AuditSink};
use crate::persistence::{PersistenceError, SnapshotWriter};
use crate::store::{Store, StoreError};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with construction, events and actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Debug;
    type Action: Send + Debug;
    type ActionResult: Send + Debug;
    type Event: Send + Sync + Debug;
    type Error: std::error::Error
        + Send
        + Sync
        + From<FrameworkError>
        + From<StoreError>
        + From<PersistenceError>
        + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Validate the payload and construct the full entity.
    ///
    /// Any one-time normalization belongs here; it is never re-run.
    fn from_create(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    /// Event describing a freshly created entity.
    fn created_event(&self) -> Self::Event;

    /// Check an action's own arguments before the target record is looked up.
    fn validate_action(_action: &Self::Action) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a domain-specific mutation.
    ///
    /// The actor calls this on a working copy, so an `Err` leaves the stored
    /// record untouched.
    fn handle_action(
        &mut self,
        action: Self::Action,
    ) -> Result<(Self::ActionResult, Self::Event), Self::Error>;
}

/// Failures in the request/response plumbing itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        id: T::Id,
        params: T::CreateParams,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns a [`Store`] and serializes every operation against it.
///
/// After each successful mutation the full snapshot is handed to the
/// [`SnapshotWriter`] and then one entry goes to the [`AuditSink`].
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Store<T>,
    snapshots: Arc<dyn SnapshotWriter<T>>,
    audit: Arc<dyn AuditSink<T::Event>>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        store: Store<T>,
        snapshots: Arc<dyn SnapshotWriter<T>>,
        audit: Arc<dyn AuditSink<T::Event>>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            snapshots,
            audit,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!(records = self.store.len(), "Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { id, params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(id, params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.handle_get(&id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
            }
        }
        info!("Actor stopped");
    }

    #[instrument(fields(id = %id), skip(self, params))]
    fn handle_create(&mut self, id: T::Id, params: T::CreateParams) -> Result<T, T::Error> {
        debug!(?params, "Processing create request");
        let item = match T::from_create(id, params) {
            Ok(item) => item,
            Err(e) => {
                debug!(error = %e, "Create rejected");
                return Err(e);
            }
        };
        if let Err(e) = self.store.insert(item.clone()) {
            debug!(error = %e, "Create rejected");
            return Err(e.into());
        }
        let event = item.created_event();
        self.commit(event)?;
        info!("Record created");
        Ok(item)
    }

    #[instrument(fields(id = %id), skip(self))]
    fn handle_get(&self, id: &T::Id) -> Result<T, T::Error> {
        debug!("Processing get request");
        Ok(self.store.get(id)?.clone())
    }

    #[instrument(fields(id = %id), skip(self))]
    fn handle_action(&mut self, id: T::Id, action: T::Action) -> Result<T::ActionResult, T::Error> {
        debug!("Processing action request");
        if let Err(e) = T::validate_action(&action) {
            debug!(error = %e, "Action rejected");
            return Err(e);
        }
        let mut working = self.store.get(&id)?.clone();
        let (result, event) = match working.handle_action(action) {
            Ok(applied) => applied,
            Err(e) => {
                debug!(error = %e, "Action rejected");
                return Err(e);
            }
        };
        self.store.replace(&id, working)?;
        self.commit(event)?;
        info!(?result, "Action applied");
        Ok(result)
    }

    /// Persist the current state, then record the audit entry.
    ///
    /// Runs after the in-memory change; a failure here is reported to the
    /// caller but the change stays in the store.
    fn commit(&self, event: T::Event) -> Result<(), T::Error> {
        if let Err(e) = self.snapshots.write_snapshot(&self.store.snapshot()) {
            error!(error = %e, "Snapshot write failed after commit");
            return Err(e.into());
        }
        if let Err(e) = self.audit.record(&AuditEntry::now(event)) {
            error!(error = %e, "Audit write failed after commit");
            return Err(e.into());
        }
        Ok(())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, id: T::Id, params: T::CreateParams) -> Result<T, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Create { id, params, respond_to }, response)
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Get { id, respond_to }, response)
            .await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Action { id, action, respond_to }, response)
            .await
    }

    async fn request<R>(
        &self,
        msg: ResourceRequest<T>,
        response: oneshot::Receiver<Result<R, T::Error>>,
    ) -> Result<R, T::Error> {
        self.sender
            .send(msg)
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
