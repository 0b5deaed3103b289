//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one
//! resource store and applies every operation to it. It is the "server" side
//! of the actor model: requests arrive over a channel and are handled strictly
//! one after another, so no request ever observes another one half-applied.

use crate::error::ApiError;
use crate::framework::allocator::IdAllocator;
use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use crate::pipeline::{Context, Pipeline, Request};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct owns the state (`store`) and the receiver end of the channel.
/// Because the loop in [`ResourceActor::run`] processes one message at a time,
/// the store needs no `Mutex`: exclusive ownership inside the task is the lock.
///
/// # Operations
///
/// * **List**: clones the store, optionally keeping only entities whose id
///   equals the filter. An unmatched filter yields an empty list.
/// * **Create**: runs the create pipeline, parses the payload, takes an id from
///   the [`IdAllocator`] and appends the entity.
/// * **Read**: runs the read pipeline (existence resolution) and returns a clone.
/// * **Update**: runs the update pipeline and overwrites the resolved entity
///   in place via [`ActorEntity::on_update`].
/// * **Delete**: runs the delete pipeline, if the kind has one, and removes the
///   resolved entity.
///
/// A failing check aborts the operation before the store is touched.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    ids: IdAllocator,
    create: Pipeline<T>,
    read: Pipeline<T>,
    update: Pipeline<T>,
    delete: Option<Pipeline<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `ids` - The process-wide allocator; pass clones of one allocator to
    ///   every actor so identifiers stay unique across kinds.
    pub fn new(buffer_size: usize, ids: IdAllocator) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            ids,
            create: T::create_pipeline(),
            read: T::read_pipeline(),
            update: T::update_pipeline(),
            delete: T::delete_pipeline(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Loads startup data, bypassing the pipelines.
    ///
    /// Seeded ids are reserved in the allocator so later creates cannot reuse them.
    pub fn seed(&mut self, entities: impl IntoIterator<Item = T>) {
        for entity in entities {
            self.ids.reserve(entity.id());
            self.store.push(entity);
        }
        debug!(entity_type = T::KIND, size = self.store.len(), "Seeded");
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        let entity_type = T::KIND;
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { filter, respond_to } => {
                    let items = self.list(filter.as_deref());
                    debug!(entity_type, ?filter, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Create {
                    request,
                    respond_to,
                } => {
                    debug!(entity_type, data = ?request.data, "Create");
                    let result = self.create(&request);
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Read { id, respond_to } => {
                    let result = self.read(&Request::for_id(id.as_str()));
                    debug!(entity_type, %id, found = result.is_ok(), "Read");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    request,
                    respond_to,
                } => {
                    let id = request.path_id.clone().unwrap_or_default();
                    debug!(entity_type, %id, data = ?request.data, "Update");
                    let result = self.update(&request);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&Request::for_id(id.as_str()));
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete rejected"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn list(&self, filter: Option<&str>) -> Vec<T> {
        self.store
            .iter()
            .filter(|item| filter.map_or(true, |id| item.id() == id))
            .cloned()
            .collect()
    }

    fn create(&mut self, request: &Request) -> Result<T, ApiError> {
        self.create.run(Context::new(request, &self.store))?;
        let params = request.parse::<T::Create>()?;
        let id = self.ids.next().ok_or(FrameworkError::IdsExhausted)?;
        let item = T::from_create_params(id, params);
        self.store.push(item.clone());
        Ok(item)
    }

    fn read(&self, request: &Request) -> Result<T, ApiError> {
        let index = resolved_index(&self.read, request, &self.store)?;
        Ok(self.store[index].clone())
    }

    fn update(&mut self, request: &Request) -> Result<T, ApiError> {
        let index = resolved_index(&self.update, request, &self.store)?;
        let update = request.parse::<T::Update>()?;
        let item = &mut self.store[index];
        item.on_update(update);
        Ok(item.clone())
    }

    fn delete(&mut self, request: &Request) -> Result<(), ApiError> {
        let Some(pipeline) = &self.delete else {
            return Err(ApiError::MethodNotAllowed(format!(
                "{} cannot be deleted",
                T::KIND
            )));
        };
        let index = resolved_index(pipeline, request, &self.store)?;
        self.store.remove(index);
        Ok(())
    }
}

/// Runs `pipeline` and returns the index its existence resolver attached.
fn resolved_index<T: ActorEntity>(
    pipeline: &Pipeline<T>,
    request: &Request,
    store: &[T],
) -> Result<usize, ApiError> {
    let ctx = pipeline.run(Context::new(request, store))?;
    ctx.resolved().ok_or_else(|| {
        ApiError::not_found(format!(
            "{} id not found: {}",
            T::KIND,
            request.path_id.as_deref().unwrap_or_default()
        ))
    })
}
