//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](crate::framework::ResourceClient)
//! to its [`ResourceActor`](crate::framework::ResourceActor), one variant per
//! operation, each with its own reply channel.

use crate::error::ApiError;
use crate::framework::entity::ActorEntity;
use crate::pipeline::Request;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, ApiError>>;

/// Internal message type sent to the actor to request operations.
///
/// Write operations carry the whole [`Request`] (path id plus payload) so the
/// actor can run the entity's pipeline against it. `List` never fails
/// validation and only carries the optional id filter.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        filter: Option<String>,
        respond_to: Response<Vec<T>>,
    },
    Create {
        request: Request,
        respond_to: Response<T>,
    },
    Read {
        id: String,
        respond_to: Response<T>,
    },
    Update {
        request: Request,
        respond_to: Response<T>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
}
