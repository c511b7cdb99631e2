//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map to standard **CRUD** operations plus reads over the whole
/// collection and a custom `Action` variant for resource-specific logic.
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource; replies with the stored record.
/// - **Get**: Fetches the current state of the resource by ID, `None` if absent.
/// - **List**: Every resource, in insertion order.
/// - **Query**: Every resource for which [`ActorEntity::matches`] holds, in insertion order.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Removes the resource.
/// - **Action**: Executes a custom [`ActorEntity::Action`].
///
/// This type is generic over `T: ActorEntity`, so a "User Create" payload can
/// never be sent to an "Event" actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Query {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
