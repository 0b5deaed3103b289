//! # Mock Client Helpers
//!
//! Tests for code that sits *in front of* a client (the router, typed client
//! wrappers) do not need a running actor. [`create_mock_client`] hands out a
//! real [`ResourceClient`] whose channel ends in a receiver the test controls;
//! the `expect_*` helpers pull the next request off that receiver so the test
//! can assert on it and answer through its reply channel.
//!
//! ```rust
//! use dish_orders::framework::mock::{create_mock_client, expect_read};
//! use dish_orders::model::Dish;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Dish>(4);
//!     let call = tokio::spawn(async move { client.read("9".to_string()).await });
//!
//!     let (id, respond_to) = expect_read(&mut receiver).await.unwrap();
//!     assert_eq!(id, "9");
//!     respond_to
//!         .send(Err(dish_orders::ApiError::not_found("Dish id not found: 9")))
//!         .unwrap();
//!
//!     assert_eq!(call.await.unwrap().unwrap_err().status(), 404);
//! }
//! ```

use crate::framework::message::{ResourceRequest, Response};
use crate::framework::{ActorEntity, ResourceClient};
use crate::pipeline::Request;
use tokio::sync::mpsc;

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a List request.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Option<String>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Request, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create {
            request,
            respond_to,
        }) => Some((request, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Read request.
pub async fn expect_read<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Read { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Request, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            request,
            respond_to,
        }) => Some((request, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Delete request.
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
