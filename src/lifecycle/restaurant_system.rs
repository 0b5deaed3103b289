use crate::clients::{DishClient, OrderClient};
use crate::config::{Config, ConfigError};
use crate::framework::IdAllocator;
use crate::lifecycle::SeedData;
use crate::router::Router;
use crate::{dish_actor, order_actor};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for the dish and order actors.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both actors
/// - **Resource Coordination**: Sharing one [`IdAllocator`] between them
/// - **Seeding**: Loading startup data into the stores before they serve requests
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::start(&Config::from_env()?)?;
/// let dish = system.dish_client.create_dish(payload).await?;
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub dish_client: DishClient,
    pub order_client: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl Default for RestaurantSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RestaurantSystem {
    /// Starts both actors with default settings and empty stores.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::spawn(&Config::default(), SeedData::default())
    }

    /// Starts both actors, seeding them from `config.seed_file` when set.
    ///
    /// The seed file is validated while it is loaded.
    pub fn start(config: &Config) -> Result<Self, ConfigError> {
        let seed = match &config.seed_file {
            Some(path) => SeedData::load(path)?,
            None => SeedData::default(),
        };
        Ok(Self::spawn(config, seed))
    }

    /// Starts both actors with the given startup data.
    ///
    /// Fails with [`ConfigError::DuplicateId`] when two seeded entities share an id.
    pub fn with_seed(config: &Config, seed: SeedData) -> Result<Self, ConfigError> {
        seed.validate()?;
        Ok(Self::spawn(config, seed))
    }

    fn spawn(config: &Config, seed: SeedData) -> Self {
        let ids = IdAllocator::new();

        let (mut dish_actor, dish_client) = dish_actor::new(config.channel_buffer, ids.clone());
        dish_actor.seed(seed.dishes);
        let dish_handle = tokio::spawn(dish_actor.run());

        let (mut order_actor, order_client) = order_actor::new(config.channel_buffer, ids);
        order_actor.seed(seed.orders);
        let order_handle = tokio::spawn(order_actor.run());

        info!(channel_buffer = config.channel_buffer, "Restaurant system started");
        Self {
            dish_client,
            order_client,
            handles: vec![dish_handle, order_handle],
        }
    }

    /// A router sharing this system's clients.
    pub fn router(&self) -> Router {
        Router::new(self.dish_client.clone(), self.order_client.clone())
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor drains and exits.
    /// Clones handed out earlier (routers included) keep their actor alive
    /// until they are dropped too.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");
        drop(self.dish_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
