use mongodb::{bson::doc, options::ClientOptions, Client as MongoClient, Database};
use service_core::error::AppError;
use std::time::Duration;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Builds the client without contacting the server; the driver opens
    /// connections lazily on first operation. The service must come up even
    /// when MongoDB is down, so reachability is probed via [`MongoDb::ping`].
    pub async fn connect(
        uri: &str,
        database: &str,
        server_selection_timeout: Duration,
    ) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Configuring MongoDB client");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB URI {}: {}", uri, e);
            AppError::from(e)
        })?;
        options.server_selection_timeout = Some(server_selection_timeout);

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to build MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    /// Liveness probe: the admin `ping` command confirms the server is
    /// reachable without touching business data.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
