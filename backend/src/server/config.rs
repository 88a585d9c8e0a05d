//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use directory_backend::domain::Auditor;
use directory_backend::outbound::persistence::DbPool;

use super::settings::CorsSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) auditor: Auditor,
    pub(crate) cors: CorsSettings,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration with no database.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, auditor: Auditor, cors: CorsSettings) -> Self {
        Self {
            bind_addr,
            auditor,
            cors,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the directory repository.
    ///
    /// Without one the server keeps directories in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
