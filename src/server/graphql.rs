// GraphQL server implementation for the Person Registry
// This creates a standalone GraphQL server over the person store

use std::sync::Arc;

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router, Server,
};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::engine::{
    graphql::{create_schema_with_store, PersonRegistrySchema},
    remote::fetch_persons,
    store::{InMemoryPersonStore, PersonStore},
};
use crate::models::seed_persons;

/// GraphQL server configuration
#[derive(Clone)]
pub struct GraphQLServerConfig {
    pub port: u16,
    pub cors_enabled: bool,
}

impl Default for GraphQLServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            cors_enabled: true,
        }
    }
}

/// GraphQL server
///
/// By default the store is seeded with the static dataset. When a remote
/// seed URL is configured, the store is bulk-loaded from that endpoint
/// exactly once, before the listening socket is bound; a failed load
/// aborts startup.
pub struct GraphQLServer {
    config: GraphQLServerConfig,
    store: Arc<dyn PersonStore>,
    remote_seed_url: Option<String>,
}

impl GraphQLServer {
    pub fn new() -> Self {
        Self {
            config: GraphQLServerConfig::default(),
            store: Arc::new(InMemoryPersonStore::with_persons(seed_persons())),
            remote_seed_url: None,
        }
    }

    pub fn with_config(mut self, config: GraphQLServerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_store(mut self, store: Arc<dyn PersonStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_remote_seed(mut self, url: impl Into<String>) -> Self {
        self.remote_seed_url = Some(url.into());
        self
    }

    pub async fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        // Seed from the remote source before binding; failure here is
        // fatal to startup and the server never accepts traffic
        if let Some(url) = self.remote_seed_url.take() {
            let persons = fetch_persons(&url).await?;
            info!("Seeded store with {} remote person records", persons.len());
            self.store = Arc::new(InMemoryPersonStore::with_persons(persons));
        } else {
            debug!("Using static person seed data");
        }

        let schema = create_schema_with_store(self.store);
        let app_state = Arc::new(RwLock::new(schema));

        let mut app = Router::new()
            .route("/", get(graphiql).post(graphql_handler))
            .route("/graphql", post(graphql_handler))
            .route("/health", get(health_check))
            .with_state(app_state);

        if self.config.cors_enabled {
            app = app.layer(CorsLayer::permissive());
        }

        let addr = format!("0.0.0.0:{}", self.config.port);

        info!(
            "🚀 Person Registry server ready at http://localhost:{}",
            self.config.port
        );
        info!(
            "🔗 GraphQL endpoint: http://localhost:{}/graphql",
            self.config.port
        );

        Server::bind(&addr.parse()?)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }
}

impl Default for GraphQLServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for server configuration
pub struct GraphQLServerBuilder {
    server: GraphQLServer,
}

impl GraphQLServerBuilder {
    pub fn new() -> Self {
        Self {
            server: GraphQLServer::new(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        let mut config = self.server.config.clone();
        config.port = port;
        self.server = self.server.with_config(config);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn PersonStore>) -> Self {
        self.server = self.server.with_store(store);
        self
    }

    pub fn with_remote_seed(mut self, url: impl Into<String>) -> Self {
        self.server = self.server.with_remote_seed(url);
        self
    }

    pub async fn build_and_run(self) -> Result<(), Box<dyn std::error::Error>> {
        self.server.run().await
    }
}

impl Default for GraphQLServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// GraphQL handler
async fn graphql_handler(
    State(schema): State<Arc<RwLock<PersonRegistrySchema>>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let schema = schema.read().await;
    schema.execute(req.into_inner()).await.into()
}

// GraphiQL interface
async fn graphiql() -> impl IntoResponse {
    Html(
        r#"
<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="robots" content="noindex">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="referrer" content="origin">
    <title>GraphiQL IDE</title>
    <style>
      body {
        height: 100%;
        margin: 0;
        width: 100%;
        overflow: hidden;
      }
      #graphiql {
        height: 100vh;
      }
    </style>
    <script crossorigin src="https://unpkg.com/react@18/umd/react.development.js"></script>
    <script crossorigin src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
    <link rel="icon" href="https://graphql.org/favicon.ico">
    <link rel="stylesheet" href="https://unpkg.com/graphiql@3/graphiql.min.css" />
  </head>
  <body>
    <div id="graphiql">Loading...</div>
    <script src="https://unpkg.com/graphiql@3/graphiql.min.js" type="application/javascript"></script>
    <script>
      const root = ReactDOM.createRoot(document.getElementById('graphiql'));

      const fetcher = GraphiQL.createFetcher({
        url: '/graphql',
      });

      root.render(React.createElement(GraphiQL, {
        fetcher: fetcher,
        defaultEditorToolsVisibility: true,
      }));
    </script>
  </body>
</html>
"#,
    )
}

// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Person Registry GraphQL Server is running!")
}
