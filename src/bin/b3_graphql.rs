//! Run a GraphQL query against one of the storefront endpoints.
//!
//! Configuration comes from the environment (`B3_API_BASE_URL`,
//! `BC_STOREFRONT_API_BASE_URL`, `B3_STORE_HASH`, `B3_CHANNEL_ID`,
//! `B3_B2B_TOKEN`, `BC_GRAPHQL_TOKEN`, and `B3_ALT_*` for alternate-host
//! mode). The query is read from stdin when omitted or `-`.
//!
//! ```sh
//! export B3_API_BASE_URL=https://api-b2b.example.com
//! export BC_STOREFRONT_API_BASE_URL=https://store.example.com
//! export B3_STORE_HASH=abc123
//! cargo run --bin b3-graphql -- BCProxyGraphql '{ site { settings { storeName } } }'
//! echo '{ quotes { totalCount } }' | cargo run --bin b3-graphql -- B2BGraphql
//! cargo run --bin b3-graphql -- B2BGraphql --alternate-host /b2b/graphql --variables '{"id":1}' -
//! ```

use std::io::Read;

use b3_storefront_auth::{AlternateHostConfig, SessionStore, SessionTokens, StorefrontConfig};
use b3_storefront_request::{Dispatcher, GraphqlOptions, GraphqlRequest, RequestType};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "b3-graphql")]
#[command(about = "Run a GraphQL query against a B2B storefront endpoint")]
struct Cli {
    /// Endpoint: B2BGraphql, BCGraphql or BCProxyGraphql
    #[arg(value_parser = parse_graphql_type)]
    endpoint: RequestType,

    /// Query text; read from stdin when omitted or `-`
    query: Option<String>,

    /// Query variables as a JSON object
    #[arg(long, value_parser = parse_json)]
    variables: Option<serde_json::Value>,

    /// Send B2BGraphql calls to the alternate host at this sub-path
    #[arg(long, value_name = "PATH")]
    alternate_host: Option<String>,
}

fn parse_graphql_type(raw: &str) -> Result<RequestType, String> {
    let request_type: RequestType = raw.parse().map_err(|e| format!("{e}"))?;
    if request_type.is_graphql() {
        Ok(request_type)
    } else {
        Err(format!("{request_type} is not a GraphQL endpoint"))
    }
}

fn parse_json(raw: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))
}

impl Cli {
    fn options(&self) -> Result<GraphqlOptions, String> {
        match (&self.alternate_host, self.endpoint) {
            (Some(path), RequestType::B2BGraphql) => Ok(GraphqlOptions::new().alternate_host(path)),
            (Some(_), other) => Err(format!("--alternate-host only applies to B2BGraphql, not {other}")),
            (None, _) => Ok(GraphqlOptions::new()),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.options().unwrap_or_else(|e| fail(&e));

    let query = match cli.query.as_deref() {
        Some(query) if query != "-" => query.to_string(),
        _ => read_stdin(),
    };
    let mut request = GraphqlRequest::new(query);
    request.variables = cli.variables;

    let config = StorefrontConfig::from_env().unwrap_or_else(|e| fail(&e.to_string()));
    let dispatcher = Dispatcher::builder(config)
        .session(SessionStore::new(SessionTokens::from_env()))
        .alternate_host(AlternateHostConfig::from_env())
        .build()
        .unwrap_or_else(|e| fail(&format!("Failed to create dispatcher: {e}")));

    let result: Result<serde_json::Value, _> = match cli.endpoint {
        RequestType::BCGraphql => dispatcher.graphql_bc(&request).await,
        RequestType::BCProxyGraphql => dispatcher.graphql_bc_proxy(&request).await,
        _ => dispatcher.graphql_b2b(&request, &options).await,
    };

    match result {
        Ok(data) => match serde_json::to_string_pretty(&data) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(&format!("Failed to print result: {e}")),
        },
        Err(e) => fail(&format!("Request failed: {e}")),
    }
}

fn read_stdin() -> String {
    let mut query = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut query) {
        fail(&format!("Failed to read query from stdin: {e}"));
    }
    if query.trim().is_empty() {
        fail("No query given on the command line or stdin");
    }
    query
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
