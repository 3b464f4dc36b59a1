//! Prints the OpenAPI document as pretty JSON.
//!
//! Usage: `cargo run --bin generate-openapi > openapi.json`
use tv_discovery_proxy::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let doc = ApiDoc::openapi().to_pretty_json()?;
    println!("{}", doc);
    Ok(())
}
