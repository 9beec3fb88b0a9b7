//! CycleSync
//!
//! An MCP server for cycle-phase aware food recommendations.

use cyclesync::mcp::CycleSyncService;
use cyclesync::{build_info, data};
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they don't interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cyclesync=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let data_dir = data::get_data_dir();
    build_info::print_startup_banner(&data_dir);
    eprintln!("Starting MCP server on stdio...");

    if !data_dir.is_dir() {
        tracing::warn!(
            "Rule table directory {} does not exist; recommendations will use phase foods only",
            data_dir.display()
        );
    }

    let service = CycleSyncService::new(data_dir);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
