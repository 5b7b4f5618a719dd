//! BlueCarbon MRV Server
//!
//! Main entry point for the verification service

use bluecarbon_mrv::MrvServiceBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	MrvServiceBuilder::new().start_server().await
}
