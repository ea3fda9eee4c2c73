//! Resolve the bridge's Cadence templates for one network
//!
//! Reads addresses from a `flow.json` project file and reports, per
//! template, whether every import received an address.
//!
//! Configuration comes from the environment (or a `.env` file):
//! - `FLOW_CONFIG`: path to `flow.json` (default `./flow.json`)
//! - `FLOW_NETWORK`: network to resolve for (default `emulator`)
//!
//! Run with: `cargo run --example resolve_contracts`

use dotenvy::dotenv;
use flow_evm_bridge_rs::deployment::{FlowConfig, Network};
use flow_evm_bridge_rs::{
    BridgeEnvironment, CoreEnvironment, Resolver, TemplateError, TemplateKind, EMBEDDED_FILES,
};

fn main() -> Result<(), TemplateError> {
    // Load .env file
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let network: Network = std::env::var("FLOW_NETWORK")
        .unwrap_or_else(|_| "emulator".to_string())
        .parse()?;
    let config_path = std::env::var("FLOW_CONFIG").unwrap_or_else(|_| "flow.json".to_string());

    println!("🌉 Flow VM Bridge templates on {network}");
    println!("==========================================\n");

    let (bridge, core) = match FlowConfig::load(&config_path) {
        Ok(config) => config.environments(network)?,
        Err(TemplateError::Io(e)) => {
            println!("⚠️  Could not read {config_path} ({e}), using emulator service account\n");
            (
                BridgeEnvironment::with_all("f8d6e0586b0a20c7"),
                CoreEnvironment::with_all("f8d6e0586b0a20c7"),
            )
        }
        Err(e) => return Err(e),
    };

    println!("📋 Addresses:");
    println!("   Bridge placeholders without address: {}", bridge.unset().len());
    println!("   Core placeholders without address: {}\n", core.unset().len());

    let resolver = Resolver::embedded();
    let mut incomplete = 0;

    for (path, _) in EMBEDDED_FILES {
        if TemplateKind::from_path(path).is_none() {
            continue;
        }

        let resolution = resolver.resolve(path, &bridge, &core)?;
        if resolution.is_resolved() {
            println!("   ✅ {path}");
        } else {
            incomplete += 1;
            println!("   ❌ {path}: missing {}", resolution.missing.join(", "));
        }
    }

    println!();
    if incomplete == 0 {
        println!("✅ Every template resolved");
    } else {
        println!("⚠️  {incomplete} templates have unresolved imports");
    }

    Ok(())
}
