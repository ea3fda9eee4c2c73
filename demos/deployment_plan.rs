//! Walk through the bridge stand-up plan
//!
//! Resolves every step of a stand-up against emulator addresses and prints
//! what would be submitted, in order. Nothing is sent to a network.
//!
//! Set `RUST_LOG=flow_evm_bridge_rs=debug` to see the resolution spans.
//!
//! Run with: `cargo run --example deployment_plan`

use flow_evm_bridge_rs::args::{bridged_code_chunks, decode_bytecode, BridgedAsset};
use flow_evm_bridge_rs::deployment::{DeploymentPlan, InitArgument, EVM_DEPLOY_GAS_LIMIT};
use flow_evm_bridge_rs::{BridgeEnvironment, CoreEnvironment, Resolver, TemplateError};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const BRIDGE_ACCOUNT: &str = "0x179b6b1cb6755e31";
const SERVICE_ACCOUNT: &str = "0xf8d6e0586b0a20c7";

fn main() -> Result<(), TemplateError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flow_evm_bridge_rs=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let bridge = BridgeEnvironment::with_all(BRIDGE_ACCOUNT);
    let core = CoreEnvironment::with_all(SERVICE_ACCOUNT);

    let resolver = Resolver::embedded();
    let plan = DeploymentPlan::resolve(&resolver, &bridge, &core)?;

    println!("1️⃣ EVM contracts (gas limit {EVM_DEPLOY_GAS_LIMIT}):");
    for step in &plan.evm {
        let bytecode = decode_bytecode(&step.bytecode)?;
        println!("   {} ({} bytes)", step.deployment.contract, bytecode.len());
    }

    println!("\n2️⃣ Cadence contracts:");
    for (deployment, resolution) in &plan.contracts {
        let init = match deployment.init {
            InitArgument::None => "",
            InitArgument::FactoryAddress => " <- factory EVM address",
            InitArgument::EvmContractAddress => " <- EVM contract address",
        };
        println!(
            "   {}{} ({} lines)",
            deployment.name,
            init,
            resolution.code.lines().count()
        );
    }

    println!("\n3️⃣ Configuration transactions:");
    for resolution in &plan.configuration {
        println!("   {}", resolution.path);
    }

    println!("\n4️⃣ Bridged asset templates to upload:");
    for asset in [BridgedAsset::Nft, BridgedAsset::Token] {
        let chunks = bridged_code_chunks(resolver.catalog(), asset)?;
        println!("   {asset:?}: {} chunks", chunks.len());
    }

    if plan.is_resolved() {
        info!(event = "plan_ready", "Every step resolved");
    } else {
        let missing: Vec<_> = plan.missing().into_iter().collect();
        println!("\n⚠️  Unresolved imports: {}", missing.join(", "));
    }

    Ok(())
}
