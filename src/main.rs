use std::sync::Arc;

use swap_quoter::{benchmark::{BenchmarkRunner, BenchmarkRunnerBuilder}, quoter::{ConstantProductCalculator, PriceCalculator}, types::Result, utils::{config::Config, logger::init}};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::load()?;
    init(config.logging_config());
    info!("Starting swap quote benchmark");

    config.validate()?;

    let calculator = Arc::new(ConstantProductCalculator::new(config.quoter_config())) as Arc<dyn PriceCalculator>;
    info!("Pool fee: {}", config.quoter_config().fee);

    let runner = BenchmarkRunnerBuilder::new()
        .with_calculator(calculator)
        .with_config(config.benchmark_config().clone())
        .build()?;

    let report = match runner.run().await {
        Ok(report) => report,
        Err(e) => {
            error!("Benchmark failed: {}", e);
            return Err(e);
        }
    };

    println!("{}", report);
    Ok(())
}
