use lander_guidance::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DescentConfig::default();
    let mut simulation = DescentSimulation::new(config)?;

    if let Err(e) = simulation.run() {
        println!("Error during descent: {}", e);
    }

    simulation.trajectory.display_data();
    println!("\nFinal state: {:?}", simulation.state);

    Ok(())
}
