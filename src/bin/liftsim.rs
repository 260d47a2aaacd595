use clap::Parser;
use liftsim::Building;
use liftsim::config::{self, Config};
use liftsim::services::bounds::FloorBounds;
use liftsim::services::command::CommandLayer;
use liftsim::services::dispatcher::DispatcherService;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tower::{Service, ServiceBuilder, ServiceExt};

/// Drive a simulated elevator with request lines on stdin.
///
/// F<n> requests floor n, P<desired>,<origin>,<time> boards a passenger,
/// M runs the elevator until idle, S prints its state.
#[derive(Parser, Debug)]
#[clap(name = "liftsim")]
struct Args {
    /// TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Reject floors outside the building
    #[clap(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => Config::default(),
    };
    config.building.strict_floors |= args.strict;

    let building = Arc::new(Mutex::new(Building::from_config(&config)));
    {
        let building = building.lock().await;
        let elevator = building.elevator();
        info!(
            "{} floors, elevator {} inspected by {} on {}",
            building.floors().len(),
            elevator.model(),
            elevator.inspected_by(),
            elevator.inspection_date().format("%Y-%m-%d")
        );
    }

    let bounds = if config.building.strict_floors {
        FloorBounds::strict(config.building.floors)
    } else {
        FloorBounds::permissive()
    };
    let mut svc = ServiceBuilder::new()
        .layer(CommandLayer)
        .filter(bounds)
        .service(DispatcherService::new(building));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        ServiceExt::<&[u8]>::ready(&mut svc)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        match svc.call(line.as_bytes()).await {
            Ok(reply) => println!("{reply}"),
            Err(e) => warn!("rejected {:?}: {e}", line.trim()),
        }
    }
    info!("input closed, shutting down");
    Ok(())
}
