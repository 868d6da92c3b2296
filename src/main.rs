use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use traffic_kernel::simulation::{
    self, RoadConfig, SimConfig, SimKernel, DEFAULT_ACCEL_INCREMENT, DEFAULT_LIGHT_CYCLE_PERIOD,
    DEFAULT_MOVE_DISTANCE, DEFAULT_STEP_COUNT, DEFAULT_STOP_THRESHOLD, DEMO_LIGHT_COUNT,
};

#[derive(Parser)]
#[command(name = "traffic_kernel")]
#[command(about = "Step-by-step traffic simulation printed to the console")]
struct Cli {
    /// Number of simulation steps to run
    #[arg(long, default_value_t = DEFAULT_STEP_COUNT)]
    steps: u32,

    /// Distance a moving vehicle covers per step
    #[arg(long, default_value_t = DEFAULT_MOVE_DISTANCE, allow_negative_numbers = true)]
    move_distance: i32,

    /// Speed gained per step in km/h
    #[arg(long, default_value_t = DEFAULT_ACCEL_INCREMENT, allow_negative_numbers = true)]
    accel_increment: i32,

    /// Position at which vehicles stop
    #[arg(long, default_value_t = DEFAULT_STOP_THRESHOLD, conflicts_with = "stop_at_half_road")]
    stop_threshold: u32,

    /// Stop vehicles at half the road length instead of a fixed threshold
    #[arg(long)]
    stop_at_half_road: bool,

    /// Lights turn yellow every this many steps
    #[arg(long, default_value_t = DEFAULT_LIGHT_CYCLE_PERIOD)]
    light_cycle: u32,

    /// Name of the road
    #[arg(long, default_value = "Main Street")]
    road_name: String,

    /// Length of the road
    #[arg(long, default_value = "1000", allow_negative_numbers = true)]
    road_length: i32,

    /// Number of lanes on the road
    #[arg(long, default_value = "2")]
    lanes: u32,

    /// Number of traffic lights
    #[arg(long, default_value_t = DEMO_LIGHT_COUNT)]
    lights: u32,

    /// Use a random roster of this many vehicles instead of the demo roster
    #[arg(long)]
    vehicles: Option<u32>,

    /// Seed for the random roster
    #[arg(long, default_value = "0", requires = "vehicles")]
    seed: u64,
}

impl Cli {
    fn sim_config(&self) -> SimConfig {
        SimConfig {
            step_count: self.steps,
            move_distance: self.move_distance,
            accel_increment: self.accel_increment,
            stop_threshold: (!self.stop_at_half_road).then_some(self.stop_threshold),
            light_cycle_period: self.light_cycle,
            road: RoadConfig {
                name: self.road_name.clone(),
                length: self.road_length,
                lanes: self.lanes,
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let vehicles = match cli.vehicles {
        Some(count) => {
            info!("Using random roster of {} vehicles (seed {})", count, cli.seed);
            simulation::random_roster(count, cli.seed)
        }
        None => simulation::demo_roster(),
    };
    let lights = simulation::lights(cli.lights);

    let mut kernel = SimKernel::new(cli.sim_config(), vehicles, lights)
        .context("Failed to set up the simulation")?;

    run(&mut kernel)
}

/// Run every step, printing each report as it is produced
fn run(kernel: &mut SimKernel) -> Result<()> {
    println!("Total number of vehicles: {}", kernel.vehicle_count());

    for report in kernel.run().context("Simulation has no steps left")? {
        println!();
        print!("{}", report);
    }

    println!();
    println!("=== Final State ===");
    println!("{}", kernel.summary());

    Ok(())
}
