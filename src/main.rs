use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use planet_shot::core::plot::{default_plot_path, render_svg};
use planet_shot::core::shot::{ANGLE_RANGE_DEG, ANGLE_STEP_DEG, SPEED_RANGE_MPS};
use planet_shot::{GameConfig, GameError, Resolution, Session, ShotRequest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Guess the launch speed and angle that land a shot on a hidden target.
#[derive(Parser, Debug, PartialEq)]
#[command(version, about, long_about = None)]
struct CliOptions {
    /// Game config json file path
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RNG seed for planet and target selection
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the trajectory plot (svg)
    #[arg(long, value_name = "FILE")]
    plot: Option<PathBuf>,
}

fn read_line(prompt: &str) -> Result<String, GameError> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Err(GameError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Input ended unexpectedly (EOF).",
        )));
    }
    Ok(line)
}

fn read_shot() -> Result<ShotRequest, GameError> {
    loop {
        let speed = read_line(&format!(
            "Velocity ({}-{} m/s): ",
            SPEED_RANGE_MPS.start(),
            SPEED_RANGE_MPS.end()
        ))?;
        let angle = read_line(&format!(
            "Angle ({}-{} deg, step {}): ",
            ANGLE_RANGE_DEG.start(),
            ANGLE_RANGE_DEG.end(),
            ANGLE_STEP_DEG
        ))?;

        match ShotRequest::parse(&speed, &angle) {
            Ok(shot) => return Ok(shot),
            Err(err) if err.is_user_error() => eprintln!("{err}"),
            Err(err) => return Err(err),
        }
    }
}

fn run(options: CliOptions) -> Result<(), GameError> {
    let mut config = match &options.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if options.seed.is_some() {
        config.seed = options.seed;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.resolved_seed());
    let mut session = Session::new(&config, &mut rng)?;
    let planet = session.planet();
    let (target_x, target_y) = session.target().position;

    println!("Can you hit the target on planet {planet}?");
    println!("Gravity: {} m/s^2", planet.gravity_mps2());
    println!("The target is at x = {target_x:.3} meters and y = {target_y:.3} meters");
    println!("{}\n", session.status_line());

    while session.resolution() == Resolution::Ready
        || session.resolution() == Resolution::KeepTrying
    {
        let shot = read_shot()?;
        session.fire_shot(shot)?;

        let (land_x, land_y) = session
            .trajectories()
            .last()
            .map(|t| t.landing_point())
            .unwrap_or_default();
        println!("\nLanded at x = {land_x:.3} m, y = {land_y:.3} m");
        println!("{}\n", session.status_line());
    }

    let plot_path = options
        .plot
        .unwrap_or_else(|| default_plot_path(&chrono::Local::now()));
    render_svg(&session, &plot_path, &config.plot)?;
    println!("Plot saved to {}", plot_path.display());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let options = CliOptions::parse();

    if let Err(err) = run(options) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
