//! Headless host for the rain-splash placement core.
//!
//! Plays the role the game engine would: runs a fixed-step tick loop, loops
//! rain on and off, synthesizes ground-plane collision events inside the
//! rain radius, orbits a camera, and counts the emission requests the core
//! produces.

use std::cell::RefCell;
use std::rc::Rc;

use clap::Parser;
use rain_sim_core::{
    CollisionEvent, EmitParams, RainArea, RainAreaConfig, RainCollisionDetector, RainEmitter,
    SplashEmitter, Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Rain splash placement demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "rain-sim-demo")]
#[command(about = "Headless rain splash placement demo", long_about = None)]
struct Args {
    /// Simulation duration in seconds
    #[arg(short, long, default_value_t = 60.0)]
    duration: f32,

    /// Ticks per second
    #[arg(short, long, default_value_t = 30.0)]
    tick_rate: f32,

    /// Rain active time per cycle in seconds
    #[arg(long, default_value_t = 30.0)]
    rain_duration: f32,

    /// Rain pause time per cycle in seconds
    #[arg(long, default_value_t = 5.0)]
    pause_duration: f32,

    /// Collision events generated per tick while raining
    #[arg(long, default_value_t = 8)]
    drops_per_tick: u32,

    /// Maximum surface slope in degrees where splashes can occur
    #[arg(long, default_value_t = 35.0)]
    max_slope: f32,

    /// Minimum distance between splash decals
    #[arg(long, default_value_t = 0.1)]
    splash_spacing: f32,

    /// Rain emitter shape radius
    #[arg(long, default_value_t = 1.0)]
    rain_radius: f32,

    /// Fraction of events generated against a steep (wall-like) surface
    #[arg(long, default_value_t = 0.1)]
    steep_fraction: f32,

    /// RNG seed for reproducible runs
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Rain on/off cadence, the way the original scene looped its rain effect.
struct RainLooper {
    rain_duration: f32,
    pause_duration: f32,
    timer: f32,
    is_raining: bool,
}

impl RainLooper {
    fn new(rain_duration: f32, pause_duration: f32) -> Self {
        Self {
            rain_duration,
            pause_duration,
            timer: 0.0,
            is_raining: true,
        }
    }

    fn update(&mut self, dt: f32) {
        self.timer += dt;
        if self.is_raining && self.timer >= self.rain_duration {
            self.is_raining = false;
            self.timer = 0.0;
            info!("rain paused");
        } else if !self.is_raining && self.timer >= self.pause_duration {
            self.is_raining = true;
            self.timer = 0.0;
            info!("rain resumed");
        }
    }
}

#[derive(Clone)]
struct CountingSplashEmitter {
    name: &'static str,
    count: Rc<RefCell<u64>>,
}

impl CountingSplashEmitter {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            count: Rc::new(RefCell::new(0)),
        }
    }
}

impl SplashEmitter for CountingSplashEmitter {
    fn emit(&mut self, params: EmitParams) {
        *self.count.borrow_mut() += 1;
        debug!(
            kind = self.name,
            x = params.position.x,
            z = params.position.z,
            "splash emitted"
        );
    }
}

struct LoggingRainEmitter;

impl RainEmitter for LoggingRainEmitter {
    fn set_shape_radius(&mut self, radius: f32, thickness: f32) {
        info!(radius, thickness, "rain shape updated");
    }
}

/// Scatter collision events on the ground plane inside the rain radius.
fn generate_events(rng: &mut StdRng, args: &Args) -> Vec<CollisionEvent> {
    let mut events = Vec::with_capacity(args.drops_per_tick as usize);
    for _ in 0..args.drops_per_tick {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let radius = args.rain_radius * rng.random_range(0.0_f32..1.0).sqrt();
        let position = Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin());

        let normal = if rng.random_range(0.0..1.0) < args.steep_fraction {
            // Wall-like surface the slope filter should reject
            Vec3::new(0.0, 0.5, 0.87)
        } else {
            Vec3::new(0.0, 1.0, 0.0)
        };
        events.push(CollisionEvent::new(position, normal));
    }
    events
}

fn camera_position(time: f32) -> Vec3 {
    // Slow orbit around the area at head height
    let angle = time * 0.2;
    Vec3::new(4.0 * angle.cos(), 1.7, 4.0 * angle.sin())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let dt = 1.0 / args.tick_rate;
    let total_ticks = (args.duration * args.tick_rate) as u64;

    let horizontal = CountingSplashEmitter::new("horizontal");
    let vertical = CountingSplashEmitter::new("vertical");
    let mut area = RainArea::new(
        RainAreaConfig {
            max_slope_for_splash: args.max_slope,
            splash_spacing: args.splash_spacing,
            rain_radius: args.rain_radius,
            ..RainAreaConfig::default()
        },
        Some(Box::new(LoggingRainEmitter)),
        Some(Box::new(horizontal.clone())),
        Some(Box::new(vertical.clone())),
    );
    let detector = RainCollisionDetector::new("ground");
    let mut looper = RainLooper::new(args.rain_duration, args.pause_duration);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut total_events: u64 = 0;

    info!(
        ticks = total_ticks,
        dt, "starting rain splash demo"
    );

    for tick in 0..total_ticks {
        let time = tick as f32 * dt;
        looper.update(dt);
        area.on_tick();

        if looper.is_raining {
            let events = generate_events(&mut rng, &args);
            total_events += events.len() as u64;
            detector.on_particle_collision(&mut area, &events, Some(camera_position(time)));
        }
    }

    let horizontal_count = *horizontal.count.borrow();
    let vertical_count = *vertical.count.borrow();
    println!("collision events delivered: {total_events}");
    println!("decals placed:              {}", area.decal_count());
    println!("horizontal splashes:        {horizontal_count}");
    println!("vertical splashes:          {vertical_count}");
    println!(
        "grid cells occupied:        {}",
        area.grid().cell_count()
    );
}
