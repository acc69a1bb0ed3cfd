//! CLI command implementations.

use std::time::Instant;

use relief_debug::{InspectionHook, ParticleSnapshot, TelemetryHook};
use relief_mesh::obj::load_obj;
use relief_particles::{CollisionPolicy, ParticleConfig, ParticleSimulator};
use relief_render::{
    sphere_instances, HeadlessRenderer, JsonSceneExporter, MeshBuffers, Renderer,
};
use relief_telemetry::{EventBus, EventKind, ReliefEvent, TracingSink};
use relief_terrain::{Terrain, TerrainConfig};

use crate::scene::SceneConfig;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Number of fault-pass deltas reported per terrain build.
const FAULT_PASS_SAMPLES: u32 = 10;

/// Flags of `relief terrain`.
#[derive(Debug, Clone, Default)]
pub struct TerrainArgs {
    pub config: Option<String>,
    pub resolution: Option<u32>,
    pub iterations: Option<u32>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}

impl TerrainArgs {
    /// The scene's terrain section with command-line overrides applied.
    pub fn resolve(&self) -> Result<TerrainConfig, Box<dyn std::error::Error>> {
        let mut config = SceneConfig::load_or_default(self.config.as_deref())?.terrain;
        if let Some(resolution) = self.resolution {
            config.resolution = resolution;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Flags of `relief particles`.
#[derive(Debug, Clone)]
pub struct ParticleArgs {
    pub config: Option<String>,
    pub count: Option<usize>,
    pub frames: u64,
    pub frame_ms: f64,
    pub seed: Option<u64>,
    pub time_of_impact: bool,
    pub output: Option<String>,
    pub snapshot: Option<String>,
}

impl Default for ParticleArgs {
    fn default() -> Self {
        Self {
            config: None,
            count: None,
            frames: 600,
            frame_ms: 1000.0 / 60.0,
            seed: None,
            time_of_impact: false,
            output: None,
            snapshot: None,
        }
    }
}

impl ParticleArgs {
    /// The scene's particles section with command-line overrides applied.
    pub fn resolve(&self) -> Result<ParticleConfig, Box<dyn std::error::Error>> {
        let mut config = SceneConfig::load_or_default(self.config.as_deref())?.particles;
        if let Some(count) = self.count {
            config.count = count;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.time_of_impact {
            config.collision_policy = CollisionPolicy::TimeOfImpact;
        }
        config.validate()?;
        Ok(config)
    }
}

fn telemetry_bus() -> EventBus {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::DEBUG)));
    bus
}

/// Generate a terrain and print its statistics.
pub fn terrain(args: &TerrainArgs) -> CommandResult {
    println!("Relief Terrain");
    println!("──────────────");

    let config = args.resolve()?;
    let mut bus = telemetry_bus();
    let emitter = bus.emitter();
    let stride = (config.iterations / FAULT_PASS_SAMPLES).max(1);

    let start = Instant::now();
    let terrain = Terrain::from_config_observed(&config, |pass| {
        if pass.iteration % stride == 0 {
            emitter.emit(ReliefEvent::new(
                0,
                EventKind::FaultPass {
                    iteration: pass.iteration,
                    delta: pass.delta,
                    moved: pass.moved,
                },
            ));
        }
    })?;
    let elapsed = start.elapsed();

    bus.emit(ReliefEvent::new(
        0,
        EventKind::TerrainBuilt {
            vertices: terrain.vertex_count(),
            faces: terrain.face_count(),
            min_height: terrain.min_height(),
            max_height: terrain.max_height(),
        },
    ));
    bus.finish();

    println!("Resolution:    {}", terrain.resolution());
    println!("Fault passes:  {}", config.iterations);
    match config.seed {
        Some(seed) => println!("Seed:          {seed}"),
        None => println!("Seed:          (entropy)"),
    }
    println!("Vertices:      {}", terrain.vertex_count());
    println!("Faces:         {}", terrain.face_count());
    println!("Edges:         {}", terrain.edges().len() / 2);
    println!(
        "Height range:  [{:.5}, {:.5}]",
        terrain.min_height(),
        terrain.max_height()
    );
    println!("Build time:    {:.3}ms", elapsed.as_secs_f64() * 1000.0);

    if let Some(path) = &args.output {
        let mut exporter = JsonSceneExporter::new(path);
        exporter.submit_mesh(&MeshBuffers::from_terrain(&terrain))?;
        exporter.finalize()?;
        println!("Scene written to: {path}");
    }

    Ok(())
}

/// Run the particle simulation on a synthetic clock.
pub fn particles(args: &ParticleArgs) -> CommandResult {
    println!("Relief Particles");
    println!("════════════════");

    let config = args.resolve()?;
    let mut sim = ParticleSimulator::from_config(config)?;
    let mut renderer: Box<dyn Renderer> = match &args.output {
        Some(path) => Box::new(JsonSceneExporter::new(path)),
        None => Box::new(HeadlessRenderer::new()),
    };
    let mut bus = telemetry_bus();
    let mut hook = TelemetryHook::new();

    println!(
        "Running: {} particles, {} frames at {:.3}ms ({} renderer)",
        sim.len(),
        args.frames,
        args.frame_ms,
        renderer.name()
    );

    let initial_energy = sim.kinetic_energy();
    let mut collisions = 0usize;
    let mut settled = 0usize;
    let run_start = Instant::now();

    for i in 0..args.frames {
        let timestamp = i as f64 * args.frame_ms;
        hook.on_frame_begin(sim.frame(), sim.sim_time());

        let frame_start = Instant::now();
        let report = sim.tick(timestamp);
        let wall_time = frame_start.elapsed().as_secs_f64();

        collisions += report.collisions.len();
        settled += report.settled.len();
        hook.on_frame_report(&report);
        hook.on_frame_end(report.frame, wall_time, sim.kinetic_energy());
        for event in hook.drain_events() {
            bus.emit(event);
        }
        bus.flush();

        renderer.submit_spheres(report.frame, &sphere_instances(&sim))?;
    }

    hook.on_simulation_end();
    bus.finish();
    renderer.finalize()?;

    println!("  Wall time:     {:.3}s", run_start.elapsed().as_secs_f64());
    println!("  Sim time:      {:.4}s", sim.sim_time());
    println!("  Collisions:    {collisions}");
    println!("  Settled:       {settled} ({} still moving)", sim.moving_count());
    println!("  Initial KE:    {initial_energy:.6e}");
    println!("  Final KE:      {:.6e}", sim.kinetic_energy());

    if let Some(path) = &args.output {
        println!("Scene written to: {path}");
    }
    if let Some(path) = &args.snapshot {
        ParticleSnapshot::from_simulator(&sim).save(path)?;
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Load an OBJ mesh and print its statistics.
pub fn mesh(path: &str, output: Option<&str>) -> CommandResult {
    println!("Relief Mesh");
    println!("───────────");

    let mesh = load_obj(path)?;
    println!("File:          {path}");
    println!("Vertices:      {}", mesh.vertex_count());
    println!("Triangles:     {}", mesh.triangle_count());

    if let Some(bounds) = mesh.bounds() {
        let center = bounds.center();
        let extent = bounds.extent();
        println!(
            "Bounds:        [{:.4}, {:.4}, {:.4}] – [{:.4}, {:.4}, {:.4}]",
            bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
        );
        println!("Center:        [{:.4}, {:.4}, {:.4}]", center.x, center.y, center.z);
        println!("Extent:        [{:.4}, {:.4}, {:.4}]", extent.x, extent.y, extent.z);
        let scale = bounds.canonical_transform().x_axis.x;
        println!("Unit scale:    {scale:.6}");
    }

    if let Some(path) = output {
        let mut exporter = JsonSceneExporter::new(path);
        exporter.submit_mesh(&MeshBuffers::from_mesh(&mesh))?;
        exporter.finalize()?;
        println!("Scene written to: {path}");
    }

    Ok(())
}

/// Inspect a particle snapshot.
pub fn inspect(path: &str) -> CommandResult {
    println!("Relief Snapshot Inspector");
    println!("────────────────────────");
    println!();

    let snapshot = ParticleSnapshot::load(path)?;

    println!("Frame:        {}", snapshot.frame);
    println!("Sim time:     {:.4}s", snapshot.sim_time);
    println!("Particles:    {}", snapshot.particle_count());
    println!("Moving:       {}", snapshot.moving_count());
    println!("Max speed:    {:.4}", snapshot.max_speed());

    let ys = snapshot.positions.iter().skip(1).step_by(3).copied();
    let (min_y, max_y) = ys.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), y| {
        (lo.min(y), hi.max(y))
    });
    if snapshot.particle_count() > 0 {
        println!("Y range:      [{min_y:.4}, {max_y:.4}]");
    }

    Ok(())
}

/// Validate a scene config.
pub fn validate(path: &str) -> CommandResult {
    let scene = SceneConfig::load(path)?;
    scene.validate()?;
    println!("{path}: OK");
    println!(
        "  terrain:   {} quads/axis, {} fault passes",
        scene.terrain.resolution, scene.terrain.iterations
    );
    println!(
        "  particles: {} in a box of half-width {}",
        scene.particles.count, scene.particles.half_width
    );
    Ok(())
}
