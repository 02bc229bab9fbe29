use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polyview_common::Shape;
use polyview_mesh::shape_mesh;
use polyview_render::{DebugTextRenderer, RenderView, Renderer};
use polyview_scene::Scene;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polyview-cli", about = "Headless mesh tooling for polyview")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeArg {
    Square,
    Cube,
    Tetrahedron,
    Sphere,
}

impl From<ShapeArg> for Shape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Square => Shape::Square,
            ShapeArg::Cube => Shape::Cube,
            ShapeArg::Tetrahedron => Shape::Tetrahedron,
            ShapeArg::Sphere => Shape::Sphere,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the built-in shape table
    Info,
    /// Print vertex/triangle counts for a shape
    Stats {
        /// Shape to inspect
        #[arg(short, long, value_enum)]
        shape: ShapeArg,
        /// Sphere subdivision depth
        #[arg(short, long, default_value = "4")]
        depth: u32,
    },
    /// Write a shape's mesh as JSON
    Export {
        /// Shape to export
        #[arg(short, long, value_enum)]
        shape: ShapeArg,
        /// Sphere subdivision depth
        #[arg(short, long, default_value = "4")]
        depth: u32,
        /// Output path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the demo scene through the debug text renderer
    View,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("polyview-cli v{}", env!("CARGO_PKG_VERSION"));
            for shape in Shape::ALL {
                let mesh = shape_mesh(shape, 0);
                println!(
                    "  {:<12} {} vertices, {} triangles at depth 0",
                    shape.name(),
                    mesh.vertex_count(),
                    mesh.triangle_count()
                );
            }
        }
        Commands::Stats { shape, depth } => {
            let shape = Shape::from(shape);
            if shape == Shape::Sphere {
                // Show growth per pass up to the requested depth.
                for d in 0..=depth {
                    let mesh = shape_mesh(shape, d);
                    println!(
                        "depth {d}: {} vertices, {} triangles",
                        mesh.vertex_count(),
                        mesh.triangle_count()
                    );
                }
            }
            let mesh = shape_mesh(shape, depth);
            mesh.validate()
                .with_context(|| format!("{} failed validation", shape.name()))?;
            println!(
                "{}: {} vertices, {} triangles, valid",
                shape.name(),
                mesh.vertex_count(),
                mesh.triangle_count()
            );
        }
        Commands::Export {
            shape,
            depth,
            output,
        } => {
            let shape = Shape::from(shape);
            let mesh = shape_mesh(shape, depth);
            mesh.validate()
                .with_context(|| format!("{} failed validation", shape.name()))?;
            let file = File::create(&output)
                .with_context(|| format!("creating {}", output.display()))?;
            serde_json::to_writer(BufWriter::new(file), &mesh)?;
            tracing::info!(
                "wrote {} ({} vertices, {} triangles) to {}",
                shape.name(),
                mesh.vertex_count(),
                mesh.triangle_count(),
                output.display()
            );
        }
        Commands::View => {
            let scene = Scene::demo();
            let renderer = DebugTextRenderer::new();
            print!("{}", renderer.render(&scene, &RenderView::default()));
        }
    }

    Ok(())
}
