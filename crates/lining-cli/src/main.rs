//! lining CLI - tools for tunnel-lining project files
//!
//! Exposes the ring update operation and a project summary over JSON
//! project files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lining_math::{Frame, Point3, Vec3};
use lining_schema::Project;
use lining_update::{apply_ring_update, RingUpdate};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lining")]
#[command(about = "Tools for precast tunnel-lining project files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Patch ring parameters and build-position planes on the first ring
    Update {
        /// Input project JSON file (`-` reads stdin)
        input: PathBuf,
        /// Maximum ring width [mm]
        #[arg(long)]
        b_max: f64,
        /// Minimum ring width [mm]
        #[arg(long)]
        b_min: f64,
        /// Taper angle [deg]
        #[arg(long)]
        taper_angle: f64,
        /// Extrados diameter [m]
        #[arg(long)]
        dia_ext: f64,
        /// Intrados diameter [m]
        #[arg(long)]
        dia_int: f64,
        /// Build-position pitch angle [deg]
        #[arg(long)]
        pitch_angle: f64,
        /// Leading ringbuild frame as "ox,oy,oz;xx,xy,xz;yx,yy,yz"
        #[arg(long, value_parser = parse_frame)]
        leading: Frame,
        /// Trailing ringbuild frame as "ox,oy,oz;xx,xy,xz;yx,yy,yz"
        #[arg(long, value_parser = parse_frame)]
        trailing: Frame,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Display information about a project file
    Info {
        /// Path to the project JSON file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Update {
            input,
            b_max,
            b_min,
            taper_angle,
            dia_ext,
            dia_int,
            pitch_angle,
            leading,
            trailing,
            output,
        } => {
            let text = read_input(&input)?;
            let update = RingUpdate {
                b_max,
                b_min,
                taper_angle,
                dia_ext,
                dia_int,
                pitch_angle,
                uvw_leading: leading,
                uvw_trailing: trailing,
            };
            let updated = apply_ring_update(&text, &update)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, updated)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Updated project written to {}", path.display());
                }
                None => println!("{updated}"),
            }
        }
        Commands::Info { file } => {
            let text = read_input(&file)?;
            show_info(&text)?;
        }
    }

    Ok(())
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn show_info(text: &str) -> Result<()> {
    let proj = Project::from_json(text)?;
    println!("Job:     {}", proj.job_number);
    println!("Project: {}", proj.project_name);
    println!("Rings:   {}", proj.ring.len());
    for ring in &proj.ring {
        let positions = ring
            .build_pos
            .as_ref()
            .map(|bp| bp.qty.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  ring {} `{}` ({}): {} segments, {} build positions",
            ring.id,
            ring.name,
            ring.ring_type,
            ring.segment.len(),
            positions
        );
    }
    Ok(())
}

/// Parse a frame given as three semicolon-separated `"x,y,z"` triples:
/// origin, X axis, Y axis.
fn parse_frame(text: &str) -> Result<Frame, String> {
    let parts: Vec<&str> = text.split(';').collect();
    if parts.len() != 3 {
        return Err(format!(
            "expected 3 semicolon-separated triples (origin;x-axis;y-axis), found {}",
            parts.len()
        ));
    }
    let origin = lining_math::parse_components(parts[0]).map_err(|e| e.to_string())?;
    let x_axis = lining_math::parse_components(parts[1]).map_err(|e| e.to_string())?;
    let y_axis = lining_math::parse_components(parts[2]).map_err(|e| e.to_string())?;
    Ok(Frame::new(
        Point3::new(origin[0], origin[1], origin[2]),
        Vec3::new(x_axis[0], x_axis[1], x_axis[2]),
        Vec3::new(y_axis[0], y_axis[1], y_axis[2]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_frame_triples() {
        let frame = parse_frame("0,0,0;1,0,0;0,1,0").unwrap();
        assert_eq!(frame, Frame::identity());
    }

    #[test]
    fn parse_frame_rejects_bad_shapes() {
        assert!(parse_frame("0,0,0;1,0,0").is_err());
        assert!(parse_frame("0,0;1,0,0;0,1,0").is_err());
        assert!(parse_frame("a,b,c;1,0,0;0,1,0").is_err());
    }
}
