use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, debug};

use slice_markers::config::FileConfig;
use slice_markers::domain::{SliceLimitKind, SlicePlane};
use slice_markers::marker::{Marker, Timestamp, markers_to_json_string, write_markers_json};

/// Build top and bottom slice-limit markers for a mapping slice
///
/// Examples:
///   # Slice between 0m and 1m around the origin of "odom"
///   slice-markers
///
///   # Larger square at the robot pose, written to a file
///   slice-markers --x 3.2 --y -1.0 --yaw-deg 45 --side-length 20 -o slices.json
///
///   # Use a config file
///   slice-markers --config my-slice.toml
#[derive(Parser, Debug)]
#[command(name = "slice-markers")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches slice-markers.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Global frame the markers are expressed in
    #[arg(long)]
    frame_id: Option<String>,

    /// Full side length of the visualized square
    #[arg(long)]
    side_length: Option<f32>,

    /// Height of the top slice limit
    #[arg(long, allow_hyphen_values = true)]
    top_height: Option<f32>,

    /// Height of the bottom slice limit
    #[arg(long, allow_hyphen_values = true)]
    bottom_height: Option<f32>,

    /// Plane center x in the global frame
    #[arg(long, allow_hyphen_values = true)]
    x: Option<f32>,

    /// Plane center y in the global frame
    #[arg(long, allow_hyphen_values = true)]
    y: Option<f32>,

    /// Plane center z in the global frame (has no visible effect on the markers)
    #[arg(long, allow_hyphen_values = true)]
    z: Option<f32>,

    /// Plane rotation about the global z axis, in degrees
    #[arg(long, allow_hyphen_values = true)]
    yaw_deg: Option<f32>,

    /// Output JSON file (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        FileConfig::from_path(config_path).context("Failed to load config file")?
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let frame_id = args.frame_id.clone().unwrap_or(file_config.frame_id);
    let side_length = args.side_length.unwrap_or(file_config.side_length);
    let top_height = args.top_height.unwrap_or(file_config.top_height);
    let bottom_height = args.bottom_height.unwrap_or(file_config.bottom_height);
    let output = args.output.clone().or(file_config.output);

    let mut pose = file_config.pose;
    for (axis, value) in [args.x, args.y, args.z].into_iter().enumerate() {
        if let Some(v) = value {
            pose.translation[axis] = v;
        }
    }
    if let Some(yaw_deg) = args.yaw_deg {
        pose.yaw_deg = yaw_deg;
    }
    let transform_g_pb = pose.to_transform();

    debug!(
        %frame_id,
        side_length,
        top_height,
        bottom_height,
        yaw_deg = pose.yaw_deg,
        translation = ?pose.translation,
        "building slice limit markers"
    );

    let timestamp = Timestamp::now();
    let markers: Vec<Marker> = [
        (top_height, SliceLimitKind::TopSliceLimit),
        (bottom_height, SliceLimitKind::BottomSliceLimit),
    ]
    .into_iter()
    .map(|(height, kind)| {
        SlicePlane::new(transform_g_pb, side_length, height, kind).to_marker(timestamp, &frame_id)
    })
    .collect();

    match output {
        Some(path) => {
            write_markers_json(&path, &markers).context("Failed to write markers")?;
            println!(
                "Wrote {} markers ({} triangles) to {}",
                markers.len(),
                markers.iter().map(Marker::triangle_count).sum::<usize>(),
                path.display()
            );
        }
        None => println!("{}", markers_to_json_string(&markers)?),
    }

    Ok(())
}
