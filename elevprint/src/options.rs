use anyhow::{anyhow, Error as AnyError};
use clap::{Args, Parser, Subcommand};
use mesh::Axis;
use std::{path::PathBuf, str::FromStr};

/// Turn elevation profiles into 3D printable meshes and laser cut
/// outlines.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of evenly spaced samples to resample the profile to.
    #[arg(short = 'n', long, default_value_t = 180)]
    pub points: usize,

    /// Height of the lowest point, in mm.
    #[arg(long, default_value_t = 10.0)]
    pub min_height: f64,

    /// Height difference between the lowest and highest points, in mm.
    #[arg(long, default_value_t = 30.0)]
    pub multiplier: f64,

    /// Total width of the model, in mm.
    #[arg(short, long, default_value_t = 180.0)]
    pub width: f64,

    /// JSON elevation profile, either an array of elevations or an
    /// array of `{"location": [lon, lat], "elevation": e}` objects.
    pub input: PathBuf,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write an ASCII STL mesh for 3D printing.
    Stl(Stl),

    /// Write SVG cut lines for laser cutting.
    Svg {
        /// SVG file path.
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Plot the normalized profile to the terminal.
    Plot,
}

#[derive(Debug, Clone, Args)]
pub struct Stl {
    /// STL file path.
    #[arg(short, long)]
    pub out: PathBuf,

    /// Depth of the bars, in mm.
    #[arg(short, long, default_value_t = 30.0)]
    pub thickness: f64,

    /// Axis to lay the bars out along, "x" or "y" (or 0, 1).
    #[arg(short, long, default_value = "x")]
    pub along: AxisArg,

    /// Additional parallel copies of the profile.
    #[arg(short, long, default_value_t = 0)]
    pub copies: usize,

    /// Distance between parallel copies, in mm (defaults to the
    /// thickness, leaving no gap).
    #[arg(short, long)]
    pub spacing: Option<f64>,

    /// Shift the finished model along x, in mm.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub move_x: f64,

    /// Shift the finished model along y, in mm.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub move_y: f64,
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct AxisArg(pub Axis);

impl FromStr for AxisArg {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let axis = match s.trim().to_ascii_lowercase().as_str() {
            "x" => Axis::X,
            "y" => Axis::Y,
            other => {
                let raw = usize::from_str(other).map_err(|_| anyhow!("not a valid axis: {s}"))?;
                Axis::try_from(raw)?
            }
        };
        Ok(Self(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisArg, Cli, Command};
    use clap::Parser;
    use mesh::Axis;

    #[test]
    fn test_axis_arg() {
        assert_eq!("x".parse::<AxisArg>().unwrap(), AxisArg(Axis::X));
        assert_eq!("Y".parse::<AxisArg>().unwrap(), AxisArg(Axis::Y));
        assert_eq!("1".parse::<AxisArg>().unwrap(), AxisArg(Axis::Y));
        assert!("2".parse::<AxisArg>().is_err());
        assert!("z".parse::<AxisArg>().is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["elevprint", "hike.json", "stl", "--out", "hike.stl"]);
        assert_eq!(cli.points, 180);
        assert_eq!(cli.min_height, 10.0);
        assert_eq!(cli.multiplier, 30.0);
        assert_eq!(cli.width, 180.0);
        let Command::Stl(stl) = cli.cmd else {
            panic!("expected stl subcommand");
        };
        assert_eq!(stl.thickness, 30.0);
        assert_eq!(stl.along, AxisArg(Axis::X));
        assert_eq!(stl.copies, 0);
        assert_eq!(stl.spacing, None);
    }

    #[test]
    fn test_cli_stl_options() {
        let cli = Cli::parse_from([
            "elevprint", "-n", "50", "hike.json", "stl", "-o", "hike.stl", "--along", "y",
            "--copies", "3", "--spacing", "40", "--move-x", "-5",
        ]);
        assert_eq!(cli.points, 50);
        let Command::Stl(stl) = cli.cmd else {
            panic!("expected stl subcommand");
        };
        assert_eq!(stl.along, AxisArg(Axis::Y));
        assert_eq!(stl.copies, 3);
        assert_eq!(stl.spacing, Some(40.0));
        assert_eq!(stl.move_x, -5.0);
    }
}
