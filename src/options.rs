use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Arranges parts on a 3D printer build plate before slicing")]
pub struct Options {
    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Pack every object in a job file into a compact area, place that area on
    /// the build plate and print the resulting layout as JSON.
    Pack(PackOptions),

    /// Print the configuration read from a job file, with defaults filled in.
    ShowConfig(ShowConfigOptions),
}

#[derive(Debug, StructOpt)]
pub struct PackOptions {
    /// The path to the job file describing the printer and the objects to
    /// arrange.
    pub job: PathBuf,

    /// Where to write the layout. Defaults to stdout.
    #[structopt(long, short)]
    pub output: Option<PathBuf>,

    /// Gap to keep between neighboring objects. Overrides the job file.
    #[structopt(long)]
    pub spacing: Option<f64>,

    /// X position of the packed area on the build plate. If no offset is given
    /// here or in the job file, the packed area is centered on the plate.
    #[structopt(long, requires = "offset-y", allow_hyphen_values = true)]
    pub offset_x: Option<f64>,

    /// Y position of the packed area on the build plate.
    #[structopt(long, requires = "offset-x", allow_hyphen_values = true)]
    pub offset_y: Option<f64>,

    /// Fail instead of warning when the packed area doesn't fit on the build
    /// plate.
    #[structopt(long)]
    pub strict: bool,
}

#[derive(Debug, StructOpt)]
pub struct ShowConfigOptions {
    /// The path to the job file to read.
    pub job: PathBuf,
}
