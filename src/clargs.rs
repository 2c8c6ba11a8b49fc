use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about=None)]
pub(crate) struct PixgridArgs {
    /// Path to a display options JSON file
    #[arg(short, long)]
    pub options: Option<String>,

    /// Number of pixel columns in the grid
    #[arg(short = 'x', long)]
    pub columns: Option<usize>,

    /// Number of pixel rows in the grid
    #[arg(short = 'y', long)]
    pub rows: Option<usize>,

    /// Edge length of a single pixel cell, in points
    #[arg(short, long)]
    pub pixel_size: Option<f32>,

    /// Fill color behind the pixel grid (hex, e.g. "#000000")
    #[arg(long)]
    pub background_color: Option<String>,

    /// Border color around each pixel cell (hex)
    #[arg(long)]
    pub border_color: Option<String>,

    /// Border thickness around each pixel cell (e.g. "1px")
    #[arg(long)]
    pub border_size: Option<String>,

    /// Color of a pixel in the on state (hex)
    #[arg(long)]
    pub pixel_on_color: Option<String>,

    /// Color of a pixel in the off state (hex)
    #[arg(long)]
    pub pixel_off_color: Option<String>,

    /// Path to a pixel state JSON file to load at startup and save to
    #[arg(short, long)]
    pub state: Option<String>,

    /// Render a single PNG of the grid to this path and exit
    #[arg(long)]
    pub snapshot: Option<String>,
}
