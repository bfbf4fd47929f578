use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use carver::{Anchor, CanvasSource, Color, FontSource, Job, Outcome, Output, TextSource};
use clap::{ArgAction, CommandFactory as _, Parser, error::ErrorKind};
use tracing::Level;

/// Render lines of text over a PNG or JPEG image, or over a flat background color.
#[derive(Parser, Debug)]
#[command(
    name = "carver",
    version,
    override_usage = "carver -t <TEXT> [-i image.png] -o out.png\n       carver -n -t <TEXT>"
)]
struct Cli {
    /// Foreground color NRGBA in 8 hex digits, e.g. 0a0b0cff.
    #[arg(short = 'c', long = "color", default_value_t = carver::DEFAULT_FG, value_parser = Color::parse_hex)]
    fg: Color,

    /// Background color NRGBA in 8 hex digits, e.g. 0a0b0cff.
    #[arg(short = 'b', long = "background", default_value_t = carver::DEFAULT_BG, value_parser = Color::parse_hex)]
    bg: Color,

    /// Output PNG file.
    #[arg(short = 'o', long = "out", required_unless_present = "report")]
    out: Option<PathBuf>,

    /// Image file (PNG or JPEG) to use as canvas. Without it, text is rendered over the
    /// background color.
    #[arg(short = 'i', long = "in")]
    in_path: Option<PathBuf>,

    /// Text to render. If empty, read stdin.
    #[arg(short = 't', long)]
    text: Option<String>,

    /// Dots per inch.
    #[arg(short = 'd', long, default_value_t = carver::RenderConfig::DEFAULT_DPI)]
    dpi: f64,

    /// Font size in points.
    #[arg(short = 'p', long = "points", default_value_t = carver::RenderConfig::DEFAULT_SIZE_PT)]
    points: f64,

    /// A TTF/OTF font file. If absent, use the bundled DejaVu Sans Mono.
    #[arg(short = 'f', long)]
    font: Option<PathBuf>,

    /// Don't render; estimate and print the bounds as <width>x<height>.
    #[arg(short = 'n', long)]
    report: bool,

    /// Where to place text on a 3x3 grid: tl, tc, tr, cl, c, cr, bl, bc, br (tl = top left).
    #[arg(short = 'a', long, default_value_t = Anchor::TopLeft, value_parser = Anchor::parse)]
    anchor: Anchor,

    /// Fixed margin around the text, in pixels.
    #[arg(short = 'm', long, default_value_t = carver::RenderConfig::DEFAULT_MARGIN)]
    margin: u32,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_job(self) -> Job {
        let output = match (self.report, self.out) {
            (true, _) => Output::Report,
            (false, Some(path)) => Output::Png(path),
            (false, None) => exit_usage(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "an output file (-o) is required unless -n is given",
            )),
        };

        Job {
            text: TextSource::from_arg(self.text),
            font: FontSource::from_arg(self.font),
            size_pt: self.points,
            dpi: self.dpi,
            fg: self.fg,
            margin: self.margin,
            canvas: CanvasSource::from_arg(self.in_path, self.bg),
            anchor: self.anchor,
            output,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|e| exit_usage(e));
    init_tracing(cli.verbose);

    let job = cli.into_job();
    tracing::debug!(?job, "parsed arguments");

    match carver::run(&job).context("carve text")? {
        Outcome::Reported { width, height } => {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{width}x{height}").context("write report")?;
            stdout.flush().context("write report")?;
        }
        Outcome::Wrote(path) => tracing::info!("wrote {}", path.display()),
    }
    Ok(())
}

/// Print the parse error followed by usage and exit with status 2.
fn exit_usage(err: clap::Error) -> ! {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }
    let rendered = err.render().to_string();
    eprint!("{rendered}");
    if !rendered.contains("Usage:") {
        eprintln!("\n{}", Cli::command().render_usage());
    }
    std::process::exit(2);
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
