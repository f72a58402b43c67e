//! Generate command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use murk_core::{encode, Captcha, RenderConfig, TtfBackend};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

#[derive(Args)]
pub struct GenerateArgs {
    /// Output path; the extension selects PNG, anything else is JPEG
    #[arg(short, long, default_value = "captcha.jpg")]
    pub out: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 175)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 50)]
    pub height: u32,

    /// Passphrase to encode (a random hexadecimal one when omitted)
    #[arg(short, long)]
    pub passphrase: Option<String>,

    /// Line strokes behind the text layer
    #[arg(long, default_value_t = 3)]
    pub back: u32,

    /// Line strokes over the text layer
    #[arg(long, default_value_t = 2)]
    pub front: u32,

    /// JPEG quality (0-100)
    #[arg(short, long, default_value_t = 100)]
    pub quality: u8,

    /// Extra TTF font files appended to the builtin set (repeatable)
    #[arg(long = "font", value_name = "TTF")]
    pub fonts: Vec<PathBuf>,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print an inline data URI instead of writing a file
    #[arg(long)]
    pub data_uri: bool,
}

/// Execute the generate command.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = RenderConfig::default()
        .with_dimensions(args.width, args.height)
        .with_quality(args.quality)
        .with_lines_back(args.back)
        .with_lines_front(args.front);

    let mut captcha = match args.passphrase {
        Some(passphrase) => Captcha::new(passphrase),
        None => Captcha::random(&mut rng),
    }
    .with_config(config);
    captcha.add_fonts(args.fonts);

    debug!(
        fonts = captcha.fonts().len(),
        back = args.back,
        front = args.front,
        "Rendering captcha"
    );
    let buffer = captcha.build(&mut rng, &TtfBackend::new())?;
    info!(
        width = buffer.width(),
        height = buffer.height(),
        "Rendered captcha"
    );

    if args.data_uri {
        println!("{}", encode::to_data_uri(&buffer, args.quality)?);
    } else {
        let bytes = match args.out.extension().and_then(|e| e.to_str()) {
            Some("png") => encode::to_png(&buffer)?,
            _ => encode::to_jpeg(&buffer, args.quality)?,
        };
        std::fs::write(&args.out, bytes)
            .with_context(|| format!("Failed to write image: {}", args.out.display()))?;
        println!(
            "{} {}",
            "Captcha written to".green(),
            args.out.display().to_string().bold()
        );
    }
    println!("{} {}", "Passphrase:".dimmed(), captcha.passphrase().bold());

    Ok(())
}
