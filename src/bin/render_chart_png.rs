use std::fs::{self, File};
use std::path::PathBuf;

use window_graph::api::{ChartEngine, ChartEngineConfig, LabelFormatters};
use window_graph::core::{Viewport, WindowSize};
use window_graph::render::CairoRenderer;
use window_graph::visual::{BarStyleConfig, LineStyleConfig, VisualStyleConfig};

const DEFAULT_SAMPLES: [f64; 12] = [
    5.0, 11.0, 22.0, 98.0, 32.0, 69.0, 88.0, 45.0, 52.0, 36.0, 1.0, 73.0,
];
const DEFAULT_OUTPUT_DIR: &str = "target/window_graph_png";
const MARGIN_PX: f64 = 40.0;

#[derive(Debug)]
struct CliArgs {
    output_dir: PathBuf,
    samples: Vec<f64>,
    window: i64,
    viewport: Viewport,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let _ = window_graph::telemetry::init_default_tracing();
    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;

    let styles = [
        ("line", VisualStyleConfig::Line(LineStyleConfig::default())),
        ("bar", VisualStyleConfig::Bar(BarStyleConfig::default())),
    ];
    let formatters = LabelFormatters::default();
    let renderer = CairoRenderer::new(args.viewport, MARGIN_PX).map_err(|err| err.to_string())?;
    let mut engine = ChartEngine::new(renderer, ChartEngineConfig::new(args.viewport))
        .map_err(|err| err.to_string())?;

    for (name, style_config) in styles {
        let mut style = style_config.build().map_err(|err| err.to_string())?;
        engine
            .render(
                &args.samples,
                style.as_mut(),
                WindowSize::from(args.window),
                &formatters,
            )
            .map_err(|err| format!("{name} render failed: {err}"))?;

        let path = args.output_dir.join(format!("{name}.png"));
        let mut file = File::create(&path)
            .map_err(|err| format!("failed to create `{}`: {err}", path.display()))?;
        engine
            .renderer_mut()
            .write_png(&mut file)
            .map_err(|err| err.to_string())?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut samples = DEFAULT_SAMPLES.to_vec();
    let mut window: i64 = -1;
    let mut viewport = Viewport::new(600.0, 300.0);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--samples" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --samples".to_owned())?;
                samples = value
                    .split(',')
                    .map(|raw| {
                        raw.trim()
                            .parse::<f64>()
                            .map_err(|err| format!("invalid sample `{raw}`: {err}"))
                    })
                    .collect::<Result<_, _>>()?;
            }
            "--window" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --window".to_owned())?;
                window = value
                    .parse::<i64>()
                    .map_err(|err| format!("invalid window `{value}`: {err}"))?;
            }
            "--size" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --size".to_owned())?;
                let (width, height) = value
                    .split_once('x')
                    .ok_or_else(|| format!("size `{value}` must look like WIDTHxHEIGHT"))?;
                viewport = Viewport::new(
                    width
                        .parse::<f64>()
                        .map_err(|err| format!("invalid width `{width}`: {err}"))?,
                    height
                        .parse::<f64>()
                        .map_err(|err| format!("invalid height `{height}`: {err}"))?,
                );
            }
            "--help" | "-h" => {
                println!(
                    "usage: render_chart_png [--output-dir DIR] [--samples 1,2,3] [--window N] [--size WxH]"
                );
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    Ok(CliArgs {
        output_dir,
        samples,
        window,
        viewport,
    })
}
