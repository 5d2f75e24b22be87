use clap::Parser;
use img2mesh::convert;
use img2mesh::convert::DEFAULT_MODEL_URL;
use img2mesh::utils::{logger, validation};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convert")]
#[command(about = "Offline image to OBJ mesh conversion using the pretrained depth model")]
struct Args {
    /// Input image (jpg/png)
    #[arg(short, long)]
    input: PathBuf,

    /// Output OBJ path
    #[arg(short, long)]
    output: PathBuf,

    /// Local path for the ONNX depth model
    #[arg(long, default_value = "./models/midas_v21_small.onnx")]
    model_path: PathBuf,

    /// Where to fetch the model when it is missing locally
    #[arg(long, default_value = DEFAULT_MODEL_URL)]
    model_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting offline depth-to-mesh conversion");

    if let Err(e) = validation::validate_url("model_url", &args.model_url) {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = convert::fetch_model(&args.model_url, &args.model_path).await {
        tracing::error!("❌ Model download failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    match convert::convert_image(&args.model_path, &args.input, &args.output) {
        Ok(()) => {
            tracing::info!("✅ Conversion completed successfully!");
            println!("✅ Conversion completed successfully!");
            println!("📁 Mesh saved to: {}", args.output.display());
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
