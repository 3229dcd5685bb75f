// main.rs - CLI entry point

use clinmatch::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    println!("🚀 {}", clinmatch::get_info());

    let plan = validate_args(&args)?;

    if args.dry_run {
        let features = load_feature_list(&plan.features_file)?;
        println!("✅ Dry run completed successfully");
        println!(
            "📋 {} features, {} clinical files, expression: {}",
            features.len(),
            plan.clinical_files.len(),
            plan.expression_file.display()
        );
        return Ok(());
    }

    run(&plan)?;
    Ok(())
}
