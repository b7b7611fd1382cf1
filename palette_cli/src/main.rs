use anyhow::Context;
use log::info;
use std::env;

fn print_help() {
    println!(
        r#"Catppuccin TFT_eSPI header generator

            Usage:
            palette_cli

            Writes RGB565 #define headers for every Catppuccin flavour into
            ./{dir}/:
              {combined}   (all flavours, prefixed names)
              <Flavour>Catppuccin_TFT_eSPI.h       (one flavour, short names)

            Set RUST_LOG=debug for per-flavour output.
        "#,
        dir = palette_core::output::DEFAULT_OUTPUT_DIR,
        combined = palette_core::output::COMBINED_FILE_NAME,
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        print_help();
        anyhow::bail!("unexpected argument '{}'", args[1]);
    }

    let config = palette_core::GenerateConfig::catppuccin()?;
    info!(
        "palette_core {}: {} flavours -> {}",
        palette_core::version(),
        config.palettes.len(),
        config.output_dir.display()
    );

    let written = palette_core::generate_all(&config).with_context(|| {
        format!(
            "generate headers into '{}'",
            config.output_dir.display()
        )
    })?;

    println!("Wrote {} header files:", written.len());
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}
