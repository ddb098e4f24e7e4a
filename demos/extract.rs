//! Command-line demo for garment_colors
//!
//! Loads a product image from disk and prints the extracted dominant colors.

use garment_colors::{extract_dominant_colors, ExtractionConfig};
use std::{env, process};

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    let mut hint = None;
    let mut keep_background = false;
    let mut image_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--hint" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --hint requires a value");
                    process::exit(1);
                }
                hint = Some(args[i + 1].clone());
                i += 1;
            }
            "--keep-background" => {
                keep_background = true;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path.is_none() {
                    image_path = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(image_path) = image_path else {
        print_help(&args[0]);
        process::exit(1);
    };

    let raster = match image::open(&image_path) {
        Ok(image) => image.to_rgb8(),
        Err(err) => {
            eprintln!("Error: failed to load {image_path}: {err}");
            process::exit(1);
        }
    };

    let config = ExtractionConfig {
        remove_background: !keep_background,
        ..ExtractionConfig::default()
    };

    match extract_dominant_colors(&raster, hint.as_deref(), &config) {
        Ok(colors) if colors.is_empty() => {
            println!("No colors extracted");
        }
        Ok(colors) => {
            for color in colors {
                println!("{}  {:5.1}%", color.hex, color.probability * 100.0);
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    println!("Usage: {program} [--hint <garment-type>] [--keep-background] <image>");
    println!();
    println!("Options:");
    println!("  --hint <garment-type>  Category label driving the crop policy");
    println!("  --keep-background      Skip GrabCut foreground isolation");
}
