//! Diagnostic dump of an image's blue channel values and their LSBs,
//! handy for eyeballing where a blue-channel strategy left its marks.
//!
//! Usage: cargo run --example blue_matrix -- <image.png|bmp> [rows] [cols]

use std::env;
use std::process::exit;

use qrstego::media;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <image.png|bmp> [rows] [cols]", args[0]);
        exit(1);
    }

    let img = match media::load_carrier(&args[1]) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("Error loading {}: {e}", args[1]);
            exit(1);
        }
    };

    let rows = args
        .get(2)
        .and_then(|v| v.parse().ok())
        .unwrap_or(img.height())
        .min(img.height());
    let cols = args
        .get(3)
        .and_then(|v| v.parse().ok())
        .unwrap_or(img.width())
        .min(img.width());

    for y in 0..rows {
        let row: Vec<String> = (0..cols)
            .map(|x| {
                let blue = img.get_pixel(x, y).0[2];
                format!("{blue:3}|{}", blue & 1)
            })
            .collect();
        println!("{}", row.join(" "));
    }
}
