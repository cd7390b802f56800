//! Hide a QR code inside a carrier image, recover it and report the
//! distortion metrics.
//!
//! Usage: cargo run --example qr_roundtrip -- <carrier.png|bmp> <text> <out-dir>
//!
//! Writes `stego.png` and `recovered_qr.png` into <out-dir>.

use std::env;
use std::path::Path;
use std::process::exit;

use qrstego::api::{conceal, reveal};
use qrstego::{media, metrics, ChannelScope, EmbedStrategy};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <carrier.png|bmp> <text> <out-dir>", args[0]);
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  carrier  - Cover image, PNG or BMP");
        eprintln!("  text     - Text the hidden QR code encodes");
        eprintln!("  out-dir  - Directory for stego.png and recovered_qr.png");
        exit(1);
    }

    let carrier_path = Path::new(&args[1]);
    let text = &args[2];
    let out_dir = Path::new(&args[3]);
    let stego_path = out_dir.join("stego.png");
    let recovered_path = out_dir.join("recovered_qr.png");

    let strategy = EmbedStrategy::blue_channel();

    let receipt = match conceal::prepare()
        .with_qr_text(text)
        .with_qr_size((100, 100))
        .with_carrier(carrier_path)
        .with_strategy(strategy)
        .with_output(&stego_path)
        .execute()
    {
        Ok(receipt) => receipt,
        Err(e) => {
            eprintln!("Error concealing the QR code: {e}");
            exit(1);
        }
    };

    println!(
        "Hid a {}x{} QR plane ({} bits) in {}",
        receipt.plane_size.0,
        receipt.plane_size.1,
        receipt.bit_count,
        stego_path.display()
    );

    if let Err(e) = reveal::prepare()
        .from_stego(&stego_path)
        .with_receipt(&receipt)
        .with_output(&recovered_path)
        .execute()
    {
        eprintln!("Error revealing the QR code: {e}");
        exit(1);
    }

    println!("Recovered the QR plane into {}", recovered_path.display());

    let cover = media::load_carrier(carrier_path).expect("carrier was just readable");
    let stego = media::load_carrier(&stego_path).expect("stego image was just written");

    let mse = metrics::mse(&cover, &stego, ChannelScope::All).expect("dimensions match");
    let nmse = metrics::nmse(&cover, &stego, ChannelScope::All).expect("dimensions match");
    let differing = metrics::count_differing_pixels(&cover, &stego).expect("dimensions match");

    println!("MSE:  {mse}");
    println!("NMSE: {nmse}");
    println!(
        "{differing} of {} pixels differ between cover and stego",
        (cover.width() * cover.height())
    );
}
