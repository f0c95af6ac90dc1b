// Build script: runs before compilation
// Configures the linker for ESP32-C6 embedded Rust

fn main() {
    // Load .env file for the banner text
    // Ignore errors if no .env exists (then the env var may be set directly)
    let _ = dotenvy::dotenv();

    // Forward the banner text to the Rust compiler
    // The value is baked into the binary at compile time.
    // An upstream substitution step provides BLINK_BANNER; without it a
    // neutral placeholder keeps the build self-contained.
    let banner =
        std::env::var("BLINK_BANNER").unwrap_or_else(|_| String::from("esp-blinky 1.0.0"));
    println!("cargo:rustc-env=BLINK_BANNER={}", banner);
    println!("cargo:rerun-if-env-changed=BLINK_BANNER");

    // Register a helpful error handler for linker errors
    linker_be_nice();

    // Add linker scripts:

    // 1. defmt.x - defmt logging support
    //    Defines the symbols for defmt's binary log format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 memory layout
    //    IMPORTANT: must come last
    //    Defines the flash/RAM layout and startup code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error handler: shows helpful hints on linker errors
// Invoked by the linker as "--error-handling-script"
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // When invoked by the linker (with error kind and symbol name)
    if args.len() > 1 {
        let kind = &args[1];
        let what = &args[2];

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and you have included `use defmt_rtt as _;`"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!(
                        "💡 No scheduler enabled. Make sure you have initialized `esp-rtos` or provided an external scheduler."
                    );
                    eprintln!();
                }
                _ => (),
            },
            // we don't have anything helpful for "missing-lib" yet
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
