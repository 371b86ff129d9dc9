use std::env;

const MCU: &str = "atmega328p";
const MCU_FREQ_HZ: u32 = 16_000_000;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ={}", MCU_FREQ_HZ);

    // Host builds run the simulator and need no board setup
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    if arch != "avr" {
        return;
    }

    println!("cargo:rustc-link-arg=-mmcu={}", MCU);
    println!(
        "cargo:warning=Building for {} at {} MHz",
        MCU,
        MCU_FREQ_HZ / 1_000_000
    );
}
