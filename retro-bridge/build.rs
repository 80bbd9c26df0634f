use std::env;

/// Size of the stack buffer the log trampoline formats into, terminator included.
const DEFAULT_LOG_BUFFER_SIZE: usize = 4096;

fn log_buffer_size() -> usize {
    println!("cargo:rerun-if-env-changed=RETRO_BRIDGE_LOG_BUFFER_SIZE");

    match env::var("RETRO_BRIDGE_LOG_BUFFER_SIZE") {
        Ok(value) => {
            let size: usize = value
                .trim()
                .parse()
                .expect("RETRO_BRIDGE_LOG_BUFFER_SIZE must be an unsigned integer");

            // One byte of text plus the terminator
            assert!(size >= 2, "RETRO_BRIDGE_LOG_BUFFER_SIZE must be at least 2");

            size
        }
        Err(_) => DEFAULT_LOG_BUFFER_SIZE,
    }
}

fn main() {
    println!("cargo:rerun-if-changed=csrc/log_trampoline.c");

    let size = log_buffer_size();

    cc::Build::new()
        .file("csrc/log_trampoline.c")
        .define("RETRO_BRIDGE_LOG_BUFFER_SIZE", Some(size.to_string().as_str()))
        .warnings(true)
        .compile("retro_bridge_log");

    // Shared with the Rust side so both agree on the truncation length
    println!("cargo:rustc-env=RETRO_BRIDGE_LOG_BUFFER_SIZE={size}");
}
