use std::env;

/// Only keys with this prefix are forwarded from `.env` into the compile-time environment.
const FORWARDED_PREFIX: &str = "BRAINIUM_";

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=BRAINIUM_SCRIPT_URL");

    let Ok(entries) = dotenvy::from_filename_iter(".env") else {
        return;
    };

    for (key, value) in entries.flatten() {
        // Variables already present in the real environment win over `.env`
        if key.starts_with(FORWARDED_PREFIX) && env::var(&key).is_err() {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
