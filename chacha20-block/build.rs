fn main() {
    if let Ok(backend) = std::env::var("CARGO_CFG_CHACHA20_BACKEND") {
        if backend != "soft" {
            println!(
                "cargo:warning=unknown `chacha20_backend` value `{backend}`; falling back to the autodetected backend"
            );
        }
    }
}
