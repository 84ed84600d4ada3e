fn main() {
    if let Err(e) = packedgo_jwt::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
