use std::process;

fn main() {
    if let Err(e) = archemap::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
