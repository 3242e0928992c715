use std::process;

fn main() {
    if let Err(err) = fibbench::run() {
        eprintln!("fibbench: {err}");
        process::exit(1);
    }
}
