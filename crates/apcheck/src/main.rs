//! Entrypoint.

fn main() {
    if let Err(err) = apcheck::initialize_command_line() {
        eprintln!("ERROR: {:?}", err);
        std::process::exit(1);
    }
}
