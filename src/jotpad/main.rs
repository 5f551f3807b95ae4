mod args;
mod cli;

fn main() {
    // Failures are already reported on stdout by `cli::run`; this only maps
    // them onto the exit code.
    if cli::run().is_err() {
        std::process::exit(1);
    }
}
