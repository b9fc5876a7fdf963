use pagetoc::cli;

fn main() {
    cli::run();
}
