fn main() {
    outdir::app::cli::run();
}
