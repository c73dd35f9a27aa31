fn main() {
    modgen::app::cli::run();
}
