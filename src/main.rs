fn main() {
    loadout::app::cli::run();
}
