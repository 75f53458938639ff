fn main() {
    bss_advisor::cli::run();
}
