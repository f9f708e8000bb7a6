fn main() -> Result<(), Box<dyn std::error::Error>> {
    weaver_cli::run()
}
