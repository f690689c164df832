fn main() {
    if let Err(e) = talendroutine::logging::init() {
        eprintln!("Warning: {}", e);
    }
    talendroutine::app::cli::run();
}
