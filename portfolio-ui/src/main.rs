fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(e) = portfolio_ui::boot() {
        log::error!("page enhancements failed to start: {e}");
    }
}
