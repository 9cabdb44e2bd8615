use miette::Result;

/// Main entry point for the jsongraph CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    jsongraph::run()
}
