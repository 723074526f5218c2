use scatter_plot::PlotConfig;

fn main() -> Result<(), scatter_plot::Error> {
    // Set up logging; RUST_LOG controls verbosity
    env_logger::init();

    // Run the scatter plot window
    let config = PlotConfig::from_env().inspect_err(|err| log::error!("{err}"))?;
    scatter_plot::run_app(config).inspect_err(|err| log::error!("{err}"))
}
