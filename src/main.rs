use groundchain::Device;

fn main() {
    #[cfg(feature = "cli")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cable = Device::default();
    println!("{}", cable.noise_temperature());
}
