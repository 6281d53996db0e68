use {
	crate::config::TracingConfig,
	color_eyre::eyre::{self, WrapErr},
	std::io,
	tracing_subscriber::EnvFilter,
};

/// Installs a stderr subscriber so that stdout only ever carries reports.
pub(crate) fn init(config: &TracingConfig) -> eyre::Result<()>
{
	let filter = match config.filter.as_deref() {
		Some(directives) => EnvFilter::try_new(directives)
			.wrap_err_with(|| format!("invalid tracing filter `{directives}`"))?,
		None => EnvFilter::from_default_env(),
	};

	tracing_subscriber::fmt()
		.with_writer(io::stderr)
		.with_ansi(config.ansi)
		.with_env_filter(filter)
		.try_init()
		.map_err(|error| eyre::eyre!("failed to initialize logging: {error}"))
}
