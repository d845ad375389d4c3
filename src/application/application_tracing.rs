use super::ApplicationEnv;
use tracing::{level_filters::LevelFilter, Subscriber};
use tracing_subscriber::{
    filter::EnvFilter, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, Layer,
};

pub fn setup_tracing(env: &ApplicationEnv) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(file_layer(env))
        .with(console_layer()?)
        .init();

    Ok(())
}

fn console_layer<S>() -> anyhow::Result<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(filter);

    Ok(layer)
}

///
/// Bookings are audited from the log files, so the file layer is not
/// filtered by RUST_LOG
///
fn file_layer<S>(env: &ApplicationEnv) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let appender = tracing_appender::rolling::daily(&env.log_directory, &env.log_filename);

    tracing_subscriber::fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
}
