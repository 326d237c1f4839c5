// SPDX-License-Identifier: MPL-2.0
use iced_invite::app::{self, Flags};

/// Initialize diagnostic logging. Suppressed playback failures and photo
/// decode errors end up here and nowhere else.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,iced_invite=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
    };

    app::run(flags)
}
