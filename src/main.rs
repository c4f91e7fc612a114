use iced_drift::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        sensitivity: args.opt_value_from_str("--sensitivity").unwrap(),
        toggle_ms: args.opt_value_from_str("--toggle-ms").unwrap(),
    };

    app::run(flags)
}
