// SPDX-License-Identifier: MPL-2.0
use iced_dropzone::app::{self, Flags};
use iced_dropzone::config::paths;
use iced_dropzone::logging;

const USAGE: &str = "\
Usage: iced_dropzone [OPTIONS]

Options:
  --formats <LIST>     Accepted extensions, comma separated (e.g. jpg,jpeg,png)
  --error-ms <MS>      How long the invalid-file message stays visible
  --lang <LOCALE>      Interface language (e.g. en-US, fr)
  --config-dir <DIR>   Directory containing settings.toml
  -h, --help           Print this help";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        formats: args.opt_value_from_str("--formats")?,
        error_ms: args.opt_value_from_str("--error-ms")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
