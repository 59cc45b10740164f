// SPDX-License-Identifier: MPL-2.0
use iced_storefront::app::{self, paths, Flags};
use iced_storefront::logging;
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_storefront [OPTIONS] [SITE_DIR]

Arguments:
  SITE_DIR              Directory holding site.toml and images (default: .)

Options:
  --lang <LANG>         Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --category <NAME>     Open the catalog filtered to a category (e.g. #beef)
  -h, --help            Print this help
";

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!(%err, "invalid arguments");
            print!("{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let category = args.opt_value_from_str("--category")?;
    let site_dir = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    Ok(Flags {
        lang,
        site_dir,
        config_dir,
        category,
    })
}
