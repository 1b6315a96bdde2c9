// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};

const HELP: &str = "\
IcedGallery - tag-based image gallery client

USAGE:
  iced_gallery [--server URL]

OPTIONS:
  --server URL   Base URL of the gallery backend
                 (overrides the configured server for this session)
  -h, --help     Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    let flags = Flags {
        server: args.opt_value_from_str("--server").unwrap_or(None),
    };

    app::run(flags)
}
