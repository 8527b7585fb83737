// SPDX-License-Identifier: MPL-2.0
use iced_tilt::app::{self, config, Flags};
use iced_tilt::domain::card::CardPreset;

const HELP: &str = "\
Drag-to-tilt 3D card

USAGE:
  iced_tilt [OPTIONS]

OPTIONS:
  --preset <NAME>      Card preset: component | showcase
  --max-angle <DEG>    Maximum tilt in degrees
  --config-dir <PATH>  Directory holding settings.toml
  --save-config        Store --preset and --max-angle in settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  ICED_TILT_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG              Log filter, e.g. RUST_LOG=iced_tilt=debug
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        preset: args.opt_value_from_str::<_, CardPreset>("--preset")?,
        max_angle: args.opt_value_from_fn("--max-angle", |raw| {
            raw.parse::<f32>()
                .map_err(|err| err.to_string())
                .and_then(|degrees| config::checked_max_angle(degrees).map_err(|err| err.to_string()))
        })?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        save_config: args.contains("--save-config"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::init();

    match parse_args() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
