use anyhow::{bail, Context};
use gmap_overlay::{
    core::coerce::px_from_str, DefaultResolver, IconOptions, MapObject, MarkerIcon, ResolverConfig,
};

const USAGE: &str = "usage: gmap-icon <source> [--width N] [--height N] [--anchor-x N] \
[--anchor-y N] [--origin-x N] [--origin-y N] [--base-dir DIR] [--local] [--pretty]";

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    source: String,
    options: IconOptions,
    config: ResolverConfig,
    pretty: bool,
}

fn next_px(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<i32> {
    let raw = args
        .next()
        .with_context(|| format!("{} expects a value", flag))?;
    Ok(px_from_str(&raw))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    let mut source = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--width" => parsed.options.width = Some(next_px(&mut args, &arg)?),
            "--height" => parsed.options.height = Some(next_px(&mut args, &arg)?),
            "--anchor-x" => parsed.options.anchor_x = Some(next_px(&mut args, &arg)?),
            "--anchor-y" => parsed.options.anchor_y = Some(next_px(&mut args, &arg)?),
            "--origin-x" => parsed.options.origin_x = Some(next_px(&mut args, &arg)?),
            "--origin-y" => parsed.options.origin_y = Some(next_px(&mut args, &arg)?),
            "--base-dir" => {
                let dir = args.next().context("--base-dir expects a directory")?;
                parsed.config = parsed.config.with_base_dir(dir);
            }
            "--local" => parsed.config = parsed.config.with_remote(false),
            "--pretty" => parsed.pretty = true,
            "-h" | "--help" => bail!("{}", USAGE),
            flag if flag.starts_with("--") => bail!("unknown flag {}\n{}", flag, USAGE),
            _ if source.is_none() => source = Some(arg.clone()),
            _ => bail!("unexpected argument {}\n{}", arg, USAGE),
        }
    }

    parsed.source = source.context(USAGE)?;
    Ok(parsed)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    log::debug!("Probing {} with {:?}", args.source, args.options);

    let resolver = DefaultResolver::new(args.config)?;
    let icon = MarkerIcon::create_with(&resolver, args.source, args.options)?;

    let output = if args.pretty {
        icon.to_json_pretty()?
    } else {
        icon.to_json()?
    };
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_source_and_options() {
        let parsed = parse_args(args(&["pin.png", "--width", "30", "--anchor-y", "29.5", "--pretty"]))
            .unwrap();

        assert_eq!(parsed.source, "pin.png");
        assert_eq!(parsed.options.width, Some(30));
        assert_eq!(parsed.options.anchor_y, Some(29));
        assert_eq!(parsed.options.height, None);
        assert!(parsed.pretty);
    }

    #[test]
    fn test_parse_resolver_flags() {
        let parsed = parse_args(args(&["--local", "--base-dir", "/srv/icons", "pin.png"])).unwrap();
        assert!(!parsed.config.allow_remote);
        assert_eq!(
            parsed.config.base_dir.as_deref(),
            Some(std::path::Path::new("/srv/icons"))
        );
    }

    #[test]
    fn test_missing_source_fails() {
        assert!(parse_args(args(&["--width", "3"])).is_err());
    }

    #[test]
    fn test_missing_value_fails() {
        assert!(parse_args(args(&["pin.png", "--height"])).is_err());
    }
}
