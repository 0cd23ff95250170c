//! Generates the iOS app icon set into `./AppIcons`.
//!
//! ```shell
//! appicon path/to/source.png
//! # or, to generate a placeholder icon set:
//! appicon
//! ```
//!
//! Set `RUST_LOG=debug` for diagnostics (chosen font, resize steps).

use anyhow::Context;
use appicon::{generate_icons, Event, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "appicon",
    version,
    about = "Generate the iOS app icon sizes and Contents.json from one image"
)]
struct Args {
    /// Source image, ideally 1024x1024.  If omitted or missing, a
    /// placeholder icon is generated instead.
    #[arg(value_name = "SOURCE")]
    source: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();
    let args = Args::parse();

    match run(args.source.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(source: Option<&Path>) -> anyhow::Result<()> {
    let out_dir = Path::new(DEFAULT_OUTPUT_DIR);
    generate_icons(source, out_dir, |event| println!("{}", progress_line(&event)))
        .with_context(|| format!("failed to generate icons in '{}'", out_dir.display()))?;
    println!("{}", closing_message(out_dir));
    Ok(())
}

/// The line printed for each progress event.
fn progress_line(event: &Event) -> String {
    match event {
        Event::PlaceholderCreated { .. } => {
            "No source image found. Creating placeholder icon...".to_string()
        }
        Event::IconWritten { size, .. } => {
            format!("Created {} ({})", size.filename(), size)
        }
    }
}

/// Import instructions printed after a successful run.
fn closing_message(out_dir: &Path) -> String {
    format!(
        "\nIcons generated in '{dir}' directory\n\
         To use in Xcode:\n\
         1. Open Assets.xcassets\n\
         2. Right-click and choose 'Import...'\n\
         3. Select the {dir} folder",
        dir = out_dir.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use appicon::IconSize;

    #[test]
    fn progress_lines() {
        let placeholder = Event::PlaceholderCreated {
            path: PathBuf::from("AppIcons/Icon-1024.png"),
        };
        assert_eq!(
            progress_line(&placeholder),
            "No source image found. Creating placeholder icon..."
        );
        let written = Event::IconWritten {
            size: IconSize::Px87,
            path: PathBuf::from("AppIcons/Icon-87.png"),
        };
        assert_eq!(progress_line(&written), "Created Icon-87.png (87x87)");
    }

    #[test]
    fn closing_message_names_the_output_directory() {
        assert_eq!(
            closing_message(Path::new(DEFAULT_OUTPUT_DIR)),
            "\nIcons generated in 'AppIcons' directory\n\
             To use in Xcode:\n\
             1. Open Assets.xcassets\n\
             2. Right-click and choose 'Import...'\n\
             3. Select the AppIcons folder"
        );
    }

    #[test]
    fn no_arguments_and_one_source_parse() {
        assert_eq!(Args::try_parse_from(["appicon"]).unwrap().source, None);
        let args = Args::try_parse_from(["appicon", "logo.png"]).unwrap();
        assert_eq!(args.source, Some(PathBuf::from("logo.png")));
        assert!(Args::try_parse_from(["appicon", "a.png", "b.png"]).is_err());
    }
}
