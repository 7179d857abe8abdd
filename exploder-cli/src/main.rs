use clap::Parser;
use exploder::io::save_surface;
use exploder::{Cutter, CutterSettings, PositionedSubImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/settings.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Cut a sprite sheet into named sub-images")]
struct Cli {
    /// Sprite sheet to cut; its `.cfg` is looked up in the exploder directory.
    #[arg(value_name = "SHEET", required_unless_present = "print_example")]
    sheet: Option<PathBuf>,
    /// Directory the sub-images are written to.
    #[arg(value_name = "DEST", default_value = ".")]
    dest: PathBuf,
    /// JSON settings file; command line flags take precedence.
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,
    /// Game data root; masks and configurations are found under it.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Directory of mask images.
    #[arg(long, value_name = "DIR")]
    mask_dir: Option<PathBuf>,
    /// Directory of cutting configurations.
    #[arg(long, value_name = "DIR")]
    exploder_dir: Option<PathBuf>,
    /// Report every mask and sub-image.
    #[arg(short, long)]
    verbose: bool,
    /// Write a JSON manifest of the cut sub-images.
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,
    /// Print an example settings file and exit.
    #[arg(long)]
    print_example: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsJson {
    data_dir: Option<PathBuf>,
    mask_dir: Option<PathBuf>,
    exploder_dir: Option<PathBuf>,
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct ManifestRecord {
    name: String,
    x: i64,
    y: i64,
    width: usize,
    height: usize,
    mask: String,
}

impl From<&PositionedSubImage> for ManifestRecord {
    fn from(value: &PositionedSubImage) -> Self {
        Self {
            name: value.name.clone(),
            x: value.x,
            y: value.y,
            width: value.image.width(),
            height: value.image.height(),
            mask: value.mask.filename.display().to_string(),
        }
    }
}

fn resolve_settings(cli: &Cli, file: SettingsJson) -> CutterSettings {
    let data_dir = cli
        .data_dir
        .clone()
        .or(file.data_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut settings = CutterSettings::from_data_dir(data_dir);
    if let Some(dir) = cli.mask_dir.clone().or(file.mask_dir) {
        settings = settings.with_mask_dir(dir);
    }
    if let Some(dir) = cli.exploder_dir.clone().or(file.exploder_dir) {
        settings = settings.with_exploder_dir(dir);
    }
    settings.with_verbose(cli.verbose || file.verbose)
}

/// Maps a part name to `<dest>/<name>.png`.
///
/// Names are file names, not paths: separators, `..` and absolute forms are
/// rejected so a configuration cannot write outside `dest`.
fn output_path(dest: &Path, name: &str) -> Result<PathBuf, String> {
    let plain = !matches!(name, "" | "." | "..") && !name.contains(['/', '\\']);
    let file = format!("{name}.png");
    let mut components = Path::new(&file).components();
    match (plain, components.next(), components.next()) {
        (true, Some(Component::Normal(_)), None) => Ok(dest.join(file)),
        _ => Err(format!("part name {name:?} is not a plain file name")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let file = match &cli.settings {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => SettingsJson::default(),
    };
    let settings = resolve_settings(&cli, file);

    if settings.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("exploder=info".parse()?))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let sheet = cli.sheet.as_ref().ok_or("a sprite sheet must be given")?;
    let mut cutter = Cutter::new(settings);
    let parts = cutter.cut_file(sheet)?;

    let outputs = parts
        .iter()
        .map(|(name, part)| Ok((output_path(&cli.dest, name)?, part)))
        .collect::<Result<Vec<_>, String>>()?;
    fs::create_dir_all(&cli.dest)?;
    for (path, part) in outputs {
        save_surface(&path, &part.image)?;
    }
    tracing::info!(count = parts.len(), dest = %cli.dest.display(), "sub-images written");

    if let Some(path) = &cli.manifest {
        let records: Vec<ManifestRecord> = parts.values().map(ManifestRecord::from).collect();
        fs::write(path, serde_json::to_string_pretty(&records)?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{output_path, resolve_settings, Cli, SettingsJson};
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn flags_override_settings_file() {
        let cli = Cli::parse_from([
            "exploder-cutter",
            "sheet_grass.png",
            "--mask-dir",
            "/masks",
            "-v",
        ]);
        let file = SettingsJson {
            data_dir: Some("/data".into()),
            mask_dir: Some("/ignored".into()),
            exploder_dir: None,
            verbose: false,
        };
        let settings = resolve_settings(&cli, file);
        assert_eq!(settings.mask_dir, Path::new("/masks"));
        assert_eq!(settings.exploder_dir, Path::new("/data/data/tools/exploder"));
        assert!(settings.verbose);
    }

    #[test]
    fn part_names_stay_inside_destination() {
        let dest = Path::new("out");
        assert_eq!(
            output_path(dest, "grass-n").unwrap(),
            Path::new("out/grass-n.png")
        );
        for name in ["../x", "/abs/x", "a/b", "a\\b", "..", "."] {
            assert!(output_path(dest, name).is_err(), "{name}");
        }
    }

    #[test]
    fn example_settings_parse() {
        let file: SettingsJson = serde_json::from_str(super::EXAMPLE_JSON).unwrap();
        assert_eq!(file.data_dir.as_deref(), Some(Path::new("/usr/share/game")));
        assert!(!file.verbose);
    }
}
