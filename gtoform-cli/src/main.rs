use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use gtoform::{
    config::ConfigDialect,
    generation::{
        generate_family, write_boys_closed_form, write_boys_series, write_family, Dialect,
    },
    integrals::Family,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: GenerateCommand,

    /// Directory the generated files are written to
    #[arg(long, short, global = true, default_value = ".")]
    output_dir: PathBuf,

    /// A JSON file overriding parts of the default Fortran dialect
    #[arg(long, short, global = true)]
    dialect: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum GenerateCommand {
    /// Nuclear attraction integrals together with the Boys function files
    #[command(name = "nuclear")]
    NuclearAttraction,
    /// Kinetic energy integrals
    #[command(name = "kinetic")]
    KineticEnergy,
    /// Linear momentum integrals along x, y and z
    #[command(name = "momentum")]
    Momentum,
    /// Every family
    #[command(name = "all")]
    All,
}

impl GenerateCommand {
    fn families(&self) -> &'static [Family] {
        match self {
            GenerateCommand::NuclearAttraction => &[Family::NuclearAttraction],
            GenerateCommand::KineticEnergy => &[Family::KineticEnergy],
            GenerateCommand::Momentum => &[Family::Momentum],
            GenerateCommand::All => &Family::ALL,
        }
    }
}

fn file_name(family: Family) -> &'static str {
    match family {
        Family::NuclearAttraction => "nuclear_attraction.f90",
        Family::KineticEnergy => "kinetic_energy.f90",
        Family::Momentum => "momentum.f90",
    }
}

/// Creates `path` and hands a buffered writer for it to `emit`.
fn write_file(
    path: &Path,
    emit: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    emit(&mut writer).with_context(|| format!("failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    log::debug!("wrote {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args: Args = Args::parse();

    let dialect = match &args.dialect {
        Some(path) => ConfigDialect::load(path).map_err(|err| {
            anyhow::anyhow!("failed to load dialect file {}: {err}", path.display())
        })?,
        None => Dialect::default(),
    };
    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    for &family in args.command.families() {
        let start = Instant::now();
        let outputs = generate_family(family);
        let terms = outputs.iter().map(|output| output.term_count()).sum::<usize>();

        let path = args.output_dir.join(file_name(family));
        write_file(&path, |writer| {
            write_family(writer, family, &outputs, &dialect)
        })?;

        if family == Family::NuclearAttraction {
            write_file(&args.output_dir.join("boys_closed_form.f90"), |writer| {
                write_boys_closed_form(writer, &dialect)
            })?;
            write_file(&args.output_dir.join("boys_series.f90"), |writer| {
                write_boys_series(writer, &dialect)
            })?;
        }

        println!(
            "{} integrals: {} cases, {terms} terms, written to {} in {:0.2?}",
            family.description(),
            outputs.len(),
            path.display(),
            start.elapsed()
        );
    }

    Ok(())
}
