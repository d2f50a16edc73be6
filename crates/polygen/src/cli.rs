use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use eyre::{Context, OptionExt, Result};
use itertools::Itertools;
use polycatalog::{Catalog, RawParams};
use serde::Serialize;

use crate::config::GenConfig;

/// Convex polytope generator
///
/// Builds polytopes from the built-in catalog and prints them as JSON.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Configuration file to load on top of the defaults.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print the ID and name of every polytope builder.
    List,
    /// Build a polytope and print it as JSON.
    Build {
        /// Builder ID or generated ID (such as `cube` or `root_polytope:H3`)
        id: String,
        /// Parameters as a JSON object (such as `{"type": "H3"}`).
        #[arg(short, long, value_name = "JSON")]
        params: Option<String>,
    },
    /// Print the parameter schema of a polytope builder as JSON.
    Schema {
        /// Builder ID (such as `orbit_polytope`)
        id: String,
    },
    /// Build every polytope with default parameters and write each one to a
    /// JSON file, along with a manifest.
    Generate {
        /// Directory to write into. Defaults to the configured directory.
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
}

pub(crate) fn exec(subcommand: Subcommand, config: &GenConfig) -> Result<()> {
    polycatalog::load_global_catalog();
    let catalog = polycatalog::catalog();

    match subcommand {
        Subcommand::List => {
            for builder in catalog.builders() {
                println!("{}\t{}", builder.id, builder.name);
            }
            Ok(())
        }

        Subcommand::Build { id, params } => {
            let polytope = match params {
                Some(s) => {
                    let raw: RawParams =
                        serde_json::from_str(&s).context("error parsing parameters")?;
                    catalog.build(&id, Some(&raw))
                }
                None => catalog.build_generated(&id),
            }
            .wrap_err_with(|| format!("error building polytope {id:?}"))?;
            write_json_output(&*polytope, config.pretty)
        }

        Subcommand::Schema { id } => {
            let builder = catalog
                .get_builder(&id)
                .ok_or_eyre(format!("no polytope builder with ID {id:?}"))?;
            write_json_output(&builder.schema, config.pretty)
        }

        Subcommand::Generate { output_dir } => {
            let output_dir = output_dir.as_deref().unwrap_or(config.output_dir.as_path());
            let summary = generate(&catalog, output_dir, config)?;
            println!(
                "wrote {} polytopes to {}",
                summary.succeeded.len(),
                output_dir.display(),
            );
            for (id, error) in &summary.failed {
                println!("failed to build {id}: {error}");
            }
            Ok(())
        }
    }
}

/// Result of [`generate()`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct GenerateSummary {
    /// IDs of polytopes that were written, sorted.
    pub succeeded: Vec<String>,
    /// IDs of polytopes that could not be built, along with the error.
    pub failed: Vec<(String, String)>,
}

/// Builds every polytope in `catalog` with default parameters and writes each
/// one to `<id>.json` in `output_dir`, followed by a manifest listing the
/// files in sorted order.
///
/// A builder that fails is recorded in the summary and does not stop the
/// others. Filesystem errors are returned immediately.
pub(crate) fn generate(
    catalog: &Catalog,
    output_dir: &Path,
    config: &GenConfig,
) -> Result<GenerateSummary> {
    std::fs::create_dir_all(output_dir).wrap_err_with(|| {
        format!("error creating output directory {}", output_dir.display())
    })?;

    let mut summary = GenerateSummary::default();
    for builder in catalog.builders() {
        match catalog.build(&builder.id, None) {
            Ok(polytope) => {
                let path = output_dir.join(format!("{}.json", builder.id));
                write_json_file(&path, &*polytope, config.pretty)?;
                log::info!("wrote {}", path.display());
                summary.succeeded.push(builder.id.clone());
            }
            Err(e) => {
                log::warn!("error building polytope {:?}: {e}", builder.id);
                summary.failed.push((builder.id.clone(), e.to_string()));
            }
        }
    }

    let manifest = summary
        .succeeded
        .iter()
        .map(|id| format!("{id}.json"))
        .sorted()
        .collect_vec();
    write_json_file(
        &output_dir.join(&config.manifest_filename),
        &manifest,
        config.pretty,
    )?;

    Ok(summary)
}

fn write_json_output<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    write_json(std::io::stdout().lock(), value, pretty)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let file = File::create(path).wrap_err_with(|| format!("error creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, value, pretty)
        .and_then(|()| writer.flush().map_err(serde_json::Error::io))
        .wrap_err_with(|| format!("error writing {}", path.display()))
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
    pretty: bool,
) -> serde_json::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)
    } else {
        serde_json::to_writer(writer, value)
    }
}
