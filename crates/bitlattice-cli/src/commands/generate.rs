use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use bitlattice_compiler::emit::{self, Config};
use bitlattice_compiler::{Lattice, generate};
use bitlattice_core::LatticeSpec;
use tempfile::NamedTempFile;

pub struct GenerateArgs {
    pub output: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid type lattice: {0}")]
    Lattice(#[from] bitlattice_compiler::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn run(args: GenerateArgs) -> Result<(), GenerateError> {
    let started = Instant::now();

    let lattice = generate(&LatticeSpec::hir())?;
    write_header(&args.output, &lattice, &Config::default()).map_err(|source| {
        GenerateError::Write {
            path: args.output.clone(),
            source,
        }
    })?;

    tracing::info!(
        target: "cli",
        output = %args.output.display(),
        types = lattice.len(),
        num_bits = lattice.num_bits(),
        elapsed = ?started.elapsed(),
        "wrote type header"
    );
    Ok(())
}

/// Write the header next to its final target and rename it into place, so
/// readers never see a partial file. The temp file is removed if anything fails.
fn write_header(path: &Path, lattice: &Lattice, config: &Config) -> io::Result<()> {
    let target = resolve_target(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tracing::debug!(target: "cli", tmp = %tmp.path().display(), dest = %target.display(), "writing header");
    emit::write(lattice, config, tmp.as_file_mut())?;
    if let Some(permissions) = output_permissions(&target) {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(&target)?;
    Ok(())
}

/// The file the header ends up in. Symlinks are followed so the link survives
/// and its target is updated; an existing file must be writable.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(target) => {
            OpenOptions::new().write(true).open(&target)?;
            Ok(target)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(err) => Err(err),
    }
}

/// Keep the mode of an existing header; new headers get the usual 0644
/// instead of the temp file's 0600.
fn output_permissions(path: &Path) -> Option<fs::Permissions> {
    if let Ok(meta) = fs::metadata(path) {
        return Some(meta.permissions());
    }
    default_permissions()
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
