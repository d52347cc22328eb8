/*!
 * vfs-tree - Mount Table Explorer
 *
 * Builds a mount table from a JSON config and prints every directory and
 * file reachable from its root.
 *
 * Usage: vfs-tree [config.json]   (falls back to $VFS_CONFIG)
 */

use std::error::Error;
use std::io::Write;
use tracing::{info, warn};

use layered_vfs::{
    init_tracing, init_vfs, DirectoryPath, FileSystem, Pattern, VfsConfig, VfsPath,
};

const CONFIG_ENV: &str = "VFS_CONFIG";

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .ok_or_else(|| format!("usage: vfs-tree <config.json> (or set {})", CONFIG_ENV))?;

    info!(config = %config_path, "Loading VFS configuration");
    let config = VfsConfig::from_file(&config_path)?;
    let vfs = init_vfs(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", DirectoryPath::root())?;
    print_tree(&vfs, &DirectoryPath::root(), &mut out)?;
    out.flush()?;

    vfs.dispose();
    Ok(())
}

/// Depth-first listing, directories before files
fn print_tree(
    fs: &dyn FileSystem,
    dir: &DirectoryPath,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let indent = "  ".repeat(dir.segment_count() + 1);
    let filter = Pattern::any();

    let directories = match fs.child_directories(dir, &filter) {
        Ok(directories) => directories,
        Err(e) => {
            warn!(path = %dir, error = %e, "Skipping unreadable directory");
            writeln!(out, "{}<unreadable: {}>", indent, e)?;
            return Ok(());
        }
    };
    for child in &directories {
        writeln!(out, "{}{}/", indent, child.name().unwrap_or_default())?;
        print_tree(fs, child, out)?;
    }

    for file in fs.child_files(dir, &filter)? {
        writeln!(out, "{}{}", indent, file.file_name())?;
    }
    Ok(())
}
