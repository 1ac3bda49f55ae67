use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::InstallError;

/// Writes `<binary>.cmd` and an extension-less `sh` script next to the
/// installed executable. npm generates shims for the package's own bin
/// entry that cmd.exe and Git Bash resolve before the real `.exe`; these
/// point both shells straight at `exe`.
pub fn write_shims(dir: &Path, binary: &str, exe: &Path) -> Result<(), InstallError> {
    let cmd_path = dir.join(format!("{}.cmd", binary));
    let write_cmd = || -> std::io::Result<()> {
        let mut file = File::create(&cmd_path)?;
        writeln!(file, "@echo off")?;
        writeln!(file, "\"{}\" %*", exe.display())?;
        Ok(())
    };
    write_cmd().map_err(|source| InstallError::ShimWrite {
        path: cmd_path.clone(),
        source,
    })?;

    let sh_path = dir.join(binary);
    let write_sh = || -> std::io::Result<()> {
        let mut file = File::create(&sh_path)?;
        writeln!(file, "#!/bin/sh")?;
        writeln!(file, "exec \"{}\" \"$@\"", exe.display().to_string().replace('\\', "/"))?;
        Ok(())
    };
    write_sh().map_err(|source| InstallError::ShimWrite {
        path: sh_path.clone(),
        source,
    })?;

    Ok(())
}
