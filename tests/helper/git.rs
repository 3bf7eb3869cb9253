//! Fake git executable for exercising `GitTagSource`

use std::path::{Path, PathBuf};

/// Write a shell script standing in for `git` into `dir`.
///
/// The script checks it was invoked as `ls-remote --tags <url>`, prints
/// `stdout` and exits with `exit_code`.
#[cfg(unix)]
pub fn fake_git(dir: &Path, stdout: &str, stderr: &str, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("git");
    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" != \"ls-remote\" ] || [ \"$2\" != \"--tags\" ] || [ -z \"$3\" ]; then\n\
         echo \"unexpected arguments: $*\" >&2\n\
         exit 64\n\
         fi\n\
         cat <<'__STDOUT__'\n{stdout}__STDOUT__\n\
         printf '%s' '{stderr}' >&2\n\
         exit {exit_code}\n"
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
