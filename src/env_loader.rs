use std::env;
use std::path::PathBuf;

fn fallback_dotenv_path(workspace: Option<PathBuf>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    let base = workspace.or(home_dir)?;
    Some(base.join(".dayfile.env"))
}

pub fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let fallback = fallback_dotenv_path(
        env::var_os("DAYFILE_WORKSPACE").map(PathBuf::from),
        dirs::home_dir(),
    );

    let Some(path) = fallback else {
        return;
    };
    if path.is_file() {
        let _ = dotenvy::from_path(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::fallback_dotenv_path;
    use std::path::PathBuf;

    #[test]
    fn fallback_prefers_the_workspace_root() {
        let got = fallback_dotenv_path(
            Some(PathBuf::from("/workspace")),
            Some(PathBuf::from("/home/alice")),
        );

        let want = Some(PathBuf::from("/workspace/.dayfile.env"));
        assert_eq!(got, want);
    }

    #[test]
    fn fallback_uses_home_when_workspace_unset() {
        let got = fallback_dotenv_path(None, Some(PathBuf::from("/home/alice")));
        let want = Some(PathBuf::from("/home/alice/.dayfile.env"));
        assert_eq!(got, want);
    }
}
