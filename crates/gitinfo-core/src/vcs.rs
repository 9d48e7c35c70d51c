use serde::Serialize;

use crate::errors::Result;
use crate::runner::CommandRunner;

pub const DEFAULT_VCS: &str = "git";

/// Arguments that print the full commit id of `HEAD`.
pub const SHA_ARGS: &[&str] = &["rev-parse", "HEAD"];

/// Arguments that print the current branch name (`HEAD` when detached).
pub const BRANCH_ARGS: &[&str] = &["rev-parse", "--abbrev-ref", "HEAD"];

/// Resolved repository identifiers. `None` means the query exited non-zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GitInfo {
    pub sha: Option<String>,
    pub branch: Option<String>,
}

/// Values supplied up front. A pinned value is used as-is and its VCS
/// query is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pinned {
    pub sha: Option<String>,
    pub branch: Option<String>,
}

/// Query `vcs` for the commit id and branch name, one subprocess each.
pub fn resolve<R: CommandRunner + ?Sized>(
    runner: &R,
    vcs: &str,
    pinned: &Pinned,
) -> Result<GitInfo> {
    let sha = query(runner, vcs, "sha", SHA_ARGS, pinned.sha.as_deref())?;
    let branch = query(runner, vcs, "branch", BRANCH_ARGS, pinned.branch.as_deref())?;
    Ok(GitInfo { sha, branch })
}

fn query<R: CommandRunner + ?Sized>(
    runner: &R,
    vcs: &str,
    what: &str,
    args: &[&str],
    pinned: Option<&str>,
) -> Result<Option<String>> {
    if let Some(value) = pinned {
        tracing::debug!("using pinned {what}: {value}");
        return Ok(Some(value.to_string()));
    }
    let value = runner.run(vcs, args)?;
    if value.is_none() {
        tracing::warn!("{vcs} {} failed, {what} unavailable", args.join(" "));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl CommandRunner for Recorder {
        fn run(&self, program: &str, args: &[&str]) -> Result<Option<String>> {
            let line = format!("{program} {}", args.join(" "));
            self.calls.borrow_mut().push(line);
            if args.contains(&"--abbrev-ref") {
                Ok(None)
            } else {
                Ok(Some("abc123".into()))
            }
        }
    }

    #[test]
    fn queries_sha_then_branch() {
        let runner = Recorder::default();
        let info = resolve(&runner, "git", &Pinned::default()).unwrap();
        assert_eq!(info.sha.as_deref(), Some("abc123"));
        assert_eq!(info.branch, None);
        assert_eq!(
            *runner.calls.borrow(),
            vec!["git rev-parse HEAD", "git rev-parse --abbrev-ref HEAD"]
        );
    }

    #[test]
    fn pinned_values_skip_queries() {
        let runner = Recorder::default();
        let pinned = Pinned {
            sha: None,
            branch: Some("dev".into()),
        };
        let info = resolve(&runner, "hg", &pinned).unwrap();
        assert_eq!(info.branch.as_deref(), Some("dev"));
        assert_eq!(*runner.calls.borrow(), vec!["hg rev-parse HEAD"]);
    }
}
