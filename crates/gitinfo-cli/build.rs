use gitinfo_core::{vcs, Pinned, SystemRunner};

/// Embed the commit and branch this binary was built from, resolved the
/// same way `gitinfo show` resolves them.
fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into());
    let runner = SystemRunner::in_dir(manifest_dir);

    let info = vcs::resolve(&runner, vcs::DEFAULT_VCS, &Pinned::default()).unwrap_or_else(|e| {
        println!("cargo:warning=build info unavailable: {e}");
        Default::default()
    });

    let sha = info.sha.as_deref().unwrap_or("unknown");
    let branch = info.branch.as_deref().unwrap_or("unknown");
    println!("cargo:rustc-env=GITINFO_BUILD_SHA={sha}");
    println!("cargo:rustc-env=GITINFO_BUILD_BRANCH={branch}");

    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/heads");
}
