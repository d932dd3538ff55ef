use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn main() {
    let hash = git_short_hash().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=CROSSINPUT_GIT_HASH={hash}");

    if let Some(git_dir) = locate_git_dir() {
        for name in ["HEAD", "refs", "packed-refs"] {
            let path = git_dir.join(name);
            if !path.exists() {
                continue;
            }
            if let Some(path) = path.to_str() {
                println!("cargo:rerun-if-changed={path}");
            }
        }
    }
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if hash.is_empty() { None } else { Some(hash) }
}

fn locate_git_dir() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(explicit));
    }

    let dot_git = PathBuf::from(".git");
    if dot_git.is_dir() {
        return Some(dot_git);
    }

    // Worktrees and submodules leave a pointer file instead of a directory.
    let contents = fs::read_to_string(&dot_git).ok()?;
    let target = contents.strip_prefix("gitdir:")?.trim();
    let mut resolved = PathBuf::from(target);
    if resolved.is_relative() {
        if let Some(parent) = dot_git.parent() {
            resolved = parent.join(resolved);
        }
    }
    Some(resolved)
}
