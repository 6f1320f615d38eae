//! End-to-end enumeration against a temporary directory tree.
//!
//! These tests move the working directory and redirect the user
//! configuration directory, so each one is serialised.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use enumconf::{Enumerator, Source};
use rstest::{fixture, rstest};
use serial_test::serial;
use test_helpers::{cwd, env, tree::ConfigTree};

#[fixture]
fn tree() -> Result<ConfigTree> {
    ConfigTree::new()
}

#[rstest]
#[serial]
fn path_files_are_listed_root_first(tree: Result<ConfigTree>) -> Result<()> {
    let tree = tree?;
    let outer = tree.file(".demo", "level = 0")?;
    let inner = tree.file("a/b/.demo", "level = 2")?;
    let leaf = tree.dir("a/b/c")?;
    let guard = cwd::set_dir(&leaf)?;

    let found = Enumerator::new("demo").enumerate_path();
    guard.restore()?;

    ensure!(
        found.ends_with(&[outer, inner]),
        "expected tree dotfiles last and root first, got {found:?}"
    );
    ensure!(
        !found.contains(&tree.path("a/.demo")),
        "missing level should be skipped"
    );
    Ok(())
}

#[rstest]
#[serial]
fn dotfile_directories_are_skipped(tree: Result<ConfigTree>) -> Result<()> {
    let tree = tree?;
    let dotdir = tree.dir("project/.demo")?;
    let guard = cwd::set_dir(tree.path("project"))?;

    let enumerator = Enumerator::new("demo");
    let found = enumerator.enumerate_path();
    let listed = enumerator.clone().include_missing(true).enumerate_path();
    guard.restore()?;

    ensure!(!found.contains(&dotdir), "directory reported as config: {found:?}");
    ensure!(
        listed.last() == Some(&dotdir),
        "include_missing should list the working directory last: {listed:?}"
    );
    Ok(())
}

#[rstest]
#[serial]
fn system_roots_resolve_against_disk(tree: Result<ConfigTree>) -> Result<()> {
    let tree = tree?;
    let first = tree.dir("etc")?;
    let second = tree.dir("etc/xdg")?;
    let present = tree.file("etc/xdg/demo/demo.conf", "")?;

    let found = Enumerator::new("demo")
        .system_roots([first, second])
        .enumerate_system();
    ensure!(found == vec![present], "unexpected system files {found:?}");
    Ok(())
}

#[cfg(target_os = "linux")]
#[rstest]
#[serial]
fn user_file_is_found_under_xdg_config_home(tree: Result<ConfigTree>) -> Result<()> {
    let tree = tree?;
    let config_home = tree.dir("home/.config")?;
    let user_file = tree.file("home/.config/demo/demo.conf", "user = true")?;
    let _env = env::user_config_home(&config_home);

    let found = Enumerator::new("demo").enumerate_user();
    ensure!(found == vec![user_file], "unexpected user files {found:?}");
    Ok(())
}

#[cfg(target_os = "linux")]
#[rstest]
#[serial]
fn enumerate_orders_system_user_then_path(tree: Result<ConfigTree>) -> Result<()> {
    let tree = tree?;
    let system = tree.file("etc/demo/demo.conf", "")?;
    let config_home = tree.dir("home/.config")?;
    let user = tree.file("home/.config/demo/demo.conf", "")?;
    let local = tree.file("work/.demo", "")?;
    let _env = env::user_config_home(&config_home);
    let guard = cwd::set_dir(tree.path("work"))?;

    let enumerator = Enumerator::new("demo").system_roots([tree.path("etc")]);
    let all = enumerator.enumerate();
    let candidates = enumerator.enumerate_candidates();
    guard.restore()?;

    ensure!(
        all.first() == Some(&system) && all.get(1) == Some(&user) && all.last() == Some(&local),
        "unexpected order {all:?}"
    );
    let sources: Vec<(PathBuf, Source)> = candidates
        .into_iter()
        .map(|candidate| (candidate.path, candidate.source))
        .filter(|(path, _)| path.starts_with(tree.root()))
        .collect();
    ensure!(
        sources
            == vec![
                (system, Source::System),
                (user, Source::User),
                (local, Source::Path),
            ],
        "unexpected provenance {sources:?}"
    );
    Ok(())
}

#[rstest]
#[serial]
fn repeated_enumeration_is_stable(tree: Result<ConfigTree>) -> Result<()> {
    let tree = tree?;
    tree.file("work/.demo", "")?;
    let guard = cwd::set_dir(tree.path("work"))?;

    let enumerator = Enumerator::new("demo");
    let first = enumerator.enumerate();
    let second = enumerator.enumerate();
    guard.restore()?;

    ensure!(first == second, "enumeration changed between calls");
    Ok(())
}
