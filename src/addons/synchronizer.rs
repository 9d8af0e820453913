// Tue Feb 10 2026 - Alex

use crate::addons::endpoint::ModuleEndpoint;
use crate::addons::error::SyncError;
use crate::addons::shim;
use crate::utils::fs as fsutil;
use std::fs;
use walkdir::WalkDir;

pub const LUALIB_BUNDLE: &str = "LualibBundle.lua";
pub const REQUIRE_STUB: &str = "RequireStub.lua";
pub const SCRIPT_EXTENSIONS: &[&str] = &["lua"];
pub const CONFIG_EXTENSIONS: &[&str] = &["ts", "json"];

const LEGACY_GLOBAL: &str = "global.lua";
const REQUIRE_MARKER: &str = "require(\"lua.";
const DISABLED_SUFFIX: &str = " (removed by header generation)";

/// Synchronizes one module endpoint from its addon sources: prunes stale
/// generated scripts, copies the current ones, disables requires that would
/// dangle, and shims scripts that use client-only host APIs. Mutation order
/// matters (prune before copy, copy before patch); everything else is
/// idempotent and safe to re-run from scratch.
pub struct AddonSynchronizer;

impl AddonSynchronizer {
    pub fn sync(endpoint: &ModuleEndpoint) -> Result<(), SyncError> {
        log::debug!("Syncing endpoint {}", endpoint.root().display());

        Self::prune_index(endpoint)?;
        Self::prune_generated(endpoint)?;
        Self::prune_loose_scripts(endpoint)?;
        Self::copy_addon_scripts(endpoint)?;
        Self::copy_addon_configs(endpoint)?;
        Self::patch_stale_requires(endpoint)?;
        Self::remove_legacy_global(endpoint)?;
        Self::inject_compat_shims(endpoint)?;

        Ok(())
    }

    // The index script is regenerated by a later build phase; this pass only
    // clears the stale one.
    fn prune_index(endpoint: &ModuleEndpoint) -> Result<(), SyncError> {
        fsutil::remove_tree(&endpoint.index_script())?;
        Ok(())
    }

    fn prune_generated(endpoint: &ModuleEndpoint) -> Result<(), SyncError> {
        fsutil::remove_tree(&endpoint.lua_dir())?;
        Ok(())
    }

    // Addon lua/ subtrees are source inputs for the copy step and must never
    // be pruned; the endpoint's own lua/ mirror is already gone as a unit.
    fn prune_loose_scripts(endpoint: &ModuleEndpoint) -> Result<(), SyncError> {
        if !endpoint.root().is_dir() {
            return Ok(());
        }

        let mut stale = Vec::new();
        for entry in WalkDir::new(endpoint.root())
            .into_iter()
            .filter_entry(|e| !(e.file_type().is_dir() && e.file_name() == "lua"))
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if !fsutil::file_extension_matches(entry.path(), SCRIPT_EXTENSIONS) {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if name != LUALIB_BUNDLE && name != REQUIRE_STUB {
                stale.push(entry.into_path());
            }
        }

        for path in stale {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn copy_addon_scripts(endpoint: &ModuleEndpoint) -> Result<(), SyncError> {
        let lua_dir = endpoint.lua_dir();
        for addon in endpoint.addon_dirs()? {
            if addon == lua_dir {
                continue;
            }
            let source = addon.join("lua");
            if !source.is_dir() {
                continue;
            }

            for entry in WalkDir::new(&source).sort_by_file_name() {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }
                if !fsutil::file_extension_matches(entry.path(), SCRIPT_EXTENSIONS) {
                    continue;
                }
                let Ok(rel) = entry.path().strip_prefix(&source) else {
                    continue;
                };
                let dest = lua_dir.join(rel);
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(entry.path(), &dest)?;
            }
        }
        Ok(())
    }

    fn copy_addon_configs(endpoint: &ModuleEndpoint) -> Result<(), SyncError> {
        let lua_dir = endpoint.lua_dir();
        for addon in endpoint.addon_dirs()? {
            if addon == lua_dir {
                continue;
            }
            for entry in fs::read_dir(&addon)? {
                let entry = entry?;
                if !entry.file_type()?.is_file() {
                    continue;
                }
                let path = entry.path();
                if fsutil::file_extension_matches(&path, CONFIG_EXTENSIONS) {
                    fs::copy(&path, endpoint.root().join(entry.file_name()))?;
                }
            }
        }
        Ok(())
    }

    // The lua/ namespace was just pruned, so any require into it in the
    // module index would dangle. Commented-out lines are left alone.
    fn patch_stale_requires(endpoint: &ModuleEndpoint) -> Result<(), SyncError> {
        let index = endpoint.index_script();
        if !index.is_file() {
            return Ok(());
        }

        let contents = fs::read_to_string(&index)?;
        let mut changed = false;
        let lines: Vec<String> = contents
            .split('\n')
            .map(|line| {
                if line.contains(REQUIRE_MARKER) && !line.contains("--") {
                    changed = true;
                    format!("-- {}{}", line, DISABLED_SUFFIX)
                } else {
                    line.to_string()
                }
            })
            .collect();

        if changed {
            fs::write(&index, lines.join("\n"))?;
        }
        Ok(())
    }

    // global.lua is a disallowed artifact in the install layout.
    fn remove_legacy_global(endpoint: &ModuleEndpoint) -> Result<(), SyncError> {
        fsutil::remove_tree(&endpoint.lua_dir().join(LEGACY_GLOBAL))?;
        Ok(())
    }

    fn inject_compat_shims(endpoint: &ModuleEndpoint) -> Result<(), SyncError> {
        let lua_dir = endpoint.lua_dir();
        if !lua_dir.is_dir() {
            return Ok(());
        }

        let mut scripts = Vec::new();
        for entry in WalkDir::new(&lua_dir) {
            let entry = entry?;
            if entry.file_type().is_file()
                && fsutil::file_extension_matches(entry.path(), SCRIPT_EXTENSIONS)
            {
                scripts.push(entry.into_path());
            }
        }

        for script in scripts {
            let contents = fs::read_to_string(&script)?;
            if shim::needs_shim(&contents) {
                log::debug!("Injecting compat shim into {}", script.display());
                fs::write(&script, shim::apply_shim(&contents))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn endpoint_with(dir: &TempDir) -> ModuleEndpoint {
        ModuleEndpoint::new(dir.path())
    }

    fn write(path: PathBuf, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    // Sorted (relative path, contents) pairs for the whole endpoint tree.
    fn snapshot(endpoint: &ModuleEndpoint) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(endpoint.root()).sort_by_file_name() {
            let entry = entry.unwrap();
            if entry.file_type().is_file() {
                let rel = entry
                    .path()
                    .strip_prefix(endpoint.root())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned();
                entries.push((rel, fs::read_to_string(entry.path()).unwrap()));
            }
        }
        entries
    }

    #[test]
    fn test_stale_scripts_are_replaced_by_fresh_copies() {
        let dir = TempDir::new().unwrap();
        let ep = endpoint_with(&dir);
        write(ep.lua_dir().join("old.lua"), "-- stale");
        write(ep.root().join("my-addon/lua/new.lua"), "print(\"new\")");

        AddonSynchronizer::sync(&ep).unwrap();

        assert!(!ep.lua_dir().join("old.lua").exists());
        let copied = fs::read_to_string(ep.lua_dir().join("new.lua")).unwrap();
        assert_eq!(copied, "print(\"new\")");
    }

    #[test]
    fn test_nested_script_paths_are_preserved() {
        let dir = TempDir::new().unwrap();
        let ep = endpoint_with(&dir);
        write(ep.root().join("addon/lua/ui/frame.lua"), "local x = 1");

        AddonSynchronizer::sync(&ep).unwrap();

        assert!(ep.lua_dir().join("ui/frame.lua").is_file());
    }

    #[test]
    fn test_bundle_and_stub_survive_pruning() {
        let dir = TempDir::new().unwrap();
        let ep = endpoint_with(&dir);
        write(ep.root().join(LUALIB_BUNDLE), "-- bundle");
        write(ep.root().join(REQUIRE_STUB), "-- stub");
        write(ep.root().join("loose.lua"), "-- stale");

        AddonSynchronizer::sync(&ep).unwrap();

        assert!(ep.root().join(LUALIB_BUNDLE).is_file());
        assert!(ep.root().join(REQUIRE_STUB).is_file());
        assert!(!ep.root().join("loose.lua").exists());
    }

    #[test]
    fn test_index_script_is_pruned() {
        let dir = TempDir::new().unwrap();
        let ep = endpoint_with(&dir);
        write(ep.index_script(), "require(\"lua.old\")");

        AddonSynchronizer::sync(&ep).unwrap();

        assert!(!ep.index_script().exists());
    }

    #[test]
    fn test_config_files_are_copied_flat() {
        let dir = TempDir::new().unwrap();
        let ep = endpoint_with(&dir);
        write(ep.root().join("addon/addon.json"), "{}");
        write(ep.root().join("addon/build.ts"), "export {}");
        write(ep.root().join("addon/readme.md"), "ignored");

        AddonSynchronizer::sync(&ep).unwrap();

        assert!(ep.root().join("addon.json").is_file());
        assert!(ep.root().join("build.ts").is_file());
        assert!(!ep.root().join("readme.md").exists());
    }

    #[test]
    fn test_global_lua_is_always_removed() {
        let dir = TempDir::new().unwrap();
        let ep = endpoint_with(&dir);
        write(ep.root().join("addon/lua/global.lua"), "GLOBAL = true");
        write(ep.root().join("addon/lua/kept.lua"), "KEPT = true");

        AddonSynchronizer::sync(&ep).unwrap();

        assert!(!ep.lua_dir().join("global.lua").exists());
        assert!(ep.lua_dir().join("kept.lua").is_file());
    }

    #[test]
    fn test_stale_requires_are_commented_out() {
        let dir = TempDir::new().unwrap();
        let ep = endpoint_with(&dir);
        write(
            ep.index_script(),
            "local a = require(\"lua.thing\")\nlocal b = require(\"other\")\n-- require(\"lua.done\")",
        );

        AddonSynchronizer::patch_stale_requires(&ep).unwrap();

        let patched = fs::read_to_string(ep.index_script()).unwrap();
        let lines: Vec<&str> = patched.split('\n').collect();
        assert_eq!(
            lines[0],
            "-- local a = require(\"lua.thing\") (removed by header generation)"
        );
        assert_eq!(lines[1], "local b = require(\"other\")");
        assert_eq!(lines[2], "-- require(\"lua.done\")");
    }

    #[test]
    fn test_patching_twice_does_not_double_comment() {
        let dir = TempDir::new().unwrap();
        let ep = endpoint_with(&dir);
        write(ep.index_script(), "require(\"lua.thing\")");

        AddonSynchronizer::patch_stale_requires(&ep).unwrap();
        let first = fs::read_to_string(ep.index_script()).unwrap();
        AddonSynchronizer::patch_stale_requires(&ep).unwrap();
        let second = fs::read_to_string(ep.index_script()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_shim_injected_for_gated_api() {
        let dir = TempDir::new().unwrap();
        let ep = endpoint_with(&dir);
        write(
            ep.root().join("addon/lua/frame.lua"),
            "local f = CreateFrame(\"Frame\")",
        );
        write(ep.root().join("addon/lua/plain.lua"), "print(1)");

        AddonSynchronizer::sync(&ep).unwrap();

        let shimmed = fs::read_to_string(ep.lua_dir().join("frame.lua")).unwrap();
        assert!(shimmed.starts_with(shim::COMPAT_PREAMBLE));
        let plain = fs::read_to_string(ep.lua_dir().join("plain.lua")).unwrap();
        assert_eq!(plain, "print(1)");
    }

    #[test]
    fn test_sync_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let ep = endpoint_with(&dir);
        write(ep.root().join("addon/lua/frame.lua"), "CreateFrame(\"x\")");
        write(ep.root().join("addon/lua/util.lua"), "return {}");
        write(ep.root().join("addon/addon.json"), "{}");
        write(ep.root().join(LUALIB_BUNDLE), "-- bundle");

        AddonSynchronizer::sync(&ep).unwrap();
        let first = snapshot(&ep);
        AddonSynchronizer::sync(&ep).unwrap();
        let second = snapshot(&ep);

        assert_eq!(first, second);
        // the shim is present exactly once after both runs
        let shimmed = fs::read_to_string(ep.lua_dir().join("frame.lua")).unwrap();
        assert_eq!(shimmed.matches("if not CreateFrame then").count(), 1);
    }

    #[test]
    fn test_missing_optional_paths_are_no_ops() {
        let dir = TempDir::new().unwrap();
        let ep = endpoint_with(&dir);
        // empty endpoint: no index, no lua dir, no addons
        AddonSynchronizer::sync(&ep).unwrap();
        assert!(snapshot(&ep).is_empty());
    }
}
