//! Workspace `Cargo.toml` member list editing.
//!
//! Edits go through `toml_edit` so comments and formatting outside the
//! member list survive. Read, mutate and write happen in one call, but two
//! processes appending at once can still lose an update: there is no lock.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use toml_edit::{Array, DocumentMut, Item, Value};
use tracing::{debug, info};

use crate::error::{Error, Result};

pub struct WorkspaceManifest {
    path: PathBuf,
    doc: DocumentMut,
}

impl WorkspaceManifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path)?;
        let doc = content
            .parse::<DocumentMut>()
            .map_err(|e| Error::Manifest {
                path: path.clone(),
                message: format!("failed to parse: {}", e),
            })?;

        if !doc.get("workspace").is_some_and(Item::is_table_like) {
            return Err(Error::Manifest {
                path,
                message: "missing [workspace] table".to_string(),
            });
        }

        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current `[workspace].members`, in file order.
    pub fn members(&self) -> Vec<String> {
        self.doc
            .get("workspace")
            .and_then(|ws| ws.get("members"))
            .and_then(Item::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Appends `member` to `[workspace].members`, creating the list if needed.
    ///
    /// Returns `false` when the member was already listed.
    pub fn add_member(&mut self, member: &str) -> Result<bool> {
        let member = member.replace('\\', "/");
        if self.members().iter().any(|m| m == &member) {
            debug!(member = %member, "workspace member already present");
            return Ok(false);
        }

        let path = self.path.clone();
        let workspace = self
            .doc
            .get_mut("workspace")
            .and_then(Item::as_table_like_mut)
            .ok_or_else(|| Error::Manifest {
                path: path.clone(),
                message: "missing [workspace] table".to_string(),
            })?;

        if workspace.get("members").is_none() {
            workspace.insert("members", Item::Value(Value::Array(Array::new())));
        }

        let members = workspace
            .get_mut("members")
            .and_then(Item::as_array_mut)
            .ok_or_else(|| Error::Manifest {
                path,
                message: "[workspace].members must be an array".to_string(),
            })?;
        members.push(member.as_str());

        Ok(true)
    }

    /// Writes the document back, replacing the file atomically.
    ///
    /// The replacement keeps the original file's permissions.
    pub fn save(&self) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let permissions = fs::metadata(&self.path)?.permissions();
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(self.doc.to_string().as_bytes())?;
        tmp.as_file().set_permissions(permissions)?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

/// Appends `member` to the workspace manifest at `manifest_path` and saves it.
pub fn append_member(manifest_path: impl AsRef<Path>, member: &str) -> Result<bool> {
    let mut manifest = WorkspaceManifest::load(manifest_path)?;
    let added = manifest.add_member(member)?;
    if added {
        manifest.save()?;
        info!(member = %member, manifest = %manifest.path().display(), "added workspace member");
    }
    Ok(added)
}
