use crate::collection::remote::CollectionRemote;
use crate::discogs::{DiscogsError, FolderHandle, RemoteFolder};
use thiserror::Error;
use tracing::{debug, info, warn};

/// What to do when the configured folder can't be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FolderFallback {
    /// Import into Uncategorized (index 0) and keep going
    #[default]
    DefaultFolder,
    /// Stop before any release is touched
    Abort,
}

#[derive(Error, Debug)]
pub enum FolderError {
    #[error("Collection folder '{0}' not found")]
    NotFound(String),
    #[error("Failed to list collection folders: {0}")]
    Lookup(#[from] DiscogsError),
}

/// Find a folder by case-insensitive name, first match wins
pub fn find_folder(folders: &[RemoteFolder], name: &str) -> Option<FolderHandle> {
    let wanted = name.trim().to_lowercase();
    folders
        .iter()
        .enumerate()
        .find(|(_, folder)| folder.name.trim().to_lowercase() == wanted)
        .map(|(index, folder)| FolderHandle {
            name: folder.name.clone(),
            index,
            id: folder.id,
        })
}

/// Resolves the target folder once and remembers it for the rest of the session
#[derive(Debug, Default)]
pub struct FolderResolver {
    fallback: FolderFallback,
    resolved: Option<FolderHandle>,
}

impl FolderResolver {
    pub fn new(fallback: FolderFallback) -> Self {
        Self {
            fallback,
            resolved: None,
        }
    }

    pub fn resolved(&self) -> Option<&FolderHandle> {
        self.resolved.as_ref()
    }

    /// Resolve `name` among the user's folders.
    ///
    /// With `FolderFallback::DefaultFolder` this never fails: an unknown name
    /// or a failed lookup both land on Uncategorized, with a warning.
    pub async fn resolve_folder<R: CollectionRemote + ?Sized>(
        &mut self,
        remote: &R,
        name: &str,
    ) -> Result<FolderHandle, FolderError> {
        if let Some(folder) = &self.resolved {
            return Ok(folder.clone());
        }

        let folder = match remote.list_folders().await {
            Ok(folders) => {
                debug!("📂 Available collection folders:");
                for (i, folder) in folders.iter().enumerate() {
                    debug!("  [{}] - {} (ID: {})", i, folder.name, folder.id);
                }

                match find_folder(&folders, name) {
                    Some(folder) => {
                        info!(
                            "📂 Folder found: {} (Index: {}, ID: {})",
                            folder.name, folder.index, folder.id
                        );
                        folder
                    }
                    None => self.fall_back(FolderError::NotFound(name.to_string()))?,
                }
            }
            Err(e) => self.fall_back(FolderError::Lookup(e))?,
        };

        self.resolved = Some(folder.clone());
        Ok(folder)
    }

    fn fall_back(&self, error: FolderError) -> Result<FolderHandle, FolderError> {
        match self.fallback {
            FolderFallback::DefaultFolder => {
                let folder = FolderHandle::uncategorized();
                warn!("⚠️ {}. Using '{}' instead.", error, folder.name);
                Ok(folder)
            }
            FolderFallback::Abort => Err(error),
        }
    }
}
