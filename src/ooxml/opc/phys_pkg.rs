//! Provides a general interface to a physical OPC package (ZIP file).
//!
//! A [`Package`] loads every member of the archive into memory, keeps them in
//! archive order, lets callers read and replace text entries, and serializes the
//! whole container back to bytes. The file it was opened from is never written.

use crate::error::{AtoError, Result};
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// One member of the archive.
#[derive(Debug, Clone)]
struct Member {
    name: String,
    data: Vec<u8>,
    /// Whether the member was stored uncompressed in the source archive
    stored: bool,
    /// Directory entries carry no data and are re-created as directories
    is_dir: bool,
}

/// In-memory OPC package.
///
/// # Examples
///
/// ```rust,no_run
/// use ato::ooxml::opc::Package;
///
/// let mut pkg = Package::open("report.docx")?;
/// if let Some(xml) = pkg.read_entry("word/document.xml")? {
///     pkg.write_entry("word/document.xml", xml.replace("draft", "final"));
/// }
/// let bytes = pkg.serialize()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Package {
    members: Vec<Member>,
    /// Path the package was opened from, if any
    source: Option<PathBuf>,
    modified: bool,
}

impl Package {
    /// Open a package from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or isn't a valid ZIP file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let mut pkg = Self::from_bytes(&data)?;
        pkg.source = Some(path.to_path_buf());
        Ok(pkg)
    }

    /// Create a package from the bytes of a ZIP archive.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
        let mut members = Vec::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            // declared sizes come from the archive itself and may be corrupt
            let hint = file.size().min(data.len() as u64) as usize;
            let mut buf = Vec::with_capacity(hint);
            file.read_to_end(&mut buf)?;
            members.push(Member {
                name: file.name().to_string(),
                stored: file.compression() == CompressionMethod::Stored,
                is_dir: file.is_dir(),
                data: buf,
            });
        }

        Ok(Self {
            members,
            source: None,
            modified: false,
        })
    }

    /// Path this package was opened from.
    #[inline]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Member names in archive order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().filter(|m| !m.is_dir).map(|m| m.name.as_str())
    }

    /// Check if a member exists.
    pub fn contains(&self, name: &str) -> bool {
        self.member(name).is_some()
    }

    /// Read a member as UTF-8 text.
    ///
    /// Returns `Ok(None)` if the member is absent.
    pub fn read_entry(&self, name: &str) -> Result<Option<String>> {
        match self.member(name) {
            Some(member) => String::from_utf8(member.data.clone())
                .map(Some)
                .map_err(|_| AtoError::InvalidFormat(format!("{name} is not valid UTF-8"))),
            None => Ok(None),
        }
    }

    /// Replace a member's content, appending the member if it doesn't exist.
    pub fn write_entry(&mut self, name: &str, text: impl Into<String>) {
        let data = text.into().into_bytes();
        match self.members.iter_mut().find(|m| m.name == name) {
            Some(member) => member.data = data,
            None => self.members.push(Member {
                name: name.to_string(),
                data,
                stored: false,
                is_dir: false,
            }),
        }
        self.modified = true;
    }

    /// Whether any entry was written since the package was loaded.
    #[inline]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Serialize the full container.
    ///
    /// Members keep their archive order; members stored uncompressed in the
    /// source stay stored, everything else is deflated.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        for member in &self.members {
            if member.is_dir {
                writer.add_directory(member.name.as_str(), stored)?;
                continue;
            }
            let options = if member.stored { stored } else { deflated };
            writer.start_file(member.name.as_str(), options)?;
            writer.write_all(&member.data)?;
        }

        Ok(writer.finish()?.into_inner())
    }

    /// Serialize the container and write it to `path`.
    ///
    /// Refuses to overwrite the file the package was opened from.
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if self.source.as_deref().is_some_and(|source| same_file(source, path)) {
            return Err(AtoError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("refusing to overwrite source package {}", path.display()),
            )));
        }
        std::fs::write(path, self.serialize()?)?;
        Ok(())
    }

    fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| !m.is_dir && m.name == name)
    }
}

/// Whether two paths name the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
