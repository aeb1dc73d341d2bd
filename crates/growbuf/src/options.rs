/// How file contents are translated on the way in and out of a buffer.
///
/// # Default
///
/// [`FileMode::Binary`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FileMode {
    /// Bytes are transferred verbatim.
    #[default]
    Binary,
    /// The platform newline convention is applied: on Windows `\r\n` in the
    /// file maps to `\n` in the buffer and back; elsewhere nothing changes.
    Text,
}

/// Options for writing a buffer to a file.
///
/// # Default
///
/// Truncate the file and write in [`FileMode::Binary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Whether to add to the end of an existing file instead of truncating it.
    ///
    /// The file is created when it does not exist in either case.
    ///
    /// # Default
    ///
    /// `false`
    pub append: bool,

    /// Newline translation applied to the written bytes.
    ///
    /// # Default
    ///
    /// [`FileMode::Binary`]
    pub mode: FileMode,
}
