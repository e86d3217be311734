//! Immutable classification data: indicator patterns, skip directories, and
//! extension category tables.
//!
//! Everything here is matched literally. The two escaped-looking entries in
//! [`WINDOWS_INDICATORS`] (`\.dll`, `\.lib`) are a known quirk inherited from the
//! original indicator list: they are checked as plain substrings, backslash
//! included, not as regexes. Rewriting them as real patterns would change match
//! counts, so they stay as-is.

use std::ffi::OsStr;

/// Literal substrings whose presence in a text file signals Windows-native code.
///
/// Ordered; report sections iterate patterns in first-match order.
pub const WINDOWS_INDICATORS: &[&str] = &[
    "#include <windows.h>",
    "#include <winsock",
    "WinMain(",
    "CreateWindow",
    "RegOpenKey",
    "RegCreateKey",
    "RegSetValue",
    "CoInitialize",
    "CoCreateInstance",
    "afx",
    "Afx",
    "MFC",
    "CWnd",
    "CDialog",
    "Service",
    "CreateService",
    "DeviceIoControl",
    "SetupDi",
    "SUSI",
    "HANDLE ",
    "HWND ",
    "HINSTANCE",
    "ws2_",
    r"\.dll",
    r"\.lib",
    "LoadLibrary",
    "GetProcAddress",
];

/// Directory (and file) names excluded from traversal: VCS metadata and common
/// MSVC build-output locations.
pub const SKIP_DIRS: &[&str] = &[
    ".git",
    "Debug",
    "Release",
    "x64",
    "Bin",
    "_Build",
    "Debug_Remote",
    "ipch",
    "res",
];

/// Files at or above this size are reported as large (50 MiB).
pub const LARGE_FILE_THRESHOLD: u64 = 50 * 1024 * 1024;

pub const SOLUTION_EXTS: &[&str] = &[".sln"];
pub const PROJECT_EXTS: &[&str] = &[".vcxproj", ".vcproj"];
pub const SOURCE_EXTS: &[&str] = &[".cpp", ".c", ".cc"];
pub const HEADER_EXTS: &[&str] = &[".h", ".hpp"];
pub const RESOURCE_EXTS: &[&str] = &[".rc"];

/// Extensions whose content is inspected for indicators and lib references.
pub const TEXT_SCAN_EXTS: &[&str] = &[
    ".cpp", ".c", ".h", ".hpp", ".rc", ".txt", ".xml", ".ini", ".props", ".vcxproj",
];

/// Characters stripped from both ends of a `.lib`/`.dll` token.
pub const LIB_TOKEN_TRIM_CHARS: &[char] = &['"', '<', '>', ':', ',', ';'];

/// Whether a traversal entry name is on the skip list.
#[must_use]
pub fn is_skipped_name(name: &OsStr) -> bool {
    name.to_str().is_some_and(|n| SKIP_DIRS.contains(&n))
}

/// Whether files with this extension get a content scan.
#[must_use]
pub fn scans_content(ext: &str) -> bool {
    TEXT_SCAN_EXTS.contains(&ext)
}

/// Derive the lowercase extension (including the leading dot) from a file name.
///
/// Returns an empty string for names with no dot, dotfiles (`.gitignore`), and
/// names ending in a dot, mirroring the suffix rules the rest of the
/// classification tables assume.
#[must_use]
pub fn extension_of(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 && idx < file_name.len() - 1 => file_name[idx..].to_lowercase(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
