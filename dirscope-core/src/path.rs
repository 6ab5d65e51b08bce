use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Normalizes a raw path string into an absolute, OS-native path.
///
/// Agent-supplied paths arrive in a handful of malformed shapes: percent
/// encoded, missing the colon after a Windows drive letter (`/c/foo`), or
/// carrying an extra leading slash before a drive root (`/C:/foo`). Each
/// correction is guarded so it only fires on the shape it targets; correct
/// absolute paths pass through untouched. Relative paths resolve against the
/// current working directory. This function never fails - every fallback is
/// best effort.
pub fn normalize(input: &str) -> PathBuf {
    let decoded = match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            debug!(%input, "percent-decoded bytes are not valid UTF-8, keeping raw input");
            input.to_string()
        }
    };

    let mut path = decoded;
    if let Some(fixed) = fix_missing_drive_colon(&path) {
        path = fixed;
    }
    if let Some(fixed) = fix_doubled_drive_root(&path) {
        path = fixed;
    }
    if path.contains("%3A") {
        // Encoded colon that survived decoding (double-encoded input).
        path = path.replacen("%3A", ":", 1);
    }

    if is_absolute(&path) {
        return PathBuf::from(path);
    }

    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(error) => {
            debug!(?error, %path, "cannot resolve working directory, keeping path as-is");
            PathBuf::from(path)
        }
    }
}

/// `/c/foo` -> `C:/foo`. Fires only on a single-letter root missing its colon.
fn fix_missing_drive_colon(path: &str) -> Option<String> {
    let bytes = path.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b'/' {
        let drive = (bytes[1] as char).to_ascii_uppercase();
        return Some(format!("{drive}:{}", &path[2..]));
    }
    None
}

/// `/C:/foo` -> `C:/foo`. Fires only on a valid drive-colon path behind an
/// extra leading slash.
fn fix_doubled_drive_root(path: &str) -> Option<String> {
    let bytes = path.as_bytes();
    if bytes.len() >= 4
        && bytes[0] == b'/'
        && bytes[1].is_ascii_alphabetic()
        && bytes[2] == b':'
        && bytes[3] == b'/'
    {
        return Some(path[1..].to_string());
    }
    None
}

/// Absolute by the host OS rules, or a drive-letter path (`X:/` or `X:\`)
/// which is absolute by Windows convention regardless of host.
fn is_absolute(path: &str) -> bool {
    if Path::new(path).is_absolute() {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'/' || bytes[2] == b'\\')
}
