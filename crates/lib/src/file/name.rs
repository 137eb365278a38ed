use std::path::Path;

/// Puts `_<suffix>` into the file name, before the last extension.
///
/// `abc.pdf` becomes `abc_1.pdf`, a name without extension gets the suffix
/// appended.
pub fn splice_name(fname: &str, suffix: u32) -> String {
  match Path::new(fname).extension().and_then(|ext| ext.to_str()) {
    Some(ext) => {
      let base = &fname[..fname.len() - ext.len() - 1];
      format!("{}_{}.{}", base, suffix, ext)
    }
    None => format!("{}_{}", fname, suffix),
  }
}

/// Extracts the file name from a `Content-Disposition` header value.
pub fn filename_from_header(header_value: &str) -> Option<&str> {
  let start = header_value.find("filename=")? + "filename=".len();
  let rest = &header_value[start..];
  let value = match rest.strip_prefix('"') {
    Some(quoted) => quoted.split('"').next().unwrap_or(quoted),
    None => rest.split(';').next().unwrap_or(rest).trim(),
  };

  if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unit_splice_name() {
    assert_eq!(splice_name("abc.pdf", 1), "abc_1.pdf");
    assert_eq!(splice_name("abc", 1), "abc_1");
    assert_eq!(splice_name("stuff.tar.gz", 2), "stuff.tar_2.gz");
  }

  #[test]
  fn unit_splice_name_keeps_directories_and_dotfiles() {
    assert_eq!(splice_name("out/scan.jpg", 3), "out/scan_3.jpg");
    assert_eq!(splice_name(".hidden", 1), ".hidden_1");
  }

  #[test]
  fn unit_filename_from_header() {
    assert_eq!(filename_from_header("inline; filename=\"test.jpg\""), Some("test.jpg"));
    assert_eq!(filename_from_header("attachment; filename=report.pdf"), Some("report.pdf"));
  }

  #[test]
  fn unit_filename_from_header_ignores_trailing_parameters() {
    assert_eq!(
      filename_from_header("attachment; filename=\"a b.pdf\"; size=1024"),
      Some("a b.pdf")
    );
    assert_eq!(filename_from_header("attachment; filename=x.txt; size=1"), Some("x.txt"));
  }

  #[test]
  fn unit_filename_from_header_without_name() {
    assert_eq!(filename_from_header("inline"), None);
    assert_eq!(filename_from_header("attachment; filename=\"\""), None);
  }
}
