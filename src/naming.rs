use std::path::{Path, PathBuf};

use crate::config::{PAGE_FILE_EXTENSION, PAGE_FILE_PREFIX, PAGE_INDEX_WIDTH};

/// File name for a 1-based page index, e.g. `catalog_page_0007.jpg`.
///
/// Indices past 9999 keep all their digits, so names stay unique.
pub fn page_file_name(page_number: usize) -> String {
    format!(
        "{}{:0width$}.{}",
        PAGE_FILE_PREFIX,
        page_number,
        PAGE_FILE_EXTENSION,
        width = PAGE_INDEX_WIDTH
    )
}

pub fn page_file_path(output_dir: &Path, page_number: usize) -> PathBuf {
    output_dir.join(page_file_name(page_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_four_digits() {
        assert_eq!(page_file_name(1), "catalog_page_0001.jpg");
        assert_eq!(page_file_name(42), "catalog_page_0042.jpg");
        assert_eq!(page_file_name(9999), "catalog_page_9999.jpg");
    }

    #[test]
    fn widens_past_four_digits() {
        assert_eq!(page_file_name(10000), "catalog_page_10000.jpg");
        assert_ne!(page_file_name(1000), page_file_name(10000));
    }

    #[test]
    fn joins_under_output_dir() {
        let path = page_file_path(Path::new("/tmp/out"), 3);
        assert_eq!(path, PathBuf::from("/tmp/out/catalog_page_0003.jpg"));
    }

    #[test]
    fn names_sort_in_page_order() {
        let names: Vec<String> = (1..=120).map(page_file_name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
