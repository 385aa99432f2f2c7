/// Splits an ether line of the form `<fragment>-O-<fragment>`.
///
/// Only the first `-` in the line is considered; if it does not open an
/// `-O-` marker the line is a single molecule and `None` is returned.
pub fn split_ether(line: &str) -> Option<(&str, &str)> {
    let dash = line.find('-')?;
    let rest = &line[dash..];
    if rest.starts_with("-O-") {
        Some((&line[..dash], &rest[3..]))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ether() {
        assert_eq!(split_ether("CCC-O-CC"), Some(("CCC", "CC")));
        assert_eq!(split_ether("CH3-O-CH2CH3"), Some(("CH3", "CH2CH3")));
    }

    #[test]
    fn test_split_ether_rejects_other_dashes() {
        assert_eq!(split_ether("CCCC"), None);
        assert_eq!(split_ether("CC-C-O-CC"), None);
        assert_eq!(split_ether("CC-O"), None);
    }

    #[test]
    fn test_split_ether_allows_empty_fragments() {
        assert_eq!(split_ether("-O-CC"), Some(("", "CC")));
    }
}
