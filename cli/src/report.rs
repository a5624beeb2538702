use std::io::Write;

use combi_core::combination::Combination;

pub const NONE_FOUND: &str = "No combinations found.";
pub const HEADING: &str = "Possible combinations:";

/// Writes the outcome of one search, one combination per line.
pub fn write_combinations<W: Write>(out: &mut W, found: &[Combination]) -> std::io::Result<()> {
    if found.is_empty() {
        return writeln!(out, "{NONE_FOUND}");
    }

    writeln!(out, "{HEADING}")?;
    for combination in found {
        writeln!(out, "{combination}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use combi_core::enumerator::enumerate;

    #[test]
    fn test_report_lists_each_combination() {
        let mut out: Vec<u8> = Vec::new();
        write_combinations(&mut out, &enumerate(2, 10)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Possible combinations:\n[1 9]\n[2 8]\n[3 7]\n[4 6]\n"
        );
    }

    #[test]
    fn test_report_nothing_found() {
        let mut out: Vec<u8> = Vec::new();
        write_combinations(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No combinations found.\n");
    }
}
