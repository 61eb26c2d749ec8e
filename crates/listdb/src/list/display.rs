use std::fmt;

use crate::DESCRIPTION_MAX_ELEMENTS;

use super::List;

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "List<{}> (", self.gate)?;
        let shown = self.len().min(DESCRIPTION_MAX_ELEMENTS);
        for (index, value) in self.items[..shown].iter().enumerate() {
            write!(f, "\t[{index}] ")?;
            value.describe(f, 1)?;
            if index + 1 < self.len() {
                f.write_str(",")?;
            }
            writeln!(f)?;
        }
        if self.len() > shown {
            writeln!(f, "\t... {} objects skipped.", self.len() - shown)?;
        }
        f.write_str(")")
    }
}
