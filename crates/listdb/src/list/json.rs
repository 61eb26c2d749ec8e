use crate::Result;

use super::List;

impl List {
    /// Writes the elements as a JSON array.
    pub fn write_json(&self, buf: &mut Vec<u8>) -> Result<()> {
        serde_json::to_writer(buf, self)?;
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
